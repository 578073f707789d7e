//! Randomized universal invariants from spec §8, checked across many
//! random cost fields rather than hand-picked cases.

use fieldpath::{find_path_2d, find_route_temporal, TemporalOptions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_grid(rng: &mut StdRng, w: usize, h: usize) -> Vec<u8> {
    (0..w * h).map(|_| rng.gen_range(0..=255)).collect()
}

fn random_volume(rng: &mut StdRng, t: usize, h: usize, w: usize) -> Vec<u8> {
    (0..t * h * w).map(|_| rng.gen_range(0..=255)).collect()
}

fn is_grid_successor(a: (usize, usize), b: (usize, usize)) -> bool {
    let dx = (a.0 as i64 - b.0 as i64).abs();
    let dy = (a.1 as i64 - b.1 as i64).abs();
    (dx != 0 || dy != 0) && dx <= 1 && dy <= 1
}

fn is_temporal_successor(
    a: (usize, usize, usize),
    b: (usize, usize, usize),
    reach: usize,
) -> bool {
    let dx = (a.0 as i64 - b.0 as i64).abs();
    let dy = (a.1 as i64 - b.1 as i64).abs();
    b.2 == a.2 + 1 && dx <= reach as i64 && dy <= reach as i64 && (dx != 0 || dy != 0)
}

#[test]
fn grid2d_invariants_hold_across_random_fields() {
    let mut rng = StdRng::seed_from_u64(42);
    for trial in 0..50 {
        let w = rng.gen_range(3..12);
        let h = rng.gen_range(3..12);
        let data = random_grid(&mut rng, w, h);
        let start = (rng.gen_range(0..w), rng.gen_range(0..h));
        let end = (rng.gen_range(0..w), rng.gen_range(0..h));

        let dijkstra = find_path_2d(&data, w, h, start, end, "dijkstra").unwrap();
        let astar = find_path_2d(&data, w, h, start, end, "astar").unwrap();
        let fringe = find_path_2d(&data, w, h, start, end, "fringe").unwrap();

        // On a fully-connected grid every goal is reachable.
        let (path, cost) = dijkstra.clone().unwrap_or_else(|| {
            panic!("trial {trial}: expected a path on a fully connected grid")
        });

        // 1. Endpoints.
        assert_eq!(path[0], start);
        assert_eq!(*path.last().unwrap(), end);

        // 2. Validity.
        for w2 in path.windows(2) {
            assert!(is_grid_successor(w2[0], w2[1]), "trial {trial}: {w2:?}");
        }

        // 4. Bounds.
        for &(x, y) in &path {
            assert!(x < w && y < h);
        }

        // 5. Cost consistency.
        let mut expected = 0u64;
        for w2 in path.windows(2) {
            let (x, y) = w2[1];
            expected += data[y * w + x].max(1) as u64;
        }
        assert_eq!(cost, expected, "trial {trial}");

        // 6. Optimality: Dijkstra == A*, Fringe >= optimum.
        let (_, astar_cost) = astar.unwrap();
        assert_eq!(cost, astar_cost, "trial {trial}");
        let (_, fringe_cost) = fringe.unwrap();
        assert!(fringe_cost >= cost, "trial {trial}");

        // 8. Determinism.
        let repeat = find_path_2d(&data, w, h, start, end, "astar").unwrap();
        assert_eq!(repeat, Some((path, astar_cost)), "trial {trial}");
    }
}

#[test]
fn temporal_invariants_hold_across_random_volumes() {
    let mut rng = StdRng::seed_from_u64(7);
    for trial in 0..50 {
        let t_dim = rng.gen_range(2..6);
        let h = rng.gen_range(3..8);
        let w = rng.gen_range(3..8);
        let reach = rng.gen_range(1..3);
        let data = random_volume(&mut rng, t_dim, h, w);

        let start = (rng.gen_range(0..w), rng.gen_range(0..h), 0);
        let end_t = rng.gen_range(start.2..t_dim);
        let end = (rng.gen_range(0..w), rng.gen_range(0..h), end_t);

        let options = TemporalOptions { reach, axis: 0 };
        let dijkstra =
            find_route_temporal(&data, [t_dim, h, w], "dijkstra", start, end, options).unwrap();
        let astar =
            find_route_temporal(&data, [t_dim, h, w], "astar", start, end, options).unwrap();

        // Both strategies must agree on reachability.
        assert_eq!(dijkstra.is_some(), astar.is_some(), "trial {trial}");

        let Some((path, cost)) = dijkstra else {
            continue;
        };

        // 1. Endpoints.
        assert_eq!(path[0], start);
        assert_eq!(*path.last().unwrap(), end);

        // 2 & 3. Validity + monotone time.
        for w2 in path.windows(2) {
            assert!(
                is_temporal_successor(w2[0], w2[1], reach),
                "trial {trial}: {w2:?}"
            );
        }

        // 4. Bounds.
        for &(x, y, tt) in &path {
            assert!(x < w && y < h && tt < t_dim);
        }

        // 5. Cost consistency.
        let mut expected = 0u64;
        for w2 in path.windows(2) {
            let (x, y, tt) = w2[1];
            expected += data[tt * h * w + y * w + x].max(1) as u64;
        }
        assert_eq!(cost, expected, "trial {trial}");

        // 6. Optimality.
        let (_, astar_cost) = astar.unwrap();
        assert_eq!(cost, astar_cost, "trial {trial}");
    }
}

#[test]
fn strictly_unreachable_temporal_goal_is_none() {
    // dt = 1 but spatial distance exceeds reach * dt.
    let data = vec![100u8; 2 * 10 * 10];
    let result = find_route_temporal(
        &data,
        [2, 10, 10],
        "astar",
        (0, 0, 0),
        (9, 9, 1),
        TemporalOptions { reach: 1, axis: 0 },
    )
    .unwrap();
    assert!(result.is_none());
}
