//! Auxiliary frame-synthesis utility (spec §6): warps a single grayscale
//! image into `num_frames` images via a small per-frame rotation,
//! translation, and sinusoidal ripple, so the resulting sequence can be fed
//! to `find_route_temporal` as a space-time cost volume.
//!
//! This is external collaborator territory (§1 "Out of scope") — it is
//! shipped as its own binary rather than folded into the `fieldpath`
//! library, and does not depend on any pathfinding code.
//!
//! Grounded on `generate_moving_images.py`: 0.5°/frame CCW rotation,
//! 0.5px/frame rightward X translation, a ripple with frequency 0.05 and
//! phase `0.2*t`, amplitude `2*sin(0.05*t)`, cubic sampling, white (255)
//! fill for out-of-source samples.

use std::path::PathBuf;

use clap::Parser;
use image::{GrayImage, Luma};

#[derive(Parser)]
#[command(name = "frame-gen", about = "Synthesize a moving-image sequence from one frame")]
struct Cli {
    input_image: PathBuf,
    output_dir: PathBuf,
    #[arg(long, default_value_t = 120)]
    frames: u32,
}

const WHITE: f64 = 255.0;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    std::fs::create_dir_all(&cli.output_dir)?;

    let source = image::open(&cli.input_image)?.into_luma8();
    let (w, h) = source.dimensions();
    let cx = w as f64 / 2.0;
    let cy = h as f64 / 2.0;

    println!("Generating {} frames...", cli.frames);
    for t in 0..cli.frames {
        let frame = synthesize_frame(&source, cx, cy, t as f64);
        let path = cli.output_dir.join(format!("frame_{t:03}.png"));
        frame.save(&path)?;
        if t % 20 == 0 {
            println!("Saved {}", path.display());
        }
    }
    println!("Done.");
    Ok(())
}

fn synthesize_frame(source: &GrayImage, cx: f64, cy: f64, t: f64) -> GrayImage {
    let (w, h) = source.dimensions();

    let trans_offset_x = 0.5 * t;
    let angle_rad = (0.5 * t).to_radians();
    let (sin_a, cos_a) = angle_rad.sin_cos();
    let freq = 0.05;
    let phase = 0.2 * t;
    let deform_amp = 2.0 * (t * 0.05).sin();

    let mut out = GrayImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let coords_x = x as f64 - cx;
            let coords_y = y as f64 - cy;

            // Inverse rotation (CW), matching a CCW rotation of the image.
            let rot_x = coords_x * cos_a + coords_y * sin_a;
            let rot_y = -coords_x * sin_a + coords_y * cos_a;

            let mut src_x = rot_x + cx;
            let mut src_y = rot_y + cy;

            // Inverse translation: moving the image right samples from the left.
            src_x -= trans_offset_x;

            // Sinusoidal ripple in the source domain.
            src_x += deform_amp * (src_y * freq + phase).sin();
            src_y += deform_amp * (src_x * freq + phase).cos();

            let value = sample_cubic(source, src_x, src_y);
            out.put_pixel(x, y, Luma([value.round().clamp(0.0, 255.0) as u8]));
        }
    }
    out
}

/// Bicubic (Catmull-Rom) sampling at a fractional `(x, y)` source
/// coordinate, with out-of-bounds taps treated as white (255) — matching
/// `scipy.ndimage.map_coordinates(..., mode='constant', cval=255.0)`.
fn sample_cubic(image: &GrayImage, x: f64, y: f64) -> f64 {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;

    let mut rows = [0.0; 4];
    for (j, row) in rows.iter_mut().enumerate() {
        let sy = y0 as i64 - 1 + j as i64;
        let mut taps = [0.0; 4];
        for (i, tap) in taps.iter_mut().enumerate() {
            let sx = x0 as i64 - 1 + i as i64;
            *tap = pixel_or_white(image, sx, sy);
        }
        *row = cubic_interp(taps, fx);
    }
    cubic_interp(rows, fy)
}

fn pixel_or_white(image: &GrayImage, x: i64, y: i64) -> f64 {
    let (w, h) = image.dimensions();
    if x < 0 || y < 0 || x as u32 >= w || y as u32 >= h {
        WHITE
    } else {
        image.get_pixel(x as u32, y as u32).0[0] as f64
    }
}

/// Catmull-Rom cubic convolution (`a = -0.5`) through four evenly spaced
/// samples `p[-1], p[0], p[1], p[2]` at fractional offset `t` between
/// `p[0]` and `p[1]`.
fn cubic_interp(p: [f64; 4], t: f64) -> f64 {
    p[1] + 0.5
        * t
        * (p[2] - p[0]
            + t * (2.0 * p[0] - 5.0 * p[1] + 4.0 * p[2] - p[3]
                + t * (3.0 * (p[1] - p[2]) + p[3] - p[0])))
}
