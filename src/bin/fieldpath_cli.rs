//! Shell-driven front end for [`fieldpath::dispatch`] (spec §6, `[ADDED]`).
//!
//! Loads a grayscale PNG (2D mode) or a directory of `frame_*.png` images
//! (temporal mode) as the cost field, runs the requested search, and
//! prints the resulting path and cost as JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fieldpath::{find_path_2d, find_route_temporal, TemporalOptions};

#[derive(Parser)]
#[command(name = "fieldpath-cli", about = "Run a pathfinding search over a cost field")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search a single grayscale image as a 2D cost grid.
    TwoD {
        image: PathBuf,
        start_x: usize,
        start_y: usize,
        end_x: usize,
        end_y: usize,
        #[arg(long, default_value = "astar")]
        algorithm: String,
    },
    /// Search a directory of `frame_*.png` images as a space-time volume.
    Temporal {
        frames_dir: PathBuf,
        start_x: usize,
        start_y: usize,
        start_t: usize,
        end_x: usize,
        end_y: usize,
        end_t: usize,
        #[arg(long, default_value = "astar")]
        algorithm: String,
        #[arg(long, default_value_t = 1)]
        reach: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::TwoD {
            image,
            start_x,
            start_y,
            end_x,
            end_y,
            algorithm,
        } => {
            let img = image::open(&image)?.into_luma8();
            let (w, h) = img.dimensions();
            let array = img.into_raw();
            let result = find_path_2d(
                &array,
                w as usize,
                h as usize,
                (start_x, start_y),
                (end_x, end_y),
                &algorithm,
            )?;
            print_result(result);
        }
        Command::Temporal {
            frames_dir,
            start_x,
            start_y,
            start_t,
            end_x,
            end_y,
            end_t,
            algorithm,
            reach,
        } => {
            let mut frame_paths: Vec<PathBuf> = std::fs::read_dir(&frames_dir)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.extension().is_some_and(|ext| ext == "png"))
                .collect();
            frame_paths.sort();

            let mut volume = Vec::new();
            let mut dims = [frame_paths.len(), 0, 0];
            for (i, path) in frame_paths.iter().enumerate() {
                let img = image::open(path)?.into_luma8();
                let (w, h) = img.dimensions();
                if i == 0 {
                    dims[1] = h as usize;
                    dims[2] = w as usize;
                } else if dims[1] != h as usize || dims[2] != w as usize {
                    anyhow::bail!(
                        "frame {path:?} has dimensions {w}x{h}, expected {}x{}",
                        dims[2],
                        dims[1]
                    );
                }
                volume.extend_from_slice(img.as_raw());
            }

            let options = TemporalOptions { reach, axis: 0 };
            let result = find_route_temporal(
                &volume,
                dims,
                &algorithm,
                (start_x, start_y, start_t),
                (end_x, end_y, end_t),
                options,
            )?;
            print_result(result);
        }
    }
    Ok(())
}

fn print_result<C: serde::Serialize>(result: Option<(Vec<C>, u64)>) {
    match result {
        Some((path, cost)) => {
            let body = serde_json::json!({ "path": path, "cost": cost });
            println!("{}", serde_json::to_string_pretty(&body).unwrap());
        }
        None => println!("null"),
    }
}
