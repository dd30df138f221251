//! Example: smooth an image and dump its gradient images.
//!
//! Reads any raster the codec understands as grayscale, optionally applies a
//! median filter and a Gaussian blur, then writes `gx`, `gy` and `|gx| + |gy|`
//! as 8-bit PNGs (rescaled to the full range) next to each other.
//!
//! Run from the workspace root:
//!   cargo run -p float-raster --example gradient_dump -- --input data/frame.png

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use float_raster::{FilterExt, FloatImage};
use log::info;

#[derive(Parser, Debug)]
#[command(about = "Write gradient images of a smoothed input raster")]
struct Args {
    /// Input image path
    #[arg(long)]
    input: PathBuf,

    /// Output directory (created if missing)
    #[arg(long, default_value = "out")]
    out: PathBuf,

    /// Gaussian footprint in pixels; 0 disables the blur
    #[arg(long, default_value_t = 5)]
    blur: usize,

    /// Odd median window width; 0 disables the median filter
    #[arg(long, default_value_t = 0)]
    median: usize,

    /// Resize factor applied before filtering
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let t0 = Instant::now();
    let mut img = float_raster::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    info!("loaded {}x{}", img.width(), img.height());

    if args.scale != 1.0 {
        img.resize_by(args.scale).context("resizing input")?;
    }
    if args.median > 0 {
        img.median_filter(args.median).context("median filter")?;
    }
    if args.blur > 0 {
        img.gaussian_blur(args.blur).context("gaussian blur")?;
    }

    let gx = img.gradient_x();
    let gy = img.gradient_y();
    let mag = img.gradient_magnitude();
    let table = img.integral().context("integral image")?;
    let total = table
        .get_xy(img.width(), img.height(), 0)
        .context("integral corner")?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    save_stretched(&args.out.join("gx.png"), &gx)?;
    save_stretched(&args.out.join("gy.png"), &gy)?;
    save_stretched(&args.out.join("magnitude.png"), &mag)?;

    println!(
        "{}x{} mean={:.3} elapsed_ms={:.3}",
        img.width(),
        img.height(),
        total / (img.width() * img.height()).max(1) as f32,
        t0.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}

/// Rescales samples to 0..=255 before writing.
fn save_stretched(path: &Path, img: &FloatImage) -> Result<()> {
    let (min_v, max_v) = img
        .data()
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let mut out = img.clone();
    if max_v - min_v > 1e-12 {
        let scale = 255.0 / (max_v - min_v);
        for v in out.data_mut() {
            *v = (*v - min_v) * scale;
        }
    } else {
        out.scale_pixels(0.0);
    }

    float_raster::write(path, &out).with_context(|| format!("writing {}", path.display()))
}
