use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{debug, info};

use st7920_bitmask::header::{self, HeaderNames};
use st7920_bitmask::image::ConstImage;
use st7920_bitmask::imgproc::{self, MonoImgprocOptions, DEFAULT_THRESHOLD};

const DEFAULT_IMAGE_FILE: &str = "cindy_crawford_helmut_newton_bitmask.png";

/// Convert a grayscale image into a packed 1bpp C header for ST7920-style displays
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Image to convert; the header symbols are named after its file stem
    #[arg(default_value = DEFAULT_IMAGE_FILE)]
    image_file: PathBuf,

    /// Pixels strictly brighter than this are lit
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u8,
}

/// Loads and packs the image, then writes the header to `out`.
/// Nothing reaches `out` unless the image loaded.
fn run<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<()> {
    let options = MonoImgprocOptions {
        threshold: args.threshold,
    };
    let bitmask = imgproc::pack_image_file(&args.image_file, options)
        .with_context(|| format!("Image not found or unable to load: {:?}", args.image_file))?;
    info!(
        "packed {:?} into {} rows of {} bytes",
        args.image_file,
        bitmask.height(),
        bitmask.pitch()
    );

    let names = HeaderNames::from_path(&args.image_file);
    debug!("header symbols: {:?}", names);

    header::write_header(out, &names, &bitmask).context("Cannot write header")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp_micros()
        .init();
    let args = Args::parse();

    let stdout = std::io::stdout();
    run(&args, &mut stdout.lock())
}
