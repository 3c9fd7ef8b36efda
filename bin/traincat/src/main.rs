//! Blend two patches of an image and save the result as a new image.
//!
//! The output patch is pasted over the left patch, the whole image is scaled
//! up for viewing and saved. Every `--set` is applied on its own, followed by
//! a full re-blend, the same way an interactive slider would drive it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hueblend::{blend_into, Channel, Component, Patch, Point, Size, WeightVector};
use image::{imageops, RgbaImage};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "traincat", about = "Blend two image patches per channel")]
struct Args {
    /// Source image.
    input: PathBuf,

    /// Where to write the blended image.
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,

    /// Left edge of the left patch.
    #[arg(long, default_value_t = 5)]
    left_x: u32,

    /// Left edge of the right patch.
    #[arg(long, default_value_t = 168)]
    right_x: u32,

    /// Top edge of both patches.
    #[arg(long, default_value_t = 28)]
    top: u32,

    /// Patch width.
    #[arg(long, default_value_t = 160)]
    width: u32,

    /// Patch height.
    #[arg(long, default_value_t = 160)]
    height: u32,

    /// Nearest-neighbour scale factor of the written image.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    scale: u32,

    /// Weight update as `channel=value`, e.g. `hue=0.5` or `r=-1`. Applied in
    /// order.
    #[arg(long = "set", value_name = "CHANNEL=VALUE", value_parser = parse_setting)]
    settings: Vec<(Channel, Component)>,
}

fn parse_setting(s: &str) -> Result<(Channel, Component), String> {
    let (channel, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CHANNEL=VALUE, got `{s}`"))?;
    let channel = channel.parse::<Channel>().map_err(|e| e.to_string())?;
    let value = value
        .trim()
        .parse::<Component>()
        .map_err(|e| format!("invalid weight `{value}`: {e}"))?;
    Ok((channel, value))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let image = image::open(&args.input)
        .with_context(|| format!("could not open {}", args.input.display()))?
        .to_rgba8();
    let bounds = Size::new(image.width(), image.height());
    let size = Size::new(args.width, args.height);

    let left_origin = Point::new(args.left_x, args.top);
    let left = Patch::from_rgba8_region(bounds, image.as_raw(), left_origin, size)
        .context("left patch")?;
    let right_origin = Point::new(args.right_x, args.top);
    let right = Patch::from_rgba8_region(bounds, image.as_raw(), right_origin, size)
        .context("right patch")?;

    let mut weights = WeightVector::default();
    let mut output = right.clone();
    blend_into(&left, &right, &weights, &mut output)?;

    for &(channel, weight) in &args.settings {
        weights = weights.with(channel, weight);
        info!(?channel, weight, active = ?weights.active(), "weight changed");
        blend_into(&left, &right, &weights, &mut output)?;
    }

    let patch = RgbaImage::from_raw(output.width(), output.height(), output.to_rgba8())
        .context("blended patch does not fit its dimensions")?;

    let mut canvas = image;
    imageops::replace(&mut canvas, &patch, left_origin.x.into(), left_origin.y.into());

    let canvas = imageops::resize(
        &canvas,
        canvas.width() * args.scale,
        canvas.height() * args.scale,
        imageops::FilterType::Nearest,
    );
    canvas
        .save(&args.output)
        .with_context(|| format!("could not write {}", args.output.display()))?;

    info!(output = %args.output.display(), "done");
    Ok(())
}
