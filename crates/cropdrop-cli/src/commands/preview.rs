use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use cropdrop_core::crop::geometry::EditorGeometry;
use cropdrop_core::crop::params::{CropParams, Position};
use cropdrop_core::crop::render::render_blob;

use super::parse_position;

#[derive(Args)]
pub struct PreviewArgs {
    /// Image to crop (PNG or JPEG)
    pub file: PathBuf,

    /// Output PNG
    #[arg(short, long, default_value = "crop.png")]
    pub output: PathBuf,

    /// Zoom factor, clamped to 0.1-2.0
    #[arg(short, long, default_value = "1.0")]
    pub zoom: f32,

    /// Crop centre as X,Y in image fractions (default: 0.5,0.5)
    #[arg(short, long, value_parser = parse_position)]
    pub position: Option<(f32, f32)>,
}

pub fn run(args: &PreviewArgs) -> Result<()> {
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let mut params = CropParams::default();
    params.set_zoom(args.zoom);
    if let Some((x, y)) = args.position {
        params.position = Position { x, y };
    }

    let blob = render_blob(&bytes, &params, &EditorGeometry::default())
        .with_context(|| format!("Failed to crop {}", args.file.display()))?;
    std::fs::write(&args.output, &blob)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "{} {} (zoom {})",
        style("Saved").green().bold(),
        args.output.display(),
        params.zoom
    );
    Ok(())
}
