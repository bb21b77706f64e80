use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use console::style;
use cropdrop_core::config::UploaderConfig;
use cropdrop_core::consts::DEFAULT_UPLOAD_TIMEOUT_SECS;
use cropdrop_core::io::drop::DroppedFile;
use cropdrop_core::upload::build_uploader;
use cropdrop_core::widget::{ImageUpload, UploadListener};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::{load_config, parse_position};

#[derive(Args)]
pub struct UploadArgs {
    /// Image to crop (PNG or JPEG)
    pub file: PathBuf,

    /// Zoom factor, clamped to 0.1-2.0
    #[arg(short, long, default_value = "1.0")]
    pub zoom: f32,

    /// Crop centre as X,Y in image fractions (default: 0.5,0.5)
    #[arg(short, long, value_parser = parse_position)]
    pub position: Option<(f32, f32)>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Upload endpoint (overrides the config's uploader)
    #[arg(long, conflicts_with = "out_dir")]
    pub endpoint: Option<String>,

    /// Bearer token sent with --endpoint
    #[arg(long, requires = "endpoint")]
    pub token: Option<String>,

    /// Store into a local directory (overrides the config's uploader)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

/// Captures the single outcome of the cycle.
#[derive(Default)]
struct Outcome(Option<std::result::Result<String, String>>);

impl UploadListener for Outcome {
    fn on_success(&mut self, url: &str) {
        self.0 = Some(Ok(url.to_string()));
    }

    fn on_error(&mut self, message: &str) {
        self.0 = Some(Err(message.to_string()));
    }
}

pub fn run(args: &UploadArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(ref endpoint) = args.endpoint {
        config.uploader = UploaderConfig::Http {
            endpoint: endpoint.clone(),
            token: args.token.clone(),
            timeout_secs: DEFAULT_UPLOAD_TIMEOUT_SECS,
        };
    } else if let Some(ref dir) = args.out_dir {
        config.uploader = UploaderConfig::Directory {
            path: dir.clone(),
            base_url: None,
        };
    }

    let uploader = build_uploader(&config.uploader).context("Failed to set up uploader")?;
    let dropped = DroppedFile::from_path(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let mut widget = ImageUpload::new(config.props.clone());
    if widget.drop_files(vec![dropped]).accepted.is_none() {
        bail!("{} is not a PNG or JPEG image", args.file.display());
    }
    widget.set_zoom(args.zoom);
    if let Some((x, y)) = args.position {
        widget.set_position(x, y);
    }
    debug!(file = %args.file.display(), params = ?widget.session().map(|s| s.params), "cropping");

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    pb.set_message(format!("{}...", config.props.submit_text));
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut outcome = Outcome::default();
    widget.crop_and_upload(&*uploader, &mut outcome);
    pb.finish_and_clear();

    match outcome.0 {
        Some(Ok(url)) => {
            println!("{} {url}", style("Uploaded").green().bold());
            Ok(())
        }
        Some(Err(message)) => bail!("Upload failed: {message}"),
        None => bail!("Nothing was uploaded"),
    }
}
