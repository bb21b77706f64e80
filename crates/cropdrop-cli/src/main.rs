mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cropdrop", about = "Crop an image and upload it to an asset store")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crop an image and upload the result
    Upload(commands::upload::UploadArgs),
    /// Render the crop to a local PNG without uploading
    Preview(commands::preview::PreviewArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Upload(args) => commands::upload::run(args),
        Commands::Preview(args) => commands::preview::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
