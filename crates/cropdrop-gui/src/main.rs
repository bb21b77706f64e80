mod app;
mod convert;
mod messages;
mod panels;
mod state;
mod worker;

use anyhow::{Context, Result};
use cropdrop_core::config::AppConfig;

/// Environment variable naming a TOML config file.
const CONFIG_ENV: &str = "CROPDROP_CONFIG";

fn load_config() -> Result<AppConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = std::path::PathBuf::from(path);
            AppConfig::load(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))
        }
        None => Ok(AppConfig::default()),
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config().unwrap_or_else(|e| {
        tracing::error!("{e:#}; using defaults");
        AppConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 560.0])
            .with_min_inner_size([420.0, 480.0])
            .with_title("CropDrop")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "CropDrop",
        options,
        Box::new(|cc| Ok(Box::new(app::CropDropApp::new(&cc.egui_ctx, config)))),
    )
}
