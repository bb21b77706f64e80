pub mod config;
pub mod preview;
pub mod upload;

use std::path::Path;

use anyhow::{Context, Result};
use cropdrop_core::config::AppConfig;

/// Parse `X,Y` into a normalised crop centre.
pub fn parse_position(s: &str) -> std::result::Result<(f32, f32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("invalid X '{x}': {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("invalid Y '{y}': {e}"))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("position must be finite, got '{s}'"));
    }
    Ok((x, y))
}

/// Load the config file if given, otherwise defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(p) => AppConfig::load(p)
            .with_context(|| format!("Failed to load config from {}", p.display())),
        None => Ok(AppConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_position;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("0.25,0.75").unwrap(), (0.25, 0.75));
        assert_eq!(parse_position(" 1 , 0 ").unwrap(), (1.0, 0.0));
    }

    #[test]
    fn test_parse_position_errors() {
        assert!(parse_position("0.5").is_err());
        assert!(parse_position("a,b").is_err());
        assert!(parse_position("NaN,0").is_err());
    }
}
