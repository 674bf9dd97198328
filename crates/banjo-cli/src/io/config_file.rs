// crates/banjo-cli/src/io/config_file.rs

use anyhow::{Context, Result};
use banjo_core::plain::ConfigPlain;
use banjo_core::LatheConfig;

/// Load a lathe configuration from a JSON file.
pub fn load_config(path: &str) -> Result<LatheConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read config {path}"))?;
    let plain: ConfigPlain =
        serde_json::from_str(&text).with_context(|| format!("parse config {path}"))?;
    let config =
        LatheConfig::from_plain(&plain).with_context(|| format!("decode config {path}"))?;
    Ok(config)
}

/// Save a lathe configuration as a JSON file.
pub fn save_config(path: &str, config: &LatheConfig) -> Result<()> {
    let text = serde_json::to_string_pretty(&config.to_plain())
        .with_context(|| format!("encode config {path}"))?;
    std::fs::write(path, text).with_context(|| format!("write config {path}"))?;
    Ok(())
}
