// crates/banjo-cli/src/io/setup_file.rs

use anyhow::{Context, Result};
use banjo_core::plain::{ChosenPlain, SetupPlain, ThreadPlain};
use banjo_core::solve::{Chosen, ThreadTarget};
use banjo_core::PitchSetup;

/// Load a setup list (favorites file) from JSON.
pub fn load_setups(path: &str) -> Result<Vec<PitchSetup>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read setups {path}"))?;
    let plain: Vec<SetupPlain> =
        serde_json::from_str(&text).with_context(|| format!("parse setups {path}"))?;
    plain
        .iter()
        .map(|p| PitchSetup::from_plain(p).map_err(anyhow::Error::from))
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("decode setups {path}"))
}

/// Save a setup list (favorites file) as JSON.
pub fn save_setups(path: &str, setups: &[PitchSetup]) -> Result<()> {
    let plain: Vec<SetupPlain> = setups.iter().map(|s| s.to_plain()).collect();
    let text = serde_json::to_string_pretty(&plain)
        .with_context(|| format!("encode setups {path}"))?;
    std::fs::write(path, text).with_context(|| format!("write setups {path}"))?;
    Ok(())
}

/// Load a batch request (a list of named targets with candidate pools).
pub fn load_batch_request(path: &str) -> Result<Vec<ThreadTarget>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read batch {path}"))?;
    let plain: Vec<ThreadPlain> =
        serde_json::from_str(&text).with_context(|| format!("parse batch {path}"))?;
    plain
        .iter()
        .map(|p| ThreadTarget::from_plain(p).map_err(anyhow::Error::from))
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("decode batch {path}"))
}

pub fn batch_response_json(chosen: &[Chosen]) -> Result<String> {
    let plain: Vec<ChosenPlain> = chosen.iter().map(|c| c.to_plain()).collect();
    let text = serde_json::to_string_pretty(&plain).context("encode batch response")?;
    Ok(text)
}
