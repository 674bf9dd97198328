// crates/banjo-cli/src/io/cache.rs

use anyhow::Context;
use banjo_core::plain::{ConfigPlain, SetupPlain};
use banjo_core::{LatheConfig, PitchSetup};

const MAGIC: &[u8; 4] = b"BGC1";

/// Combo-cache layout (little-endian):
/// MAGIC[4]
/// config_len:u32
/// config_json[config_len]    (the configuration the universe was built for)
/// data_len:u64
/// combos_json[data_len]
/// crc32:u32                  (over everything before crc32)
pub fn write_cache(path: &str, config: &LatheConfig, combos: &[PitchSetup]) -> anyhow::Result<()> {
    let config_json = serde_json::to_vec(&config.to_plain()).context("encode cache config")?;
    let combos_plain: Vec<SetupPlain> = combos.iter().map(|s| s.to_plain()).collect();
    let combos_json = serde_json::to_vec(&combos_plain).context("encode cache combos")?;

    let mut out = Vec::with_capacity(4 + 4 + config_json.len() + 8 + combos_json.len() + 4);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&(config_json.len() as u32).to_le_bytes());
    out.extend_from_slice(&config_json);
    out.extend_from_slice(&(combos_json.len() as u64).to_le_bytes());
    out.extend_from_slice(&combos_json);

    let crc = crc32(&out);
    out.extend_from_slice(&crc.to_le_bytes());

    std::fs::write(path, out).with_context(|| format!("write cache {path}"))?;
    Ok(())
}

/// Read a combo cache, returning the embedded configuration and the
/// candidate universe. Callers detect staleness by comparing the
/// embedded configuration with the current one.
pub fn read_cache(path: &str) -> anyhow::Result<(LatheConfig, Vec<PitchSetup>)> {
    let bytes = std::fs::read(path).with_context(|| format!("read cache {path}"))?;
    if bytes.len() < 4 + 4 + 8 + 4 {
        anyhow::bail!("cache too small");
    }
    if &bytes[0..4] != MAGIC {
        anyhow::bail!("bad cache magic");
    }

    let crc_off = bytes.len() - 4;
    let crc_expected = u32::from_le_bytes(bytes[crc_off..].try_into()?);
    let crc_actual = crc32(&bytes[..crc_off]);
    if crc_expected != crc_actual {
        anyhow::bail!("cache crc32 mismatch");
    }

    let mut i = 4usize;

    let config_len = read_u32(&bytes, &mut i)? as usize;
    if i + config_len > crc_off {
        anyhow::bail!("cache config_len out of range");
    }
    let config_plain: ConfigPlain =
        serde_json::from_slice(&bytes[i..i + config_len]).context("parse cache config")?;
    let config = LatheConfig::from_plain(&config_plain).context("decode cache config")?;
    i += config_len;

    let data_len = read_u64(&bytes, &mut i)? as usize;
    if i + data_len > crc_off {
        anyhow::bail!("cache data_len out of range");
    }
    let combos_plain: Vec<SetupPlain> =
        serde_json::from_slice(&bytes[i..i + data_len]).context("parse cache combos")?;
    let combos = combos_plain
        .iter()
        .map(PitchSetup::from_plain)
        .collect::<banjo_core::error::Result<Vec<_>>>()
        .context("decode cache combos")?;

    Ok((config, combos))
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

fn read_u32(bytes: &[u8], i: &mut usize) -> anyhow::Result<u32> {
    if *i + 4 > bytes.len() {
        anyhow::bail!("cache: unexpected eof");
    }
    let v = u32::from_le_bytes(bytes[*i..*i + 4].try_into()?);
    *i += 4;
    Ok(v)
}

fn read_u64(bytes: &[u8], i: &mut usize) -> anyhow::Result<u64> {
    if *i + 8 > bytes.len() {
        anyhow::bail!("cache: unexpected eof");
    }
    let v = u64::from_le_bytes(bytes[*i..*i + 8].try_into()?);
    *i += 8;
    Ok(v)
}
