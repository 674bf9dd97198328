// crates/banjo-cli/src/cmd/combos.rs

use clap::Args;

use banjo_core::config::validate_config;
use banjo_core::defaults::default_config;
use banjo_core::finder::find_all_combinations;
use banjo_core::plain::SetupPlain;
use banjo_core::Gear;

use crate::io::{cache, config_file};
use crate::task;

#[derive(Args)]
pub struct CombosArgs {
    /// Lathe configuration path (JSON). Omit for the built-in defaults.
    #[arg(long)]
    pub config: Option<String>,

    /// Write the candidate universe as a JSON file
    #[arg(long)]
    pub out: Option<String>,

    /// Write a BGC1 cache artifact (embedded config + combos + crc32)
    #[arg(long)]
    pub cache: Option<String>,

    /// Print the first N combinations as CSV (0 = none)
    #[arg(long, default_value_t = 20)]
    pub show: usize,

    /// Run generation on a worker thread and abort after this many ms
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

pub fn run(args: CombosArgs) -> anyhow::Result<()> {
    let config = match args.config.as_deref() {
        Some(path) => config_file::load_config(path)?,
        None => default_config(),
    };
    validate_config(&config).map_err(|e| anyhow::anyhow!("{e}"))?;

    let combos = match args.timeout_ms {
        Some(ms) => task::generate_with_timeout(&config, std::time::Duration::from_millis(ms))?,
        None => {
            let mut last_decile = 0u32;
            let mut report = |fraction: f64| {
                let decile = (fraction * 10.0) as u32;
                if decile > last_decile {
                    last_decile = decile;
                    eprintln!("generate: {:>3.0}%", fraction * 100.0);
                }
            };
            find_all_combinations(&config, Some(&mut report), None)
        }
    };

    if args.show > 0 {
        let multi = config.is_multi_module();
        println!("a,b,c,d,mm_per_rev,tpi");
        for s in combos.iter().take(args.show) {
            println!(
                "{},{},{},{},{:.4},{:.4}",
                gear_label(&s.gear_a, multi),
                gear_label(&s.gear_b, multi),
                gear_label(&s.gear_c, multi),
                gear_label(&s.gear_d, multi),
                s.pitch.value,
                s.pitch.convert().value
            );
        }
    }

    if let Some(path) = args.out.as_deref() {
        let plain: Vec<SetupPlain> = combos.iter().map(|s| s.to_plain()).collect();
        let text = serde_json::to_string_pretty(&plain)?;
        std::fs::write(path, text)?;
        eprintln!("wrote combos: {}", path);
    }

    if let Some(path) = args.cache.as_deref() {
        cache::write_cache(path, &config, &combos)?;
        eprintln!("wrote cache: {}", path);
    }

    eprintln!("combos ok: {} valid combinations", combos.len());
    Ok(())
}

/// Bare tooth count for a single-module inventory, the full "M1 Z40"
/// form when modules are mixed.
fn gear_label(g: &Option<Gear>, multi_module: bool) -> String {
    match g {
        None => "-".to_string(),
        Some(g) if multi_module => g.to_string(),
        Some(g) => g.teeth.to_string(),
    }
}
