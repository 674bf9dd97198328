// crates/banjo-cli/src/cmd/best.rs

use clap::Args;

use banjo_core::config::validate_config;
use banjo_core::defaults::default_config;
use banjo_core::finder::find_all_combinations;
use banjo_core::score::select_best;
use banjo_core::solve::{candidates_for_target, DEFAULT_POOL_THRESHOLD};
use banjo_core::{Pitch, PitchType};

use crate::io::{cache, config_file, setup_file};

#[derive(Args)]
pub struct BestArgs {
    /// Lathe configuration path (JSON). Omit for the built-in defaults.
    #[arg(long)]
    pub config: Option<String>,

    /// Load the candidate universe from a BGC1 cache instead of regenerating
    #[arg(long)]
    pub cache: Option<String>,

    /// Target pitch value
    #[arg(long)]
    pub target: f64,

    /// Target unit: mm | tpi
    #[arg(long, default_value = "mm")]
    pub unit: String,

    /// Candidate band threshold around the target
    #[arg(long, default_value_t = DEFAULT_POOL_THRESHOLD)]
    pub threshold: f64,

    /// Favorites file used for reuse/position scoring
    #[arg(long)]
    pub favorites: Option<String>,
}

pub fn run(args: BestArgs) -> anyhow::Result<()> {
    let kind = PitchType::parse(&args.unit).map_err(|e| anyhow::anyhow!("{e}"))?;
    let target = Pitch::new(args.target, kind).to_metric();

    let (config, combos) = match args.cache.as_deref() {
        Some(path) => {
            let (cached_config, combos) = cache::read_cache(path)?;
            if let Some(config_path) = args.config.as_deref() {
                let current = config_file::load_config(config_path)?;
                if current != cached_config {
                    anyhow::bail!(
                        "cache {} was built for a different configuration; regenerate with `banjo-cli combos --cache`",
                        path
                    );
                }
            }
            (cached_config, combos)
        }
        None => {
            let config = match args.config.as_deref() {
                Some(path) => config_file::load_config(path)?,
                None => default_config(),
            };
            validate_config(&config).map_err(|e| anyhow::anyhow!("{e}"))?;
            let combos = find_all_combinations(&config, None, None);
            (config, combos)
        }
    };

    let references = match args.favorites.as_deref() {
        Some(path) => setup_file::load_setups(path)?,
        None => Vec::new(),
    };

    let pool = candidates_for_target(&combos, target.value, args.threshold);
    eprintln!(
        "best: {} candidates within x{} of {} ({} gears in inventory)",
        pool.len(),
        args.threshold,
        target,
        config.gears.len()
    );

    match select_best(&pool, target.value, &references) {
        None => {
            println!("no valid combination within the threshold");
        }
        Some(setup) => {
            println!("{setup}");
            let error = (setup.pitch.value - target.value).abs();
            println!("error      = {error:.6} mm/rev");
        }
    }
    Ok(())
}
