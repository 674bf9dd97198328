// crates/banjo-cli/src/cmd/regen.rs
//
// Regenerate a favorites file against the current configuration: every
// named favorite keeps its target pitch, gets a fresh candidate pool cut
// from the regenerated universe, and the batch solver picks a mutually
// consistent set of trains.

use clap::Args;

use banjo_core::config::validate_config;
use banjo_core::finder::find_all_combinations;
use banjo_core::solve::{candidates_for_target, select_best_batch, ThreadTarget};
use banjo_core::{PitchSetup, PitchType};

use crate::io::{config_file, setup_file};
use crate::task;

#[derive(Args)]
pub struct RegenArgs {
    /// Lathe configuration path (JSON)
    #[arg(long)]
    pub config: String,

    /// Favorites file to regenerate (JSON list of named setups)
    #[arg(long)]
    pub favorites: String,

    /// Output favorites path
    #[arg(long)]
    pub out: String,

    /// Candidate band threshold around each favorite's pitch
    #[arg(long, default_value_t = banjo_core::solve::DEFAULT_POOL_THRESHOLD)]
    pub threshold: f64,

    /// Run generation on a worker thread and abort after this many ms
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

pub fn run(args: RegenArgs) -> anyhow::Result<()> {
    let config = config_file::load_config(&args.config)?;
    validate_config(&config).map_err(|e| anyhow::anyhow!("{e}"))?;

    let favorites = setup_file::load_setups(&args.favorites)?;
    for (idx, f) in favorites.iter().enumerate() {
        if f.name.is_none() {
            anyhow::bail!(
                "favorite #{} in {} has no name; regen needs named favorites",
                idx + 1,
                args.favorites
            );
        }
    }

    let combos = match args.timeout_ms {
        Some(ms) => task::generate_with_timeout(&config, std::time::Duration::from_millis(ms))?,
        None => find_all_combinations(&config, None, None),
    };
    eprintln!("regen: universe has {} combinations", combos.len());

    let targets: Vec<ThreadTarget> = favorites
        .iter()
        .map(|f| {
            let target_pitch = f.pitch.to_metric().value;
            ThreadTarget {
                name: f.name.clone().unwrap_or_default(),
                target_pitch,
                candidates: candidates_for_target(&combos, target_pitch, args.threshold),
            }
        })
        .collect();

    let chosen = select_best_batch(&targets);

    // Report favorites the new configuration can no longer realize.
    for t in &targets {
        if !chosen.iter().any(|c| c.name == t.name) {
            eprintln!("regen: no candidates for {:?}, dropped", t.name);
        }
    }

    // Hand each favorite back in its original display unit.
    let regenerated: Vec<PitchSetup> = chosen
        .into_iter()
        .map(|c| {
            let original_kind = favorites
                .iter()
                .find(|f| f.name.as_deref() == Some(c.name.as_str()))
                .map(|f| f.pitch.kind)
                .unwrap_or(PitchType::Metric);
            let mut setup = c.setup;
            if setup.pitch.kind != original_kind {
                setup.pitch = setup.pitch.convert();
            }
            setup.with_name(Some(c.name))
        })
        .collect();

    setup_file::save_setups(&args.out, &regenerated)?;
    eprintln!(
        "regen ok: {} favorites in, {} regenerated -> {}",
        favorites.len(),
        regenerated.len(),
        args.out
    );
    Ok(())
}
