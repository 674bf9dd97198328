// crates/banjo-core/src/finder.rs
//
// Exhaustive change-gear enumeration.
//
// Every ordered assignment of four DISTINCT inventory positions to the
// slots A,B,C,D is considered; duplicate tooth counts in the inventory
// are distinct physical gears, which is what makes a B == C spacer train
// reachable at all. Cheap constraints (module meshing, banjo stretch)
// prune before the full clearance evaluation.
//
// Deterministic: identical inputs produce the identical list in the
// identical order. Downstream consumers index into it positionally.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::LatheConfig;
use crate::gear::Gear;
use crate::pitch::Pitch;
use crate::setup::PitchSetup;

/// Enumerate every physically valid drive train for `config`.
///
/// `progress` receives fractions in 0..=1 at outer-loop checkpoints.
/// `cancel` is polled at the same checkpoints; once set, the prefix
/// collected so far is returned. Results are normalized to metric pitch.
///
/// An empty or module-inconsistent inventory yields an empty vec.
pub fn find_all_combinations(
    config: &LatheConfig,
    mut progress: Option<&mut dyn FnMut(f64)>,
    cancel: Option<&AtomicBool>,
) -> Vec<PitchSetup> {
    let gears: &[Gear] = &config.gears;
    let n = gears.len();
    let mut out = Vec::new();

    for ia in 0..n {
        if let Some(flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                return out;
            }
        }
        let a = gears[ia];
        for ib in 0..n {
            if ib == ia {
                continue;
            }
            let b = gears[ib];
            if a.module != b.module {
                continue;
            }
            for ic in 0..n {
                if ic == ia || ic == ib {
                    continue;
                }
                let c = gears[ic];
                for id in 0..n {
                    if id == ia || id == ib || id == ic {
                        continue;
                    }
                    let d = gears[id];
                    if c.module != d.module {
                        continue;
                    }
                    if a.pitch_radius() + b.pitch_radius() + c.pitch_radius() + d.pitch_radius()
                        <= config.min_teeth
                    {
                        continue;
                    }
                    let setup = evaluate(Some(a), Some(b), Some(c), Some(d), config.leadscrew);
                    if setup.is_valid(
                        config.min_teeth,
                        config.min_axle_distance_cd,
                        config.min_axle_distance_ab,
                    ) {
                        out.push(setup.to_metric());
                    }
                }
            }
        }
        if let Some(ref mut report) = progress {
            report((ia + 1) as f64 / n as f64);
        }
    }

    out
}

/// Single-combination evaluator, for ad-hoc verification and for
/// building solver candidate pools. Compose with
/// [`PitchSetup::is_valid`] for the feasibility verdict.
pub fn evaluate(
    gear_a: Option<Gear>,
    gear_b: Option<Gear>,
    gear_c: Option<Gear>,
    gear_d: Option<Gear>,
    leadscrew: Pitch,
) -> PitchSetup {
    PitchSetup::from_gears_and_leadscrew(gear_a, gear_b, gear_c, gear_d, leadscrew)
}
