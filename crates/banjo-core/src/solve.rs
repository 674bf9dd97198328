// crates/banjo-core/src/solve.rs
//
// Joint selection of one drive train per target across many targets at
// once. Three phases:
//
//   0. accuracy pre-filter — per target, keep only candidates within
//      ACCURACY_EPSILON of that target's best achievable error, so no
//      later phase can trade accuracy for reuse or simplicity;
//   1. greedy seed — most-constrained target first, each selection
//      seeing the setups already chosen as references;
//   2. hill climb — up to MAX_IMPROVEMENT_PASSES first-improvement
//      passes over the whole assignment, rescoring the total each time a
//      substitution is tried.
//
// The caller's input order must never influence WHAT is chosen, only the
// order results are reported in. Both phase orders are therefore
// canonical: pool size ascending, ties broken by target name.

use crate::score::{score, select_best};
use crate::setup::PitchSetup;

/// Candidates this close to a target's minimum error count as equally
/// accurate.
pub const ACCURACY_EPSILON: f64 = 1e-7;

/// Band half-width (as a ratio) used to cut per-target candidate pools
/// out of the full universe.
pub const DEFAULT_POOL_THRESHOLD: f64 = 1.003;

const MAX_IMPROVEMENT_PASSES: usize = 10;

/// One target thread: a name, the wanted pitch in canonical mm/rev, and
/// its pool of valid candidate trains.
#[derive(Clone, Debug)]
pub struct ThreadTarget {
    pub name: String,
    pub target_pitch: f64,
    pub candidates: Vec<PitchSetup>,
}

/// One solver result: the chosen train for a named target.
#[derive(Clone, Debug)]
pub struct Chosen {
    pub name: String,
    pub setup: PitchSetup,
}

/// Cut a per-target candidate pool out of the candidate universe:
/// setups whose metric pitch lies inside (target/threshold, target*threshold).
pub fn candidates_for_target(
    combos: &[PitchSetup],
    target_pitch: f64,
    threshold: f64,
) -> Vec<PitchSetup> {
    combos
        .iter()
        .filter(|s| {
            s.pitch.value > target_pitch / threshold && s.pitch.value < target_pitch * threshold
        })
        .cloned()
        .collect()
}

fn accuracy_filter(target: &ThreadTarget) -> Vec<PitchSetup> {
    let mut min_error = f64::INFINITY;
    for c in &target.candidates {
        let e = (c.pitch.value - target.target_pitch).abs();
        if e < min_error {
            min_error = e;
        }
    }
    target
        .candidates
        .iter()
        .filter(|c| (c.pitch.value - target.target_pitch).abs() <= min_error + ACCURACY_EPSILON)
        .cloned()
        .collect()
}

/// Total score of the current assignment: every chosen setup scored
/// against every OTHER chosen setup as its reference set.
fn total_score(
    picks: &[Option<PitchSetup>],
    target_of: &[usize],
    targets: &[ThreadTarget],
) -> f64 {
    let mut total = 0.0;
    for (slot, pick) in picks.iter().enumerate() {
        let Some(setup) = pick else { continue };
        let others: Vec<PitchSetup> = picks
            .iter()
            .enumerate()
            .filter_map(|(j, p)| if j != slot { p.clone() } else { None })
            .collect();
        total += score(setup, targets[target_of[slot]].target_pitch, &others);
    }
    total
}

/// Choose one setup per target, jointly.
///
/// Returns one entry per input target, in the caller's input order; a
/// target whose pool is empty after the accuracy filter is simply
/// absent. For a fixed set of targets the chosen content per name is
/// identical under any permutation of the input.
pub fn select_best_batch(targets: &[ThreadTarget]) -> Vec<Chosen> {
    if targets.is_empty() {
        return Vec::new();
    }

    // Phase 0: accuracy pre-filter. Targets left without candidates drop
    // out here and stay out.
    let mut target_of: Vec<usize> = Vec::new();
    let mut pools: Vec<Vec<PitchSetup>> = Vec::new();
    for (idx, t) in targets.iter().enumerate() {
        let pool = accuracy_filter(t);
        if !pool.is_empty() {
            target_of.push(idx);
            pools.push(pool);
        }
    }
    if pools.is_empty() {
        return Vec::new();
    }

    // Canonical processing order: most-constrained first, names breaking
    // pool-size ties so the seed never observes the caller's ordering.
    let mut order: Vec<usize> = (0..pools.len()).collect();
    order.sort_by(|&x, &y| {
        pools[x]
            .len()
            .cmp(&pools[y].len())
            .then_with(|| targets[target_of[x]].name.cmp(&targets[target_of[y]].name))
    });

    // Phase 1: greedy seed.
    let mut picks: Vec<Option<PitchSetup>> = vec![None; pools.len()];
    let mut selected: Vec<PitchSetup> = Vec::new();
    for &slot in &order {
        let t = &targets[target_of[slot]];
        if let Some(best) = select_best(&pools[slot], t.target_pitch, &selected) {
            selected.push(best.clone());
            picks[slot] = Some(best.clone());
        }
    }

    // Phase 2: bounded first-improvement hill climb over the total
    // assignment score.
    for _pass in 0..MAX_IMPROVEMENT_PASSES {
        let mut improved = false;
        for &slot in &order {
            let Some(current) = picks[slot].clone() else {
                continue;
            };
            let current_total = total_score(&picks, &target_of, targets);
            for candidate in &pools[slot] {
                if candidate.equals(&current) {
                    continue;
                }
                picks[slot] = Some(candidate.clone());
                let new_total = total_score(&picks, &target_of, targets);
                if new_total > current_total {
                    improved = true;
                    break;
                }
                picks[slot] = Some(current.clone());
            }
        }
        if !improved {
            break;
        }
    }

    // Report in the caller's input order.
    let mut result = Vec::with_capacity(pools.len());
    for (slot, pick) in picks.into_iter().enumerate() {
        if let Some(setup) = pick {
            result.push(Chosen {
                name: targets[target_of[slot]].name.clone(),
                setup,
            });
        }
    }
    result
}
