// crates/banjo-core/src/score.rs
//
// Desirability scoring for one drive train against a target pitch and a
// set of reference ("favorite") trains. Higher is better. Accuracy
// dominates the other terms by orders of magnitude for realistic errors
// but is not special-cased: the final ordering is the plain sum.

use std::collections::HashSet;

use crate::gear::Gear;
use crate::setup::PitchSetup;

const ACCURACY_WEIGHT: f64 = 10_000_000.0;
const SIMPLICITY_BONUS: f64 = 120_000.0;
const REUSE_WEIGHT: f64 = 5.0;
const POSITION_WEIGHT: f64 = 20.0;

/// Positions B and C sit on the banjo itself and are the costly ones to
/// re-mount, so slot matches there count four times an A/D match.
const POSITION_EASY: u32 = 1;
const POSITION_HARD: u32 = 4;

pub fn score(setup: &PitchSetup, target_pitch: f64, references: &[PitchSetup]) -> f64 {
    let error = (setup.pitch.value - target_pitch).abs();
    let mut total = ACCURACY_WEIGHT / (1.0 + error * 1000.0);

    // B == C degenerates into the simpler two-effective-gear train with
    // B acting as a spacer.
    if let (Some(b), Some(c)) = (setup.gear_b, setup.gear_c) {
        if b == c {
            total += SIMPLICITY_BONUS;
        }
    }

    if !references.is_empty() {
        total += REUSE_WEIGHT * gear_reuse_count(setup, references) as f64;
        total += POSITION_WEIGHT * position_consistency(setup, references) as f64;
    }

    total
}

/// How many of the setup's gears already appear anywhere in the
/// references (0..=4, deduplicated across all reference records).
fn gear_reuse_count(setup: &PitchSetup, references: &[PitchSetup]) -> u32 {
    let mut reference_gears: HashSet<Gear> = HashSet::new();
    for r in references {
        for g in r.slots().into_iter().flatten() {
            reference_gears.insert(g);
        }
    }
    setup
        .slots()
        .into_iter()
        .flatten()
        .filter(|g| reference_gears.contains(g))
        .count() as u32
}

/// Weighted count of slot-for-slot gear matches against every reference.
fn position_consistency(setup: &PitchSetup, references: &[PitchSetup]) -> u32 {
    fn matches(a: &Option<Gear>, b: &Option<Gear>) -> bool {
        matches!((a, b), (Some(x), Some(y)) if x == y)
    }

    let mut count = 0;
    for r in references {
        if matches(&setup.gear_a, &r.gear_a) {
            count += POSITION_EASY;
        }
        if matches(&setup.gear_b, &r.gear_b) {
            count += POSITION_HARD;
        }
        if matches(&setup.gear_c, &r.gear_c) {
            count += POSITION_HARD;
        }
        if matches(&setup.gear_d, &r.gear_d) {
            count += POSITION_EASY;
        }
    }
    count
}

/// Argmax by score. Ties go to the earlier candidate (strictly-greater
/// comparison, an explicit policy rather than sort-stability luck). A
/// sole candidate is returned without scoring.
pub fn select_best<'a>(
    candidates: &'a [PitchSetup],
    target_pitch: f64,
    references: &[PitchSetup],
) -> Option<&'a PitchSetup> {
    match candidates {
        [] => None,
        [only] => Some(only),
        _ => {
            let mut best = &candidates[0];
            let mut best_score = score(best, target_pitch, references);
            for candidate in &candidates[1..] {
                let s = score(candidate, target_pitch, references);
                if s > best_score {
                    best = candidate;
                    best_score = s;
                }
            }
            Some(best)
        }
    }
}
