use std::sync::atomic::AtomicBool;

use banjo_core::defaults::default_config;
use banjo_core::finder::find_all_combinations;
use banjo_core::{Gear, GearModule, LatheConfig, ModuleUnit, Pitch, PitchType};

fn imperial_config() -> LatheConfig {
    let mut config = default_config();
    config.leadscrew = Pitch::new(16.0, PitchType::Imperial);
    config
}

#[test]
fn two_runs_produce_element_wise_identical_lists() {
    let config = imperial_config();
    let first = find_all_combinations(&config, None, None);
    let second = find_all_combinations(&config, None, None);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn every_generated_setup_re_passes_validity() {
    let config = imperial_config();
    let combos = find_all_combinations(&config, None, None);
    for s in &combos {
        assert!(s.is_valid(
            config.min_teeth,
            config.min_axle_distance_cd,
            config.min_axle_distance_ab
        ));
    }
}

#[test]
fn generated_pitches_are_normalized_to_metric() {
    let combos = find_all_combinations(&imperial_config(), None, None);
    assert!(combos.iter().all(|s| s.pitch.kind == PitchType::Metric));
    assert!(combos.iter().all(|s| s.pitch.value > 0.0));
}

#[test]
fn duplicate_inventory_gears_enable_spacer_trains() {
    // The stock inventory carries two 20s, two 40s and two 80s; a B == C
    // train needs two physical gears of the same size.
    let combos = find_all_combinations(&imperial_config(), None, None);
    assert!(combos
        .iter()
        .any(|s| s.gear_b.is_some() && s.gear_b == s.gear_c));
}

#[test]
fn progress_reaches_one_and_never_goes_backwards() {
    let config = imperial_config();
    let mut fractions: Vec<f64> = Vec::new();
    {
        let mut report = |f: f64| fractions.push(f);
        find_all_combinations(&config, Some(&mut report), None);
    }
    assert_eq!(fractions.len(), config.gears.len());
    assert!(fractions.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*fractions.last().unwrap(), 1.0);
}

#[test]
fn a_pre_set_cancel_flag_stops_at_the_first_checkpoint() {
    let cancel = AtomicBool::new(true);
    let combos = find_all_combinations(&imperial_config(), None, Some(&cancel));
    assert!(combos.is_empty());
}

#[test]
fn empty_inventory_yields_an_empty_universe() {
    let mut config = imperial_config();
    config.gears.clear();
    assert!(find_all_combinations(&config, None, None).is_empty());
}

#[test]
fn module_inconsistent_inventory_yields_an_empty_universe() {
    // Four gears on four different modules: no pair can ever mesh.
    let mut config = imperial_config();
    config.gears = [1.0, 1.25, 1.5, 2.0]
        .iter()
        .map(|&v| {
            Gear::new(GearModule::new(v, ModuleUnit::Metric).unwrap(), 40).unwrap()
        })
        .collect();
    assert!(find_all_combinations(&config, None, None).is_empty());
}

#[test]
fn a_known_good_train_is_in_the_universe() {
    // 20-50-40-80 derives exactly 80 TPI from a 16 TPI leadscrew.
    let combos = find_all_combinations(&imperial_config(), None, None);
    let expected_mm = 25.4 / 80.0;
    assert!(combos.iter().any(|s| {
        s.gear_a.map(|g| g.teeth) == Some(20)
            && s.gear_b.map(|g| g.teeth) == Some(50)
            && s.gear_c.map(|g| g.teeth) == Some(40)
            && s.gear_d.map(|g| g.teeth) == Some(80)
            && (s.pitch.value - expected_mm).abs() < 1e-9
    }));
}

#[test]
fn the_universe_never_reuses_one_physical_gear_twice() {
    // B == C trains must come from duplicate inventory entries; with a
    // single 57-tooth gear there is no 57/57 spacer pair.
    let combos = find_all_combinations(&imperial_config(), None, None);
    assert!(!combos
        .iter()
        .any(|s| s.gear_b.map(|g| g.teeth) == Some(57) && s.gear_c.map(|g| g.teeth) == Some(57)));
}
