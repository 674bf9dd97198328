use banjo_core::defaults::default_config;
use banjo_core::finder::find_all_combinations;
use banjo_core::solve::{candidates_for_target, select_best_batch, ThreadTarget, DEFAULT_POOL_THRESHOLD};
use banjo_core::{Gear, GearModule, ModuleUnit, Pitch, PitchSetup, PitchType};

fn universe() -> Vec<PitchSetup> {
    let mut config = default_config();
    config.leadscrew = Pitch::new(16.0, PitchType::Imperial);
    find_all_combinations(&config, None, None)
}

fn tpi_target(name: &str, tpi: f64, combos: &[PitchSetup]) -> ThreadTarget {
    let target_pitch = Pitch::new(tpi, PitchType::Imperial).to_metric().value;
    ThreadTarget {
        name: name.to_string(),
        target_pitch,
        candidates: candidates_for_target(combos, target_pitch, DEFAULT_POOL_THRESHOLD),
    }
}

#[test]
fn permuting_the_targets_does_not_change_what_is_chosen() {
    let combos = universe();
    let targets = vec![
        tpi_target("UNC #0", 80.0, &combos),
        tpi_target("UNC #1", 64.0, &combos),
        tpi_target("UNC #2", 56.0, &combos),
    ];
    for t in &targets {
        assert!(!t.candidates.is_empty(), "no candidates for {}", t.name);
    }

    let orders: [[usize; 3]; 3] = [[0, 1, 2], [2, 0, 1], [1, 2, 0]];
    let mut runs = Vec::new();
    for order in orders {
        let permuted: Vec<ThreadTarget> = order.iter().map(|&i| targets[i].clone()).collect();
        runs.push(select_best_batch(&permuted));
    }

    for t in &targets {
        let mut picks = runs.iter().map(|run| {
            &run.iter()
                .find(|c| c.name == t.name)
                .unwrap_or_else(|| panic!("{} missing from a run", t.name))
                .setup
        });
        let first = picks.next().unwrap();
        for pick in picks {
            assert_eq!(pick, first, "divergent choice for {}", t.name);
        }
    }
}

#[test]
fn results_come_back_in_input_order() {
    let combos = universe();
    let targets = vec![
        tpi_target("UNC #2", 56.0, &combos),
        tpi_target("UNC #0", 80.0, &combos),
        tpi_target("UNC #1", 64.0, &combos),
    ];
    let result = select_best_batch(&targets);
    let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["UNC #2", "UNC #0", "UNC #1"]);
}

#[test]
fn accuracy_is_never_traded_for_other_terms() {
    let combos = universe();
    let targets = vec![
        tpi_target("UNC #0", 80.0, &combos),
        tpi_target("UNC #1", 64.0, &combos),
        tpi_target("UNC #2", 56.0, &combos),
    ];
    let result = select_best_batch(&targets);
    assert_eq!(result.len(), targets.len());

    for chosen in &result {
        let target = targets.iter().find(|t| t.name == chosen.name).unwrap();
        let min_error = target
            .candidates
            .iter()
            .map(|c| (c.pitch.value - target.target_pitch).abs())
            .fold(f64::INFINITY, f64::min);
        let chosen_error = (chosen.setup.pitch.value - target.target_pitch).abs();
        assert!(chosen_error <= min_error + 1e-7);
    }
}

#[test]
fn the_accuracy_prefilter_overrides_the_spacer_bonus() {
    // An exact four-gear hit must beat a slightly-off spacer train: the
    // pre-filter removes the off candidate before scoring ever runs.
    let m1 = GearModule::new(1.0, ModuleUnit::Metric).unwrap();
    let gear = |z: u32| Some(Gear::new(m1, z).unwrap());
    let exact = PitchSetup::new(gear(40), gear(50), gear(55), gear(30), Pitch::new(2.0, PitchType::Metric));
    let spacer_off = PitchSetup::new(gear(40), gear(48), gear(48), gear(80), Pitch::new(2.001, PitchType::Metric));

    let targets = vec![ThreadTarget {
        name: "M-test".to_string(),
        target_pitch: 2.0,
        candidates: vec![spacer_off, exact.clone()],
    }];
    let result = select_best_batch(&targets);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].setup, exact);
}

#[test]
fn a_target_with_no_candidates_is_absent_not_an_error() {
    let combos = universe();
    let targets = vec![
        tpi_target("UNC #0", 80.0, &combos),
        ThreadTarget {
            name: "impossible".to_string(),
            target_pitch: 100.0,
            candidates: candidates_for_target(&combos, 100.0, DEFAULT_POOL_THRESHOLD),
        },
        tpi_target("UNC #1", 64.0, &combos),
    ];
    let result = select_best_batch(&targets);
    let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["UNC #0", "UNC #1"]);
}

#[test]
fn an_empty_request_yields_an_empty_result() {
    assert!(select_best_batch(&[]).is_empty());
}

#[test]
fn the_joint_assignment_prefers_shared_gears_across_targets() {
    // Two targets, each with an exact-accuracy choice between a train
    // sharing gears with the other target and a train that shares
    // nothing. The solver should converge on the shared pair.
    let m1 = GearModule::new(1.0, ModuleUnit::Metric).unwrap();
    let gear = |z: u32| Some(Gear::new(m1, z).unwrap());

    let shared_a = PitchSetup::new(gear(20), gear(40), gear(40), gear(80), Pitch::new(1.0, PitchType::Metric));
    let lone_a = PitchSetup::new(gear(21), gear(44), gear(46), gear(66), Pitch::new(1.0, PitchType::Metric));
    let shared_b = PitchSetup::new(gear(20), gear(40), gear(40), gear(80), Pitch::new(1.25, PitchType::Metric));
    let lone_b = PitchSetup::new(gear(23), gear(49), gear(51), gear(63), Pitch::new(1.25, PitchType::Metric));

    let targets = vec![
        ThreadTarget {
            name: "M6".to_string(),
            target_pitch: 1.0,
            candidates: vec![lone_a, shared_a.clone()],
        },
        ThreadTarget {
            name: "M8".to_string(),
            target_pitch: 1.25,
            candidates: vec![lone_b, shared_b.clone()],
        },
    ];
    let result = select_best_batch(&targets);
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].setup, shared_a);
    assert_eq!(result[1].setup, shared_b);
}
