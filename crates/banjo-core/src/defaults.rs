// crates/banjo-core/src/defaults.rs

use crate::config::{LatheConfig, DEFAULT_MIN_AXLE_DISTANCE_AB, DEFAULT_MIN_AXLE_DISTANCE_CD};
use crate::gear::{Gear, GearModule, ModuleUnit};
use crate::pitch::{Pitch, PitchType};

/// Stock configuration: 1.6 mm/rev leadscrew and the factory M1 gear set.
/// Duplicate tooth counts are distinct physical gears.
pub fn default_config() -> LatheConfig {
    let m1 = GearModule {
        value: 1.0,
        unit: ModuleUnit::Metric,
    };
    let teeth: [u32; 14] = [20, 20, 30, 35, 40, 40, 45, 50, 55, 57, 60, 65, 80, 80];
    LatheConfig {
        leadscrew: Pitch::new(1.6, PitchType::Metric),
        min_teeth: 82.0,
        min_axle_distance_ab: DEFAULT_MIN_AXLE_DISTANCE_AB,
        min_axle_distance_cd: DEFAULT_MIN_AXLE_DISTANCE_CD,
        gears: teeth.iter().map(|&z| Gear { module: m1, teeth: z }).collect(),
    }
}
