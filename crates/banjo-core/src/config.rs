// crates/banjo-core/src/config.rs

use crate::error::{BanjoError, Result};
use crate::gear::{Gear, GearModule};
use crate::pitch::Pitch;

pub const DEFAULT_MIN_AXLE_DISTANCE_AB: f64 = 34.0;
pub const DEFAULT_MIN_AXLE_DISTANCE_CD: f64 = 44.0;

/// Everything the generator needs to know about one machine: the
/// leadscrew, the clearance minimums, and the gear inventory.
///
/// The core never reads this from any global; callers pass it explicitly.
#[derive(Clone, Debug, PartialEq)]
pub struct LatheConfig {
    pub leadscrew: Pitch,
    /// Minimum sum of the four pitch radii the banjo must span.
    pub min_teeth: f64,
    pub min_axle_distance_ab: f64,
    pub min_axle_distance_cd: f64,
    pub gears: Vec<Gear>,
}

impl LatheConfig {
    /// Whether the inventory mixes modules. Display layers use this to
    /// decide between "40" and "M1 Z40" gear labels.
    pub fn is_multi_module(&self) -> bool {
        match self.gears.first() {
            None => false,
            Some(first) => self.gears.iter().any(|g| g.module != first.module),
        }
    }

    pub fn sample_module(&self) -> Option<GearModule> {
        self.gears.first().map(|g| g.module)
    }
}

pub fn validate_config(c: &LatheConfig) -> Result<()> {
    if !c.leadscrew.value.is_finite() || c.leadscrew.value <= 0.0 {
        return Err(BanjoError::Validation(format!(
            "leadscrew pitch must be positive, got {}",
            c.leadscrew.value
        )));
    }
    if !c.min_teeth.is_finite() || c.min_teeth < 0.0 {
        return Err(BanjoError::Validation(
            "min_teeth must be non-negative".into(),
        ));
    }
    if !c.min_axle_distance_ab.is_finite() || c.min_axle_distance_ab < 0.0 {
        return Err(BanjoError::Validation(
            "min_axle_distance_ab must be non-negative".into(),
        ));
    }
    if !c.min_axle_distance_cd.is_finite() || c.min_axle_distance_cd < 0.0 {
        return Err(BanjoError::Validation(
            "min_axle_distance_cd must be non-negative".into(),
        ));
    }
    // An empty inventory is valid; it just produces an empty universe.
    Ok(())
}
