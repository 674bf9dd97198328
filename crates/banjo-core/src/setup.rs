// crates/banjo-core/src/setup.rs

use std::fmt;

use crate::gear::Gear;
use crate::pitch::{Pitch, PITCH_TOLERANCE};

/// Radius reserved around the input and output axles, in module-scaled
/// millimeters.
const AXLE_RADIUS: f64 = 8.0;

/// One drive-train record: the four gear slots of the train
/// Spindle -> A -> B -> C -> D -> Leadscrew, plus the resulting pitch.
///
/// `name` is carried only by named favorite records; generation leaves
/// it empty.
#[derive(Clone, Debug, PartialEq)]
pub struct PitchSetup {
    pub gear_a: Option<Gear>,
    pub gear_b: Option<Gear>,
    pub gear_c: Option<Gear>,
    pub gear_d: Option<Gear>,
    pub pitch: Pitch,
    pub name: Option<String>,
}

impl PitchSetup {
    pub fn new(
        gear_a: Option<Gear>,
        gear_b: Option<Gear>,
        gear_c: Option<Gear>,
        gear_d: Option<Gear>,
        pitch: Pitch,
    ) -> Self {
        PitchSetup {
            gear_a,
            gear_b,
            gear_c,
            gear_d,
            pitch,
            name: None,
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Derive the resulting pitch from four gears and a leadscrew.
    ///
    /// Ratio = (A * C) / (B * D). Never fails: any missing slot yields the
    /// zero-pitch sentinel in the leadscrew's unit.
    pub fn from_gears_and_leadscrew(
        gear_a: Option<Gear>,
        gear_b: Option<Gear>,
        gear_c: Option<Gear>,
        gear_d: Option<Gear>,
        leadscrew: Pitch,
    ) -> Self {
        let (Some(a), Some(b), Some(c), Some(d)) = (gear_a, gear_b, gear_c, gear_d) else {
            return PitchSetup::new(gear_a, gear_b, gear_c, gear_d, Pitch::zero(leadscrew.kind));
        };
        let ratio = (a.teeth as f64 * c.teeth as f64) / (b.teeth as f64 * d.teeth as f64);
        PitchSetup::new(gear_a, gear_b, gear_c, gear_d, leadscrew.with_ratio(ratio))
    }

    pub fn slots(&self) -> [Option<Gear>; 4] {
        [self.gear_a, self.gear_b, self.gear_c, self.gear_d]
    }

    /// All four slots filled. A train with empty slots is never
    /// physically realizable on this mechanism.
    pub fn are_gears_provided(&self) -> bool {
        self.gear_a.is_some()
            && self.gear_b.is_some()
            && self.gear_c.is_some()
            && self.gear_d.is_some()
    }

    /// Meshing requirement: module(A) == module(B) and module(C) == module(D).
    pub fn are_modules_matching(&self) -> bool {
        let (Some(a), Some(b), Some(c), Some(d)) =
            (self.gear_a, self.gear_b, self.gear_c, self.gear_d)
        else {
            return false;
        };
        a.module == b.module && c.module == d.module
    }

    /// Geometric clearance of the mounted train.
    pub fn are_gears_clearing_axles(
        &self,
        min_teeth: f64,
        min_axle_distance_cd: f64,
        min_axle_distance_ab: f64,
    ) -> bool {
        let (Some(a), Some(b), Some(c), Some(d)) =
            (self.gear_a, self.gear_b, self.gear_c, self.gear_d)
        else {
            return false;
        };

        let pc_a = a.pitch_radius();
        let pc_b = b.pitch_radius();
        let pc_c = c.pitch_radius();
        let pc_d = d.pitch_radius();

        // the banjo can't stretch far enough
        if pc_a + pc_b + pc_c + pc_d <= min_teeth {
            return false;
        }

        // gear B interferes with the leadscrew axle
        if pc_b > pc_c + pc_d - AXLE_RADIUS {
            return false;
        }

        // gear C interferes with the driving axle
        if pc_c > pc_a + pc_b - AXLE_RADIUS {
            return false;
        }

        if pc_c + pc_d < min_axle_distance_cd {
            return false;
        }

        if pc_a + pc_b < min_axle_distance_ab {
            return false;
        }

        true
    }

    pub fn is_valid(
        &self,
        min_teeth: f64,
        min_axle_distance_cd: f64,
        min_axle_distance_ab: f64,
    ) -> bool {
        self.are_gears_provided()
            && self.are_modules_matching()
            && self.are_gears_clearing_axles(min_teeth, min_axle_distance_cd, min_axle_distance_ab)
    }

    /// Same four gears slot-for-slot and the same pitch value, comparing
    /// across units via conversion when needed.
    pub fn equals(&self, other: &PitchSetup) -> bool {
        self.gear_a == other.gear_a
            && self.gear_b == other.gear_b
            && self.gear_c == other.gear_c
            && self.gear_d == other.gear_d
            && self.pitch.equals(&other.pitch, PITCH_TOLERANCE)
    }

    pub fn to_metric(&self) -> PitchSetup {
        PitchSetup {
            pitch: self.pitch.to_metric(),
            ..self.clone()
        }
    }
}

impl fmt::Display for PitchSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn slot(g: &Option<Gear>) -> String {
            g.map_or_else(|| "-".to_string(), |g| g.to_string())
        }
        write!(
            f,
            "{}\t{}\t{}\t{}\t >> {}",
            slot(&self.gear_a),
            slot(&self.gear_b),
            slot(&self.gear_c),
            slot(&self.gear_d),
            self.pitch
        )
    }
}
