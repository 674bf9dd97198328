// crates/banjo-core/src/gear.rs

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{BanjoError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModuleUnit {
    /// Metric module: tooth size in millimeters ("M1", "M0.5").
    Metric,
    /// Diametral pitch: teeth per inch of pitch diameter ("DP24").
    DiametralPitch,
}

/// Tooth-size measure shared by a set of meshing gears.
///
/// Equality is exact value + unit; hashing goes through the f64 bit
/// pattern so gears can key hash maps directly.
#[derive(Clone, Copy, Debug)]
pub struct GearModule {
    pub value: f64,
    pub unit: ModuleUnit,
}

impl GearModule {
    pub fn new(value: f64, unit: ModuleUnit) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(BanjoError::Validation(format!(
                "module value must be positive and finite, got {value}"
            )));
        }
        Ok(GearModule { value, unit })
    }

    /// Parse the canonical string form: "M<value>" or "DP<value>".
    pub fn parse(s: &str) -> Result<Self> {
        let t = s.trim();
        let (unit, num) = if let Some(rest) = t.strip_prefix("DP") {
            (ModuleUnit::DiametralPitch, rest)
        } else if let Some(rest) = t.strip_prefix('M') {
            (ModuleUnit::Metric, rest)
        } else {
            return Err(BanjoError::Parse(format!("unknown module prefix: {t}")));
        };
        let value: f64 = num
            .trim()
            .parse()
            .map_err(|_| BanjoError::Parse(format!("invalid module value: {t}")))?;
        GearModule::new(value, unit)
            .map_err(|_| BanjoError::Parse(format!("invalid module value: {t}")))
    }

    /// Tooth size in millimeters regardless of unit.
    pub fn value_mm(&self) -> f64 {
        match self.unit {
            ModuleUnit::Metric => self.value,
            ModuleUnit::DiametralPitch => crate::pitch::MM_PER_INCH / self.value,
        }
    }
}

impl PartialEq for GearModule {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.unit == other.unit
    }
}

// Constructed values are always finite and positive, so exact f64
// equality is a sound Eq.
impl Eq for GearModule {}

impl Hash for GearModule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.value.to_bits());
        self.unit.hash(state);
    }
}

impl fmt::Display for GearModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            ModuleUnit::Metric => write!(f, "M{}", self.value),
            ModuleUnit::DiametralPitch => write!(f, "DP{}", self.value),
        }
    }
}

/// One physical change gear: a module plus a tooth count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Gear {
    pub module: GearModule,
    pub teeth: u32,
}

impl Gear {
    pub fn new(module: GearModule, teeth: u32) -> Result<Self> {
        if teeth == 0 {
            return Err(BanjoError::Validation("gear teeth must be non-zero".into()));
        }
        Ok(Gear { module, teeth })
    }

    /// Parse the canonical string form: "<module> Z<teeth>" (e.g. "M1 Z40").
    pub fn parse(s: &str) -> Result<Self> {
        let t = s.trim();
        let (module_part, teeth_part) = t
            .split_once('Z')
            .ok_or_else(|| BanjoError::Parse(format!("gear string missing tooth count: {t}")))?;
        let module = GearModule::parse(module_part)?;
        let teeth: u32 = teeth_part
            .trim()
            .parse()
            .map_err(|_| BanjoError::Parse(format!("invalid tooth count: {t}")))?;
        Gear::new(module, teeth)
            .map_err(|_| BanjoError::Parse(format!("invalid tooth count: {t}")))
    }

    /// Half the pitch diameter, in millimeters.
    pub fn pitch_radius(&self) -> f64 {
        self.teeth as f64 * self.module.value_mm() / 2.0
    }
}

impl fmt::Display for Gear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Z{}", self.module, self.teeth)
    }
}

/// Build an inventory from tooth counts sharing one module.
pub fn gears_from_teeth(teeth: &[u32], module: GearModule) -> Result<Vec<Gear>> {
    teeth.iter().map(|&z| Gear::new(module, z)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gear_string_roundtrip() {
        let m1 = GearModule::parse("M1").unwrap();
        let g = Gear::new(m1, 40).unwrap();
        assert_eq!(g.to_string(), "M1 Z40");
        assert_eq!(Gear::parse("M1 Z40").unwrap(), g);
        assert_eq!(Gear::parse(" M1 Z40 ").unwrap(), g);

        let half = Gear::parse("M0.5 Z57").unwrap();
        assert_eq!(half.to_string(), "M0.5 Z57");

        let dp = Gear::parse("DP24 Z20").unwrap();
        assert_eq!(dp.module.unit, ModuleUnit::DiametralPitch);
        assert_eq!(dp.to_string(), "DP24 Z20");
    }

    #[test]
    fn malformed_gear_strings_are_parse_errors() {
        for bad in ["", "Z40", "M1", "M1 Z", "M1 Zforty", "Q1 Z40", "M0 Z40", "M1 Z0"] {
            match Gear::parse(bad) {
                Err(BanjoError::Parse(_)) => {}
                other => panic!("expected parse error for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn pitch_radius_is_half_the_pitch_diameter() {
        let m1 = GearModule::new(1.0, ModuleUnit::Metric).unwrap();
        assert_eq!(Gear::new(m1, 20).unwrap().pitch_radius(), 10.0);
        assert_eq!(Gear::new(m1, 55).unwrap().pitch_radius(), 27.5);
        assert_eq!(Gear::new(m1, 80).unwrap().pitch_radius(), 40.0);
    }
}
