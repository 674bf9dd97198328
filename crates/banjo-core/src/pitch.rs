// crates/banjo-core/src/pitch.rs

use std::fmt;

use crate::error::{BanjoError, Result};

/// Exact unit-conversion constant; part of the serialized contract.
pub const MM_PER_INCH: f64 = 25.4;

/// Default tolerance for pitch comparisons.
pub const PITCH_TOLERANCE: f64 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PitchType {
    /// Distance per revolution, millimeters (wire tag 0).
    Metric,
    /// Threads per inch (wire tag 1).
    Imperial,
}

impl PitchType {
    pub fn as_u8(self) -> u8 {
        match self {
            PitchType::Metric => 0,
            PitchType::Imperial => 1,
        }
    }

    pub fn from_u8(v: u8) -> Result<Self> {
        match v {
            0 => Ok(PitchType::Metric),
            1 => Ok(PitchType::Imperial),
            _ => Err(BanjoError::Parse(format!("unknown pitch unit tag: {v}"))),
        }
    }

    /// Parse a human-facing unit name ("mm" / "tpi").
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "metric" | "mm/rev" => Ok(PitchType::Metric),
            "tpi" | "imperial" => Ok(PitchType::Imperial),
            _ => Err(BanjoError::Parse(format!("unknown pitch unit: {s}"))),
        }
    }
}

/// A thread pitch: mm travel per spindle revolution, or threads per inch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pitch {
    pub value: f64,
    pub kind: PitchType,
}

impl Pitch {
    pub fn new(value: f64, kind: PitchType) -> Self {
        Pitch { value, kind }
    }

    /// The zero-value sentinel marking an unrealizable train.
    pub fn zero(kind: PitchType) -> Self {
        Pitch { value: 0.0, kind }
    }

    /// Toggle the unit through the reciprocal 25.4 law.
    /// The zero sentinel stays zero rather than going to infinity.
    pub fn convert(&self) -> Pitch {
        let kind = match self.kind {
            PitchType::Metric => PitchType::Imperial,
            PitchType::Imperial => PitchType::Metric,
        };
        let value = if self.value == 0.0 {
            0.0
        } else {
            MM_PER_INCH / self.value
        };
        Pitch { value, kind }
    }

    pub fn to_metric(&self) -> Pitch {
        match self.kind {
            PitchType::Metric => *self,
            PitchType::Imperial => self.convert(),
        }
    }

    /// Tolerant equality, considering cross-unit equality via conversion.
    pub fn equals(&self, other: &Pitch, tolerance: f64) -> bool {
        if self.kind == other.kind {
            (self.value - other.value).abs() <= tolerance
        } else {
            self.convert().equals(other, tolerance)
        }
    }

    /// Combine a leadscrew pitch with a train ratio.
    ///
    /// A rate leadscrew (TPI) divides by the ratio; a distance leadscrew
    /// multiplies. The two forms are reciprocal-consistent.
    pub fn with_ratio(&self, ratio: f64) -> Pitch {
        match self.kind {
            PitchType::Metric => Pitch::new(self.value * ratio, PitchType::Metric),
            PitchType::Imperial => Pitch::new(self.value / ratio, PitchType::Imperial),
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PitchType::Metric => write!(f, "{:.4} mm/rev", self.value),
            PitchType::Imperial => write!(f, "{:.4} TPI", self.value),
        }
    }
}
