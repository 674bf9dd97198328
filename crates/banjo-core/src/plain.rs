// crates/banjo-core/src/plain.rs
//
// The plain-object wire contract. Field names and the 0/1 unit tags are
// part of the round-trip contract with existing stored state; parsing
// into domain types is strict and never falls back to defaults (that
// policy, if wanted, belongs to the caller).

use serde::{Deserialize, Serialize};

use crate::config::LatheConfig;
use crate::error::Result;
use crate::gear::Gear;
use crate::pitch::{Pitch, PitchType};
use crate::setup::PitchSetup;
use crate::solve::{Chosen, ThreadTarget};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PitchPlain {
    pub value: f64,
    /// 0 = mm/rev (metric), 1 = TPI (imperial).
    pub unit: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupPlain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gear_a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gear_b: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gear_c: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gear_d: Option<String>,
    pub pitch: PitchPlain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPlain {
    pub gears: Vec<String>,
    pub leadscrew: PitchPlain,
    pub min_teeth: f64,
    #[serde(rename = "minAxleDistanceAB")]
    pub min_axle_distance_ab: f64,
    #[serde(rename = "minAxleDistanceCD")]
    pub min_axle_distance_cd: f64,
}

/// One element of a batch request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadPlain {
    pub name: String,
    /// Target pitch in the canonical unit (mm/rev).
    pub target_pitch: f64,
    pub candidates: Vec<SetupPlain>,
}

/// One element of a batch result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChosenPlain {
    pub name: String,
    pub setup: SetupPlain,
}

impl Pitch {
    pub fn to_plain(&self) -> PitchPlain {
        PitchPlain {
            value: self.value,
            unit: self.kind.as_u8(),
        }
    }

    pub fn from_plain(p: &PitchPlain) -> Result<Pitch> {
        Ok(Pitch::new(p.value, PitchType::from_u8(p.unit)?))
    }
}

fn slot_to_plain(g: &Option<Gear>) -> Option<String> {
    g.map(|g| g.to_string())
}

fn slot_from_plain(s: &Option<String>) -> Result<Option<Gear>> {
    s.as_deref().map(Gear::parse).transpose()
}

impl PitchSetup {
    pub fn to_plain(&self) -> SetupPlain {
        SetupPlain {
            gear_a: slot_to_plain(&self.gear_a),
            gear_b: slot_to_plain(&self.gear_b),
            gear_c: slot_to_plain(&self.gear_c),
            gear_d: slot_to_plain(&self.gear_d),
            pitch: self.pitch.to_plain(),
            name: self.name.clone(),
        }
    }

    pub fn from_plain(p: &SetupPlain) -> Result<PitchSetup> {
        Ok(PitchSetup::new(
            slot_from_plain(&p.gear_a)?,
            slot_from_plain(&p.gear_b)?,
            slot_from_plain(&p.gear_c)?,
            slot_from_plain(&p.gear_d)?,
            Pitch::from_plain(&p.pitch)?,
        )
        .with_name(p.name.clone()))
    }
}

impl LatheConfig {
    pub fn to_plain(&self) -> ConfigPlain {
        ConfigPlain {
            gears: self.gears.iter().map(|g| g.to_string()).collect(),
            leadscrew: self.leadscrew.to_plain(),
            min_teeth: self.min_teeth,
            min_axle_distance_ab: self.min_axle_distance_ab,
            min_axle_distance_cd: self.min_axle_distance_cd,
        }
    }

    pub fn from_plain(p: &ConfigPlain) -> Result<LatheConfig> {
        let gears = p
            .gears
            .iter()
            .map(|s| Gear::parse(s))
            .collect::<Result<Vec<_>>>()?;
        Ok(LatheConfig {
            leadscrew: Pitch::from_plain(&p.leadscrew)?,
            min_teeth: p.min_teeth,
            min_axle_distance_ab: p.min_axle_distance_ab,
            min_axle_distance_cd: p.min_axle_distance_cd,
            gears,
        })
    }
}

impl ThreadTarget {
    pub fn to_plain(&self) -> ThreadPlain {
        ThreadPlain {
            name: self.name.clone(),
            target_pitch: self.target_pitch,
            candidates: self.candidates.iter().map(|s| s.to_plain()).collect(),
        }
    }

    pub fn from_plain(p: &ThreadPlain) -> Result<ThreadTarget> {
        let candidates = p
            .candidates
            .iter()
            .map(PitchSetup::from_plain)
            .collect::<Result<Vec<_>>>()?;
        Ok(ThreadTarget {
            name: p.name.clone(),
            target_pitch: p.target_pitch,
            candidates,
        })
    }
}

impl Chosen {
    pub fn to_plain(&self) -> ChosenPlain {
        ChosenPlain {
            name: self.name.clone(),
            setup: self.setup.to_plain(),
        }
    }

    pub fn from_plain(p: &ChosenPlain) -> Result<Chosen> {
        Ok(Chosen {
            name: p.name.clone(),
            setup: PitchSetup::from_plain(&p.setup)?,
        })
    }
}
