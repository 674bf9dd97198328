pub mod error;

pub mod config;
pub mod defaults;
pub mod finder;
pub mod gear;
pub mod pitch;
pub mod plain;
pub mod score;
pub mod setup;
pub mod solve;

pub use crate::config::LatheConfig;
pub use crate::gear::{Gear, GearModule, ModuleUnit};
pub use crate::pitch::{Pitch, PitchType};
pub use crate::setup::PitchSetup;
