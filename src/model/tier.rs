use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("competence {0} is out of range (expected 1-4)")]
pub struct TierError(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Tier {
    Insufficient = 1,
    Fragile = 2,
    Satisfactory = 3,
    VeryGood = 4,
}

impl Tier {
    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Insufficient => "Maîtrise insuffisante",
            Tier::Fragile => "Maîtrise fragile",
            Tier::Satisfactory => "Maîtrise satisfaisante",
            Tier::VeryGood => "Très bonne maîtrise",
        }
    }
}

impl TryFrom<u8> for Tier {
    type Error = TierError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Tier::Insufficient),
            2 => Ok(Tier::Fragile),
            3 => Ok(Tier::Satisfactory),
            4 => Ok(Tier::VeryGood),
            other => Err(TierError(other)),
        }
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> u8 {
        tier.level()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

#[derive(Debug, Clone)]
pub struct TierProfile {
    pub very_good_min: f64,
    pub satisfactory_min: f64,
    pub fragile_min: f64,
}

impl TierProfile {
    pub fn default_v1() -> Self {
        Self {
            very_good_min: 16.0,
            satisfactory_min: 12.0,
            fragile_min: 9.0,
        }
    }

    // Expects the unrounded grade.
    pub fn classify(&self, grade: f64) -> Tier {
        if grade >= self.very_good_min {
            Tier::VeryGood
        } else if grade >= self.satisfactory_min {
            Tier::Satisfactory
        } else if grade >= self.fragile_min {
            Tier::Fragile
        } else {
            Tier::Insufficient
        }
    }
}

impl Default for TierProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/tier.rs"]
mod tests;
