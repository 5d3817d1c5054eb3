//! PVSA recognition types and the threshold table that drives them.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    None,
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::None => "none",
            Tier::Bronze => "bronze",
            Tier::Silver => "silver",
            Tier::Gold => "gold",
        }
    }

    /// The tier right above this one, if any.
    pub fn next(&self) -> Option<Tier> {
        match self {
            Tier::None => Some(Tier::Bronze),
            Tier::Bronze => Some(Tier::Silver),
            Tier::Silver => Some(Tier::Gold),
            Tier::Gold => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hour cutoffs for one age band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub bronze: f64,
    pub silver: f64,
    pub gold: f64,
}

impl TierThresholds {
    /// Lower bound of `tier` (0 for `Tier::None`).
    pub fn floor(&self, tier: Tier) -> f64 {
        match tier {
            Tier::None => 0.0,
            Tier::Bronze => self.bronze,
            Tier::Silver => self.silver,
            Tier::Gold => self.gold,
        }
    }
}

/// Thresholds applied to users whose age falls in `min_age..=max_age`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeBand {
    pub min_age: u32,
    pub max_age: u32,
    pub thresholds: TierThresholds,
}

impl AgeBand {
    pub fn contains(&self, age: u32) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }
}

/// Milestones and tier cutoffs, loaded from the `recognition` config section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionConfig {
    #[serde(default = "default_milestones")]
    pub milestones: Vec<f64>,
    #[serde(default = "default_youth_band")]
    pub youth_band: AgeBand,
    #[serde(default = "default_thresholds")]
    pub default_thresholds: TierThresholds,
}

fn default_milestones() -> Vec<f64> {
    vec![10.0, 50.0, 100.0, 200.0, 500.0]
}

fn default_youth_band() -> AgeBand {
    AgeBand {
        min_age: 11,
        max_age: 15,
        thresholds: TierThresholds {
            bronze: 50.0,
            silver: 75.0,
            gold: 100.0,
        },
    }
}

fn default_thresholds() -> TierThresholds {
    TierThresholds {
        bronze: 100.0,
        silver: 175.0,
        gold: 250.0,
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            milestones: default_milestones(),
            youth_band: default_youth_band(),
            default_thresholds: default_thresholds(),
        }
    }
}

/// Derived recognition snapshot for one user. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecognitionState {
    pub approved_hours_total: f64,
    pub tier: Tier,
    pub next_tier: Option<Tier>,
    pub thresholds: TierThresholds,
    pub progress_percent: f64,
    pub hours_to_next_tier: f64,
}
