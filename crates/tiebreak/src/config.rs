//! Ranking configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::elevator::ElevationScope;
use crate::error::ConfigError;
use crate::resolver::Criterion;

/// Seed used for the coin flip when none is configured
pub const DEFAULT_FALLBACK_SEED: &str = "tiebreak";

/// Which upstream game set a ranking is for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CohortScope {
    /// Individual seeding round: no head-to-head criteria, no divisions
    Seeding,
    /// Team round-robin play, ranked per division
    #[default]
    RoundRobin,
}

impl FromStr for CohortScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "seeding" | "seed" => Ok(Self::Seeding),
            "round_robin" | "round-robin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(format!("unknown cohort scope: {}", s)),
        }
    }
}

/// Ranking options, loadable from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Break win-percentage ties on wins minus losses first
    pub wl_factor: bool,
    /// Seed for the coin flip between competitors still tied after the cascade
    pub fallback_seed: String,
    pub cohort_scope: CohortScope,
    /// Cascade override; defaults depend on `cohort_scope`
    pub criteria: Option<Vec<Criterion>>,
    /// Elevation pass override; defaults depend on `cohort_scope`
    pub elevation: Option<bool>,
    pub elevation_scope: ElevationScope,
    /// Fail instead of ranking a stage with unfinished games
    pub require_complete: bool,
    /// Score a game's winner must reach
    pub game_points: Option<u64>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            wl_factor: false,
            fallback_seed: DEFAULT_FALLBACK_SEED.to_string(),
            cohort_scope: CohortScope::default(),
            criteria: None,
            elevation: None,
            elevation_scope: ElevationScope::default(),
            require_complete: false,
            game_points: None,
        }
    }
}

impl RankingConfig {
    pub fn for_scope(cohort_scope: CohortScope) -> Self {
        Self {
            cohort_scope,
            ..Default::default()
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Cascade applied inside each win-percentage cohort
    pub fn criteria(&self) -> Vec<Criterion> {
        let mut criteria = match &self.criteria {
            Some(criteria) => criteria.clone(),
            None => match self.cohort_scope {
                CohortScope::Seeding => vec![Criterion::PointsPct],
                CohortScope::RoundRobin => vec![
                    Criterion::HeadToHeadWinPct,
                    Criterion::HeadToHeadPointsPct,
                    Criterion::PointsPct,
                ],
            },
        };
        if self.wl_factor && !criteria.contains(&Criterion::WlFactor) {
            criteria.insert(0, Criterion::WlFactor);
        }
        criteria
    }

    pub fn elevation_enabled(&self) -> bool {
        self.elevation
            .unwrap_or(self.cohort_scope == CohortScope::RoundRobin)
    }

    /// Whether each division is ranked on its own
    pub fn uses_divisions(&self) -> bool {
        self.cohort_scope == CohortScope::RoundRobin
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
