//! Stage files: the roster and games of one stage, stored as JSON

use serde::{Deserialize, Serialize};
use standings_core::{Competitor, Game};
use std::path::Path;

use crate::config::RankingConfig;
use crate::engine::{rank_stage, Standings};
use crate::error::{GameSetError, RankingError, StageFileError};
use crate::validate::{validate_stage, ValidatedGames};

/// Everything needed to rank one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageInput {
    /// Stage label every game must carry
    pub stage: String,
    pub competitors: Vec<Competitor>,
    #[serde(default)]
    pub games: Vec<Game>,
}

impl StageInput {
    pub fn new(stage: &str, competitors: Vec<Competitor>) -> Self {
        Self {
            stage: stage.to_string(),
            competitors,
            games: Vec::new(),
        }
    }

    pub fn add_game(&mut self, game: Game) {
        self.games.push(game);
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), StageFileError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| StageFileError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, StageFileError> {
        let contents = std::fs::read_to_string(path).map_err(|source| StageFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn validate(&self, game_points: Option<u64>) -> Result<ValidatedGames, GameSetError> {
        validate_stage(&self.stage, &self.competitors, &self.games, game_points)
    }

    pub fn rank(&self, config: &RankingConfig) -> Result<Standings, RankingError> {
        rank_stage(&self.stage, &self.competitors, &self.games, config)
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod stage_tests;
