//! Game records as supplied by the bracket manager and as consumed by ranking

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::CompetitorId;

fn default_completed() -> bool {
    true
}

/// A game as entered for a stage. A missing side marks a bye.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub stage: String,
    pub round: u32,
    pub side1: Option<CompetitorId>,
    pub side2: Option<CompetitorId>,
    #[serde(default)]
    pub side1_points: Option<i64>,
    #[serde(default)]
    pub side2_points: Option<i64>,
    /// False while scores may still change
    #[serde(default = "default_completed")]
    pub completed: bool,
}

impl Game {
    /// A completed game between two competitors
    pub fn new(
        stage: &str,
        round: u32,
        side1: impl Into<CompetitorId>,
        side2: impl Into<CompetitorId>,
        side1_points: i64,
        side2_points: i64,
    ) -> Self {
        Self {
            stage: stage.to_string(),
            round,
            side1: Some(side1.into()),
            side2: Some(side2.into()),
            side1_points: Some(side1_points),
            side2_points: Some(side2_points),
            completed: true,
        }
    }

    /// A scheduled game with no final score yet
    pub fn pending(
        stage: &str,
        round: u32,
        side1: impl Into<CompetitorId>,
        side2: impl Into<CompetitorId>,
    ) -> Self {
        Self {
            stage: stage.to_string(),
            round,
            side1: Some(side1.into()),
            side2: Some(side2.into()),
            side1_points: None,
            side2_points: None,
            completed: false,
        }
    }

    /// A bye for `competitor`; never tallied
    pub fn bye(stage: &str, round: u32, competitor: impl Into<CompetitorId>) -> Self {
        Self {
            stage: stage.to_string(),
            round,
            side1: Some(competitor.into()),
            side2: None,
            side1_points: None,
            side2_points: None,
            completed: true,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.side1.is_none() || self.side2.is_none()
    }

    pub fn game_ref(&self) -> GameRef {
        GameRef {
            stage: self.stage.clone(),
            round: self.round,
            side1: self.side1.clone(),
            side2: self.side2.clone(),
        }
    }
}

/// Identifies a game in error messages and reports
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameRef {
    pub stage: String,
    pub round: u32,
    pub side1: Option<CompetitorId>,
    pub side2: Option<CompetitorId>,
}

impl fmt::Display for GameRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |s: &Option<CompetitorId>| match s {
            Some(id) => id.to_string(),
            None => "(bye)".to_string(),
        };
        write!(
            f,
            "{} round {}: {} vs {}",
            self.stage,
            self.round,
            side(&self.side1),
            side(&self.side2)
        )
    }
}

/// A validated, decided game between two competitors
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub round: u32,
    pub side1: CompetitorId,
    pub side2: CompetitorId,
    pub side1_points: u64,
    pub side2_points: u64,
}

impl GameRecord {
    pub fn winner(&self) -> &CompetitorId {
        if self.side1_points > self.side2_points {
            &self.side1
        } else {
            &self.side2
        }
    }

    pub fn involves(&self, id: &CompetitorId) -> bool {
        &self.side1 == id || &self.side2 == id
    }

    /// Other side of the game, if `id` played in it
    pub fn opponent_of(&self, id: &CompetitorId) -> Option<&CompetitorId> {
        if &self.side1 == id {
            Some(&self.side2)
        } else if &self.side2 == id {
            Some(&self.side1)
        } else {
            None
        }
    }

    /// `(own, opponent)` points for `id`, if it played
    pub fn points_for(&self, id: &CompetitorId) -> Option<(u64, u64)> {
        if &self.side1 == id {
            Some((self.side1_points, self.side2_points))
        } else if &self.side2 == id {
            Some((self.side2_points, self.side1_points))
        } else {
            None
        }
    }
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R{} {} {}-{} {}",
            self.round, self.side1, self.side1_points, self.side2_points, self.side2
        )
    }
}
