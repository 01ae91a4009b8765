//! Error types for ranking a stage

use std::path::PathBuf;

use standings_core::{CompetitorId, GameRef};
use thiserror::Error;

/// Why a game set was rejected. Every variant names the offending game or
/// competitor so the upstream data can be fixed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameSetError {
    #[error("competitor {0} appears more than once in the roster")]
    DuplicateCompetitor(CompetitorId),

    #[error("duplicate game ({game})")]
    DuplicateGame { game: GameRef },

    #[error("game ({game}) references {competitor}, who is not on the roster")]
    UnknownCompetitor { game: GameRef, competitor: CompetitorId },

    #[error("game ({game}) belongs to stage {}, expected {expected}", game.stage)]
    WrongStage { game: GameRef, expected: String },

    #[error("game ({game}) has no competitor on either side")]
    DoubleBye { game: GameRef },

    #[error("game ({game}) pits a competitor against itself")]
    SelfPlay { game: GameRef },

    #[error("completed game ({game}) is missing a point total")]
    MissingPoints { game: GameRef },

    #[error("game ({game}) has a negative point total ({points})")]
    NegativePoints { game: GameRef, points: i64 },

    #[error("game ({game}) has a point total of {points}, above the limit of {max}")]
    PointsOutOfRange { game: GameRef, points: u64, max: u64 },

    #[error("game ({game}) ended in a draw ({points}-{points}), draws are not allowed")]
    DrawnGame { game: GameRef, points: u64 },

    #[error("game ({game}) winner scored {winner_points}, expected {expected}")]
    GamePoints {
        game: GameRef,
        winner_points: u64,
        expected: u64,
    },
}

/// Failure to rank a stage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankingError {
    #[error("invalid game set: {0}")]
    InvalidGameSet(#[from] GameSetError),

    #[error("stage {stage} still has {} unfinished game(s)", unfinished.len())]
    IncompleteStage {
        stage: String,
        unfinished: Vec<GameRef>,
    },
}

/// Failure to load a ranking configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Failure to load or save a stage file
#[derive(Error, Debug)]
pub enum StageFileError {
    #[error("failed to read stage file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write stage file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid stage file JSON: {0}")]
    Json(#[from] serde_json::Error),
}
