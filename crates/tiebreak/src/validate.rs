//! Input validation: turns raw stage games into decided game records

use std::collections::HashSet;

use standings_core::{Competitor, CompetitorId, Game, GameRecord, GameRef};

use crate::error::GameSetError;

/// Largest point total a single side may score in one game; keeps stage
/// tallies well inside `u64`
pub const MAX_GAME_POINTS: u64 = u32::MAX as u64;

/// A stage's games after validation
#[derive(Debug, Clone, Default)]
pub struct ValidatedGames {
    /// Completed, scored games between two competitors
    pub decided: Vec<GameRecord>,
    /// Games still awaiting a final score
    pub unfinished: Vec<GameRef>,
    pub byes: usize,
}

/// Check a stage's roster and games.
///
/// Byes are counted but never tallied. Unfinished games are returned
/// separately so the caller can decide whether a partial ranking is acceptable.
pub fn validate_stage(
    stage: &str,
    roster: &[Competitor],
    games: &[Game],
    game_points: Option<u64>,
) -> Result<ValidatedGames, GameSetError> {
    let mut known = HashSet::new();
    for competitor in roster {
        if !known.insert(&competitor.id) {
            return Err(GameSetError::DuplicateCompetitor(competitor.id.clone()));
        }
    }

    let mut validated = ValidatedGames::default();
    let mut seen: HashSet<(u32, CompetitorId, CompetitorId)> = HashSet::new();

    for game in games {
        if game.stage != stage {
            return Err(GameSetError::WrongStage {
                game: game.game_ref(),
                expected: stage.to_string(),
            });
        }

        for side in [&game.side1, &game.side2].into_iter().flatten() {
            if !known.contains(side) {
                return Err(GameSetError::UnknownCompetitor {
                    game: game.game_ref(),
                    competitor: side.clone(),
                });
            }
        }

        let (side1, side2) = match (&game.side1, &game.side2) {
            (Some(side1), Some(side2)) => (side1, side2),
            (None, None) => return Err(GameSetError::DoubleBye { game: game.game_ref() }),
            _ => {
                validated.byes += 1;
                continue;
            }
        };

        if side1 == side2 {
            return Err(GameSetError::SelfPlay { game: game.game_ref() });
        }

        let pair = if side1 < side2 {
            (game.round, side1.clone(), side2.clone())
        } else {
            (game.round, side2.clone(), side1.clone())
        };
        if !seen.insert(pair) {
            return Err(GameSetError::DuplicateGame { game: game.game_ref() });
        }

        if !game.completed {
            validated.unfinished.push(game.game_ref());
            continue;
        }

        let record = GameRecord {
            round: game.round,
            side1: side1.clone(),
            side2: side2.clone(),
            side1_points: checked_points(game, game.side1_points)?,
            side2_points: checked_points(game, game.side2_points)?,
        };
        check_result(game, &record, game_points)?;
        validated.decided.push(record);
    }

    Ok(validated)
}

fn checked_points(game: &Game, points: Option<i64>) -> Result<u64, GameSetError> {
    let points = points.ok_or_else(|| GameSetError::MissingPoints { game: game.game_ref() })?;
    let points = u64::try_from(points).map_err(|_| GameSetError::NegativePoints {
        game: game.game_ref(),
        points,
    })?;
    if points > MAX_GAME_POINTS {
        return Err(GameSetError::PointsOutOfRange {
            game: game.game_ref(),
            points,
            max: MAX_GAME_POINTS,
        });
    }
    Ok(points)
}

fn check_result(
    game: &Game,
    record: &GameRecord,
    game_points: Option<u64>,
) -> Result<(), GameSetError> {
    if record.side1_points == record.side2_points {
        return Err(GameSetError::DrawnGame {
            game: game.game_ref(),
            points: record.side1_points,
        });
    }
    if let Some(expected) = game_points {
        let winner_points = record.side1_points.max(record.side2_points);
        if winner_points != expected {
            return Err(GameSetError::GamePoints {
                game: game.game_ref(),
                winner_points,
                expected,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod validate_tests;
