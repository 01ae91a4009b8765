//! Shared fixtures for unit tests

use standings_core::{Competitor, CompetitorId, GameRecord};

use crate::stats::StageStats;

pub fn ids(names: &[&str]) -> Vec<CompetitorId> {
    names.iter().map(|name| CompetitorId::new(*name)).collect()
}

pub fn roster(names: &[&str]) -> Vec<Competitor> {
    names
        .iter()
        .map(|name| Competitor::new(*name, name.to_uppercase()))
        .collect()
}

/// `(side1, side2, side1_points, side2_points)`, one round per game
pub fn records(games: &[(&str, &str, u64, u64)]) -> Vec<GameRecord> {
    games
        .iter()
        .enumerate()
        .map(|(i, &(a, b, pa, pb))| GameRecord {
            round: i as u32 + 1,
            side1: a.into(),
            side2: b.into(),
            side1_points: pa,
            side2_points: pb,
        })
        .collect()
}

pub fn stats(names: &[&str], games: &[(&str, &str, u64, u64)]) -> StageStats {
    StageStats::aggregate(&roster(names), &records(games))
}
