//! Win/loss and points tallies

use serde::Serialize;

use crate::ratio::Ratio;

/// Value the W-L factor takes for a competitor with no decided games
pub const WL_FACTOR_NO_GAMES: i64 = -1;

/// Per-competitor tally over some set of games
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub wins: u32,
    pub losses: u32,
    pub points_for: u64,
    pub points_against: u64,
}

impl StatLine {
    /// Tally one decided game from this competitor's side
    pub fn record(&mut self, own_points: u64, opp_points: u64) {
        if own_points > opp_points {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.points_for += own_points;
        self.points_against += opp_points;
    }

    pub fn absorb(&mut self, pairwise: &PairwiseRecord) {
        self.wins += pairwise.wins;
        self.losses += pairwise.losses();
        self.points_for += pairwise.points_for;
        self.points_against += pairwise.points_against;
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }

    /// wins / games, undefined for zero games
    pub fn win_pct(&self) -> Option<Ratio> {
        Ratio::new(self.wins as u64, self.games() as u64)
    }

    /// points-for / total points, undefined for zero points
    pub fn points_pct(&self) -> Option<Ratio> {
        Ratio::new(self.points_for, self.points_for + self.points_against)
    }

    pub fn points_diff(&self) -> i64 {
        self.points_for as i64 - self.points_against as i64
    }

    /// wins - losses, with an 0-0 record pinned below an even split
    pub fn wl_factor(&self) -> i64 {
        if self.games() == 0 {
            WL_FACTOR_NO_GAMES
        } else {
            self.wins as i64 - self.losses as i64
        }
    }

    /// `"W-L"` record string
    pub fn win_record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }

    /// `"PF-PA"` record string
    pub fn points_record(&self) -> String {
        format!("{}-{}", self.points_for, self.points_against)
    }
}

/// Head-to-head tally of competitor A against competitor B
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PairwiseRecord {
    pub games: u32,
    pub wins: u32,
    pub points_for: u64,
    pub points_against: u64,
}

impl PairwiseRecord {
    pub fn record(&mut self, own_points: u64, opp_points: u64) {
        self.games += 1;
        if own_points > opp_points {
            self.wins += 1;
        }
        self.points_for += own_points;
        self.points_against += opp_points;
    }

    pub fn losses(&self) -> u32 {
        self.games - self.wins
    }

    /// A winning record: more wins than losses against the opponent
    pub fn is_winning(&self) -> bool {
        self.wins > self.losses()
    }
}

#[cfg(test)]
#[path = "stat_line_tests.rs"]
mod stat_line_tests;
