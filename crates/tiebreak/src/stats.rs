//! Per-competitor and pairwise tallies for a stage

use std::collections::BTreeMap;

use standings_core::{Competitor, CompetitorId, GameRecord, PairwiseRecord, StatLine};

/// Head-to-head records for every ordered pair that met in the stage
#[derive(Debug, Clone, Default)]
pub struct HeadToHead {
    records: BTreeMap<(CompetitorId, CompetitorId), PairwiseRecord>,
    /// Indices into the stage's game list, keyed by unordered pair
    games: BTreeMap<(CompetitorId, CompetitorId), Vec<usize>>,
}

fn unordered(a: &CompetitorId, b: &CompetitorId) -> (CompetitorId, CompetitorId) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

impl HeadToHead {
    fn add(&mut self, index: usize, game: &GameRecord) {
        let (a, b) = (&game.side1, &game.side2);
        self.records
            .entry((a.clone(), b.clone()))
            .or_default()
            .record(game.side1_points, game.side2_points);
        self.records
            .entry((b.clone(), a.clone()))
            .or_default()
            .record(game.side2_points, game.side1_points);
        self.games.entry(unordered(a, b)).or_default().push(index);
    }

    /// Record of `a` against `b` (empty if they never met)
    pub fn record(&self, a: &CompetitorId, b: &CompetitorId) -> PairwiseRecord {
        self.records
            .get(&(a.clone(), b.clone()))
            .copied()
            .unwrap_or_default()
    }

    /// `a` holds a winning record against `b`
    pub fn beats(&self, a: &CompetitorId, b: &CompetitorId) -> bool {
        self.record(a, b).is_winning()
    }

    /// Indices of the games between `a` and `b`
    pub fn game_indices(&self, a: &CompetitorId, b: &CompetitorId) -> &[usize] {
        self.games
            .get(&unordered(a, b))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Tally of `member` restricted to games against the other `group` members
    pub fn restricted_line(&self, member: &CompetitorId, group: &[CompetitorId]) -> StatLine {
        let mut line = StatLine::default();
        for other in group.iter().filter(|other| *other != member) {
            line.absorb(&self.record(member, other));
        }
        line
    }
}

/// Everything derived from a stage's decided games
#[derive(Debug, Clone, Default)]
pub struct StageStats {
    pub lines: BTreeMap<CompetitorId, StatLine>,
    pub head_to_head: HeadToHead,
    pub games: Vec<GameRecord>,
}

impl StageStats {
    /// Reduce decided games to stat lines and pairwise records.
    ///
    /// Every roster competitor gets a line, including those with no games.
    pub fn aggregate(roster: &[Competitor], games: &[GameRecord]) -> Self {
        let mut stats = Self {
            lines: roster
                .iter()
                .map(|competitor| (competitor.id.clone(), StatLine::default()))
                .collect(),
            head_to_head: HeadToHead::default(),
            games: games.to_vec(),
        };

        for (index, game) in games.iter().enumerate() {
            stats
                .lines
                .entry(game.side1.clone())
                .or_default()
                .record(game.side1_points, game.side2_points);
            stats
                .lines
                .entry(game.side2.clone())
                .or_default()
                .record(game.side2_points, game.side1_points);
            stats.head_to_head.add(index, game);
        }

        stats
    }

    pub fn line(&self, id: &CompetitorId) -> StatLine {
        self.lines.get(id).copied().unwrap_or_default()
    }

    /// Games between `a` and `b`, in stage order
    pub fn games_between(&self, a: &CompetitorId, b: &CompetitorId) -> Vec<GameRecord> {
        self.head_to_head
            .game_indices(a, b)
            .iter()
            .map(|&index| self.games[index].clone())
            .collect()
    }

    /// Games played among `members`, in stage order
    pub fn games_among(&self, members: &[CompetitorId]) -> Vec<GameRecord> {
        self.games
            .iter()
            .filter(|game| members.contains(&game.side1) && members.contains(&game.side2))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;
