//! Bottom-up head-to-head elevation pass over a provisional order

use serde::{Deserialize, Serialize};
use standings_core::{CompetitorId, GameRecord};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::elo_graph::{share_group, CyclicWinGroup};
use crate::stats::StageStats;

/// How far a competitor may be elevated.
///
/// The default, `Cohort`, never moves anyone past a better win percentage.
/// Callers that want stage-wide moves, where any head-to-head win over a
/// competitor ranked above counts, must set `elevation_scope = "stage"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElevationScope {
    /// Only past members of the same win-percentage cohort
    #[default]
    Cohort,
    /// Past anyone ranked above in the same partition
    Stage,
}

/// A competitor moved directly above an opponent it holds a winning record against
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElevationMove {
    pub competitor: CompetitorId,
    /// Highest-ranked competitor it beat that was ranked above it
    pub passed: CompetitorId,
    /// 1-based ranks before and after the move
    pub from_rank: u32,
    pub to_rank: u32,
    /// Games between the two that justify the move
    pub games: Vec<GameRecord>,
}

/// Corrects a provisional order so nobody stays below an opponent they beat
/// head-to-head, unless both sit in a common cyclic win group.
pub struct RankElevator<'a> {
    stats: &'a StageStats,
    groups: &'a [CyclicWinGroup],
    scope: ElevationScope,
    /// Cohort index of each competitor, for cohort-scoped moves
    tiers: HashMap<CompetitorId, usize>,
}

impl<'a> RankElevator<'a> {
    pub fn new(
        stats: &'a StageStats,
        groups: &'a [CyclicWinGroup],
        scope: ElevationScope,
        tiers: HashMap<CompetitorId, usize>,
    ) -> Self {
        Self {
            stats,
            groups,
            scope,
            tiers,
        }
    }

    /// `competitor` may be moved above `above`
    pub fn may_pass(&self, competitor: &CompetitorId, above: &CompetitorId) -> bool {
        if self.scope == ElevationScope::Cohort
            && self.tiers.get(competitor) != self.tiers.get(above)
        {
            return false;
        }
        self.stats.head_to_head.beats(competitor, above)
            && !share_group(self.groups, competitor, above)
    }

    /// Run the pass in place and return the moves made.
    ///
    /// The scan starts at the bottom. When the competitor under the cursor beat
    /// someone above it, it is moved directly above the highest such opponent
    /// and the cursor stays put, now on the competitor that was just above it.
    /// Positions below the cursor are final, so a second pass makes no moves.
    pub fn elevate(&self, order: &mut Vec<CompetitorId>) -> Vec<ElevationMove> {
        let n = order.len();
        let max_moves = n * n * n;
        let mut moves = Vec::new();
        let mut cursor = n.saturating_sub(1);

        while cursor > 0 {
            let target = (0..cursor).find(|&j| self.may_pass(&order[cursor], &order[j]));
            let Some(target) = target else {
                cursor -= 1;
                continue;
            };
            if moves.len() >= max_moves {
                warn!(moves = moves.len(), "elevation pass hit its move bound, stopping");
                break;
            }

            let competitor = order.remove(cursor);
            let passed = order[target].clone();
            debug!(
                %competitor,
                %passed,
                from = cursor + 1,
                to = target + 1,
                "elevating competitor above head-to-head loser"
            );
            moves.push(ElevationMove {
                games: self.stats.games_between(&competitor, &passed),
                competitor: competitor.clone(),
                passed,
                from_rank: cursor as u32 + 1,
                to_rank: target as u32 + 1,
            });
            order.insert(target, competitor);
        }

        moves
    }
}

#[cfg(test)]
#[path = "elevator_tests.rs"]
mod elevator_tests;
