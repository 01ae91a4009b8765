//! Cascading tie-break resolution inside a win-percentage cohort

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use standings_core::{CompetitorId, Ratio};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::cohort::Cohort;
use crate::stats::StageStats;

/// A tie-break criterion applied inside a cohort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Wins minus losses over the whole stage (-1 for 0-0)
    WlFactor,
    /// Win percentage in games among cohort members
    HeadToHeadWinPct,
    /// Points percentage in games among cohort members
    HeadToHeadPointsPct,
    /// Points percentage over the whole stage
    PointsPct,
    /// Points for minus points against over the whole stage
    PointsDiff,
}

impl Criterion {
    /// Computed only from games among cohort members
    pub fn is_head_to_head(&self) -> bool {
        matches!(
            self,
            Criterion::HeadToHeadWinPct | Criterion::HeadToHeadPointsPct
        )
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Criterion::WlFactor => "W-L factor",
            Criterion::HeadToHeadWinPct => "head-to-head win pct",
            Criterion::HeadToHeadPointsPct => "head-to-head points pct",
            Criterion::PointsPct => "points pct",
            Criterion::PointsDiff => "points differential",
        };
        f.write_str(label)
    }
}

/// What fixed a competitor's final position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecidedBy {
    /// Alone in its win-percentage cohort
    WinPct,
    Cascade(Criterion),
    /// Still tied after every criterion
    CoinFlip,
    /// Moved by the head-to-head elevation pass
    Elevation,
}

impl fmt::Display for DecidedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecidedBy::WinPct => f.write_str("win pct"),
            DecidedBy::Cascade(criterion) => write!(f, "{}", criterion),
            DecidedBy::CoinFlip => f.write_str("coin flip"),
            DecidedBy::Elevation => f.write_str("head-to-head elevation"),
        }
    }
}

/// A criterion's value for one competitor; larger ranks higher
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum CriterionValue {
    Pct(Option<Ratio>),
    Count(i64),
}

impl fmt::Display for CriterionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionValue::Pct(pct) => f.write_str(&standings_core::fmt_pct(*pct)),
            CriterionValue::Count(count) => write!(f, "{}", count),
        }
    }
}

/// One application of a criterion to a still-tied group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeStep {
    pub criterion: Criterion,
    /// Values in the order the group was sorted
    pub values: Vec<(CompetitorId, CriterionValue)>,
    /// Sub-cohorts produced, best first
    pub splits: Vec<Vec<CompetitorId>>,
}

impl CascadeStep {
    /// The criterion separated at least two members
    pub fn resolved_any(&self) -> bool {
        self.splits.len() > 1
    }
}

/// Outcome of resolving one cohort
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub order: Vec<CompetitorId>,
    pub decided_by: BTreeMap<CompetitorId, DecidedBy>,
    pub steps: Vec<CascadeStep>,
    /// Groups no criterion could separate, each sorted by identifier
    pub residual_groups: Vec<Vec<CompetitorId>>,
}

impl Resolution {
    pub fn residual_tie(&self) -> bool {
        !self.residual_groups.is_empty()
    }
}

/// Orders the members of a cohort by a cascade of criteria, falling back to a
/// seeded coin flip
#[derive(Debug, Clone)]
pub struct TieBreakResolver {
    criteria: Vec<Criterion>,
    fallback_seed: String,
}

impl TieBreakResolver {
    pub fn new(criteria: Vec<Criterion>, fallback_seed: &str) -> Self {
        Self {
            criteria,
            fallback_seed: fallback_seed.to_string(),
        }
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn resolve(&self, cohort: &Cohort, stats: &StageStats) -> Resolution {
        let mut resolution = Resolution::default();
        if let [only] = cohort.members.as_slice() {
            resolution.order.push(only.clone());
            resolution.decided_by.insert(only.clone(), DecidedBy::WinPct);
            return resolution;
        }
        resolution.order = self.cascade(&cohort.members, 0, cohort, stats, &mut resolution);
        resolution
    }

    /// Criterion value for `id`, with head-to-head values restricted to the cohort
    pub fn value(
        &self,
        criterion: Criterion,
        id: &CompetitorId,
        cohort: &Cohort,
        stats: &StageStats,
    ) -> CriterionValue {
        match criterion {
            Criterion::WlFactor => CriterionValue::Count(stats.line(id).wl_factor()),
            Criterion::HeadToHeadWinPct => CriterionValue::Pct(
                stats
                    .head_to_head
                    .restricted_line(id, &cohort.members)
                    .win_pct(),
            ),
            Criterion::HeadToHeadPointsPct => CriterionValue::Pct(
                stats
                    .head_to_head
                    .restricted_line(id, &cohort.members)
                    .points_pct(),
            ),
            Criterion::PointsPct => CriterionValue::Pct(stats.line(id).points_pct()),
            Criterion::PointsDiff => CriterionValue::Count(stats.line(id).points_diff()),
        }
    }

    fn cascade(
        &self,
        group: &[CompetitorId],
        depth: usize,
        cohort: &Cohort,
        stats: &StageStats,
        resolution: &mut Resolution,
    ) -> Vec<CompetitorId> {
        if let [only] = group {
            // Depth is at least 1 here: cohorts of one never enter the cascade
            let decided = DecidedBy::Cascade(self.criteria[depth - 1]);
            resolution.decided_by.insert(only.clone(), decided);
            return group.to_vec();
        }

        let Some(&criterion) = self.criteria.get(depth) else {
            let order = coin_flip(&self.fallback_seed, group);
            debug!(
                position = cohort.position,
                tied = ?order,
                "residual tie after {} criteria, applying coin flip",
                self.criteria.len()
            );
            let mut sorted = group.to_vec();
            sorted.sort();
            resolution.residual_groups.push(sorted);
            for id in &order {
                resolution.decided_by.insert(id.clone(), DecidedBy::CoinFlip);
            }
            return order;
        };

        let mut values: Vec<(CompetitorId, CriterionValue)> = group
            .iter()
            .map(|id| (id.clone(), self.value(criterion, id, cohort, stats)))
            .collect();
        values.sort_by(|a, b| b.1.cmp(&a.1));

        let mut splits: Vec<Vec<CompetitorId>> = Vec::new();
        let unmet = values
            .iter()
            .any(|(_, value)| *value == CriterionValue::Pct(None));
        if criterion.is_head_to_head() && unmet {
            // Someone never met the rest of the cohort: head-to-head cannot rank them
            splits.push(group.to_vec());
        } else {
            let mut last: Option<CriterionValue> = None;
            for (id, value) in &values {
                match splits.last_mut() {
                    Some(split) if last == Some(*value) => split.push(id.clone()),
                    _ => splits.push(vec![id.clone()]),
                }
                last = Some(*value);
            }
        }

        debug!(
            position = cohort.position,
            %criterion,
            groups = splits.len(),
            "applied tie-break criterion to {} competitors",
            group.len()
        );
        resolution.steps.push(CascadeStep {
            criterion,
            values,
            splits: splits.clone(),
        });

        splits
            .iter()
            .flat_map(|split| self.cascade(split, depth + 1, cohort, stats, resolution))
            .collect()
    }
}

/// Reproducible shuffle of a tied group.
///
/// The group is sorted by identifier, then shuffled with a `StdRng` seeded from
/// the first 8 bytes of SHA-256 over the seed and the sorted identifiers, so
/// the result depends only on the seed and who is tied.
pub fn coin_flip(seed: &str, group: &[CompetitorId]) -> Vec<CompetitorId> {
    let mut order = group.to_vec();
    order.sort();

    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    for id in &order {
        hasher.update([0u8]);
        hasher.update(id.as_str().as_bytes());
    }
    let digest = hasher.finalize();
    let mut seed_bytes = [0u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);

    let mut rng = StdRng::seed_from_u64(u64::from_le_bytes(seed_bytes));
    order.shuffle(&mut rng);
    order
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod resolver_tests;
