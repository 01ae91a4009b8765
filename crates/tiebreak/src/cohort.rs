//! Grouping competitors into win-percentage cohorts

use serde::Serialize;
use standings_core::{CompetitorId, Ratio};

use crate::stats::StageStats;

/// Competitors sharing a win percentage at a standings position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cohort {
    /// First rank the cohort occupies (1-based); the next cohort starts at
    /// `position + len`
    pub position: u32,
    pub win_pct: Option<Ratio>,
    /// Members in provisional (input) order
    pub members: Vec<CompetitorId>,
}

impl Cohort {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: &CompetitorId) -> bool {
        self.members.contains(id)
    }
}

/// Sort `competitors` by win percentage, best first, and split them into
/// cohorts of equal percentage. Competitors without a decided game come last.
pub fn build_cohorts(competitors: &[CompetitorId], stats: &StageStats) -> Vec<Cohort> {
    let mut sorted: Vec<(CompetitorId, Option<Ratio>)> = competitors
        .iter()
        .map(|id| (id.clone(), stats.line(id).win_pct()))
        .collect();
    // `None` orders below every `Some`, so descending puts undefined last
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    let mut cohorts: Vec<Cohort> = Vec::new();
    let mut position = 1;
    for (id, win_pct) in sorted {
        match cohorts.last_mut() {
            Some(cohort) if cohort.win_pct == win_pct => cohort.members.push(id),
            _ => {
                if let Some(previous) = cohorts.last() {
                    position += previous.len() as u32;
                }
                cohorts.push(Cohort {
                    position,
                    win_pct,
                    members: vec![id],
                });
            }
        }
    }
    cohorts
}

#[cfg(test)]
#[path = "cohort_tests.rs"]
mod cohort_tests;
