//! Ranking a stage: validation, cohorts, cascade, elevation and reports

use serde::Serialize;
use standings_core::{Competitor, CompetitorId, Game, GameRef, Ratio, StatLine};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

use crate::cohort::{build_cohorts, Cohort};
use crate::config::{CohortScope, RankingConfig};
use crate::elevator::{ElevationMove, ElevationScope, RankElevator};
use crate::elo_graph::{CyclicWinGroup, EloGraphAnalyzer};
use crate::error::RankingError;
use crate::report::{ReportBuilder, TieBreakReport};
use crate::resolver::{DecidedBy, Resolution, TieBreakResolver};
use crate::stats::StageStats;
use crate::validate::validate_stage;

/// One line of the final standings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub competitor: Competitor,
    /// 1-based rank within the competitor's partition
    pub rank: u32,
    /// First rank of the competitor's win-percentage cohort
    pub position: u32,
    /// Shared its win percentage with someone else
    pub tied: bool,
    pub division: Option<u32>,
    pub stats: StatLine,
    pub win_pct: Option<Ratio>,
    pub points_pct: Option<Ratio>,
    pub decided_by: DecidedBy,
}

/// Final order plus the tie-breaker report for a stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standings {
    pub stage: String,
    pub scope: CohortScope,
    /// Ranked with games still unfinished
    pub partial: bool,
    pub unfinished: Vec<GameRef>,
    pub ranked: Vec<RankedEntry>,
    pub reports: Vec<TieBreakReport>,
}

impl Standings {
    pub fn entry(&self, id: &CompetitorId) -> Option<&RankedEntry> {
        self.ranked.iter().find(|entry| &entry.competitor.id == id)
    }

    /// Identifiers in standings order
    pub fn order(&self) -> Vec<CompetitorId> {
        self.ranked
            .iter()
            .map(|entry| entry.competitor.id.clone())
            .collect()
    }

    pub fn residual_tie(&self) -> bool {
        self.reports.iter().any(|report| report.residual_tie)
    }

    pub fn elevations(&self) -> Vec<&ElevationMove> {
        let mut seen = Vec::new();
        for report in &self.reports {
            for elevation in &report.elevations {
                if !seen.contains(&elevation) {
                    seen.push(elevation);
                }
            }
        }
        seen
    }
}

/// Rank every competitor on `roster` from the stage's games.
///
/// Pure and deterministic: the same roster, games and config always produce
/// the same standings and report.
///
/// When divisions are in use each division is ranked on its own and the
/// output lists them in ascending order. Competitors without a division form
/// their own partition, listed before every numbered division.
pub fn rank_stage(
    stage: &str,
    roster: &[Competitor],
    games: &[Game],
    config: &RankingConfig,
) -> Result<Standings, RankingError> {
    let validated = validate_stage(stage, roster, games, config.game_points)?;
    if !validated.unfinished.is_empty() {
        if config.require_complete {
            return Err(RankingError::IncompleteStage {
                stage: stage.to_string(),
                unfinished: validated.unfinished,
            });
        }
        warn!(
            stage,
            unfinished = validated.unfinished.len(),
            "ranking a stage with unfinished games"
        );
    }

    let stats = StageStats::aggregate(roster, &validated.decided);
    let resolver = TieBreakResolver::new(config.criteria(), &config.fallback_seed);

    // `None` sorts first, so undivided competitors lead the output
    let mut partitions: BTreeMap<Option<u32>, Vec<&Competitor>> = BTreeMap::new();
    for competitor in roster {
        let key = if config.uses_divisions() {
            competitor.division
        } else {
            None
        };
        partitions.entry(key).or_default().push(competitor);
    }

    let mut standings = Standings {
        stage: stage.to_string(),
        scope: config.cohort_scope,
        partial: !validated.unfinished.is_empty(),
        unfinished: validated.unfinished,
        ranked: Vec::new(),
        reports: Vec::new(),
    };

    for (division, members) in &partitions {
        let (ranked, reports) = rank_partition(*division, members, &stats, &resolver, config);
        standings.ranked.extend(ranked);
        standings.reports.extend(reports);
    }

    info!(
        stage,
        competitors = roster.len(),
        games = validated.decided.len(),
        byes = validated.byes,
        cohorts = standings.reports.len(),
        residual_tie = standings.residual_tie(),
        "ranked stage"
    );
    Ok(standings)
}

fn rank_partition(
    division: Option<u32>,
    members: &[&Competitor],
    stats: &StageStats,
    resolver: &TieBreakResolver,
    config: &RankingConfig,
) -> (Vec<RankedEntry>, Vec<TieBreakReport>) {
    let ids: Vec<CompetitorId> = members.iter().map(|c| c.id.clone()).collect();
    let cohorts = build_cohorts(&ids, stats);
    let resolutions: Vec<Resolution> = cohorts
        .iter()
        .map(|cohort| resolver.resolve(cohort, stats))
        .collect();
    debug!(?division, cohorts = cohorts.len(), "resolved cohorts");

    let mut order: Vec<CompetitorId> = resolutions
        .iter()
        .flat_map(|resolution| resolution.order.iter().cloned())
        .collect();

    let groups = cyclic_groups(&cohorts, &ids, stats, config.elevation_scope);
    let moves = if config.elevation_enabled() {
        let tiers: HashMap<CompetitorId, usize> = cohorts
            .iter()
            .enumerate()
            .flat_map(|(tier, cohort)| cohort.members.iter().map(move |id| (id.clone(), tier)))
            .collect();
        RankElevator::new(stats, &groups, config.elevation_scope, tiers).elevate(&mut order)
    } else {
        Vec::new()
    };

    let mut decided_by: HashMap<&CompetitorId, DecidedBy> = resolutions
        .iter()
        .flat_map(|resolution| resolution.decided_by.iter().map(|(id, d)| (id, *d)))
        .collect();
    for elevation in &moves {
        decided_by.insert(&elevation.competitor, DecidedBy::Elevation);
    }

    let by_id: HashMap<&CompetitorId, &Competitor> =
        members.iter().map(|c| (&c.id, *c)).collect();
    let cohort_of: HashMap<&CompetitorId, &Cohort> = cohorts
        .iter()
        .flat_map(|cohort| cohort.members.iter().map(move |id| (id, cohort)))
        .collect();

    let ranked = order
        .iter()
        .enumerate()
        .filter_map(|(i, id)| {
            let competitor = by_id.get(id)?;
            let cohort = cohort_of.get(id)?;
            let line = stats.line(id);
            Some(RankedEntry {
                competitor: (*competitor).clone(),
                rank: i as u32 + 1,
                position: cohort.position,
                tied: cohort.len() > 1,
                division,
                stats: line,
                win_pct: line.win_pct(),
                points_pct: line.points_pct(),
                decided_by: decided_by.get(id).copied().unwrap_or(DecidedBy::WinPct),
            })
        })
        .collect();

    let builder = ReportBuilder::new(stats, division);
    let reports = cohorts
        .iter()
        .zip(&resolutions)
        .map(|(cohort, resolution)| builder.build(cohort, resolution, &groups, &moves, &order))
        .collect();

    (ranked, reports)
}

/// Cyclic win groups the elevation pass must respect: per cohort, or over the
/// whole partition when elevation may cross cohorts
fn cyclic_groups(
    cohorts: &[Cohort],
    partition: &[CompetitorId],
    stats: &StageStats,
    scope: ElevationScope,
) -> Vec<CyclicWinGroup> {
    match scope {
        ElevationScope::Cohort => cohorts
            .iter()
            .filter(|cohort| cohort.len() >= 3)
            .flat_map(|cohort| {
                EloGraphAnalyzer::new(&cohort.members, &stats.head_to_head).cyclic_groups()
            })
            .collect(),
        ElevationScope::Stage => {
            EloGraphAnalyzer::new(partition, &stats.head_to_head).cyclic_groups()
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
