//! Tie-breaker report: per-cohort breakdown of how the final order came about

use serde::Serialize;
use standings_core::{fmt_pct, CompetitorId, GameRecord, Ratio, StatLine};

use crate::cohort::Cohort;
use crate::elevator::ElevationMove;
use crate::elo_graph::CyclicWinGroup;
use crate::engine::Standings;
use crate::resolver::{CascadeStep, Resolution};
use crate::stats::StageStats;

/// A cohort member's record against the rest of the cohort
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRecord {
    pub competitor: CompetitorId,
    pub head_to_head: StatLine,
}

/// Breakdown for one win-percentage cohort
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TieBreakReport {
    pub division: Option<u32>,
    pub position: u32,
    pub win_pct: Option<Ratio>,
    /// Members before the cascade
    pub initial_order: Vec<CompetitorId>,
    pub cascade: Vec<CascadeStep>,
    pub cyclic_groups: Vec<CyclicWinGroup>,
    /// Elevation moves involving a member
    pub elevations: Vec<ElevationMove>,
    /// Members in final standings order
    pub final_order: Vec<CompetitorId>,
    /// Games played among the members
    pub games: Vec<GameRecord>,
    pub member_records: Vec<MemberRecord>,
    /// Members no criterion could separate
    pub residual_groups: Vec<Vec<CompetitorId>>,
    pub residual_tie: bool,
}

impl TieBreakReport {
    pub fn is_tie(&self) -> bool {
        self.initial_order.len() > 1
    }
}

/// Assembles reports from the intermediate results of one partition
pub struct ReportBuilder<'a> {
    stats: &'a StageStats,
    division: Option<u32>,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(stats: &'a StageStats, division: Option<u32>) -> Self {
        Self { stats, division }
    }

    /// `groups` and `moves` may cover more than this cohort; only the parts
    /// touching its members are kept. `final_order` is the whole partition.
    pub fn build(
        &self,
        cohort: &Cohort,
        resolution: &Resolution,
        groups: &[CyclicWinGroup],
        moves: &[ElevationMove],
        final_order: &[CompetitorId],
    ) -> TieBreakReport {
        let member_records = cohort
            .members
            .iter()
            .map(|id| MemberRecord {
                competitor: id.clone(),
                head_to_head: self.stats.head_to_head.restricted_line(id, &cohort.members),
            })
            .collect();

        TieBreakReport {
            division: self.division,
            position: cohort.position,
            win_pct: cohort.win_pct,
            initial_order: cohort.members.clone(),
            cascade: resolution.steps.clone(),
            cyclic_groups: groups
                .iter()
                .filter(|group| cohort.members.iter().any(|id| group.contains(id)))
                .cloned()
                .collect(),
            elevations: moves
                .iter()
                .filter(|m| cohort.contains(&m.competitor) || cohort.contains(&m.passed))
                .cloned()
                .collect(),
            final_order: final_order
                .iter()
                .filter(|id| cohort.contains(id))
                .cloned()
                .collect(),
            games: self.stats.games_among(&cohort.members),
            member_records,
            residual_groups: resolution.residual_groups.clone(),
            residual_tie: resolution.residual_tie(),
        }
    }
}

fn join(ids: &[CompetitorId]) -> String {
    ids.iter()
        .map(CompetitorId::to_string)
        .collect::<Vec<_>>()
        .join(" - ")
}

/// Text rendering of the standings and the tie-breaker report
pub fn render_text(standings: &Standings) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Standings: {} ===\n", standings.stage));
    if standings.partial {
        out.push_str(&format!(
            "(partial: {} unfinished game(s))\n",
            standings.unfinished.len()
        ));
    }
    out.push('\n');
    out.push_str(&render_table(standings));

    let ties: Vec<&TieBreakReport> = standings.reports.iter().filter(|r| r.is_tie()).collect();
    if ties.is_empty() {
        return out;
    }

    out.push_str("\n=== Tie-Breaker Report ===\n");
    for report in ties {
        out.push('\n');
        out.push_str(&render_cohort(report));
    }
    out
}

fn render_table(standings: &Standings) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>4} {:>5} {:<24} {:>4} {:>7} {:>9} {:>8}  {}\n",
        "Rank", "Pos", "Competitor", "Div", "W-L", "Win %", "Pts %", "Decided by"
    ));
    out.push_str(&"-".repeat(90));
    out.push('\n');

    for entry in &standings.ranked {
        let pos = if entry.tied {
            format!("{}*", entry.position)
        } else {
            entry.position.to_string()
        };
        let division = entry
            .division
            .map(|d| d.to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "{:>4} {:>5} {:<24} {:>4} {:>7} {:>9} {:>8}  {}\n",
            entry.rank,
            pos,
            entry.competitor.name,
            division,
            entry.stats.win_record(),
            fmt_pct(entry.win_pct),
            fmt_pct(entry.points_pct),
            entry.decided_by
        ));
    }
    out
}

fn render_cohort(report: &TieBreakReport) -> String {
    let mut out = String::new();
    let division = report
        .division
        .map(|d| format!("Division {}, ", d))
        .unwrap_or_default();
    out.push_str(&format!(
        "--- {}Position {} (Win Pct: {}) ---\n",
        division,
        report.position,
        fmt_pct(report.win_pct)
    ));
    out.push_str(&format!("Cohort: {}\n", join(&report.initial_order)));

    for record in &report.member_records {
        out.push_str(&format!(
            "  {:<20} h2h {:>5}  pts {:>7}\n",
            record.competitor.as_str(),
            record.head_to_head.win_record(),
            record.head_to_head.points_record()
        ));
    }

    if !report.games.is_empty() {
        out.push_str("Games:\n");
        for game in &report.games {
            out.push_str(&format!("  {}\n", game));
        }
    }

    for step in &report.cascade {
        let values: Vec<String> = step
            .values
            .iter()
            .map(|(id, value)| format!("{} {}", id, value))
            .collect();
        let splits: Vec<String> = step.splits.iter().map(|split| join(split)).collect();
        out.push_str(&format!(
            "{}: {} => {}\n",
            step.criterion,
            values.join(", "),
            splits.join(" | ")
        ));
    }

    for group in &report.cyclic_groups {
        let members: Vec<CompetitorId> = group.members.iter().cloned().collect();
        out.push_str(&format!("Cyclic win group: {}\n", join(&members)));
    }

    for elevation in &report.elevations {
        let games: Vec<String> = elevation.games.iter().map(|g| g.to_string()).collect();
        out.push_str(&format!(
            "Elevated {} above {} ({} -> {}): {}\n",
            elevation.competitor,
            elevation.passed,
            elevation.from_rank,
            elevation.to_rank,
            games.join("; ")
        ));
    }

    for group in &report.residual_groups {
        out.push_str(&format!("Residual tie (coin flip): {}\n", join(group)));
    }

    out.push_str(&format!("Final: {}\n", join(&report.final_order)));
    out
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
