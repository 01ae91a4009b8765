//! Tie-break CLI
//!
//! Rank a stage file, print its tie-breaker report, or check it for errors.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tiebreak::{render_text, CohortScope, RankingConfig, StageInput};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "tiebreak")]
#[command(about = "Rank a stage and explain how its ties were broken")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the final standings
    Rank(RankArgs),
    /// Print the standings with the tie-breaker report
    Report(RankArgs),
    /// Check a stage file without ranking it
    Validate {
        /// Stage file (JSON)
        stage_file: PathBuf,
        /// Score a game's winner must reach
        #[arg(long)]
        game_points: Option<u64>,
    },
}

#[derive(Args, Debug)]
struct RankArgs {
    /// Stage file (JSON)
    stage_file: PathBuf,

    /// Ranking config (TOML)
    #[arg(short, long, env = "TIEBREAK_CONFIG")]
    config: Option<PathBuf>,

    /// Break win-percentage ties on wins minus losses first
    #[arg(long)]
    wl_factor: bool,

    /// Seed for the residual-tie coin flip
    #[arg(long)]
    seed: Option<String>,

    /// seeding or round-robin
    #[arg(long)]
    scope: Option<CohortScope>,

    /// Fail if any game is unfinished
    #[arg(long)]
    require_complete: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl RankArgs {
    fn ranking_config(&self) -> Result<RankingConfig> {
        let mut config = match &self.config {
            Some(path) => RankingConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => RankingConfig::default(),
        };
        if self.wl_factor {
            config.wl_factor = true;
        }
        if let Some(seed) = &self.seed {
            config.fallback_seed = seed.clone();
        }
        if let Some(scope) = self.scope {
            config.cohort_scope = scope;
        }
        if self.require_complete {
            config.require_complete = true;
        }
        Ok(config)
    }
}

fn load_stage(path: &Path) -> Result<StageInput> {
    StageInput::load(path).with_context(|| format!("loading stage file {}", path.display()))
}

fn rank(args: &RankArgs, with_report: bool) -> Result<()> {
    let config = args.ranking_config()?;
    let input = load_stage(&args.stage_file)?;
    let standings = input
        .rank(&config)
        .with_context(|| format!("ranking stage {}", input.stage))?;

    if args.json {
        let json = if with_report {
            serde_json::to_string_pretty(&standings)?
        } else {
            serde_json::to_string_pretty(&standings.ranked)?
        };
        println!("{}", json);
    } else if with_report {
        print!("{}", render_text(&standings));
    } else {
        for entry in &standings.ranked {
            let pos = if entry.tied {
                format!("{}*", entry.position)
            } else {
                entry.position.to_string()
            };
            println!(
                "{:>4} {:>5} {:<24} {:>7}  {}",
                entry.rank,
                pos,
                entry.competitor.name,
                entry.stats.win_record(),
                entry.decided_by
            );
        }
    }
    Ok(())
}

fn validate(stage_file: &Path, game_points: Option<u64>) -> Result<()> {
    let input = load_stage(stage_file)?;
    let validated = input
        .validate(game_points)
        .with_context(|| format!("validating stage {}", input.stage))?;
    println!(
        "{}: {} competitors, {} decided games, {} byes, {} unfinished",
        input.stage,
        input.competitors.len(),
        validated.decided.len(),
        validated.byes,
        validated.unfinished.len()
    );
    for game in &validated.unfinished {
        println!("  unfinished: {}", game);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!(command = ?cli.command, "starting tiebreak");

    match &cli.command {
        Command::Rank(args) => rank(args, false),
        Command::Report(args) => rank(args, true),
        Command::Validate {
            stage_file,
            game_points,
        } => validate(stage_file, *game_points),
    }
}
