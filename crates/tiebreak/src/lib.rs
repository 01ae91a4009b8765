//! Tie-breaking ranking engine for round-robin and seeding stages
//!
//! This crate provides:
//! - Validation of a stage's roster and game results
//! - Win-percentage cohorts with a configurable tie-break cascade
//! - Cyclic win group detection and a head-to-head elevation pass
//! - A per-cohort tie-breaker report, as data or text
//!
//! # Usage
//!
//! ```bash
//! # Rank a round-robin stage, W-L factor on
//! cargo run -p tiebreak -- rank stage.json --wl-factor
//!
//! # Seeding round, text report
//! cargo run -p tiebreak -- report seed.json --scope seeding
//! ```

mod cohort;
mod config;
mod elevator;
mod elo_graph;
mod engine;
mod error;
mod report;
mod resolver;
mod stage;
mod stats;
mod validate;

#[cfg(test)]
mod test_support;

pub use cohort::*;
pub use config::*;
pub use elevator::*;
pub use elo_graph::*;
pub use engine::*;
pub use error::*;
pub use report::*;
pub use resolver::*;
pub use stage::*;
pub use stats::*;
pub use validate::*;
