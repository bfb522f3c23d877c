//! Headless draw simulator for Monte Carlo analysis of banner odds.
//!
//! Runs thousands of draws on a banner through the same engine interactive
//! draws use, then reports observed tier rates and pity activity.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::run_simulation;
