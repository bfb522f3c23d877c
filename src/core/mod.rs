//! Draw rules: constants and the configurable rule set built from them.

pub mod config;
pub mod constants;

pub use config::GachaRules;
pub use constants::*;
