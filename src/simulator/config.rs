//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Banner key to draw on
    pub banner: String,

    /// Draws per run
    pub pulls: u32,

    /// Number of simulation runs to perform
    pub runs: u32,

    /// Random seed for reproducibility; run `n` uses `seed + n`
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            banner: "shia".to_string(),
            pulls: 10_000,
            runs: 1,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Quick config for one banner with the default budget.
    pub fn for_banner(banner: impl Into<String>) -> Self {
        Self {
            banner: banner.into(),
            ..Default::default()
        }
    }
}
