//! Banner configuration: what a banner draws from and which items it features.

pub mod presets;
pub mod types;

pub use presets::BannerSet;
pub use types::{BannerConfig, Featured, ScopeKey};
