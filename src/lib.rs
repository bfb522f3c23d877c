//! Recruit - offline gacha draw engine.
//!
//! Builds weighted draw pools from banner configurations, draws from them
//! with hard and soft pity, and keeps per-scope draw history on disk.

pub mod banner;
pub mod build_info;
pub mod catalog;
pub mod core;
pub mod engine;
pub mod error;
pub mod history;
pub mod pity;
pub mod pool;
pub mod simulator;

pub use banner::{BannerConfig, BannerSet, Featured, ScopeKey};
pub use catalog::{Catalog, Category, Item, ItemId, Tier};
pub use crate::core::GachaRules;
pub use engine::DrawEngine;
pub use error::{GachaError, Result};
pub use history::{DrawHistory, DrawRecord, HistoryStore, JsonFileStore, MemoryStore};
pub use pity::{PityCounter, ScopeRegistry};
