use crate::catalog::{Category, ItemId, Tier};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GachaError {
    #[error("invalid chance distribution: common residual is {residual}")]
    InvalidDistribution { residual: f64 },
    #[error("pool rates sum to {sum}, expected 1")]
    RateSumMismatch { sum: f64 },
    #[error("featured item {id} not found in the {category} catalog")]
    UnknownFeatured { id: ItemId, category: Category },
    #[error("featured item {id} is {actual}, expected {expected}")]
    FeaturedTierMismatch {
        id: ItemId,
        expected: Tier,
        actual: Tier,
    },
    #[error("featured item {0} listed more than once")]
    DuplicateFeatured(ItemId),
    #[error("no {0} items available for this banner")]
    EmptyTier(Tier),
    #[error("invalid rule value for {field}: {value}")]
    InvalidRate { field: &'static str, value: f64 },
    #[error("catalog entry {id} has tier {tier} in the {catalog} catalog")]
    CatalogTier {
        id: ItemId,
        tier: Tier,
        catalog: &'static str,
    },
    #[error("catalog item id {0} appears more than once")]
    DuplicateItem(ItemId),
    #[error("unknown banner: {0}")]
    UnknownBanner(String),
    #[error("draw pool is empty")]
    EmptyPool,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GachaError>;
