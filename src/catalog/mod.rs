//! Static reference data: the item catalogs every banner draws from.
//!
//! Trekkers and discs each have their own catalog of rare and legendary
//! items. Commons come from one shared catalog used by both categories.

pub mod data;
pub mod types;

pub use types::{CatalogEntry, Category, Item, ItemId, Tier};

use crate::error::{GachaError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The three item catalogs. Read-only once constructed.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    trekker: Vec<Item>,
    disc: Vec<Item>,
    common: Vec<Item>,
}

impl Catalog {
    /// Builds the built-in catalog.
    pub fn builtin() -> Self {
        let to_items = |entries: &[CatalogEntry], category: Category| -> Vec<Item> {
            entries.iter().map(|e| e.to_item(category)).collect()
        };
        Self {
            trekker: to_items(data::TREKKERS, Category::Trekker),
            disc: to_items(data::DISCS, Category::Disc),
            common: to_items(data::LOW_RARITY, Category::Disc),
        }
    }

    /// Builds a catalog from explicit item lists and validates it.
    pub fn new(trekker: Vec<Item>, disc: Vec<Item>, common: Vec<Item>) -> Result<Self> {
        let catalog = Self {
            trekker,
            disc,
            common,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses `{"trekker": [...], "disc": [...], "common": [...]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Rare and legendary items of one category.
    pub fn category(&self, category: Category) -> &[Item] {
        match category {
            Category::Trekker => &self.trekker,
            Category::Disc => &self.disc,
        }
    }

    /// Common items, shared by every banner.
    pub fn common(&self) -> &[Item] {
        &self.common
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.trekker
            .iter()
            .chain(&self.disc)
            .chain(&self.common)
            .find(|item| item.id == id)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (name, items, category) in [
            ("trekker", &self.trekker, Some(Category::Trekker)),
            ("disc", &self.disc, Some(Category::Disc)),
            ("common", &self.common, None),
        ] {
            for item in items.iter() {
                if !seen.insert(item.id) {
                    return Err(GachaError::DuplicateItem(item.id));
                }
                let tier_ok = match category {
                    Some(expected) => item.tier != Tier::Common && item.category == expected,
                    None => item.tier == Tier::Common,
                };
                if !tier_ok {
                    return Err(GachaError::CatalogTier {
                        id: item.id,
                        tier: item.tier,
                        catalog: name,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
