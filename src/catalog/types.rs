use serde::{Deserialize, Serialize};
use std::fmt;

pub type ItemId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Common = 3,
    Rare = 4,
    Legendary = 5,
}

impl Tier {
    /// Returns the display name for this tier.
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Common => "Common",
            Tier::Rare => "Rare",
            Tier::Legendary => "Legendary",
        }
    }

    /// Star count shown next to the item (3, 4 or 5).
    pub fn stars(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Trekker,
    Disc,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Trekker => "trekker",
            Category::Disc => "disc",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A collectible. `is_featured` is only ever set on the copies held by a
/// built pool, never on catalog data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub tier: Tier,
    pub category: Category,
    #[serde(skip)]
    pub is_featured: bool,
}

/// Compile-time catalog row.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub id: ItemId,
    pub name: &'static str,
    pub tier: Tier,
}

impl CatalogEntry {
    pub fn to_item(&self, category: Category) -> Item {
        Item {
            id: self.id,
            name: self.name.to_string(),
            tier: self.tier,
            category,
            is_featured: false,
        }
    }
}
