use crate::catalog::{Category, ItemId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Items singled out by a limited banner for boosted odds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Featured {
    pub legendary: ItemId,
    #[serde(default)]
    pub rare: Vec<ItemId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerConfig {
    pub category: Category,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<Featured>,
}

impl BannerConfig {
    /// A permanent banner with no featured items.
    pub fn standard(category: Category, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            cover: None,
            featured: None,
        }
    }

    /// A banner boosting one legendary and any number of rares.
    pub fn limited(
        category: Category,
        name: impl Into<String>,
        legendary: ItemId,
        rare: Vec<ItemId>,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            cover: None,
            featured: Some(Featured { legendary, rare }),
        }
    }

    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    pub fn is_limited(&self) -> bool {
        self.featured.is_some()
    }

    pub fn featured_legendary(&self) -> Option<ItemId> {
        self.featured.as_ref().map(|f| f.legendary)
    }

    pub fn scope(&self) -> ScopeKey {
        ScopeKey {
            category: self.category,
            limited: self.is_limited(),
        }
    }
}

/// Partitions history and pity counters: every limited banner of a category
/// shares one scope, every standard banner of a category another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeKey {
    pub category: Category,
    pub limited: bool,
}

impl ScopeKey {
    /// Storage key for the scope's history, e.g. `limited-trekker-history`.
    pub fn history_key(&self) -> String {
        let prefix = if self.limited { "limited-" } else { "" };
        format!("{}{}-history", prefix, self.category)
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = if self.limited { "limited" } else { "standard" };
        write!(f, "{} {}", scope, self.category)
    }
}
