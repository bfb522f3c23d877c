use crate::catalog::{Item, ItemId, Tier};

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedItem {
    pub item: Item,
    pub rate: f64,
}

/// A banner's draw pool. Built once, immutable afterwards.
#[derive(Debug, Clone)]
pub struct DrawPool {
    pub(super) entries: Vec<WeightedItem>,
    pub(super) rare: Vec<WeightedItem>,
    pub(super) legendary: Vec<WeightedItem>,
    pub(super) featured_legendary: Option<WeightedItem>,
}

impl DrawPool {
    /// Every entry in draw order.
    pub fn entries(&self) -> &[WeightedItem] {
        &self.entries
    }

    /// Rare sub-pool: featured rares first, then the rest.
    pub fn rare(&self) -> &[WeightedItem] {
        &self.rare
    }

    /// Legendary sub-pool: featured legendary first, then the rest.
    pub fn legendary(&self) -> &[WeightedItem] {
        &self.legendary
    }

    pub fn featured_legendary(&self) -> Option<&WeightedItem> {
        self.featured_legendary.as_ref()
    }

    /// Combined rate of every entry of a tier.
    pub fn tier_rate(&self, tier: Tier) -> f64 {
        self.entries
            .iter()
            .filter(|entry| entry.item.tier == tier)
            .map(|entry| entry.rate)
            .sum()
    }

    pub fn rate_of(&self, id: ItemId) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.item.id == id)
            .map(|entry| entry.rate)
    }

    pub fn total_rate(&self) -> f64 {
        self.entries.iter().map(|entry| entry.rate).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
