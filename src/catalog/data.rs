//! Built-in catalog tables.

use super::types::{CatalogEntry, Tier};

const fn entry(id: u32, name: &'static str, tier: Tier) -> CatalogEntry {
    CatalogEntry { id, name, tier }
}

/// Trekkers available on every trekker banner.
pub const TREKKERS: &[CatalogEntry] = &[
    // ═══════════════════════════════════════════════════════════════
    // LEGENDARY
    // ═══════════════════════════════════════════════════════════════
    entry(14401, "Chitose", Tier::Legendary),
    entry(15501, "Shia", Tier::Legendary),
    entry(10301, "Amber", Tier::Legendary),
    entry(11101, "Firefly", Tier::Legendary),
    entry(11201, "Mistique", Tier::Legendary),
    entry(12301, "Caramel", Tier::Legendary),
    entry(13201, "Nazuna", Tier::Legendary),
    entry(14101, "Kasimira", Tier::Legendary),
    // ═══════════════════════════════════════════════════════════════
    // RARE
    // ═══════════════════════════════════════════════════════════════
    entry(10701, "Tilia", Tier::Rare),
    entry(10801, "Ridge", Tier::Rare),
    entry(11701, "Coronis", Tier::Rare),
    entry(12701, "Iris", Tier::Rare),
    entry(10201, "Gerie", Tier::Rare),
    entry(10401, "Teresa", Tier::Rare),
    entry(10501, "Laru", Tier::Rare),
    entry(11401, "Nanoha", Tier::Rare),
    entry(12101, "Freesia", Tier::Rare),
    entry(13101, "Cosette", Tier::Rare),
];

/// Discs available on every disc banner.
pub const DISCS: &[CatalogEntry] = &[
    // ═══════════════════════════════════════════════════════════════
    // LEGENDARY
    // ═══════════════════════════════════════════════════════════════
    entry(4026, "Sword Against Stream", Tier::Legendary),
    entry(4038, "Ripples of Nostalgia", Tier::Legendary),
    entry(4001, "First Light", Tier::Legendary),
    entry(4005, "Starlit Promise", Tier::Legendary),
    entry(4011, "Crimson Waltz", Tier::Legendary),
    entry(4017, "Silent Orbit", Tier::Legendary),
    entry(4022, "Harbor Lanterns", Tier::Legendary),
    // ═══════════════════════════════════════════════════════════════
    // RARE
    // ═══════════════════════════════════════════════════════════════
    entry(3004, "Paper Cranes", Tier::Rare),
    entry(3005, "Falling Petals", Tier::Rare),
    entry(3006, "Tidal Echo", Tier::Rare),
    entry(3009, "Moonlit Path", Tier::Rare),
    entry(3001, "Morning Bell", Tier::Rare),
    entry(3002, "Summer Rain", Tier::Rare),
    entry(3003, "Clockwork Heart", Tier::Rare),
    entry(3007, "Wandering Cloud", Tier::Rare),
    entry(3008, "Ember Trail", Tier::Rare),
];

/// Common items shared by both categories. Stored as discs.
pub const LOW_RARITY: &[CatalogEntry] = &[
    entry(2001, "Pebble Charm", Tier::Common),
    entry(2002, "Worn Compass", Tier::Common),
    entry(2003, "Brass Key", Tier::Common),
    entry(2004, "Faded Map", Tier::Common),
    entry(2005, "Glass Marble", Tier::Common),
    entry(2006, "Tin Whistle", Tier::Common),
    entry(2007, "Sea Shell", Tier::Common),
    entry(2008, "Pressed Flower", Tier::Common),
    entry(2009, "Copper Coin", Tier::Common),
    entry(2010, "Ribbon Bookmark", Tier::Common),
];
