//! Built-in banner lineup and banner files.

use super::types::BannerConfig;
use crate::catalog::Category;
use crate::error::{GachaError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Named banners in display order.
#[derive(Debug, Clone)]
pub struct BannerSet {
    banners: Vec<(String, BannerConfig)>,
}

impl BannerSet {
    /// The current lineup: two limited trekker/disc pairs plus the
    /// permanent banners.
    pub fn builtin() -> Self {
        let banners = vec![
            (
                "shia",
                BannerConfig::limited(
                    Category::Trekker,
                    "Tide to The Full Moon",
                    15501,
                    vec![10701, 10801],
                )
                .with_cover("bg_gacha_10155"),
            ),
            (
                "shia-disc",
                BannerConfig::limited(
                    Category::Disc,
                    "Ocean Meets The Sky",
                    4038,
                    vec![3004, 3006],
                ),
            ),
            (
                "chitose",
                BannerConfig::limited(
                    Category::Trekker,
                    "Tide to The Full Moon",
                    14401,
                    vec![11701, 12701],
                ),
            ),
            (
                "chitose-disc",
                BannerConfig::limited(
                    Category::Disc,
                    "Moon Upon Still Waters",
                    4026,
                    vec![3005, 3009],
                ),
            ),
            (
                "trekker",
                BannerConfig::standard(Category::Trekker, "Boss's Regulars"),
            ),
            ("disc", BannerConfig::standard(Category::Disc, "Memories Rewind")),
        ];

        Self {
            banners: banners
                .into_iter()
                .map(|(key, config)| (key.to_string(), config))
                .collect(),
        }
    }

    /// Parses a JSON object mapping banner keys to configurations.
    /// Keys come back in sorted order.
    pub fn from_json(json: &str) -> Result<Self> {
        let map: BTreeMap<String, BannerConfig> = serde_json::from_str(json)?;
        Ok(Self {
            banners: map.into_iter().collect(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn get(&self, key: &str) -> Result<&BannerConfig> {
        self.banners
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, config)| config)
            .ok_or_else(|| GachaError::UnknownBanner(key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BannerConfig)> {
        self.banners.iter().map(|(k, c)| (k.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.banners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }
}

impl Default for BannerSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_builtin_lineup() {
        let set = BannerSet::builtin();
        assert_eq!(set.len(), 6);
        assert!(set.get("shia").unwrap().is_limited());
        assert!(!set.get("trekker").unwrap().is_limited());
        assert_eq!(set.get("shia").unwrap().cover.as_deref(), Some("bg_gacha_10155"));
    }

    #[test]
    fn test_builtin_featured_ids_exist_in_catalog() {
        let catalog = Catalog::builtin();
        for (key, banner) in BannerSet::builtin().iter() {
            if let Some(featured) = &banner.featured {
                for id in std::iter::once(featured.legendary).chain(featured.rare.iter().copied()) {
                    assert!(catalog.find(id).is_some(), "{key}: featured id {id} missing");
                }
            }
        }
    }

    #[test]
    fn test_unknown_banner() {
        let set = BannerSet::builtin();
        assert!(matches!(
            set.get("nope"),
            Err(GachaError::UnknownBanner(key)) if key == "nope"
        ));
    }

    #[test]
    fn test_from_json_sorted() {
        let json = r#"{
            "zeta": { "category": "disc", "name": "Z" },
            "alpha": { "category": "trekker", "name": "A", "featured": { "legendary": 15501, "rare": [10701] } }
        }"#;
        let set = BannerSet::from_json(json).unwrap();
        let keys: Vec<&str> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["alpha", "zeta"]);
        assert!(set.get("alpha").unwrap().is_limited());
    }
}
