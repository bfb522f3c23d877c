use crate::catalog::{Category, Item, ItemId, Tier};
use serde::{Deserialize, Serialize};

/// One draw as stored in history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawRecord {
    pub id: ItemId,
    pub tier: Tier,
    pub category: Category,
    /// Unix time in milliseconds
    pub time: i64,
    /// Set when a pity rule forced the outcome
    #[serde(default)]
    pub is_pity: bool,
    /// Featured legendary of the banner the draw was made on. Absent for
    /// standard banners and for records written before it was stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<ItemId>,
}

impl DrawRecord {
    pub fn new(item: &Item, time: i64, is_pity: bool) -> Self {
        Self {
            id: item.id,
            tier: item.tier,
            category: item.category,
            time,
            is_pity,
            featured: None,
        }
    }

    /// Tags the record with the drawing banner's featured legendary.
    pub fn on_banner(mut self, featured: Option<ItemId>) -> Self {
        self.featured = featured;
        self
    }
}

/// Append-only sequence of draw records for one scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawHistory {
    records: Vec<DrawRecord>,
}

impl DrawHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: DrawRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[DrawRecord] {
        &self.records
    }

    /// The newest `n` records, oldest first. Shorter when history is.
    pub fn last_n(&self, n: usize) -> &[DrawRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    pub fn last(&self) -> Option<&DrawRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawRecord> {
        self.records.iter()
    }
}

impl From<Vec<DrawRecord>> for DrawHistory {
    fn from(records: Vec<DrawRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a DrawHistory {
    type Item = &'a DrawRecord;
    type IntoIter = std::slice::Iter<'a, DrawRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: ItemId, tier: Tier) -> DrawRecord {
        DrawRecord {
            id,
            tier,
            category: Category::Trekker,
            time: 1_700_000_000_000,
            is_pity: false,
            featured: None,
        }
    }

    #[test]
    fn test_last_n() {
        let mut history = DrawHistory::new();
        assert!(history.last_n(9).is_empty());

        for id in 0..12 {
            history.push(record(id, Tier::Common));
        }
        let tail = history.last_n(9);
        assert_eq!(tail.len(), 9);
        assert_eq!(tail[0].id, 3);
        assert_eq!(tail[8].id, 11);
        assert_eq!(history.last_n(50).len(), 12);
    }

    #[test]
    fn test_record_json_shape() {
        let mut rec = record(15501, Tier::Legendary);
        rec.is_pity = true;
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"isPity\":true"));
        assert!(json.contains("\"tier\":\"legendary\""));
        assert!(json.contains("\"category\":\"trekker\""));
        assert!(!json.contains("featured"));

        let json = serde_json::to_string(&rec.on_banner(Some(15501))).unwrap();
        assert!(json.contains("\"featured\":15501"));
    }

    #[test]
    fn test_missing_pity_flag_defaults_false() {
        let json = r#"{"id":2001,"tier":"common","category":"disc","time":5}"#;
        let rec: DrawRecord = serde_json::from_str(json).unwrap();
        assert!(!rec.is_pity);
        assert_eq!(rec.time, 5);
    }

    #[test]
    fn test_history_serializes_as_array() {
        let history = DrawHistory::from(vec![record(1, Tier::Rare)]);
        let json = serde_json::to_string(&history).unwrap();
        assert!(json.starts_with('['));
        let back: DrawHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }
}
