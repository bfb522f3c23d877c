//! History persistence (load/save through a key-value store).

use super::types::DrawHistory;
use crate::core::{DATA_DIR_NAME, HISTORY_DIR_NAME};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// String storage keyed by history key. Implementations decide where the
/// bytes live.
pub trait HistoryStore {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn read(&self, key: &str) -> io::Result<Option<String>>;

    fn write(&self, key: &str, contents: &str) -> io::Result<()>;

    /// False for stores that drop writes; callers may skip serializing.
    fn is_durable(&self) -> bool {
        true
    }
}

/// One JSON file per key in a directory (`~/.recruit/history` by default).
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new() -> io::Result<Self> {
        Ok(Self::at(default_history_dir()?))
    }

    /// Store rooted at `dir`. The directory is created on first write.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl HistoryStore for JsonFileStore {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, key: &str, contents: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), contents)
    }
}

/// Get the default history directory (~/.recruit/history).
pub fn default_history_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(DATA_DIR_NAME).join(HISTORY_DIR_NAME))
}

/// In-process store, used by tests and the simulator.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a key, e.g. with history written by an earlier session.
    pub fn insert(&self, key: &str, contents: impl Into<String>) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), contents.into());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl HistoryStore for MemoryStore {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, contents: &str) -> io::Result<()> {
        self.insert(key, contents);
        Ok(())
    }
}

/// Reads nothing and drops every write. Used for headless simulation runs
/// where history only matters in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl HistoryStore for NullStore {
    fn read(&self, _key: &str) -> io::Result<Option<String>> {
        Ok(None)
    }

    fn write(&self, _key: &str, _contents: &str) -> io::Result<()> {
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }
}

/// Load history for `key`, or return empty history if it is missing,
/// unreadable or not a JSON array of records.
pub fn load_history(store: &dyn HistoryStore, key: &str) -> DrawHistory {
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return DrawHistory::new(),
        Err(e) => {
            info!(key, error = %e, "could not read history, starting empty");
            return DrawHistory::new();
        }
    };

    let trimmed = raw.trim();
    if !(trimmed.starts_with('[') && trimmed.ends_with(']')) {
        info!(key, "stored history is not an array, starting empty");
        return DrawHistory::new();
    }

    match serde_json::from_str(trimmed) {
        Ok(history) => history,
        Err(e) => {
            info!(key, error = %e, "malformed history, starting empty");
            DrawHistory::new()
        }
    }
}

/// Save history under `key`.
pub fn save_history(store: &dyn HistoryStore, key: &str, history: &DrawHistory) -> io::Result<()> {
    let json = serde_json::to_string(history)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    store.write(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Tier};
    use crate::history::types::DrawRecord;

    fn sample_history() -> DrawHistory {
        DrawHistory::from(vec![
            DrawRecord {
                id: 2001,
                tier: Tier::Common,
                category: Category::Disc,
                time: 1_700_000_000_000,
                is_pity: false,
                featured: None,
            },
            DrawRecord {
                id: 15501,
                tier: Tier::Legendary,
                category: Category::Trekker,
                time: 1_700_000_000_500,
                is_pity: true,
                featured: Some(15501),
            },
        ])
    }

    #[test]
    fn test_memory_round_trip() {
        let store = MemoryStore::new();
        let history = sample_history();
        save_history(&store, "limited-trekker-history", &history).unwrap();
        assert_eq!(load_history(&store, "limited-trekker-history"), history);
    }

    #[test]
    fn test_missing_key_is_empty() {
        let store = MemoryStore::new();
        assert!(load_history(&store, "disc-history").is_empty());
    }

    #[test]
    fn test_malformed_history_is_empty() {
        let store = MemoryStore::new();
        store.insert("a", "{\"not\": \"an array\"}");
        store.insert("b", "[1, 2, 3]");
        store.insert("c", "   ");
        assert!(load_history(&store, "a").is_empty());
        assert!(load_history(&store, "b").is_empty());
        assert!(load_history(&store, "c").is_empty());
    }

    #[test]
    fn test_whitespace_around_array_is_accepted() {
        let store = MemoryStore::new();
        let json = serde_json::to_string(&sample_history()).unwrap();
        store.insert("k", format!("\n  {json}  \n"));
        assert_eq!(load_history(&store, "k").len(), 2);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("recruit-test-{}", uuid::Uuid::new_v4()));
        let store = JsonFileStore::at(&dir);

        assert!(store.read("trekker-history").unwrap().is_none());

        let history = sample_history();
        save_history(&store, "trekker-history", &history).unwrap();
        assert!(store.path_for("trekker-history").exists());
        assert_eq!(load_history(&store, "trekker-history"), history);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_null_store_drops_writes() {
        let store = NullStore;
        save_history(&store, "k", &sample_history()).unwrap();
        assert!(load_history(&store, "k").is_empty());
        assert!(!store.is_durable());
        assert!(MemoryStore::new().is_durable());
    }

    #[test]
    fn test_default_history_dir() {
        // Just verify the path generation doesn't panic
        let result = default_history_dir();
        assert!(result.is_ok());
        let path = result.unwrap();
        assert!(path.to_string_lossy().contains(".recruit"));
    }
}
