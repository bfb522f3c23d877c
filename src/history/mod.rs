//! Draw history: the records each draw leaves behind and where they are kept.
//!
//! History is stored per scope under keys like `limited-trekker-history`,
//! by default as JSON files in `~/.recruit/history/`.

pub mod persistence;
pub mod types;

pub use persistence::{
    default_history_dir, load_history, save_history, HistoryStore, JsonFileStore, MemoryStore,
    NullStore,
};
pub use types::{DrawHistory, DrawRecord};
