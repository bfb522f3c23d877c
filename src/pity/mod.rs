//! Pity counters and the scope registry that shares them between banners.
//!
//! Every banner of the same scope (category plus limited-or-standard) draws
//! against one counter and one history. The registry hands out those shared
//! cells, loading history from the store the first time a scope is used.

use crate::banner::{BannerConfig, BannerSet, ScopeKey};
use crate::catalog::{ItemId, Tier};
use crate::history::{load_history, DrawHistory, DrawRecord, HistoryStore, MemoryStore};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Shared count of draws since the last pity reset.
#[derive(Debug, Clone, Default)]
pub struct PityCounter(Rc<Cell<u32>>);

impl PityCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }

    pub fn increment(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn reset(&self) {
        self.0.set(0);
    }

    /// Overwrites the count. Only used when rebuilding it from history.
    pub(crate) fn restore(&self, value: u32) {
        self.0.set(value);
    }

    /// True when both handles point at the same cell.
    pub fn shares_cell_with(&self, other: &PityCounter) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

pub type SharedHistory = Rc<RefCell<DrawHistory>>;

/// Counter and history handed to every banner attached to one scope.
#[derive(Debug, Clone)]
pub struct ScopeHandle {
    pub pity: PityCounter,
    pub history: SharedHistory,
    /// True for the first banner attached to the scope in this registry
    pub first_attach: bool,
}

struct ScopeState {
    pity: PityCounter,
    history: SharedHistory,
}

/// Maps scope keys to their shared state and owns the history store.
///
/// Also remembers the featured legendaries of every banner registered per
/// scope, which pity rehydration needs for records that do not say which
/// banner drew them.
pub struct ScopeRegistry {
    store: Rc<dyn HistoryStore>,
    scopes: HashMap<ScopeKey, ScopeState>,
    lineups: HashMap<ScopeKey, Vec<ItemId>>,
}

impl ScopeRegistry {
    pub fn new(store: Rc<dyn HistoryStore>) -> Self {
        Self {
            store,
            scopes: HashMap::new(),
            lineups: HashMap::new(),
        }
    }

    /// Registers every banner in `banners`. Do this before the first engine
    /// attaches so its scope's pity is rebuilt against the whole lineup.
    pub fn with_banners(mut self, banners: &BannerSet) -> Self {
        for (_, banner) in banners.iter() {
            self.register(banner);
        }
        self
    }

    /// Adds the banner's featured legendary to its scope's lineup.
    pub fn register(&mut self, banner: &BannerConfig) {
        if let Some(id) = banner.featured_legendary() {
            let lineup = self.lineups.entry(banner.scope()).or_default();
            if !lineup.contains(&id) {
                lineup.push(id);
            }
        }
    }

    /// Featured legendaries of the banners registered for `scope`.
    pub fn lineup(&self, scope: &ScopeKey) -> &[ItemId] {
        self.lineups.get(scope).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Registry over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStore::new()))
    }

    pub fn store(&self) -> Rc<dyn HistoryStore> {
        Rc::clone(&self.store)
    }

    /// Shared state for `scope`, loading its history on first use.
    pub fn attach(&mut self, scope: ScopeKey) -> ScopeHandle {
        let first_attach = !self.scopes.contains_key(&scope);
        let store = &self.store;
        let state = self.scopes.entry(scope).or_insert_with(|| ScopeState {
            pity: PityCounter::new(),
            history: Rc::new(RefCell::new(load_history(
                store.as_ref(),
                &scope.history_key(),
            ))),
        });
        ScopeHandle {
            pity: state.pity.clone(),
            history: Rc::clone(&state.history),
            first_attach,
        }
    }

    /// Counter for `scope`, if any banner has attached to it.
    pub fn counter(&self, scope: &ScopeKey) -> Option<PityCounter> {
        self.scopes.get(scope).map(|state| state.pity.clone())
    }
}

/// Rebuilds a pity count from stored history.
///
/// Scans the newest `threshold` records backwards for the draw that last
/// reset the counter: a legendary that was the featured one of the banner
/// it was drawn on, or any legendary drawn on a standard banner. Records
/// that carry no banner tag fall back to `lineup`, the featured legendaries
/// of the scope's banners; with an empty lineup any legendary resets.
///
/// A pity-forced legendary that did not reset the counter still cleared it
/// before counting itself, so it counts as one draw. With no reset in range
/// the count is the number of records scanned.
pub fn rehydrate_pity(history: &DrawHistory, lineup: &[ItemId], threshold: u32) -> u32 {
    let window = history.last_n(threshold as usize);
    for (since, record) in window.iter().rev().enumerate() {
        let since = since as u32;
        if resets_pity(record, lineup) {
            return since;
        }
        if record.is_pity && record.tier == Tier::Legendary {
            return since + 1;
        }
    }
    window.len() as u32
}

fn resets_pity(record: &DrawRecord, lineup: &[ItemId]) -> bool {
    if record.tier != Tier::Legendary {
        return false;
    }
    match record.featured {
        Some(featured) => featured == record.id,
        None => lineup.is_empty() || lineup.contains(&record.id),
    }
}
