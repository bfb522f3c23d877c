//! Draw engine: single and multi draws with pity overrides.
//!
//! One engine per banner. The pool is built at construction; the pity
//! counter and history are shared with sibling banners of the same scope
//! through the [`ScopeRegistry`].

use crate::banner::{BannerConfig, ScopeKey};
use crate::catalog::{Catalog, Item, Tier};
use crate::core::{GachaRules, MULTI_ROLL_COUNT};
use crate::error::{GachaError, Result};
use crate::history::{save_history, DrawHistory, DrawRecord, HistoryStore};
use crate::pity::{rehydrate_pity, PityCounter, ScopeRegistry, SharedHistory};
use crate::pool::{build_pool, distribute, pick_uniform, pull, DrawPool};
use chrono::Utc;
use rand::rngs::OsRng;
use rand::Rng;
use std::rc::Rc;
use tracing::{info, warn};

pub struct DrawEngine<R: Rng = OsRng> {
    config: BannerConfig,
    rules: GachaRules,
    pool: DrawPool,
    pity: PityCounter,
    history: SharedHistory,
    store: Rc<dyn HistoryStore>,
    rng: R,
}

impl DrawEngine<OsRng> {
    /// Engine drawing from the operating system's random source.
    pub fn new(
        config: BannerConfig,
        catalog: &Catalog,
        rules: GachaRules,
        scopes: &mut ScopeRegistry,
    ) -> Result<Self> {
        Self::with_rng(config, catalog, rules, scopes, OsRng)
    }
}

impl<R: Rng> DrawEngine<R> {
    /// Engine drawing from `rng`. Every probability-affecting decision,
    /// including the soft pity tier choice, uses this one source.
    pub fn with_rng(
        config: BannerConfig,
        catalog: &Catalog,
        rules: GachaRules,
        scopes: &mut ScopeRegistry,
        rng: R,
    ) -> Result<Self> {
        rules.validate()?;
        let pool = build_pool(&config, catalog, &rules)?;
        scopes.register(&config);
        let scope = scopes.attach(config.scope());

        if scope.first_attach {
            let history = scope.history.borrow();
            if !history.is_empty() {
                let lineup = scopes.lineup(&config.scope());
                let count = rehydrate_pity(&history, lineup, rules.hard_pity);
                info!(
                    scope = %config.scope(),
                    records = history.len(),
                    pity = count,
                    "restored pity from history"
                );
                scope.pity.restore(count);
            }
        }

        Ok(Self {
            config,
            rules,
            pool,
            pity: scope.pity,
            history: scope.history,
            store: scopes.store(),
            rng,
        })
    }

    /// Banner metadata.
    pub fn config(&self) -> &BannerConfig {
        &self.config
    }

    pub fn rules(&self) -> &GachaRules {
        &self.rules
    }

    pub fn pool(&self) -> &DrawPool {
        &self.pool
    }

    /// Current pity count for this banner's scope.
    pub fn pity(&self) -> u32 {
        self.pity.get()
    }

    pub fn pity_counter(&self) -> &PityCounter {
        &self.pity
    }

    /// Snapshot of this banner's scope history, oldest first. Later draws
    /// on this or a sibling banner do not show up in it.
    pub fn history(&self) -> DrawHistory {
        self.history.borrow().clone()
    }

    pub fn scope(&self) -> ScopeKey {
        self.config.scope()
    }

    pub fn history_key(&self) -> String {
        self.scope().history_key()
    }

    /// One draw. History is persisted before returning.
    pub fn roll(&mut self) -> Result<DrawRecord> {
        let record = self.draw()?;
        self.persist_history();
        Ok(record)
    }

    /// Ten draws in sequence, each seeing the pity and history left by the
    /// one before. History is persisted once, after the last draw.
    pub fn roll_multi(&mut self) -> Result<Vec<DrawRecord>> {
        let mut records = Vec::with_capacity(MULTI_ROLL_COUNT);
        for _ in 0..MULTI_ROLL_COUNT {
            match self.draw() {
                Ok(record) => records.push(record),
                Err(e) => {
                    // Draws already made stay in history
                    self.persist_history();
                    return Err(e);
                }
            }
        }
        self.persist_history();
        Ok(records)
    }

    fn hard_pity_hit(&self) -> bool {
        self.pity.get() >= self.rules.hard_pity
    }

    fn soft_pity_hit(&self) -> bool {
        let window = self.rules.soft_pity_window;
        let history = self.history.borrow();
        let recent = history.last_n(window);
        recent.len() == window && recent.iter().all(|record| record.tier == Tier::Common)
    }

    fn draw(&mut self) -> Result<DrawRecord> {
        if self.hard_pity_hit() {
            self.pity.reset();
            let item = match self.pool.featured_legendary() {
                Some(featured) => featured.item.clone(),
                None => pick_uniform(self.pool.legendary(), &mut self.rng)
                    .ok_or(GachaError::EmptyPool)?
                    .item
                    .clone(),
            };
            info!(banner = %self.config.name, item = %item.name, "hard pity hit");
            return Ok(self.record(&item, true));
        }

        if self.soft_pity_hit() {
            let roll: f64 = self.rng.gen();
            let sub_pool = if roll < self.rules.legendary_rate {
                self.pool.legendary()
            } else {
                self.pool.rare()
            };
            let item = pull(&distribute(sub_pool), &mut self.rng)
                .ok_or(GachaError::EmptyPool)?
                .item
                .clone();
            if item.tier == Tier::Legendary {
                self.pity.reset();
            }
            info!(banner = %self.config.name, item = %item.name, "soft pity hit");
            return Ok(self.record(&item, true));
        }

        let item = pull(self.pool.entries(), &mut self.rng)
            .ok_or(GachaError::EmptyPool)?
            .item
            .clone();
        Ok(self.record(&item, false))
    }

    /// Updates the pity counter for a drawn item and appends its record.
    fn record(&mut self, item: &Item, is_pity: bool) -> DrawRecord {
        let featured = self.config.featured_legendary();
        let resets = item.tier == Tier::Legendary && featured.map_or(true, |id| id == item.id);
        if resets {
            self.pity.reset();
        } else {
            self.pity.increment();
        }

        let record =
            DrawRecord::new(item, Utc::now().timestamp_millis(), is_pity).on_banner(featured);
        self.history.borrow_mut().push(record.clone());
        record
    }

    fn persist_history(&self) {
        if !self.store.is_durable() {
            return;
        }
        let key = self.history_key();
        if let Err(e) = save_history(self.store.as_ref(), &key, &self.history.borrow()) {
            warn!(key = %key, error = %e, "failed to persist history");
        }
    }
}
