//! Simulation runner using the real draw engine.
//!
//! Each run gets its own scope registry over a `NullStore`, so runs never
//! touch saved history and never see each other's pity.

use super::config::SimConfig;
use super::report::SimReport;
use crate::banner::BannerSet;
use crate::catalog::Catalog;
use crate::core::GachaRules;
use crate::engine::DrawEngine;
use crate::error::Result;
use crate::history::NullStore;
use crate::pity::ScopeRegistry;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;
use tracing::debug;

/// Run the full simulation and return a report.
pub fn run_simulation(
    config: &SimConfig,
    banners: &BannerSet,
    catalog: &Catalog,
    rules: GachaRules,
) -> Result<SimReport> {
    let banner = banners.get(&config.banner)?;
    let featured = banner.featured_legendary();
    let mut report: Option<SimReport> = None;

    for run_idx in 0..config.runs {
        let mut scopes = ScopeRegistry::new(Rc::new(NullStore));
        let rng = StdRng::seed_from_u64(config.seed.wrapping_add(run_idx as u64));
        let mut engine = DrawEngine::with_rng(banner.clone(), catalog, rules, &mut scopes, rng)?;

        let report = report.get_or_insert_with(|| SimReport::new(&config.banner, engine.pool()));
        for _ in 0..config.pulls {
            let hard_pity = engine.pity() >= rules.hard_pity;
            let record = engine.roll()?;
            report.record(&record, featured, hard_pity);
        }
        report.runs += 1;

        debug!(
            run = run_idx + 1,
            runs = config.runs,
            legendary = report.legendary,
            "simulation run complete"
        );
    }

    Ok(report.unwrap_or_else(|| SimReport {
        banner: config.banner.clone(),
        ..Default::default()
    }))
}
