//! Weighted and uniform picks over a slice of weighted items.

use super::types::WeightedItem;
use rand::seq::SliceRandom;
use rand::Rng;

/// Cumulative-probability walk: draws a fraction in [0, 1) and returns the
/// first entry whose running rate sum exceeds it.
///
/// Floating-point drift can leave the walk short of the fraction; the last
/// entry is returned in that case. `None` only for an empty pool.
pub fn pull<'a, R: Rng + ?Sized>(pool: &'a [WeightedItem], rng: &mut R) -> Option<&'a WeightedItem> {
    let roll: f64 = rng.gen();

    let mut cumulative = 0.0;
    for entry in pool {
        cumulative += entry.rate;
        if roll < cumulative {
            return Some(entry);
        }
    }

    pool.last()
}

/// Spreads the mass missing from a sub-pool evenly over its entries so the
/// rates sum to 1 and the sub-pool can be drawn from on its own.
pub fn distribute(pool: &[WeightedItem]) -> Vec<WeightedItem> {
    if pool.is_empty() {
        return Vec::new();
    }
    let total: f64 = pool.iter().map(|entry| entry.rate).sum();
    let share = (1.0 - total) / pool.len() as f64;
    pool.iter()
        .map(|entry| WeightedItem {
            item: entry.item.clone(),
            rate: entry.rate + share,
        })
        .collect()
}

/// Uniform pick ignoring rates.
pub fn pick_uniform<'a, R: Rng + ?Sized>(pool: &'a [WeightedItem], rng: &mut R) -> Option<&'a WeightedItem> {
    pool.choose(rng)
}
