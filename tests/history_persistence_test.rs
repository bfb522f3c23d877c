//! History persistence tests: file store round trips, tolerant loading,
//! pity rebuilt across sessions.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use recruit::history::{load_history, JsonFileStore, MemoryStore};
use recruit::{
    BannerConfig, BannerSet, Catalog, Category, DrawEngine, DrawRecord, GachaRules, HistoryStore,
    ScopeRegistry,
};
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("recruit-test-{}", uuid::Uuid::new_v4()))
}

fn shia_disc() -> BannerConfig {
    BannerConfig::limited(Category::Disc, "Ocean", 4038, vec![3004, 3006])
}

fn engine_over(
    store: Rc<dyn HistoryStore>,
    seed: u64,
) -> DrawEngine<ChaCha8Rng> {
    let mut scopes = ScopeRegistry::new(store);
    DrawEngine::with_rng(
        shia_disc(),
        &Catalog::builtin(),
        GachaRules::default(),
        &mut scopes,
        ChaCha8Rng::seed_from_u64(seed),
    )
    .unwrap()
}

// =========================================================================
// File store
// =========================================================================

#[test]
fn test_history_survives_restart() {
    let dir = temp_dir();

    let (pity, records) = {
        let mut engine = engine_over(Rc::new(JsonFileStore::at(&dir)), 1);
        let records = engine.roll_multi().unwrap();
        (engine.pity(), records)
    };

    let path = JsonFileStore::at(&dir).path_for("limited-disc-history");
    assert!(path.exists());

    let reloaded = engine_over(Rc::new(JsonFileStore::at(&dir)), 2);
    assert_eq!(reloaded.history().records(), records.as_slice());
    assert_eq!(reloaded.pity(), pity);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_file_uses_camel_case_records() {
    let dir = temp_dir();
    let mut engine = engine_over(Rc::new(JsonFileStore::at(&dir)), 3);
    engine.roll().unwrap();

    let raw = fs::read_to_string(dir.join("limited-disc-history.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value.as_array().unwrap()[0];
    assert!(first.get("isPity").is_some());
    assert!(first.get("time").unwrap().is_i64());
    assert_eq!(first.get("category").unwrap(), "disc");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_directory_loads_empty() {
    let store = JsonFileStore::at(temp_dir());
    assert!(load_history(&store, "trekker-history").is_empty());
}

// =========================================================================
// Tolerant loading
// =========================================================================

#[test]
fn test_malformed_history_starts_empty() {
    let store = Rc::new(MemoryStore::new());
    store.insert("limited-disc-history", "{not json");
    let engine = engine_over(store, 4);
    assert!(engine.history().is_empty());
    assert_eq!(engine.pity(), 0);
}

#[test]
fn test_non_array_history_starts_empty() {
    let store = MemoryStore::new();
    store.insert("disc-history", r#"{"id": 4038}"#);
    assert!(load_history(&store, "disc-history").is_empty());
}

#[test]
fn test_records_without_pity_flag_load() {
    let store = MemoryStore::new();
    store.insert(
        "disc-history",
        r#"[{"id": 3004, "tier": "rare", "category": "disc", "time": 1700000000000}]"#,
    );
    let history = load_history(&store, "disc-history");
    assert_eq!(history.len(), 1);
    assert!(!history.records()[0].is_pity);
}

// =========================================================================
// Pity across sessions
// =========================================================================

#[test]
fn test_pity_counts_since_featured_legendary() {
    let catalog = Catalog::builtin();
    let store = Rc::new(MemoryStore::new());
    let mut records = vec![DrawRecord::new(catalog.find(4038).unwrap(), 0, false)];
    for i in 1..=25 {
        records.push(DrawRecord::new(catalog.find(3004).unwrap(), i, false));
    }
    store.insert(
        "limited-disc-history",
        serde_json::to_string(&records).unwrap(),
    );

    let engine = engine_over(store, 5);
    assert_eq!(engine.pity(), 25);
}

#[test]
fn test_off_banner_legendary_does_not_reset_restored_pity() {
    let catalog = Catalog::builtin();
    let store = Rc::new(MemoryStore::new());
    let records: Vec<DrawRecord> = [3004, 4026, 3006]
        .iter()
        .enumerate()
        .map(|(i, id)| DrawRecord::new(catalog.find(*id).unwrap(), i as i64, false))
        .collect();
    store.insert(
        "limited-disc-history",
        serde_json::to_string(&records).unwrap(),
    );

    let engine = engine_over(store, 6);
    assert_eq!(engine.pity(), 3);
}

fn open_banner(
    key: &str,
    banners: &BannerSet,
    scopes: &mut ScopeRegistry,
    seed: u64,
) -> DrawEngine<ChaCha8Rng> {
    DrawEngine::with_rng(
        banners.get(key).unwrap().clone(),
        &Catalog::builtin(),
        GachaRules::default(),
        scopes,
        ChaCha8Rng::seed_from_u64(seed),
    )
    .unwrap()
}

#[test]
fn test_pity_restored_when_sibling_banner_attaches_first() {
    let store = Rc::new(MemoryStore::new());
    let banners = BannerSet::builtin();

    let live = {
        let mut scopes = ScopeRegistry::new(store.clone()).with_banners(&banners);
        let mut chitose = open_banner("chitose", &banners, &mut scopes, 31);
        // Hard pity guarantees the featured legendary within 121 draws
        while chitose.roll().unwrap().id != 14401 {}
        for _ in 0..5 {
            chitose.roll().unwrap();
        }
        chitose.pity()
    };

    let mut scopes = ScopeRegistry::new(store).with_banners(&banners);
    let shia = open_banner("shia", &banners, &mut scopes, 32);
    assert_eq!(shia.pity(), live);
}

#[test]
fn test_untagged_sibling_featured_resets_with_lineup() {
    let catalog = Catalog::builtin();
    let store = Rc::new(MemoryStore::new());
    let records: Vec<DrawRecord> = [14401, 10701, 10801, 11701]
        .iter()
        .enumerate()
        .map(|(i, id)| DrawRecord::new(catalog.find(*id).unwrap(), i as i64, false))
        .collect();
    store.insert(
        "limited-trekker-history",
        serde_json::to_string(&records).unwrap(),
    );

    let banners = BannerSet::builtin();
    let mut scopes = ScopeRegistry::new(store).with_banners(&banners);
    let shia = open_banner("shia", &banners, &mut scopes, 33);
    assert_eq!(shia.pity(), 3);
}
