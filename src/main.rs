//! Recruit command-line front end.
//!
//! Usage:
//!   recruit [OPTIONS] <COMMAND>
//!
//! Commands:
//!   banners                 List available banners
//!   roll <BANNER>           Draw once
//!   multi <BANNER>          Draw ten times
//!   history <BANNER>        Show the banner scope's draw history
//!   simulate <BANNER>       Run a headless simulation (--pulls, --runs, --seed)
//!
//! Options:
//!   --data-dir DIR   Where history is kept (default: ~/.recruit/history)
//!   --rules FILE     JSON rules overriding the default rates and pity
//!   --banners FILE   JSON banner set replacing the built-in lineup
//!   --catalog FILE   JSON catalog replacing the built-in items

use anyhow::{anyhow, bail, Context, Result};
use recruit::build_info;
use recruit::history::JsonFileStore;
use recruit::simulator::{run_simulation, SimConfig};
use recruit::{
    BannerConfig, BannerSet, Catalog, DrawEngine, DrawRecord, GachaRules, ScopeRegistry, Tier,
};
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

// ── CLI Configuration ────────────────────────────────────────────────

#[derive(Debug)]
enum Command {
    Banners,
    Roll(String),
    Multi(String),
    History { banner: String, limit: usize },
    Simulate(SimConfig),
}

#[derive(Debug)]
struct CliConfig {
    data_dir: Option<PathBuf>,
    rules: Option<PathBuf>,
    banners: Option<PathBuf>,
    catalog: Option<PathBuf>,
    command: Command,
}

fn parse_args(args: &[String]) -> Result<CliConfig> {
    let mut data_dir = None;
    let mut rules = None;
    let mut banners = None;
    let mut catalog = None;
    let mut positional: Vec<&str> = Vec::new();
    let mut pulls = None;
    let mut runs = None;
    let mut seed = None;
    let mut limit = 20;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--data-dir" => data_dir = Some(PathBuf::from(take_value(args, &mut i)?)),
            "--rules" => rules = Some(PathBuf::from(take_value(args, &mut i)?)),
            "--banners" => banners = Some(PathBuf::from(take_value(args, &mut i)?)),
            "--catalog" => catalog = Some(PathBuf::from(take_value(args, &mut i)?)),
            "--pulls" => pulls = Some(parse_number(args, &mut i)?),
            "--runs" => runs = Some(parse_number(args, &mut i)?),
            "--seed" => seed = Some(parse_number(args, &mut i)?),
            "--limit" => limit = parse_number(args, &mut i)?,
            other if other.starts_with("--") => bail!("Unknown option: {other}"),
            other => positional.push(other),
        }
        i += 1;
    }

    let banner_arg = |name: &str| -> Result<String> {
        positional
            .get(1)
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow!("'{name}' requires a banner key"))
    };

    let command = match positional.first().copied() {
        Some("banners") => Command::Banners,
        Some("roll") => Command::Roll(banner_arg("roll")?),
        Some("multi") => Command::Multi(banner_arg("multi")?),
        Some("history") => Command::History {
            banner: banner_arg("history")?,
            limit,
        },
        Some("simulate") => {
            let defaults = SimConfig::default();
            Command::Simulate(SimConfig {
                banner: banner_arg("simulate")?,
                pulls: pulls.unwrap_or(defaults.pulls),
                runs: runs.unwrap_or(defaults.runs),
                seed: seed.unwrap_or(defaults.seed),
            })
        }
        Some(other) => bail!("Unknown command: {other}"),
        None => bail!("No command given"),
    };

    let expected = if matches!(command, Command::Banners) { 1 } else { 2 };
    if let Some(extra) = positional.get(expected) {
        bail!("Unexpected argument: {extra}");
    }

    Ok(CliConfig {
        data_dir,
        rules,
        banners,
        catalog,
        command,
    })
}

/// Value following the flag at `args[*i]`; advances `i` past it.
fn take_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{flag} requires a value"))
}

fn parse_number<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T> {
    let flag = args[*i].clone();
    let value = take_value(args, i)?;
    value
        .parse()
        .map_err(|_| anyhow!("{flag} requires a number, got '{value}'"))
}

fn print_usage() {
    println!(
        "Recruit - offline gacha draw engine\n\
         \n\
         Usage: recruit [OPTIONS] <COMMAND>\n\
         \n\
         Commands:\n\
         \x20 banners               List available banners\n\
         \x20 roll <BANNER>         Draw once\n\
         \x20 multi <BANNER>        Draw ten times\n\
         \x20 history <BANNER>      Show recent draws (--limit N, default 20)\n\
         \x20 simulate <BANNER>     Headless simulation (--pulls N, --runs N, --seed N)\n\
         \n\
         Options:\n\
         \x20 --data-dir DIR        History directory (default: ~/.recruit/history)\n\
         \x20 --rules FILE          JSON rules file\n\
         \x20 --banners FILE        JSON banner set\n\
         \x20 --catalog FILE        JSON item catalog\n\
         \x20 --version, -v         Show version information\n\
         \x20 --help, -h            Show this help"
    );
}

// ── Commands ─────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("--version") | Some("-v") => {
            println!("{}", build_info::version_string());
            return Ok(());
        }
        Some("--help") | Some("-h") | None => {
            print_usage();
            return Ok(());
        }
        _ => {}
    }

    let config = parse_args(&args).context("Run 'recruit --help' for usage")?;

    let rules = match &config.rules {
        Some(path) => GachaRules::load(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => GachaRules::default(),
    };
    let banners = match &config.banners {
        Some(path) => BannerSet::load(path)
            .with_context(|| format!("loading banners from {}", path.display()))?,
        None => BannerSet::builtin(),
    };
    let catalog = match &config.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    };

    match config.command {
        Command::Banners => list_banners(&banners, &catalog),
        Command::Simulate(sim) => {
            let report = run_simulation(&sim, &banners, &catalog, rules)?;
            println!("{report}");
        }
        Command::Roll(key) => {
            let mut engine = open_engine(&key, &banners, &catalog, rules, config.data_dir)?;
            let record = engine.roll()?;
            print_records(&[record], &catalog);
            print_pity(&engine);
        }
        Command::Multi(key) => {
            let mut engine = open_engine(&key, &banners, &catalog, rules, config.data_dir)?;
            let records = engine.roll_multi()?;
            print_records(&records, &catalog);
            print_pity(&engine);
        }
        Command::History { banner, limit } => {
            let engine = open_engine(&banner, &banners, &catalog, rules, config.data_dir)?;
            let history = engine.history();
            println!(
                "{} ({} draws, showing last {})",
                engine.history_key(),
                history.len(),
                limit.min(history.len())
            );
            print_records(history.last_n(limit), &catalog);
            print_pity(&engine);
        }
    }
    Ok(())
}

/// Engine for `key` over the on-disk history store.
fn open_engine(
    key: &str,
    banners: &BannerSet,
    catalog: &Catalog,
    rules: GachaRules,
    data_dir: Option<PathBuf>,
) -> Result<DrawEngine> {
    let store = match data_dir {
        Some(dir) => JsonFileStore::at(dir),
        None => JsonFileStore::new()?,
    };
    // The whole lineup, so pity rebuilt for a shared scope knows every
    // sibling's featured legendary
    let mut scopes = ScopeRegistry::new(Rc::new(store)).with_banners(banners);
    let banner = banners.get(key)?.clone();
    Ok(DrawEngine::new(banner, catalog, rules, &mut scopes)?)
}

fn print_pity(engine: &DrawEngine) {
    println!("Pity: {}/{}", engine.pity(), engine.rules().hard_pity);
}

fn list_banners(banners: &BannerSet, catalog: &Catalog) {
    for (key, banner) in banners.iter() {
        println!("{:<14} {:<8} {}", key, banner.category, banner.name);
        if banner.is_limited() {
            println!("{:<14} featured: {}", "", featured_names(banner, catalog));
        }
    }
}

fn featured_names(banner: &BannerConfig, catalog: &Catalog) -> String {
    let Some(featured) = &banner.featured else {
        return String::new();
    };
    std::iter::once(featured.legendary)
        .chain(featured.rare.iter().copied())
        .map(|id| {
            catalog
                .find(id)
                .map(|item| item.name.clone())
                .unwrap_or_else(|| format!("#{id}"))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_records(records: &[DrawRecord], catalog: &Catalog) {
    for record in records {
        let name = catalog
            .find(record.id)
            .map(|item| item.name.as_str())
            .unwrap_or("?");
        let stars = "★".repeat(record.tier.stars() as usize);
        let pity = if record.is_pity { "  (pity)" } else { "" };
        let marker = if record.tier == Tier::Legendary { "!" } else { " " };
        println!("{marker} {stars:<5} {name}{pity}");
    }
}
