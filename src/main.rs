#[macro_use]
extern crate log;
extern crate star_treap;

use clap::Parser;
use star_treap::catalog;
use star_treap::treap::{RandomPriority, Treap, DEFAULT_MAX_PRIORITY};
use std::hint::black_box;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

const DEFAULT_NAMES: [&str; 4] = ["Procyon", "Kapteyn's Star", "Barnard's Star", "Gl 406"];

#[derive(Parser)]
#[command(name = "star-treap")]
#[command(about = "Load a HabHYG star catalog into a treap and time name lookups")]
#[command(version)]
struct Cli {
    /// Path to the HabHYG CSV catalog
    catalog: PathBuf,

    /// Display names to look up (defaults to a handful of nearby stars)
    names: Vec<String>,

    /// Seed for reproducible node priorities
    #[arg(long)]
    seed: Option<u32>,

    /// Inclusive upper bound of node priorities
    #[arg(long, default_value_t = DEFAULT_MAX_PRIORITY)]
    max_priority: u32,

    /// Render the tree after loading
    #[arg(long)]
    print: bool,

    /// Number of timed lookup rounds
    #[arg(long, default_value_t = 1)]
    repeat: u32,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn seed_words(seed: u32) -> [u32; 4] {
    [seed, seed.rotate_left(16) ^ 0x9E37_79B9, 0x243F_6A88, 1]
}

fn run(cli: &Cli) -> catalog::Result<()> {
    let priorities = match cli.seed {
        Some(seed) => RandomPriority::from_seed(seed_words(seed)),
        None => RandomPriority::new(),
    };
    let mut stars =
        Treap::with_priority_source("Star Catalog", priorities.max_priority(cli.max_priority));

    let processed = catalog::load(&cli.catalog, &mut stars)?;
    println!("obs_processed = {}", processed);
    debug!("{} has height {}", stars.label(), stars.height());

    if cli.print {
        print!("{}", stars.display());
        println!();
    }

    let names: Vec<String> = if cli.names.is_empty() {
        DEFAULT_NAMES.iter().map(|name| name.to_string()).collect()
    } else {
        cli.names.clone()
    };

    let start = Instant::now();
    for _ in 0..cli.repeat {
        for name in &names {
            black_box(stars.get(name.as_str()));
        }
    }
    let elapsed = start.elapsed();

    for name in &names {
        match stars.get(name.as_str()) {
            Some(star) => println!("{}", star),
            None => println!("Not found: {}", name),
        }
    }

    println!("tree height = {}", stars.height());
    println!(
        "elapsed us = {:.3} ({} rounds of {} lookups)",
        elapsed.as_secs_f64() * 1_000_000.0,
        cli.repeat,
        names.len(),
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    let env = env_logger::Env::new()
        .filter_or("STAR_TREAP_LOG", default_filter)
        .write_style("STAR_TREAP_LOG_STYLE");
    env_logger::init_from_env(env);

    if let Err(err) = run(&cli) {
        error!("{}", err);
        process::exit(1);
    }
}
