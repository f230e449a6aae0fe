//! Headless demo binary: generate a world from config + CLI and log
//! summary statistics.
//!
//! Run with `cargo run -p strata-demo` for a fresh random seed.
//! Run with `cargo run -p strata-demo -- --seed 42 --ascii` for a
//! reproducible run that also dumps the strip as ASCII.

mod ascii;

use clap::Parser;
use strata_config::{CliArgs, Config, default_config_dir};
use strata_log::init_logging;
use strata_terrain::{WorldSeed, generate};
use strata_tile::{TileAtlas, TileKind};
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load config: {err}");
            std::process::exit(1);
        }
    };
    config.apply_cli_overrides(&args);

    init_logging(Some(&config.debug.log_level));

    let seed = match config.seed.fixed {
        Some(value) => WorldSeed::new(value),
        None => WorldSeed::random(),
    };

    // A real consumer would register its sprite sheets here; the demo only
    // needs one variant per kind.
    let atlas = TileAtlas::single_variant();

    let world = match generate(&config.generation, &atlas, seed) {
        Ok(world) => world,
        Err(err) => {
            error!(%err, "generation failed");
            std::process::exit(1);
        }
    };

    let mut kind_counts = [0usize; TileKind::ALL.len()];
    for tile in world.tiles() {
        kind_counts[tile.kind.index()] += 1;
    }
    for kind in TileKind::ALL {
        let count = kind_counts[kind.index()];
        if count > 0 {
            info!(kind = %kind, count, "tile count");
        }
    }
    for chunk in world.chunks() {
        info!(chunk = chunk.id.0, tiles = chunk.len(), "chunk population");
    }

    if config.debug.ascii_map {
        print!("{}", ascii::render(&world));
    }
}
