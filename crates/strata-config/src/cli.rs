//! Command-line argument parsing for the strata tools.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// strata command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "strata", about = "Deterministic 2D tile-world generator")]
pub struct CliArgs {
    /// Fixed world seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<f64>,

    /// World width in columns.
    #[arg(long)]
    pub world_width: Option<u32>,

    /// Chunk width in columns.
    #[arg(long)]
    pub chunk_width: Option<u32>,

    /// Disable cave carving.
    #[arg(long)]
    pub no_caves: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Dump an ASCII map of the generated strip.
    #[arg(long)]
    pub ascii: bool,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.seed.fixed = Some(seed);
        }
        if let Some(width) = args.world_width {
            self.generation.world_width = width;
        }
        if let Some(width) = args.chunk_width {
            self.generation.chunk_width = width;
        }
        if args.no_caves {
            self.generation.generate_caves = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if args.ascii {
            self.debug.ascii_map = true;
        }
    }
}
