use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser};
use itertools::Itertools;
use libgame::pattern::Pattern;

use crate::logging::{Fallback, LogConfig, LogLevel};

pub const DEFAULT_LIVE_CELLS: usize = 800;
pub const DEFAULT_GENERATION_MS: u64 = 500;

#[derive(Parser, Debug)]
#[command(name = "termlife", about = "Conway's Game of Life in the terminal", version)]
pub struct Cli {
    #[arg(
        short = 'l',
        long = "live-cells",
        value_name = "COUNT",
        default_value_t = DEFAULT_LIVE_CELLS,
        help = "The number of randomly populated live cells on startup"
    )]
    pub live_cells: usize,

    #[arg(
        short = 's',
        long = "speed",
        value_name = "MILLIS",
        default_value_t = DEFAULT_GENERATION_MS,
        help = "The number of milliseconds between each generation"
    )]
    pub generation_ms: u64,

    #[arg(
        short = 'p',
        long,
        value_name = "NAME",
        value_parser = parse_pattern,
        help = "Start from a named pattern instead of random cells"
    )]
    pub pattern: Option<&'static Pattern>,

    #[arg(long, help = "Seed the random generator for a reproducible start")]
    pub seed: Option<u64>,

    #[arg(
        short = 'g',
        long,
        value_name = "COUNT",
        help = "Stop after this many generations"
    )]
    pub generations: Option<u64>,

    #[command(flatten)]
    pub headless: HeadlessArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl Cli {
    pub fn generation_interval(&self) -> Duration {
        Duration::from_millis(self.generation_ms)
    }
}

#[derive(Args, Debug, Clone)]
pub struct HeadlessArgs {
    #[arg(
        long = "headless",
        help = "Print each generation as plain text instead of drawing the full-screen view"
    )]
    pub enabled: bool,

    #[arg(long, default_value_t = 20, requires = "enabled", help = "Grid rows in headless mode")]
    pub rows: usize,

    #[arg(long, default_value_t = 40, requires = "enabled", help = "Grid columns in headless mode")]
    pub cols: usize,
}

#[derive(Args, Debug, Clone)]
pub struct LoggingArgs {
    #[arg(
        long = "log-level",
        value_enum,
        env = "TERMLIFE_LOG_LEVEL",
        default_value_t = LogLevel::Warn,
        help = "Minimum log level (error, warn, info, debug, trace)"
    )]
    pub level: LogLevel,

    #[arg(
        long = "log-file",
        value_name = "PATH",
        env = "TERMLIFE_LOG_FILE",
        help = "Append logs to the specified file"
    )]
    pub file: Option<PathBuf>,
}

impl LoggingArgs {
    pub fn to_config(&self, headless: bool) -> LogConfig {
        LogConfig {
            level: self.level,
            file: self.file.clone(),
            fallback: if headless {
                Fallback::Stderr
            } else {
                Fallback::Discard
            },
        }
    }
}

fn parse_pattern(name: &str) -> Result<&'static Pattern, String> {
    Pattern::find(name).ok_or_else(|| {
        let known = Pattern::names().join(", ");
        format!("unknown pattern `{name}` (known: {known})")
    })
}
