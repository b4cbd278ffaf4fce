//! compare: run the checkout simulator under one or both queueing
//! disciplines and print the reports.
//!
//! ```text
//! compare                          # both disciplines, fresh seed
//! compare --seed 42 --mode per-station --progress 60
//! compare --config store.json --json
//! RUST_LOG=cs_sim=debug compare    # station open/close events
//! ```
//!
//! A config file is a JSON `CheckoutConfig`; missing fields take their
//! defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cs_core::{CheckoutConfig, Mode, SimRng, Tick};
use cs_stats::StatisticsAggregator;
use cs_sim::{RunSummary, SimBuilder, SimObserver, TickSummary, compare_modes, resolve_seed};

/// Single queue vs. one queue per station.
#[derive(Parser)]
#[command(name = "compare")]
#[command(about = "Compare checkout queueing disciplines", long_about = None)]
struct Cli {
    /// RNG seed (overrides the config file's seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Discipline to run
    #[arg(long, value_enum, default_value_t = Which::Both)]
    mode: Which,

    /// JSON file with a CheckoutConfig
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log a progress line every N simulated minutes (0 = off)
    #[arg(long, default_value_t = 0)]
    progress: u64,

    /// Print results as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Which {
    SingleQueue,
    PerStation,
    Both,
}

// ── Progress observer ─────────────────────────────────────────────────────────

struct Progress {
    every:     u64,
    completed: u64,
    arrived:   u64,
}

impl SimObserver for Progress {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.completed += summary.completions.len() as u64;
        self.arrived += u64::from(summary.arrival.is_some());
        if self.every > 0 && summary.tick.0 % self.every == 0 {
            let (h, m) = summary.tick.hours_minutes();
            info!(
                "{}h {:02}m: {} arrived, {} served",
                h, m, self.arrived, self.completed
            );
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, _stats: &StatisticsAggregator) {
        info!("closed at {}", final_tick);
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "compare=info,cs_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate().context("invalid configuration")?;
    let seed = resolve_seed(config.seed);
    config.seed = Some(seed);

    let t0 = Instant::now();
    match cli.mode {
        Which::Both => {
            let comparison = compare_modes(&config)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                println!("{}", comparison.single_queue);
                println!("{}", comparison.per_station);
                print!("{comparison}");
            }
        }
        Which::SingleQueue | Which::PerStation => {
            let mode = if cli.mode == Which::SingleQueue {
                Mode::SingleQueue
            } else {
                Mode::PerStation
            };
            let summary = run_one(&config, mode, seed, cli.progress)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{summary}");
            }
        }
    }
    info!("done in {:.2?}", t0.elapsed());

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<CheckoutConfig> {
    let Some(path) = path else {
        return Ok(CheckoutConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn run_one(config: &CheckoutConfig, mode: Mode, seed: u64, every: u64) -> Result<RunSummary> {
    let mut sim = SimBuilder::new(config.clone())
        .mode(mode)
        .rng(SimRng::new(seed))
        .build()?;
    info!("running {} (seed {})", mode, seed);

    let mut progress = Progress { every, completed: 0, arrived: 0 };
    sim.run(&mut progress)?;
    Ok(RunSummary::from_sim(&sim, seed))
}
