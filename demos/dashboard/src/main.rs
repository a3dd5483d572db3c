//! dashboard: runs the smart-shoes simulator and prints a text dashboard.
//!
//! ```text
//! cargo run -p dashboard                    # simulated clock, default config
//! cargo run -p dashboard -- demo.json       # settings from a JSON file
//! RUST_LOG=shoes_sim=debug cargo run -p dashboard
//! ```
//!
//! Every field of the JSON config is optional:
//!
//! ```json
//! {
//!   "sim": { "total_ticks": 96, "seed": 7, "snapshot_interval_ticks": 8 },
//!   "history_capacity": 20,
//!   "operation_mode": "Sensitive",
//!   "sensitivity": 75,
//!   "output_dir": "output/dashboard",
//!   "realtime": false,
//!   "duration_secs": 30,
//!   "emergency_at_tick": 40
//! }
//! ```
//!
//! With `realtime: false` the run uses simulated time and writes
//! `readings.csv` + `metrics.csv` to `output_dir`.  With `realtime: true` a
//! background thread ticks a shared engine against the wall clock while the
//! main thread redraws the dashboard, for `duration_secs`.
//!
//! `emergency_at_tick` presses the emergency button once at that tick (or,
//! in real time, after that many fast intervals) and prints the alert.

use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

use shoes_core::{SimConfig, SimRng, SimTime, Tick};
use shoes_output::{CsvWriter, DashboardOutputObserver, TextDashboard, render};
use shoes_sensor::history::DEFAULT_HISTORY_CAPACITY;
use shoes_sim::{
    DashboardObserver, EngineBuilder, OperationMode, Sensitivity, SharedEngine, SimBuilder,
    SimulationEngine, Snapshot,
};

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    sim:              SimConfig,
    history_capacity: usize,
    operation_mode:   OperationMode,
    sensitivity:      Sensitivity,
    output_dir:       PathBuf,
    realtime:         bool,
    duration_secs:    u64,
    emergency_at_tick: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sim:              SimConfig::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            operation_mode:   OperationMode::default(),
            sensitivity:      Sensitivity::default(),
            output_dir:       PathBuf::from("output/dashboard"),
            realtime:         false,
            duration_secs:    30,
            emergency_at_tick: None,
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Feeds both the CSV export and the stdout dashboard.
struct DemoObserver {
    csv:          DashboardOutputObserver<CsvWriter>,
    text:         TextDashboard<Stdout>,
    emergency_at: Option<Tick>,
}

impl DashboardObserver for DemoObserver {
    fn on_fast_tick(&mut self, tick: Tick, engine: &SimulationEngine) {
        self.csv.on_fast_tick(tick, engine);
        if self.emergency_at == Some(tick) {
            println!("{}\n", engine.trigger_emergency());
        }
    }

    fn on_slow_tick(&mut self, tick: Tick, engine: &SimulationEngine) {
        self.csv.on_slow_tick(tick, engine);
    }

    fn on_snapshot(&mut self, tick: Tick, snapshot: &Snapshot) {
        self.text.on_snapshot(tick, snapshot);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.csv.on_sim_end(final_tick);
        self.text.on_sim_end(final_tick);
    }
}

// ── Modes ─────────────────────────────────────────────────────────────────────

fn build_engine(config: &DemoConfig, rng: SimRng) -> Result<SimulationEngine> {
    let engine = EngineBuilder::new()
        .rng(rng)
        .history_capacity(config.history_capacity)
        .operation_mode(config.operation_mode)
        .sensitivity(config.sensitivity)
        .build()?;
    Ok(engine)
}

fn run_simulated(config: &DemoConfig) -> Result<()> {
    let engine = build_engine(config, SimRng::new(config.sim.seed))?;
    let mut sim = SimBuilder::new(config.sim.clone()).engine(engine).build()?;

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;
    let mut obs = DemoObserver {
        csv:          DashboardOutputObserver::new(CsvWriter::new(&config.output_dir)?),
        text:         TextDashboard::new(io::stdout()),
        emergency_at: config.emergency_at_tick.map(Tick),
    };

    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.csv.take_error() {
        eprintln!("output error: {e}");
    }
    if let Some(e) = obs.text.take_error() {
        eprintln!("dashboard error: {e}");
    }

    let (readings, metrics) = obs.csv.rows_written();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  readings.csv : {readings} rows");
    println!("  metrics.csv  : {metrics} rows");
    println!("  frames drawn : {}", obs.text.frames());
    Ok(())
}

fn run_realtime(config: &DemoConfig) -> Result<()> {
    config.sim.validate()?;
    let shared = SharedEngine::new(build_engine(config, SimRng::from_entropy())?);
    let stop = Arc::new(AtomicBool::new(false));

    let fast = Duration::from_millis(u64::from(config.sim.fast_interval_ms));
    let slow_every = config.sim.slow_every();

    let driver = {
        let shared = shared.clone();
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            let mut ticks = 0_u64;
            while !stop.load(Ordering::Relaxed) {
                thread::sleep(fast);
                ticks += 1;
                shared.fast_tick(SimTime::now());
                if ticks.is_multiple_of(slow_every) {
                    shared.slow_tick();
                }
            }
            ticks
        })
    };

    let mut dash = TextDashboard::new(io::stdout());
    let redraw = wall_span(fast, config.sim.snapshot_interval_ticks);
    let mut emergency_at = config
        .emergency_at_tick
        .and_then(|n| Instant::now().checked_add(wall_span(fast, n)));
    let deadline = Instant::now() + Duration::from_secs(config.duration_secs);
    while Instant::now() < deadline {
        thread::sleep(redraw);
        if emergency_at.is_some_and(|at| Instant::now() >= at) {
            emergency_at = None;
            println!("{}\n", shared.trigger_emergency());
        }
        dash.draw(None, &shared.snapshot())?;
    }

    stop.store(true, Ordering::Relaxed);
    let ticks = driver
        .join()
        .map_err(|_| anyhow::anyhow!("tick driver thread panicked"))?;

    let last = shared.snapshot();
    println!("Real-time run complete: {ticks} ticks");
    println!("{}", render(&last));
    Ok(())
}

/// Wall-clock span of `ticks` fast intervals: at least one interval,
/// saturating instead of wrapping for huge tick counts.
fn wall_span(fast: Duration, ticks: u64) -> Duration {
    let ticks = u32::try_from(ticks.max(1)).unwrap_or(u32::MAX);
    fast.saturating_mul(ticks)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(path.as_deref())?;

    println!("=== smart shoes dashboard ===");
    println!(
        "Mode: {}  |  Sensitivity: {}  |  {}",
        config.operation_mode,
        config.sensitivity,
        if config.realtime { "real-time" } else { "simulated" }
    );
    println!();
    info!("config: {config:?}");

    if config.realtime {
        run_realtime(&config)
    } else {
        run_simulated(&config)
    }
}
