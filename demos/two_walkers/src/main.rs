//! two_walkers — batch encounter study on a synthetic neighbourhood.
//!
//! Two walkers leave from random corners of the neighbourhood, each must pass
//! through a checkpoint inside the marked area, and then walk on to a random
//! destination.  Every run reports whether (and where) they crossed paths.
//!
//! Usage: `two_walkers [config.json]`.  Set `RUST_LOG=debug` for per-run
//! detail.

mod config;
mod network;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use rdv_output::{CsvWriter, OutputWriter, SimOutputObserver};
use rdv_sim::{BatchSummary, ScenarioSampler, SimError, SimObserver, SimulationResult, Simulation};
use rdv_spatial::{AreaPartition, DijkstraRouter};

use config::DemoConfig;
use network::build_grid;

// ── Observer wrapper that keeps a few results for the report ─────────────────

const SHOWCASE_LIMIT: usize = 5;

struct ReportingObserver<'n, W: OutputWriter> {
    inner:    SimOutputObserver<'n, W>,
    showcase: Vec<(u64, SimulationResult)>,
    skipped:  Vec<u64>,
}

impl<'n, W: OutputWriter> ReportingObserver<'n, W> {
    fn new(inner: SimOutputObserver<'n, W>) -> Self {
        Self { inner, showcase: Vec::new(), skipped: Vec::new() }
    }
}

impl<W: OutputWriter> SimObserver for ReportingObserver<'_, W> {
    fn on_run_end(&mut self, run: u64, result: &SimulationResult) {
        if result.met() && self.showcase.len() < SHOWCASE_LIMIT {
            self.showcase.push((run, result.clone()));
        }
        self.inner.on_run_end(run, result);
    }

    fn on_run_skipped(&mut self, run: u64, error: &SimError) {
        self.skipped.push(run);
        self.inner.on_run_skipped(run, error);
    }

    fn on_batch_end(&mut self, summary: &BatchSummary) {
        self.inner.on_batch_end(summary);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading scenario from {path}");
            DemoConfig::load(Path::new(&path))?
        }
        None => DemoConfig::default(),
    };
    let agent_a = cfg.walker_a.to_params()?;
    let agent_b = cfg.walker_b.to_params()?;

    println!("=== two_walkers: rendezvous encounter study ===");
    println!(
        "Walker A: leaves {} at {}  |  Walker B: leaves {} at {}",
        agent_a.departure, agent_a.pace, agent_b.departure, agent_b.pace
    );
    println!(
        "Tolerance: {} s / {} m  |  Policy: {:?}  |  Checkpoints: {:?}  |  Seed: {}",
        cfg.sim.tolerance.time_secs,
        cfg.sim.tolerance.distance_m,
        cfg.sim.scan_policy,
        cfg.checkpoint_mode,
        cfg.sim.seed,
    );
    println!();

    // 1. Street network and area.
    let network = build_grid(cfg.grid.cols, cfg.grid.rows, cfg.grid.block_m)?;
    let area = AreaPartition::from_bbox(&network, cfg.area);
    println!(
        "Street network: {} nodes, {} streets  |  area: {} inside, {} outside",
        network.node_count(),
        network.street_count(),
        area.inside().len(),
        area.outside().len(),
    );

    // 2. Simulation and sampler.
    let sim = Simulation::new(&network, DijkstraRouter, cfg.sim)?;
    let sampler = ScenarioSampler::new(&area, cfg.checkpoint_mode);

    // 3. Output.
    std::fs::create_dir_all(&cfg.output_dir)?;
    let writer = CsvWriter::new(&cfg.output_dir)?;
    let mut obs = ReportingObserver::new(SimOutputObserver::new(writer, &network));

    // 4. Run.
    let t0 = Instant::now();
    let summary = sim.run_batch(&sampler, &agent_a, &agent_b, cfg.runs, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Batch complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  runs: {}  |  met: {}  |  skipped (unroutable): {}  |  encounter rate: {:.1} %",
        summary.runs,
        summary.encounters,
        summary.skipped,
        summary.encounter_rate() * 100.0,
    );
    if !obs.skipped.is_empty() {
        println!("  skipped runs: {:?}", obs.skipped);
    }
    println!("  output: {}", cfg.output_dir.display());
    println!();

    // 6. A few encounters.
    println!(
        "{:<6} {:<10} {:<10} {:<10} {:<10} {:>8}",
        "Run", "Node", "A at", "B at", "B node", "Dist m"
    );
    println!("{}", "-".repeat(60));
    for (run, result) in &obs.showcase {
        let Some(e) = &result.encounter else { continue };
        println!(
            "{:<6} {:<10} {:<10} {:<10} {:<10} {:>8.1}",
            run,
            e.node.0,
            e.time.to_string(),
            e.other_time.to_string(),
            e.other_node.0,
            e.distance_m,
        );
    }

    Ok(())
}
