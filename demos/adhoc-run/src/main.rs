//! adhoc-run — scenario runner for the manet_sim toolkit.
//!
//! Builds one of the three mobility scenarios, drives it to convergence (or
//! the 600 s ceiling) with a toy echo traffic pattern standing in for the
//! external traffic layer, and appends the aggregate report to
//! `<output-dir>/<n>nodes_<scenario>_<speed>mps_<protocol>.txt`.

mod traffic;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;

use manet_core::{RoutingProtocol, ScenarioConfig, ScenarioKind};
use manet_sim::Scenario;
use manet_stats::{FlowCsvWriter, SimulationReport};

use traffic::install_traffic;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(about = "Ad-hoc wireless scenario simulation run")]
struct Cli {
    /// TOML scenario configuration; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of nodes.
    #[arg(long)]
    nodes: Option<u32>,

    /// Mobility model (RandomWalk2d, LeaderGroup, DynamicGroup).
    #[arg(long)]
    mobility: Option<String>,

    /// Node speed in m/s (1, 15, 35 in the study runs).
    #[arg(long)]
    speed: Option<f64>,

    /// Routing protocol (AODV, OLSR, DSDV).
    #[arg(long)]
    routing: Option<String>,

    /// Master RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the report and flow dump.
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

/// Parse a selector leniently: an unknown name logs a warning and installs
/// nothing, it never aborts the run.
fn lenient<T: FromStr<Err = manet_core::CoreError>>(what: &str, s: &str) -> Option<T> {
    match s.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("{what}: {e}; installing none");
            None
        }
    }
}

fn load_config(cli: &Cli) -> Result<ScenarioConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => ScenarioConfig::default(),
    };

    if let Some(n) = cli.nodes {
        config.population = n;
    }
    if let Some(s) = &cli.mobility {
        config.mobility = lenient::<ScenarioKind>("mobility selector", s);
    }
    if let Some(v) = cli.speed {
        config.speed_mps = v;
    }
    if let Some(s) = &cli.routing {
        config.routing = lenient::<RoutingProtocol>("routing selector", s);
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    println!("=== adhoc-run — manet_sim scenario ===");
    println!(
        "Nodes: {}  |  Mobility: {}  |  Speed: {} m/s  |  Routing: {}  |  Seed: {}",
        config.population,
        config.mobility.map_or_else(|| "none".into(), |k| k.to_string()),
        config.speed_mps,
        config.routing.map_or_else(|| "none".into(), |p| p.to_string()),
        config.seed,
    );
    println!();

    // 1. Build the world and pre-scheduled convergence callbacks.
    let (mut world, mut engine) = Scenario::build(&config)?;

    // 2. Stand-in traffic layer: echo flows between every ordered node pair.
    install_traffic(&mut engine, config.population);

    // 3. Run to convergence or the hard ceiling.
    let summary = Scenario::run(&mut world, &mut engine);
    println!("Simulated duration: {}", summary.end_time);
    println!(
        "Arrived: {}/{} ({})",
        summary.arrived,
        config.population,
        if summary.converged { "converged" } else { "ceiling" },
    );

    // 4. Aggregate the flow snapshot and the live counters.
    let totals = world.flows.totals();
    let report = SimulationReport::compute(&totals, &world.counters);
    println!("Packets sent: {}  lost: {}  received: {}", totals.tx_packets, totals.lost_packets, totals.rx_packets);
    println!("PacketLossRatio: {}%", report.packet_loss_ratio_pct);
    println!("AvgDelay: {} s", report.avg_delay_secs);
    println!(
        "ControlOverhead: {}% ({} control, {} data)",
        report.control_overhead_ratio * 100.0,
        world.counters.control(),
        world.counters.data(),
    );

    // 5. Persist: missing output must not fail the completed run.
    if let Err(e) = std::fs::create_dir_all(&config.output_dir) {
        warn!("cannot create {}: {e}; report not persisted", config.output_dir.display());
        return Ok(());
    }
    let report_path = config.report_path();
    if let Err(e) = report.append_to(&report_path) {
        warn!("cannot write {}: {e}; report not persisted", report_path.display());
    } else {
        println!("Report appended to {}", report_path.display());
    }

    let csv_path = report_path.with_extension("csv");
    match FlowCsvWriter::new(&csv_path) {
        Ok(mut writer) => {
            writer.write_flows(&world.flows.snapshot())?;
            writer.finish()?;
            println!("Flow dump written to {}", csv_path.display());
        }
        Err(e) => warn!("cannot write {}: {e}; flow dump skipped", csv_path.display()),
    }

    Ok(())
}
