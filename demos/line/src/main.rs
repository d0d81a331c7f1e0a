//! line — smallest demo for the dv distance-vector router.
//!
//! Builds a six-stop campus network, links it one road at a time (each link
//! triggers a network-wide synchronisation), then prints every stop's
//! routing table.  Set `RUST_LOG=dv_routing=debug` to watch the passes.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use dv_core::{Position, StopId, SyncConfig};
use dv_routing::StopNetwork;

// ── Network ───────────────────────────────────────────────────────────────────

const STOPS: [(&str, i32, i32); 6] = [
    ("UQLake",         5, 3),
    ("CampJil",        0, 2),
    ("Milo",           2, 0),
    ("Chancellor",     8, 6),
    ("Forgan",        12, 4),
    ("Indooroopilly",  1, 9),
];

/// Two-way roads by index into `STOPS`.
const ROADS: [(usize, usize); 6] = [(0, 1), (1, 2), (0, 3), (3, 4), (1, 5), (2, 0)];

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== line — dv distance-vector router ===");
    println!("Stops: {}  |  Roads: {}", STOPS.len(), ROADS.len());
    println!();

    let mut net = StopNetwork::with_config(SyncConfig::default())?;
    let ids: Vec<StopId> = STOPS
        .iter()
        .map(|&(name, x, y)| net.add_stop(name, Position::new(x, y)))
        .collect();

    let t0 = Instant::now();
    for &(a, b) in &ROADS {
        net.connect(ids[a], ids[b])
            .with_context(|| format!("linking {} and {}", STOPS[a].0, STOPS[b].0))?;
    }
    let report = net.synchronise_all()?;
    println!(
        "Converged in {:.3} ms (final check: {} pass, {} changes)",
        t0.elapsed().as_secs_f64() * 1_000.0,
        report.passes,
        report.changed_transfers,
    );
    println!();

    for &from in &ids {
        let stop = net.stop(from).context("stop vanished")?;
        let table = stop.routing_table();
        println!("{} {}", stop.name(), stop.position());
        println!("  {:<14} {:<14} {:>6}", "Destination", "Next", "Cost");
        println!("  {}", "-".repeat(36));
        for dest in table.destinations() {
            let name = |id: StopId| net.stop(id).map_or("?", |s| s.name());
            let next = table.next_stop(dest).map_or("-", name);
            println!("  {:<14} {:<14} {:>6}", name(dest), next, table.cost_to(dest));
        }
        println!();
    }

    let probe = Position::new(6, 5);
    if let Some(near) = net.nearest_stop(probe) {
        println!("Nearest stop to {probe}: {}", net.stop(near).map_or("?", |s| s.name()));
    }

    Ok(())
}
