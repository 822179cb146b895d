//! quickstart — smallest end-to-end example for the segroute engine.
//!
//! Builds a synthetic 4×4 street grid, snaps a few origin/destination pairs
//! onto it, routes them in one batch and prints every result as JSON.
//!
//! ```text
//! cargo run -p quickstart                 # default configuration
//! cargo run -p quickstart -- config.json  # RoutingConfig as JSON
//! RUST_LOG=debug cargo run -p quickstart  # snapping and search statistics
//! ```

mod network;

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use serde_json::json;

use sr_core::RoutingConfig;
use sr_routing::IndexRouter;

use network::{build_network, sample_queries};

fn load_config(path: Option<&Path>) -> Result<RoutingConfig> {
    let Some(path) = path else {
        return Ok(RoutingConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: RoutingConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref().map(Path::new))?;
    let router = IndexRouter::new(config)?;

    let t0 = Instant::now();
    let graph = build_network(router.config())?;
    info!(
        "network: {} roads, {} segments, {} joints ({:.1} ms)",
        graph.road_count(),
        graph.geometry().segment_count(),
        graph.joint_count(),
        t0.elapsed().as_secs_f64() * 1e3,
    );

    let queries = sample_queries();
    let t1 = Instant::now();
    let results = router.route_many(&graph, &queries)?;
    info!("routed {} queries in {:.2} ms", queries.len(), t1.elapsed().as_secs_f64() * 1e3);

    let report: Vec<_> = queries
        .iter()
        .zip(&results)
        .map(|(&(start, finish), result)| match result {
            Ok(route) => json!({
                "start":     start,
                "finish":    finish,
                "time_secs": route.total_time_secs,
                "length_m":  route.length_m(),
                "route":     route,
            }),
            Err(e) => json!({
                "start":  start,
                "finish": finish,
                "error":  e.to_string(),
            }),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
