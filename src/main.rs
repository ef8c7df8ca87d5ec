//! Command-line report of enemy concentrations and area security.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fieldsense::{
    area_secure, enum_droids, find_clusters, init_logging, MapObject, PlayerFilter, Scenario,
    WorldHandle, WorldView,
};
use log::{info, warn};

/// Reports unit concentrations and area security for a scenario
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario description in JSON
    scenario: PathBuf,

    /// Clustering radius in tiles
    #[arg(short, long, default_value_t = 8.0)]
    radius: f64,

    /// Only cluster droids of this player (default: every enemy of the controller)
    #[arg(short, long)]
    player: Option<i32>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let json = fs::read_to_string(&args.scenario)
        .with_context(|| format!("reading scenario {}", args.scenario.display()))?;
    let scenario = Scenario::from_json_str(&json).context("parsing scenario")?;
    scenario.config.validate().context("validating scenario config")?;
    let config = scenario.config.clone();
    let world = WorldHandle::from_scenario(scenario);

    let filter = args.player.map_or(PlayerFilter::Enemies, PlayerFilter::Player);
    let droids = enum_droids(&world, &config, filter);
    let clusters = find_clusters(&droids, args.radius);
    info!(
        "{} droids form {} clusters at radius {}",
        droids.len(),
        clusters.clusters.len(),
        args.radius
    );
    for (index, cluster) in clusters.clusters.iter().enumerate() {
        info!(
            "cluster #{index}: {} droids around ({}, {})",
            cluster.len(),
            cluster.centroid.x,
            cluster.centroid.y
        );
    }
    if let Some(largest) = clusters.largest() {
        info!("largest concentration: cluster #{} ({} droids)", clusters.max_idx, largest.len());
    }

    for label in world.labels() {
        if !matches!(world.object_by_label(label), Some(MapObject::Area(_))) {
            continue;
        }
        match area_secure(&world, label, config.controller) {
            Ok(secure) => info!("area {label:?} secure for player {}: {secure}", config.controller),
            Err(err) => warn!("skipping {label:?}: {err}"),
        }
    }
    Ok(())
}
