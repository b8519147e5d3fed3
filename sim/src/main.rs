use anyhow::Result;
use clap::Parser;
use tracing::info;

use sim::{build_simulation, load_config, Args, Segment};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut cfg = load_config(&args.config)?;
    if let Some(vehicle) = &args.vehicle {
        cfg.start_vehicle = vehicle.clone();
    }
    info!(?cfg, "Simulation config loaded");

    let mut sim = build_simulation(cfg)?;
    if let Some(ticks) = args.ticks {
        sim.set_schedule(vec![Segment { ticks, ..Default::default() }]);
    }
    let summary = sim.run()?;
    info!(run_id = %sim.run_id, ?summary, "Run complete");
    Ok(())
}
