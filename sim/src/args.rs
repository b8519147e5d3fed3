use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "submarine-sim")]
#[command(about = "Headless submarine state simulation", long_about = None)]
pub struct Args {
    /// Path to the TOML run configuration
    #[arg(long, default_value = "sim.toml")]
    pub config: PathBuf,
    /// Override the vehicle class the run starts with
    #[arg(long)]
    pub vehicle: Option<String>,
    /// Replace the configured schedule with this many idle ticks
    #[arg(long)]
    pub ticks: Option<u32>,
}
