use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lander_autopilot::config::{ControllerConfig, MARS_GRAVITY};
use lander_autopilot::sim::{self, DriverConfig};

#[derive(Parser, Debug)]
#[command(name = "lander-autopilot")]
#[command(about = "Per-tick descent autopilot: reads lander state on stdin, writes `angle thrust` on stdout")]
struct Cli {
    /// Surface gravity, m/s^2
    #[arg(long, default_value_t = MARS_GRAVITY)]
    gravity: f64,

    /// JSON file overriding controller tunables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not write the TARGET diagnostic block to stderr
    #[arg(long)]
    no_diagnostics: bool,

    /// Stop after this many ticks instead of waiting for input to close
    #[arg(long)]
    max_ticks: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let cli = Cli::parse();

    let controller_config = match &cli.config {
        Some(path) => ControllerConfig::load(path)
            .with_context(|| format!("loading controller config {}", path.display()))?,
        None => ControllerConfig::default(),
    };
    let driver_config = DriverConfig {
        max_ticks: cli.max_ticks,
        diagnostics: !cli.no_diagnostics,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = BufWriter::new(io::stdout().lock());
    let mut diagnostics = io::stderr().lock();

    let report = sim::run(
        &mut input,
        &mut output,
        &mut diagnostics,
        cli.gravity,
        controller_config,
        &driver_config,
    )
    .context("autopilot run aborted")?;

    log::info!(
        "{} ticks, braking from tick {:?}, angle range {:?}..{:?}",
        report.ticks,
        report.final_deceleration_tick,
        report.min_angle,
        report.max_angle
    );
    Ok(())
}
