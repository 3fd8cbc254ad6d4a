use bandit_regret::config::{AppConfig, SimulationConfig};
use bandit_regret::errors::AppError;
use bandit_regret::policies::MaybeSeededRng;
use bandit_regret::sweep::run_sweep;

use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let SimulationConfig {
        means,
        num_runs,
        seed,
        policy,
    } = config.simulation;
    info!(seed = ?seed, "Loaded configuration");

    let mut rng = MaybeSeededRng::new(seed);
    let report = run_sweep(policy, &means, config.sweep, num_runs, &mut rng)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;

    Ok(())
}
