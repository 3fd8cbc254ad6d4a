use crate::monte_carlo::DEFAULT_NUM_RUNS;
use crate::policies::PolicyType;
use crate::sweep::SweepAxis;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    pub means: Vec<f64>,
    #[serde(default = "default_num_runs")]
    pub num_runs: usize,
    pub seed: Option<u64>,
    #[serde(default)]
    pub policy: PolicyType,
}

fn default_num_runs() -> usize {
    DEFAULT_NUM_RUNS
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub simulation: SimulationConfig,
    pub sweep: SweepAxis,
}

/// `BANDIT__SECTION__KEY` overrides. `simulation.means` is the only list
/// read from the environment, as comma separated values; the sweep values
/// sit in a tagged table and must come from the config file.
fn environment() -> Environment {
    Environment::with_prefix("BANDIT")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("simulation.means")
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(environment())
            .build()?;

        builder.try_deserialize()
    }
}
