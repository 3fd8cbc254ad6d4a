use crate::arms::BanditProblem;
use crate::errors::BanditError;
use crate::monte_carlo;
use crate::policies::{MaybeSeededRng, Policy, PolicyType};

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Parameter varied across a sweep, every other setting stays fixed.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "axis", rename_all = "snake_case")]
pub enum SweepAxis {
    Horizon { values: Vec<usize> },
    Epsilon { values: Vec<f64>, horizon: usize },
}

#[derive(Clone, Debug, Serialize)]
pub struct SweepPoint {
    pub x: f64,
    pub mean_regret: f64,
}

#[derive(Debug, Serialize)]
pub struct SweepReport {
    pub id: Uuid,
    pub policy: Box<dyn Policy>,
    pub means: Vec<f64>,
    pub num_runs: usize,
    pub seed: Option<u64>,
    pub sweep: SweepAxis,
    pub points: Vec<SweepPoint>,
}

/// Averages the regret of `policy` at every value of `axis`, in order, all
/// points drawing from the same random stream.
pub fn run_sweep(
    policy: PolicyType,
    means: &[f64],
    axis: SweepAxis,
    num_runs: usize,
    rng: &mut MaybeSeededRng,
) -> Result<SweepReport, BanditError> {
    let num_arms = means.len();
    info!(policy = ?policy, num_arms = %num_arms, num_runs = %num_runs, "Starting sweep");

    let points = match &axis {
        SweepAxis::Horizon { values } => {
            let candidate = policy.clone().into_inner()?;
            values
                .iter()
                .map(|&horizon| -> Result<SweepPoint, BanditError> {
                    let problem = BanditProblem::bernoulli(num_arms, horizon, means.to_vec())?;
                    let mean_regret = monte_carlo::average_regret(
                        candidate.as_ref(),
                        &problem,
                        num_runs,
                        rng.get_rng(),
                    )?;
                    Ok(SweepPoint {
                        x: horizon as f64,
                        mean_regret,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?
        }
        SweepAxis::Epsilon { values, horizon } => {
            let problem = BanditProblem::bernoulli(num_arms, *horizon, means.to_vec())?;
            values
                .iter()
                .map(|&epsilon| -> Result<SweepPoint, BanditError> {
                    let candidate = policy.clone().with_epsilon(epsilon)?.into_inner()?;
                    let mean_regret = monte_carlo::average_regret(
                        candidate.as_ref(),
                        &problem,
                        num_runs,
                        rng.get_rng(),
                    )?;
                    Ok(SweepPoint {
                        x: epsilon,
                        mean_regret,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    let report = SweepReport {
        id: Uuid::new_v4(),
        policy: policy.into_inner()?,
        means: means.to_vec(),
        num_runs,
        seed: rng.seed(),
        sweep: axis,
        points,
    };
    info!(id = %report.id, num_points = %report.points.len(), "Finished sweep");

    Ok(report)
}
