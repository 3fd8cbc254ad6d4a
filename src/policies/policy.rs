use super::arm::ArmStats;
use super::epsilon_greedy::EpsilonGreedy;
use super::fixed_exploration::{ExplorationMode, FixedExploration};

use crate::arms::BanditProblem;
use crate::errors::BanditError;
use crate::monte_carlo;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Outcome of one simulated run.
#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub regret: f64,
    pub arms: Vec<ArmStats>,
    pub explore_steps: usize,
    pub committed_arm: Option<usize>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PolicyType {
    EpsilonGreedy {
        #[serde(default)]
        epsilon: f64,
        #[serde(default)]
        decay: bool,
    },
    FixedExploration {
        #[serde(default)]
        explore_steps: Option<usize>,
        #[serde(default)]
        mode: ExplorationMode,
    },
}

impl Default for PolicyType {
    fn default() -> Self {
        PolicyType::EpsilonGreedy {
            epsilon: 0.0,
            decay: false,
        }
    }
}

impl PolicyType {
    pub fn into_inner(self) -> Result<Box<dyn Policy>, BanditError> {
        match self {
            PolicyType::EpsilonGreedy { epsilon, decay } => {
                Ok(Box::new(EpsilonGreedy::new(epsilon, decay)?))
            }
            PolicyType::FixedExploration {
                explore_steps,
                mode,
            } => Ok(Box::new(FixedExploration::new(explore_steps, mode))),
        }
    }

    /// Same policy with another constant exploration rate.
    pub fn with_epsilon(self, epsilon: f64) -> Result<Self, BanditError> {
        match self {
            PolicyType::EpsilonGreedy { decay, .. } => Ok(PolicyType::EpsilonGreedy { epsilon, decay }),
            PolicyType::FixedExploration { .. } => Err(BanditError::invalid(
                "exploration rate only applies to epsilon-greedy",
            )),
        }
    }
}

/// An arm-selection strategy played against a [`BanditProblem`].
///
/// Implementors only provide `simulate`; the single-run regret and the Monte
/// Carlo average are derived from it.
#[typetag::serde(tag = "type")]
pub trait Policy: Debug {
    fn policy_type(&self) -> PolicyType;

    /// Checks that the policy can be played on `problem` at all. Runs before
    /// any reward is drawn.
    fn validate(&self, problem: &BanditProblem) -> Result<(), BanditError>;

    fn simulate(
        &self,
        problem: &BanditProblem,
        rng: &mut dyn RngCore,
    ) -> Result<RunReport, BanditError>;

    fn simulate_once(
        &self,
        problem: &BanditProblem,
        rng: &mut dyn RngCore,
    ) -> Result<f64, BanditError> {
        self.simulate(problem, rng).map(|report| report.regret)
    }

    fn average_regret(
        &self,
        problem: &BanditProblem,
        num_runs: usize,
        rng: &mut dyn RngCore,
    ) -> Result<f64, BanditError> {
        monte_carlo::average_regret(self, problem, num_runs, rng)
    }

    /// Mean regret over [`monte_carlo::DEFAULT_NUM_RUNS`] runs.
    fn average_regret_default(
        &self,
        problem: &BanditProblem,
        rng: &mut dyn RngCore,
    ) -> Result<f64, BanditError> {
        self.average_regret(problem, monte_carlo::DEFAULT_NUM_RUNS, rng)
    }
}
