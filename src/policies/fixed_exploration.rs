use super::arm::RunState;
use super::policy::{Policy, PolicyType, RunReport};

use crate::arms::BanditProblem;
use crate::errors::BanditError;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// How the exploration budget is derived when none is given.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplorationMode {
    /// `N = floor(0.1 * T)`, regret grows linearly with the horizon.
    #[default]
    Linear,
    /// `N = floor(K * ln(T) / delta^2)` capped at `T`, where delta is the gap
    /// between the two best arms.
    Sublinear,
}

/// Explore-then-commit: N uniformly random plays, then the arm with the best
/// sample mean is charged for the rest of the horizon without sampling.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FixedExploration {
    explore_steps: Option<usize>,
    mode: ExplorationMode,
}

impl FixedExploration {
    pub fn new(explore_steps: Option<usize>, mode: ExplorationMode) -> Self {
        Self {
            explore_steps,
            mode,
        }
    }

    /// Number of exploration steps N for `problem`.
    pub fn budget(&self, problem: &BanditProblem) -> Result<usize, BanditError> {
        let horizon = problem.horizon();

        match (self.explore_steps, self.mode) {
            (Some(steps), _) if steps > horizon => Err(BanditError::invalid(format!(
                "{steps} exploration steps exceed the horizon {horizon}"
            ))),
            (Some(steps), _) => Ok(steps),
            (None, ExplorationMode::Linear) => Ok((0.1 * horizon as f64).floor() as usize),
            (None, ExplorationMode::Sublinear) => {
                let second_best = problem.second_best_mean().ok_or_else(|| {
                    BanditError::invalid("sublinear exploration needs at least two arms")
                })?;
                let delta = problem.best_mean() - second_best;
                if delta <= 0.0 {
                    return Err(BanditError::invalid(format!(
                        "gap {delta} between the two best arms must be positive"
                    )));
                }

                let steps = (problem.num_arms() as f64) * (horizon as f64).ln() / delta.powi(2);
                Ok((steps.floor() as usize).min(horizon))
            }
        }
    }
}

#[typetag::serde]
impl Policy for FixedExploration {
    fn policy_type(&self) -> PolicyType {
        PolicyType::FixedExploration {
            explore_steps: self.explore_steps,
            mode: self.mode,
        }
    }

    fn validate(&self, problem: &BanditProblem) -> Result<(), BanditError> {
        self.budget(problem).map(|_| ())
    }

    fn simulate(
        &self,
        problem: &BanditProblem,
        rng: &mut dyn RngCore,
    ) -> Result<RunReport, BanditError> {
        let explore_steps = self.budget(problem)?;
        let num_arms = problem.num_arms();
        let mut state = RunState::new(num_arms);

        for _ in 0..explore_steps {
            let arm_id = rng.random_range(0..num_arms);
            state.play(problem, arm_id, rng);
        }

        // unexplored arms compete with a zero mean
        let best_arm = state.best_arm();
        state.commit(problem, best_arm, problem.horizon() - explore_steps);

        Ok(state.into_report(explore_steps, Some(best_arm)))
    }
}
