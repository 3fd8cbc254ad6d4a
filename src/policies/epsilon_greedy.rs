use super::arm::RunState;
use super::policy::{Policy, PolicyType, RunReport};

use crate::arms::BanditProblem;
use crate::errors::BanditError;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Plays every arm once, then explores a uniformly random arm with
/// probability epsilon and exploits the best sample mean otherwise.
///
/// With `decay` the exploration probability at step `t` is `1 / (t + 1)`
/// and `epsilon` is ignored. The default is pure greedy.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EpsilonGreedy {
    epsilon: f64,
    decay: bool,
}

impl EpsilonGreedy {
    pub fn new(epsilon: f64, decay: bool) -> Result<Self, BanditError> {
        let policy = Self { epsilon, decay };
        policy.check_epsilon()?;
        Ok(policy)
    }

    fn check_epsilon(&self) -> Result<(), BanditError> {
        if (0.0..=1.0).contains(&self.epsilon) {
            Ok(())
        } else {
            Err(BanditError::invalid(format!(
                "epsilon {} is not a probability in [0, 1]",
                self.epsilon
            )))
        }
    }

    fn epsilon_at(&self, t: usize) -> f64 {
        if self.decay {
            1.0 / ((t + 1) as f64)
        } else {
            self.epsilon
        }
    }
}

#[typetag::serde]
impl Policy for EpsilonGreedy {
    fn policy_type(&self) -> PolicyType {
        PolicyType::EpsilonGreedy {
            epsilon: self.epsilon,
            decay: self.decay,
        }
    }

    fn validate(&self, _: &BanditProblem) -> Result<(), BanditError> {
        // the problem already guarantees horizon >= num_arms for the warm-up
        self.check_epsilon()
    }

    fn simulate(
        &self,
        problem: &BanditProblem,
        rng: &mut dyn RngCore,
    ) -> Result<RunReport, BanditError> {
        self.validate(problem)?;

        let num_arms = problem.num_arms();
        let mut state = RunState::new(num_arms);

        // warm-up so that every sample mean is defined
        for arm_id in 0..num_arms {
            state.play(problem, arm_id, rng);
        }

        let mut explore_steps = 0;
        for t in num_arms..problem.horizon() {
            let arm_id = if rng.random::<f64>() < self.epsilon_at(t) {
                explore_steps += 1;
                rng.random_range(0..num_arms)
            } else {
                state.best_arm()
            };
            state.play(problem, arm_id, rng);
        }

        Ok(state.into_report(explore_steps, None))
    }
}
