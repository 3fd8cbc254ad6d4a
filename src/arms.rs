use crate::errors::BanditError;

use rand::RngCore;
use rand_distr::{Bernoulli, Distribution};
use std::cmp::Ordering;
use std::fmt::Debug;

/// Stochastic rewards behind a fixed, ordered set of arms.
///
/// `means` are the hidden expectations the oracle knows about; they define
/// the regret of a play whatever the realised reward is. `pull` draws one
/// independent reward from the given arm.
pub trait RewardSource: Debug {
    fn means(&self) -> &[f64];

    fn pull(&self, arm_id: usize, rng: &mut dyn RngCore) -> f64;

    fn num_arms(&self) -> usize {
        self.means().len()
    }

    fn best_mean(&self) -> f64 {
        self.means()
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    // gap to the oracle, zero for the best arm
    fn gap(&self, arm_id: usize) -> f64 {
        self.best_mean() - self.means()[arm_id]
    }
}

#[derive(Clone, Debug)]
pub struct BernoulliArms {
    means: Vec<f64>,
    distributions: Vec<Bernoulli>,
}

impl BernoulliArms {
    pub fn new(means: Vec<f64>) -> Result<Self, BanditError> {
        let distributions = means
            .iter()
            .enumerate()
            .map(|(arm_id, &p)| {
                Bernoulli::new(p).map_err(|_| {
                    BanditError::invalid(format!(
                        "mean {p} of arm {arm_id} is not a probability in [0, 1]"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            means,
            distributions,
        })
    }
}

impl RewardSource for BernoulliArms {
    fn means(&self) -> &[f64] {
        &self.means
    }

    fn pull(&self, arm_id: usize, rng: &mut dyn RngCore) -> f64 {
        if self.distributions[arm_id].sample(rng) {
            1.0
        } else {
            0.0
        }
    }
}

/// An arm set together with the horizon `T` it is played for.
#[derive(Debug)]
pub struct BanditProblem {
    source: Box<dyn RewardSource>,
    horizon: usize,
    best_mean: f64,
}

impl BanditProblem {
    pub fn bernoulli(num_arms: usize, horizon: usize, means: Vec<f64>) -> Result<Self, BanditError> {
        if means.len() != num_arms {
            return Err(BanditError::invalid(format!(
                "expected {num_arms} arm means, got {}",
                means.len()
            )));
        }
        Self::new(BernoulliArms::new(means)?, horizon)
    }

    pub fn new<S: RewardSource + 'static>(source: S, horizon: usize) -> Result<Self, BanditError> {
        let num_arms = source.num_arms();
        if num_arms == 0 {
            return Err(BanditError::invalid("at least one arm is required"));
        }
        if horizon < num_arms {
            return Err(BanditError::invalid(format!(
                "horizon {horizon} is shorter than the number of arms {num_arms}"
            )));
        }
        if let Some(arm_id) = source.means().iter().position(|mean| !mean.is_finite()) {
            return Err(BanditError::invalid(format!("mean of arm {arm_id} is not finite")));
        }

        Ok(Self {
            best_mean: source.best_mean(),
            source: Box::new(source),
            horizon,
        })
    }

    pub fn num_arms(&self) -> usize {
        self.source.num_arms()
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn means(&self) -> &[f64] {
        self.source.means()
    }

    pub fn best_mean(&self) -> f64 {
        self.best_mean
    }

    pub fn worst_mean(&self) -> f64 {
        self.means().iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Second largest mean, counting ties: `[0.5, 0.5]` gives 0.5.
    pub fn second_best_mean(&self) -> Option<f64> {
        let mut sorted = self.means().to_vec();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        sorted.get(1).copied()
    }

    pub fn gap(&self, arm_id: usize) -> f64 {
        self.best_mean - self.means()[arm_id]
    }

    pub fn pull(&self, arm_id: usize, rng: &mut dyn RngCore) -> f64 {
        self.source.pull(arm_id, rng)
    }

    /// Same arms, played for another horizon.
    pub fn with_horizon(self, horizon: usize) -> Result<Self, BanditError> {
        let num_arms = self.num_arms();
        if horizon < num_arms {
            return Err(BanditError::invalid(format!(
                "horizon {horizon} is shorter than the number of arms {num_arms}"
            )));
        }
        Ok(Self { horizon, ..self })
    }
}
