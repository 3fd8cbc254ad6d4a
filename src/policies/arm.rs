use super::policy::RunReport;

use crate::arms::BanditProblem;
use crate::regret::RegretAccumulator;

use rand::RngCore;
use serde::Serialize;

#[derive(Clone, Debug, Default)]
pub struct ArmState {
    rewards: f64,
    pulls: u64,
}

impl ArmState {
    fn update(&mut self, reward: f64) {
        self.pulls += 1;
        self.rewards += reward;
    }

    // arms never played count as a zero mean, they are not skipped
    pub fn mean_reward(&self) -> f64 {
        if self.pulls == 0 {
            0.0
        } else {
            self.rewards / (self.pulls as f64)
        }
    }

    pub fn stats(&self) -> ArmStats {
        ArmStats {
            pulls: self.pulls,
            rewards: self.rewards,
            mean_reward: self.mean_reward(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArmStats {
    pub pulls: u64,
    pub rewards: f64,
    pub mean_reward: f64,
}

/// Everything a single run mutates: per-arm sums and counts plus the regret
/// charged so far. Created fresh for every run.
#[derive(Debug)]
pub struct RunState {
    arms: Vec<ArmState>,
    regret: RegretAccumulator,
}

impl RunState {
    pub fn new(num_arms: usize) -> Self {
        Self {
            arms: vec![ArmState::default(); num_arms],
            regret: RegretAccumulator::new(),
        }
    }

    /// Draws a reward from `arm_id`, records it and charges the arm's gap.
    pub fn play(&mut self, problem: &BanditProblem, arm_id: usize, rng: &mut dyn RngCore) {
        let reward = problem.pull(arm_id, rng);
        self.arms[arm_id].update(reward);
        self.regret.charge(problem.gap(arm_id));
    }

    /// Charges `steps` plays of `arm_id` without sampling any reward.
    pub fn commit(&mut self, problem: &BanditProblem, arm_id: usize, steps: usize) {
        self.regret.charge_many(steps, problem.gap(arm_id));
    }

    /// Arm with the highest sample mean, the first one on ties.
    pub fn best_arm(&self) -> usize {
        let mut best_id = 0;
        let mut best_mean = f64::NEG_INFINITY;
        for (arm_id, arm) in self.arms.iter().enumerate() {
            let mean = arm.mean_reward();
            if mean > best_mean {
                best_id = arm_id;
                best_mean = mean;
            }
        }
        best_id
    }

    pub fn regret(&self) -> f64 {
        self.regret.total()
    }

    pub fn into_report(self, explore_steps: usize, committed_arm: Option<usize>) -> RunReport {
        RunReport {
            regret: self.regret.total(),
            arms: self.arms.iter().map(ArmState::stats).collect(),
            explore_steps,
            committed_arm,
        }
    }
}
