pub mod arm;
pub mod epsilon_greedy;
pub mod fixed_exploration;
mod policy;
mod rng;

#[cfg(test)]
pub(crate) mod testing;

pub use arm::{ArmState, ArmStats, RunState};
pub use epsilon_greedy::EpsilonGreedy;
pub use fixed_exploration::{ExplorationMode, FixedExploration};
pub use policy::{Policy, PolicyType, RunReport};
pub use rng::MaybeSeededRng;
