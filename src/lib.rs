//! Regret simulation for multi-armed bandit strategies.
//!
//! Two policies, [`EpsilonGreedy`] and [`FixedExploration`], are played
//! against Bernoulli arms and charged the gap to an oracle that always plays
//! the best arm. [`monte_carlo`] averages the regret over independent runs and
//! [`sweep`] evaluates it over a range of horizons or exploration rates.

pub mod arms;
pub mod config;
pub mod errors;
pub mod monte_carlo;
pub mod policies;
pub mod regret;
pub mod sweep;

pub use arms::{BanditProblem, BernoulliArms, RewardSource};
pub use errors::BanditError;
pub use policies::{EpsilonGreedy, ExplorationMode, FixedExploration, Policy, PolicyType};
