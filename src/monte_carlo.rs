use crate::arms::BanditProblem;
use crate::errors::BanditError;
use crate::policies::Policy;

use rand::RngCore;
use tracing::{debug, info};

/// Number of runs averaged when the caller does not choose one, see
/// [`Policy::average_regret_default`].
pub const DEFAULT_NUM_RUNS: usize = 100;

/// Runs `policy` on `problem` `num_runs` times and returns the regret of
/// every run, in order. Runs share nothing but the random stream, so a seeded
/// `rng` makes the whole sequence reproducible.
pub fn collect_regrets<P: Policy + ?Sized>(
    policy: &P,
    problem: &BanditProblem,
    num_runs: usize,
    rng: &mut dyn RngCore,
) -> Result<Vec<f64>, BanditError> {
    if num_runs == 0 {
        return Err(BanditError::InvalidSampleSize(num_runs));
    }
    policy.validate(problem)?;

    (0..num_runs)
        .map(|run| -> Result<f64, BanditError> {
            let regret = policy.simulate_once(problem, rng)?;
            debug!(run = %run, regret = %regret, "Simulated run");
            Ok(regret)
        })
        .collect()
}

/// Mean of [`collect_regrets`]. `num_runs` has no implicit default here,
/// callers wanting the usual 100 runs pass [`DEFAULT_NUM_RUNS`].
pub fn average_regret<P: Policy + ?Sized>(
    policy: &P,
    problem: &BanditProblem,
    num_runs: usize,
    rng: &mut dyn RngCore,
) -> Result<f64, BanditError> {
    let regrets = collect_regrets(policy, problem, num_runs, rng)?;
    let mean = regrets.iter().sum::<f64>() / (regrets.len() as f64);

    info!(
        policy = ?policy.policy_type(),
        horizon = %problem.horizon(),
        num_runs = %num_runs,
        mean_regret = %mean,
        "Averaged regret"
    );
    Ok(mean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::{EpsilonGreedy, ExplorationMode, FixedExploration};
    use rand::{rngs::SmallRng, SeedableRng};

    const SEED: u64 = 1234;

    fn bernoulli(means: Vec<f64>, horizon: usize) -> BanditProblem {
        BanditProblem::bernoulli(means.len(), horizon, means).unwrap()
    }

    #[test]
    fn empty_sample() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let problem = bernoulli(vec![0.1, 0.9], 10);

        assert_eq!(
            average_regret(&EpsilonGreedy::default(), &problem, 0, &mut rng),
            Err(BanditError::InvalidSampleSize(0))
        );
    }

    #[test]
    fn invalid_policy_fails_before_sampling() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let problem = bernoulli(vec![0.5, 0.5], 100);
        let policy = FixedExploration::new(None, ExplorationMode::Sublinear);

        assert!(matches!(
            collect_regrets(&policy, &problem, 10, &mut rng),
            Err(BanditError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn mean_of_collected_regrets() {
        let problem = bernoulli(vec![0.1, 0.5, 0.9], 200);
        let policy = EpsilonGreedy::new(0.1, false).unwrap();

        let regrets =
            collect_regrets(&policy, &problem, 50, &mut SmallRng::seed_from_u64(SEED)).unwrap();
        let mean =
            average_regret(&policy, &problem, 50, &mut SmallRng::seed_from_u64(SEED)).unwrap();

        assert_eq!(regrets.len(), 50);
        assert!((mean - regrets.iter().sum::<f64>() / 50.0).abs() < 1e-9);
    }

    #[test]
    fn seeded_average_is_reproducible() {
        let problem = bernoulli(vec![0.1, 0.5, 0.9], 200);
        let policy = FixedExploration::default();

        let a = policy
            .average_regret(&problem, 30, &mut SmallRng::seed_from_u64(SEED))
            .unwrap();
        let b = policy
            .average_regret(&problem, 30, &mut SmallRng::seed_from_u64(SEED))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn equal_arms_average_to_zero() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let problem = bernoulli(vec![0.5, 0.5], 1000);

        let policies: Vec<Box<dyn Policy>> = vec![
            Box::new(EpsilonGreedy::default()),
            Box::new(EpsilonGreedy::new(0.2, false).unwrap()),
            Box::new(EpsilonGreedy::new(0.0, true).unwrap()),
            Box::new(FixedExploration::default()),
        ];
        for policy in policies {
            let regrets = collect_regrets(policy.as_ref(), &problem, 200, &mut rng).unwrap();
            assert!(regrets.iter().all(|&regret| regret == 0.0));
            assert_eq!(policy.average_regret(&problem, 200, &mut rng).unwrap(), 0.0);
        }
    }

    #[test]
    fn small_exploration_beats_both_extremes() {
        let problem = bernoulli(vec![0.1, 0.5, 0.9], 500);
        // greedy regret is heavy tailed, a few runs lock onto a bad arm for
        // the whole horizon and dominate its mean
        let num_runs = 2000;
        let average = |epsilon: f64| {
            let policy = EpsilonGreedy::new(epsilon, false).unwrap();
            average_regret(&policy, &problem, num_runs, &mut SmallRng::seed_from_u64(SEED))
                .unwrap()
        };

        let greedy = average(0.0);
        let uniform = average(1.0);
        let mixed = average(0.1);

        assert!(greedy < uniform);
        assert!(mixed < greedy);
        assert!(mixed < uniform);
    }

    #[test]
    fn default_run_count() {
        let problem = bernoulli(vec![0.1, 0.5, 0.9], 100);
        let policy = EpsilonGreedy::new(0.1, false).unwrap();

        let default = policy
            .average_regret_default(&problem, &mut SmallRng::seed_from_u64(SEED))
            .unwrap();
        let explicit = policy
            .average_regret(&problem, DEFAULT_NUM_RUNS, &mut SmallRng::seed_from_u64(SEED))
            .unwrap();
        assert_eq!(DEFAULT_NUM_RUNS, 100);
        assert_eq!(default, explicit);
    }

    #[test]
    fn linear_exploration_regret_grows_with_horizon() {
        let policy = FixedExploration::default();
        let regrets = [100, 1000, 10_000]
            .into_iter()
            .map(|horizon| {
                let problem = bernoulli(vec![0.3, 0.7], horizon);
                average_regret(&policy, &problem, 300, &mut SmallRng::seed_from_u64(SEED))
                    .unwrap()
            })
            .collect::<Vec<f64>>();

        assert!(regrets.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn sublinear_beats_linear_on_long_horizon() {
        let problem = bernoulli(vec![0.2, 0.8], 10_000);
        let linear = FixedExploration::default();
        let sublinear = FixedExploration::new(None, ExplorationMode::Sublinear);

        let linear = average_regret(&linear, &problem, 200, &mut SmallRng::seed_from_u64(SEED));
        let sublinear =
            average_regret(&sublinear, &problem, 200, &mut SmallRng::seed_from_u64(SEED));
        assert!(sublinear.unwrap() < linear.unwrap());
    }
}
