use super::apply_target;
use crate::{control::Controller, domains::Environment, estimator::ActionValueEstimator, Agent, Result};

/// Watkins' off-policy Q-learning.
///
/// Bootstraps from `max_a Q(s', a)`, so the target is independent of the
/// behaviour policy actually followed. Combined with a double estimator the
/// max is evaluated on the table that was not selected for the update, which
/// gives double Q-learning.
///
/// # References
/// - Watkins, C. J. C. H. (1989). Learning from Delayed Rewards. Ph.D. thesis,
/// Cambridge University.
/// - van Hasselt, H. (2010). Double Q-learning. Advances in Neural Information
/// Processing Systems 23, 2613–2621.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QLearning {
    pub alpha: f64,
    pub gamma: f64,
}

impl QLearning {
    pub fn new(alpha: f64, gamma: f64) -> Self { QLearning { alpha, gamma } }
}

impl Controller for QLearning {
    fn name(&self) -> &'static str { "qlearning" }

    fn update<E, Q>(&self, agent: &mut Agent<E, Q>, environment: &E) -> Result<f64>
    where
        E: Environment,
        Q: ActionValueEstimator<E::State>,
    {
        let nqs = agent.best_next_action_value(environment)?;

        apply_target(self.alpha, self.gamma, nqs, agent, environment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        estimator::{EstimatorKind, TabularEstimator},
        memory::make_shared,
        mocking::MockEnvironment,
        control::td::testing::after_transition,
    };
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_target_uses_max() {
        let mut agent = after_transition(1.0, false);
        let handle = agent.environment().clone();
        let env = handle.borrow();

        // -1 + 0.5 * max(2, 5)
        let td_error = QLearning::new(1.0, 0.5).update(&mut agent, &env).unwrap();

        assert_eq!(td_error, 1.5);
        assert_eq!(agent.estimator().action_value(&0, 1).unwrap(), 1.5);
        assert_eq!(agent.estimator().action_value(&0, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_first_update_from_zero() {
        let env = MockEnvironment::single_state();
        let q = TabularEstimator::from_environment(&env, 0.1, EstimatorKind::Single, StdRng::seed_from_u64(0))
            .unwrap();
        let mut agent = Agent::new(make_shared(env), q, false);

        let handle = agent.environment().clone();
        handle.borrow_mut().perform_action(0);
        let env = handle.borrow();

        let td_error = QLearning::new(0.5, 1.0).update(&mut agent, &env).unwrap();

        assert_eq!(td_error, -1.0);
        assert_eq!(agent.estimator().action_value(&0, 0).unwrap(), -0.5);
        assert_eq!(agent.estimator().action_value(&0, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_double_evaluates_on_the_other_table() {
        let env = MockEnvironment::two_states();
        let mut q =
            TabularEstimator::from_environment(&env, 0.0, EstimatorKind::Double, StdRng::seed_from_u64(0)).unwrap();

        // primary: Q(1, 1) = 4; auxiliary: Q(1, 0) = 1; toggle back on primary.
        q.update_action_value(&1, 1, 4.0).unwrap();
        q.update_action_value(&1, 0, 1.0).unwrap();

        let mut agent = Agent::new(make_shared(env), q, false);
        let handle = agent.environment().clone();
        handle.borrow_mut().perform_action(1);
        let env = handle.borrow();

        // Bootstraps from max of the auxiliary row, updates the primary table.
        let td_error = QLearning::new(1.0, 1.0).update(&mut agent, &env).unwrap();
        assert_eq!(td_error, 0.0);

        let snapshot = agent.estimator().snapshot();
        assert_eq!(snapshot.primary[[0, 1]], 0.0);
        assert_eq!(snapshot.primary[[1, 1]], 4.0);
        assert_eq!(agent.estimator().toggle(), crate::estimator::Toggle::Auxiliary);

        // Now bootstraps from the primary row and writes the auxiliary table.
        let td_error = QLearning::new(1.0, 1.0).update(&mut agent, &env).unwrap();
        assert_eq!(td_error, 3.0);
        assert_eq!(agent.estimator().snapshot().auxiliary[[0, 1]], 3.0);
    }
}
