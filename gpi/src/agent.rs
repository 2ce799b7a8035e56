//! Agent acting in an environment through an action-value estimator.
use crate::{
    domains::Environment,
    estimator::ActionValueEstimator,
    memory::Shared,
    Error,
    Result,
};

/// Adapter between an environment and an action-value estimator.
///
/// The agent extracts states and the latest action from the environment so
/// that control rules only ever deal with scalar values. All queries taking an
/// `environment` argument read from it and never advance it; only
/// [`act_once`](#method.act_once) performs a transition.
pub struct Agent<E, Q> {
    environment: Shared<E>,
    estimator: Q,

    greedy: bool,
}

impl<E, Q> Agent<E, Q> {
    /// Create an agent following the epsilon-greedy behaviour policy of
    /// `estimator`, or its purely greedy policy if `greedy` is set.
    pub fn new(environment: Shared<E>, estimator: Q, greedy: bool) -> Self {
        Agent {
            environment,
            estimator,

            greedy,
        }
    }

    pub fn greedy(&self) -> bool { self.greedy }

    pub fn environment(&self) -> &Shared<E> { &self.environment }

    pub fn estimator(&self) -> &Q { &self.estimator }

    pub fn estimator_mut(&mut self) -> &mut Q { &mut self.estimator }

    pub fn into_estimator(self) -> Q { self.estimator }
}

impl<E, Q> Agent<E, Q>
where
    E: Environment,
    Q: ActionValueEstimator<E::State>,
{
    /// Choose an action in the current state and perform it, advancing the
    /// environment by one transition.
    pub fn act_once(&mut self) -> Result<usize> {
        let state = self.environment.borrow().current_state();
        let action = self.estimator.choose_next_action(&state, self.greedy)?;

        self.environment.borrow_mut().perform_action(action);

        Ok(action)
    }

    /// Value of the action the behaviour policy would take next, without
    /// taking it.
    pub fn next_action_value(&mut self, environment: &E) -> Result<f64> {
        let state = environment.current_state();
        let action = self.estimator.choose_next_action(&state, self.greedy)?;

        self.estimator.action_value(&state, action)
    }

    /// Current estimate of the pair being corrected: the previous state and
    /// the action taken from it.
    pub fn action_value_to_update(&self, environment: &E) -> Result<f64> {
        let (state, action) = latest_pair(environment)?;

        self.estimator.action_value(&state, action)
    }

    pub fn expected_next_action_value(&self, environment: &E) -> Result<f64> {
        self.estimator.expected_action_value(&environment.current_state())
    }

    pub fn best_next_action_value(&self, environment: &E) -> Result<f64> {
        self.estimator.best_action_value(&environment.current_state())
    }

    /// Add the control rule's scaled TD increment to the previous pair.
    pub fn apply_update(&mut self, delta: f64, environment: &E) -> Result<()> {
        let (state, action) = latest_pair(environment)?;

        self.estimator.update_action_value(&state, action, delta)
    }
}

fn latest_pair<E: Environment>(environment: &E) -> Result<(E::State, usize)> {
    let action = environment.latest_action().ok_or(Error::NoTransition)?;

    Ok((environment.previous_state(), action))
}
