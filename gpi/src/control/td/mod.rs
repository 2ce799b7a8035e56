//! One-step TD control rules.
//!
//! All rules share the same update,
//!
//! ```text
//! target   = r + gamma * bootstrap
//! td_error = target - Q(s, a)
//! Q(s, a) += alpha * td_error
//! ```
//!
//! and differ only in the bootstrap term taken from the next state.
use crate::{domains::Environment, estimator::ActionValueEstimator, Agent, Result};

import_all!(sarsa);
import_all!(expected_sarsa);
import_all!(q_learning);

fn apply_target<E, Q>(
    alpha: f64,
    gamma: f64,
    bootstrap: f64,
    agent: &mut Agent<E, Q>,
    environment: &E,
) -> Result<f64>
where
    E: Environment,
    Q: ActionValueEstimator<E::State>,
{
    let target = environment.latest_reward() + gamma * bootstrap;
    let td_error = target - agent.action_value_to_update(environment)?;

    agent.apply_update(alpha * td_error, environment)?;

    Ok(td_error)
}
