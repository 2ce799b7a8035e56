use super::apply_target;
use crate::{control::Controller, domains::Environment, estimator::ActionValueEstimator, Agent, Result};

/// On-policy TD control with the one-step SARSA target.
///
/// Bootstraps from the value of the action the behaviour policy selects in the
/// next state, `r + gamma * Q(s', a')` with `a'` sampled, so the target
/// carries the policy's exploration noise.
///
/// # References
/// - Rummery, G. A., Niranjan, M. (1994). On-line Q-learning using
/// connectionist systems. Technical Report CUED/F-INFENG/TR 166, Cambridge
/// University.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SARSA {
    pub alpha: f64,
    pub gamma: f64,
}

impl SARSA {
    pub fn new(alpha: f64, gamma: f64) -> Self { SARSA { alpha, gamma } }
}

impl Controller for SARSA {
    fn name(&self) -> &'static str { "sarsa" }

    fn update<E, Q>(&self, agent: &mut Agent<E, Q>, environment: &E) -> Result<f64>
    where
        E: Environment,
        Q: ActionValueEstimator<E::State>,
    {
        let nqsna = agent.next_action_value(environment)?;

        apply_target(self.alpha, self.gamma, nqsna, agent, environment)
    }
}
