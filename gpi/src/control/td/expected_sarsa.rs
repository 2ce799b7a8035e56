use super::apply_target;
use crate::{control::Controller, domains::Environment, estimator::ActionValueEstimator, Agent, Result};

/// On-policy TD control with the Expected SARSA target.
///
/// Replaces the sampled next action of SARSA with the exact expectation under
/// the epsilon-greedy policy, `r + gamma * E_pi[Q(s', .)]`.
///
/// # References
/// - van Seijen, H., van Hasselt, H., Whiteson, S., Wiering, M. (2009). A
/// theoretical and empirical analysis of Expected Sarsa. IEEE Symposium on
/// Adaptive Dynamic Programming and Reinforcement Learning, 177–184.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpectedSARSA {
    pub alpha: f64,
    pub gamma: f64,
}

impl ExpectedSARSA {
    pub fn new(alpha: f64, gamma: f64) -> Self { ExpectedSARSA { alpha, gamma } }
}

impl Controller for ExpectedSARSA {
    fn name(&self) -> &'static str { "expected_sarsa" }

    fn update<E, Q>(&self, agent: &mut Agent<E, Q>, environment: &E) -> Result<f64>
    where
        E: Environment,
        Q: ActionValueEstimator<E::State>,
    {
        let exp_nv = agent.expected_next_action_value(environment)?;

        apply_target(self.alpha, self.gamma, exp_nv, agent, environment)
    }
}
