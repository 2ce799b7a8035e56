//! Temporal-difference control algorithms.
use crate::{domains::Environment, estimator::ActionValueEstimator, Agent, Result};

pub mod td;
pub use self::td::{ExpectedSARSA, QLearning, SARSA};

/// A one-step TD control rule.
///
/// After the agent has performed a transition, `update` corrects the estimate
/// of the (previous state, latest action) pair towards the bootstrapped target
/// computed from the post-transition state, and returns the TD error.
pub trait Controller {
    /// Label used when comparing training runs.
    fn name(&self) -> &'static str;

    fn update<E, Q>(&self, agent: &mut Agent<E, Q>, environment: &E) -> Result<f64>
    where
        E: Environment,
        Q: ActionValueEstimator<E::State>;
}

/// Selector for the control rule bound to a training run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    SARSA,
    ExpectedSARSA,
    QLearning,
}

/// Closed set of control rules, dispatched by exhaustive match.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Control {
    SARSA(SARSA),
    ExpectedSARSA(ExpectedSARSA),
    QLearning(QLearning),
}

impl Control {
    pub fn new(kind: ControlKind, alpha: f64, gamma: f64) -> Control {
        match kind {
            ControlKind::SARSA => Control::SARSA(SARSA::new(alpha, gamma)),
            ControlKind::ExpectedSARSA => Control::ExpectedSARSA(ExpectedSARSA::new(alpha, gamma)),
            ControlKind::QLearning => Control::QLearning(QLearning::new(alpha, gamma)),
        }
    }

    pub fn kind(&self) -> ControlKind {
        match self {
            Control::SARSA(_) => ControlKind::SARSA,
            Control::ExpectedSARSA(_) => ControlKind::ExpectedSARSA,
            Control::QLearning(_) => ControlKind::QLearning,
        }
    }
}

impl Controller for Control {
    fn name(&self) -> &'static str {
        match self {
            Control::SARSA(c) => c.name(),
            Control::ExpectedSARSA(c) => c.name(),
            Control::QLearning(c) => c.name(),
        }
    }

    fn update<E, Q>(&self, agent: &mut Agent<E, Q>, environment: &E) -> Result<f64>
    where
        E: Environment,
        Q: ActionValueEstimator<E::State>,
    {
        match self {
            Control::SARSA(c) => c.update(agent, environment),
            Control::ExpectedSARSA(c) => c.update(agent, environment),
            Control::QLearning(c) => c.update(agent, environment),
        }
    }
}
