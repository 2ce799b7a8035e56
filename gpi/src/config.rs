use crate::{
    control::{Control, ControlKind},
    domains::Environment,
    estimator::{EstimatorKind, TabularEstimator},
    memory::Shared,
    Agent,
    Error,
    Result,
};
use rand::Rng;

/// Construction-time configuration of a training run.
///
/// Missing fields take their default values when deserialising.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Exploration rate of the epsilon-greedy behaviour policy, in `[0, 1]`.
    pub epsilon: f64,

    /// Enable double (bias-corrected) estimation.
    pub double: bool,

    /// Step size, strictly positive.
    pub alpha: f64,

    pub discount: f64,

    /// Act purely greedily instead of epsilon-greedily.
    pub greedy: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            epsilon: 0.1,
            double: false,
            alpha: 0.5,
            discount: 1.0,
            greedy: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(Error::Config(format!("epsilon must lie in [0, 1], got {}", self.epsilon)));
        }

        if !(self.alpha > 0.0) {
            return Err(Error::Config(format!("alpha must be positive, got {}", self.alpha)));
        }

        if !self.discount.is_finite() {
            return Err(Error::Config(format!("discount must be finite, got {}", self.discount)));
        }

        Ok(())
    }

    pub fn estimator_kind(&self) -> EstimatorKind { EstimatorKind::from_double(self.double) }

    pub fn estimator<E, R>(&self, environment: &E, rng: R) -> Result<TabularEstimator<E::State, R>>
    where
        E: Environment,
    {
        self.validate()?;

        TabularEstimator::from_environment(environment, self.epsilon, self.estimator_kind(), rng)
    }

    pub fn control(&self, kind: ControlKind) -> Result<Control> {
        self.validate()?;

        Ok(Control::new(kind, self.alpha, self.discount))
    }

    /// Build an agent over `environment` with a freshly initialised estimator.
    pub fn agent<E, R>(&self, environment: Shared<E>, rng: R) -> Result<Agent<E, TabularEstimator<E::State, R>>>
    where
        E: Environment,
        R: Rng,
    {
        let estimator = self.estimator(&*environment.borrow(), rng)?;

        Ok(Agent::new(environment, estimator, self.greedy))
    }
}
