use crate::{
    control::{Control, Controller},
    domains::Environment,
    estimator::ActionValueEstimator,
    logging,
    memory::Shared,
    Agent,
    Result,
};
use slog::Logger;

/// Episode driver binding one agent to one control rule.
///
/// Each episode resets the environment and then alternates `act_once` and
/// `update` until the environment reports the end of the episode.
pub struct Trainer<E, Q> {
    agent: Agent<E, Q>,
    environment: Shared<E>,
    control: Control,

    episodes: usize,
    episode_rewards: Vec<f64>,

    logger: Logger,
}

impl<E, Q> Trainer<E, Q> {
    pub const DEFAULT_EPISODES: usize = 1000;

    pub fn new(agent: Agent<E, Q>, control: Control) -> Self {
        Trainer::with_episodes(agent, control, Self::DEFAULT_EPISODES)
    }

    pub fn with_episodes(agent: Agent<E, Q>, control: Control, episodes: usize) -> Self {
        let environment = agent.environment().clone();

        Trainer {
            agent,
            environment,
            control,

            episodes,
            episode_rewards: vec![],

            logger: logging::discard(),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn agent(&self) -> &Agent<E, Q> { &self.agent }

    pub fn control(&self) -> &Control { &self.control }

    pub fn into_agent(self) -> Agent<E, Q> { self.agent }

    /// Reward of every episode run so far, in order.
    pub fn episode_rewards(&self) -> &[f64] { &self.episode_rewards }
}

impl<E, Q> Trainer<E, Q>
where
    E: Environment,
    Q: ActionValueEstimator<E::State>,
{
    /// `"<control>-<estimator>"`, e.g. `qlearning-double_tabular`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.control.name(), self.agent.estimator().name())
    }

    /// Run a single episode and return its total reward.
    pub fn run_episode(&mut self) -> Result<f64> {
        self.environment.borrow_mut().reset();

        let mut steps = 0usize;

        while !self.environment.borrow().is_episode_over() {
            self.agent.act_once()?;

            let env = self.environment.borrow();
            self.control.update(&mut self.agent, &env)?;

            steps += 1;
        }

        let reward = self.environment.borrow().episode_reward();
        let episode = self.episode_rewards.len();

        self.episode_rewards.push(reward);

        info!(self.logger, "episode complete";
            "episode" => episode,
            "reward" => reward,
            "steps" => steps
        );

        Ok(reward)
    }

    /// Run the configured number of episodes.
    pub fn train(&mut self) -> Result<&[f64]> {
        let start = self.episode_rewards.len();

        for _ in 0..self.episodes {
            self.run_episode()?;
        }

        let rewards = &self.episode_rewards[start..];
        let mean = if rewards.is_empty() {
            0.0
        } else {
            rewards.iter().sum::<f64>() / rewards.len() as f64
        };

        debug!(self.logger, "training complete";
            "label" => self.label(),
            "episodes" => rewards.len(),
            "mean_reward" => mean
        );

        Ok(&self.episode_rewards[start..])
    }
}

/// Trailing moving average used to compare reward curves.
///
/// The first `window` points are kept as they are; every later point is the
/// mean of the `window` most recent values.
pub fn smooth(series: &[f64], window: usize) -> Vec<f64> {
    if window == 0 {
        return series.to_vec();
    }

    let mut sum = 0.0;

    series
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            sum += x;

            if i < window {
                x
            } else {
                sum -= series[i - window];
                sum / window as f64
            }
        })
        .collect()
}
