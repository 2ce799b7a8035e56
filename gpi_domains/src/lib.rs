//! Episodic environments for tabular control.
#[macro_use]
extern crate serde;

use std::hash::Hash;

mod grid_world;
pub use self::grid_world::{GridWorld, Level};

/// An episodic environment with a finite, enumerable state domain and a fixed,
/// ordered action set.
///
/// The environment keeps track of the latest transition so that a learner can
/// query the pre- and post-transition states after an action has been applied.
pub trait Environment {
    /// Opaque state type; must be usable as a table key.
    type State: Clone + Eq + Hash;

    /// Start a new episode, clearing all episode-scoped trackers.
    fn reset(&mut self);

    /// Returns true once the episode has reached a terminal condition.
    fn is_episode_over(&self) -> bool;

    /// The state after the latest transition.
    fn current_state(&self) -> Self::State;

    /// The state before the latest transition.
    ///
    /// Before any action has been performed this is the start state of the
    /// episode.
    fn previous_state(&self) -> Self::State;

    /// Apply an action, advancing the environment by exactly one transition.
    fn perform_action(&mut self, action: usize);

    /// The action applied in the latest transition, if any.
    fn latest_action(&self) -> Option<usize>;

    fn latest_reward(&self) -> f64;

    /// Cumulative reward collected since the last reset.
    fn episode_reward(&self) -> f64;

    fn enumerate_states(&self) -> Vec<Self::State>;

    fn enumerate_actions(&self) -> Vec<usize>;
}
