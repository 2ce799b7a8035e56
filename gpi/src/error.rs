use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by estimators, agents and configuration.
///
/// `Domain` and `Range` signal a mismatch between the domain an estimator was
/// built for and the one it is being queried with; they are programmer errors
/// and abort the operation without touching any table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("state is not part of the enumerated state domain")]
    Domain,

    #[error("action {action} is out of range for {n_actions} actions")]
    Range { action: usize, n_actions: usize },

    #[error("no action has been performed since the episode started")]
    NoTransition,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("snapshot tables have shape {found:?}, expected {expected:?}")]
    Shape {
        expected: (usize, usize),
        found: (usize, usize),
    },
}
