//! Tabular temporal-difference control.
//!
//! An [`Agent`](agent/struct.Agent.html) acts in an
//! [`Environment`](domains/trait.Environment.html) through an
//! [`ActionValueEstimator`](estimator/trait.ActionValueEstimator.html), and one
//! of the [control](control/index.html) rules corrects the estimate of the
//! latest (state, action) pair after every transition. Alternating the two is
//! generalized policy iteration.
#[macro_use]
extern crate serde;
#[macro_use]
extern crate slog;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub use gpi_domains as domains;

macro_rules! import_all {
    ($module:ident) => {
        mod $module;
        pub use self::$module::*;
    };
}

#[cfg(test)]
pub(crate) mod mocking;

mod error;
pub use self::error::{Error, Result};

pub mod memory;
pub mod logging;

mod config;
pub use self::config::Config;

pub mod agent;
pub use self::agent::Agent;

pub mod control;
pub mod estimator;

mod trainer;
pub use self::trainer::{smooth, Trainer};
