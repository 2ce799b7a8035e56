//! Logging utilities built on `slog`.
use slog::{Discard, Drain, Logger};

/// Asynchronous terminal logger.
pub fn root_logger() -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    Logger::root(drain, o!())
}

/// Logger that drops every record; the default for library components.
pub fn discard() -> Logger { Logger::root(Discard, o!()) }
