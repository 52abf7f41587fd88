//! Error types for the stopwatch service

use thiserror::Error;

/// Errors raised at the edges of the stopwatch (configuration and the command queue).
///
/// Controller operations themselves never fail.
#[derive(Error, Debug)]
pub enum StopwatchError {
    #[error("Stopwatch loop is no longer accepting commands")]
    LoopClosed,

    #[error("Stopwatch loop dropped the reply to '{0}'")]
    NoReply(&'static str),

    #[error("Sets template must contain a '{{}}' placeholder, got {0:?}")]
    InvalidTemplate(String),

    #[error("Refresh delay must be at least 1ms")]
    InvalidRefreshDelay,
}

pub type Result<T, E = StopwatchError> = std::result::Result<T, E>;
