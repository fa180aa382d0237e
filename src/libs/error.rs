//! Core error taxonomy for tempo.
//!
//! User input errors (`InvalidDuration`, `InvalidBreakConfig`) abort the
//! command before any state is persisted. `StoreUnavailable` wraps I/O and
//! parse failures from the record stores. Notification failures are not part
//! of this taxonomy: they are swallowed by the notifier and logged at most.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Session duration must be a positive number of minutes.
    #[error("session duration must be greater than zero")]
    InvalidDuration,

    /// Break cadence or length is inconsistent with the planned session.
    #[error("invalid break configuration: {0}")]
    InvalidBreakConfig(String),

    /// The record store could not be read or written.
    #[error("record store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::StoreUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::StoreUnavailable(err.to_string())
    }
}
