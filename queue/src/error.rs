use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with [crate::OrderedQueue].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("no item available after {0:?}")]
    Timeout(Duration),
}
