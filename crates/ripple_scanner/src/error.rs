//! Errors raised by the scanner's host lifecycle hooks.
//!
//! Scanning itself never fails with an error: a recognizer that does not
//! match simply declines and the host lexes the position itself.

use thiserror::Error;

/// A violation of the state persistence contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// The host tried to restore bytes the scanner never wrote.
    #[error("scanner state is empty, but {len} bytes were supplied to deserialize")]
    UnexpectedPayload { len: usize },
}
