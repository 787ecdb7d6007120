//! The lifecycle contract between a parsing engine and its external scanner.
//!
//! Incremental parsers snapshot scanner state alongside each token so they
//! can resume lexing mid-file after an edit. The Ripple scanner remembers
//! nothing between calls, so its snapshot is always zero bytes long.

use crate::error::StateError;
use crate::lexer::Lexer;
use crate::scanner::Scanner;
use crate::token::{ExternalToken, ValidTokens};
use tracing::debug;

/// Capacity of the buffer hosts hand to [`ExternalScanner::serialize`].
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// The hooks a host engine drives over a scanner's lifetime.
///
/// Destruction is `Drop`.
pub trait ExternalScanner: Sized {
    /// Allocate fresh scanner state.
    fn create() -> Self;

    /// Return to the state of a freshly created scanner.
    fn reset(&mut self);

    /// Write the state into `buffer`, returning the number of bytes written.
    fn serialize(&self, buffer: &mut [u8]) -> usize;

    /// Restore state previously written by `serialize`. An empty buffer
    /// means "reset".
    fn deserialize(&mut self, buffer: &[u8]) -> Result<(), StateError>;

    /// Recognize one of the `valid` tokens at the cursor.
    fn scan<L: Lexer + Clone>(&mut self, lexer: &mut L, valid: ValidTokens) -> Option<ExternalToken>;
}

impl ExternalScanner for Scanner {
    fn create() -> Self {
        Scanner::new()
    }

    fn reset(&mut self) {}

    fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    fn deserialize(&mut self, buffer: &[u8]) -> Result<(), StateError> {
        if !buffer.is_empty() {
            debug!(len = buffer.len(), "rejecting non-empty scanner snapshot");
            return Err(StateError::UnexpectedPayload { len: buffer.len() });
        }
        self.reset();
        Ok(())
    }

    fn scan<L: Lexer + Clone>(&mut self, lexer: &mut L, valid: ValidTokens) -> Option<ExternalToken> {
        Scanner::scan(self, lexer, valid)
    }
}
