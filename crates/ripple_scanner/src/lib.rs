//! ripple_scanner: Contextual scanner for the Ripple language.
//!
//! The parsing engine consults this scanner at the few positions where a
//! context-free grammar cannot find a token boundary by itself:
//! - automatic semicolon insertion at line breaks
//! - literal text runs in template strings
//! - a ternary `?` versus `??` and `?.`
//! - literal text runs in JSX-style markup bodies
//!
//! The engine supplies its cursor through the [`Lexer`] trait and the set of
//! tokens its grammar can accept through [`ValidTokens`].

mod char_codes;
mod error;
mod lexer;
mod scanner;
mod state;
mod token;

pub use error::StateError;
pub use lexer::{Lexer, SourceLexer};
pub use scanner::Scanner;
pub use state::{ExternalScanner, SERIALIZATION_BUFFER_SIZE};
pub use token::{ExternalToken, ValidTokens};
