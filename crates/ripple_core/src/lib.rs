//! ripple_core: Source-position primitives shared by the Ripple scanner and
//! the parsing engine that hosts it.
//!
//! Offsets are byte offsets into UTF-8 source text. Token boundaries reported
//! by the scanner and the embedded-language ranges supplied by the host are
//! both expressed with these types.

pub mod text;

pub use text::{TextPos, TextRange, TextSpan};
