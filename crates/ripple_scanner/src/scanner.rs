//! The contextual scanner.
//!
//! The parsing engine calls [`Scanner::scan`] whenever the grammar admits one
//! of the [`ExternalToken`]s at the current position. Each recognizer below
//! makes its decision one code point at a time through the host's [`Lexer`]
//! primitives, and either stakes a token end or declines so the host can fall
//! back to ordinary grammar-driven lexing.

use crate::char_codes::*;
use crate::lexer::Lexer;
use crate::token::{ExternalToken, ValidTokens};
use tracing::trace;

/// The contextual scanner for Ripple source.
///
/// It carries no state: every decision depends only on the text at the cursor
/// and the admissible set passed to [`scan`](Scanner::scan), so the host may
/// call it at any position in any order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scanner;

impl Scanner {
    pub fn new() -> Self {
        Scanner
    }

    /// Try to recognize one of the `valid` tokens at the cursor.
    ///
    /// Recognizers are tried in a fixed priority order, template text,
    /// automatic semicolon, ternary `?`, then markup text, each only when
    /// admissible. Every attempt runs on a copy of the cursor; the caller's
    /// cursor is replaced by the copy of the attempt that succeeds, and is
    /// left untouched when the call returns `None`.
    pub fn scan<L: Lexer + Clone>(&self, lexer: &mut L, valid: ValidTokens) -> Option<ExternalToken> {
        let result = dispatch(lexer, valid);
        trace!(?valid, ?result, "contextual scan");
        result
    }
}

fn dispatch<L: Lexer + Clone>(lexer: &mut L, valid: ValidTokens) -> Option<ExternalToken> {
    if valid.allows(ExternalToken::TemplateChars) && attempt(lexer, scan_template_chars).is_ok() {
        return Some(ExternalToken::TemplateChars);
    }

    if valid.allows(ExternalToken::AutomaticSemicolon) {
        match attempt(lexer, scan_automatic_semicolon) {
            Ok(()) => return Some(ExternalToken::AutomaticSemicolon),
            // A line break followed by `?` where the grammar cannot take a
            // conditional: no terminator, and nothing else may claim the
            // position either.
            Err(trial) if trial.lookahead() == Some(QUESTION)
                && !valid.allows(ExternalToken::TernaryQmark) =>
            {
                trace!("semicolon suppressed before `?`");
                return None;
            }
            Err(_) => {}
        }
    }

    if valid.allows(ExternalToken::TernaryQmark) && attempt(lexer, scan_ternary_qmark).is_ok() {
        return Some(ExternalToken::TernaryQmark);
    }

    if valid.allows(ExternalToken::JsxText) && attempt(lexer, scan_jsx_text).is_ok() {
        return Some(ExternalToken::JsxText);
    }

    None
}

/// Run `recognize` on a copy of the cursor. A successful copy replaces
/// `lexer`; a failed one is handed back so the caller can inspect where it
/// stopped.
fn attempt<L, F>(lexer: &mut L, recognize: F) -> Result<(), L>
where
    L: Lexer + Clone,
    F: FnOnce(&mut L) -> bool,
{
    let mut trial = lexer.clone();
    if recognize(&mut trial) {
        *lexer = trial;
        Ok(())
    } else {
        Err(trial)
    }
}

/// Skip whitespace, line comments and block comments.
///
/// Returns `false` at an unterminated block comment, or at a `/` that does
/// not open a comment (a division or regex the grammar must see). On `true`
/// the lookahead is the first character after the trivia.
fn skip_trivia<L: Lexer>(lexer: &mut L) -> bool {
    loop {
        while lexer.lookahead().is_some_and(is_white_space_like) {
            lexer.skip();
        }

        if lexer.lookahead() != Some(SLASH) {
            return true;
        }
        lexer.skip();

        match lexer.lookahead() {
            Some(SLASH) => {
                lexer.skip();
                while lexer.lookahead().is_some_and(|ch| ch != LINE_FEED) {
                    lexer.skip();
                }
            }
            Some(ASTERISK) => {
                lexer.skip();
                if !skip_block_comment_body(lexer) {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Skip to just past the `*/` closing a block comment.
fn skip_block_comment_body<L: Lexer>(lexer: &mut L) -> bool {
    loop {
        match lexer.lookahead() {
            None => return false,
            Some(ASTERISK) => {
                lexer.skip();
                if lexer.lookahead() == Some(SLASH) {
                    lexer.skip();
                    return true;
                }
            }
            Some(_) => lexer.skip(),
        }
    }
}

/// A zero-width statement terminator, permitted when a line break separates
/// the previous token from one that cannot continue the statement, or at the
/// end of a block, the input, or an embedded region.
fn scan_automatic_semicolon<L: Lexer>(lexer: &mut L) -> bool {
    lexer.mark_end();

    loop {
        match lexer.lookahead() {
            None | Some(CLOSE_BRACE) => return true,
            _ if lexer.is_at_included_range_start() => return true,
            Some(LINE_FEED) => break,
            Some(ch) if !is_white_space_like(ch) => return false,
            Some(_) => lexer.skip(),
        }
    }

    lexer.skip();

    if !skip_trivia(lexer) {
        return false;
    }

    !lexer.lookahead().is_some_and(is_continuation_start)
}

/// Literal template characters up to a backtick, an escape, an interpolation
/// opener `${`, or the end of input.
fn scan_template_chars<L: Lexer>(lexer: &mut L) -> bool {
    let mut has_content = false;
    loop {
        lexer.mark_end();
        match lexer.lookahead() {
            Some(BACKTICK) | Some(BACKSLASH) => return has_content,
            // Text running into end of input is still a token, even though
            // the template never closes; the grammar reports the missing
            // backtick, not the scanner.
            None => return has_content,
            Some(DOLLAR_SIGN) => {
                lexer.advance();
                if lexer.lookahead() == Some(OPEN_BRACE) {
                    return has_content;
                }
            }
            Some(_) => lexer.advance(),
        }
        has_content = true;
    }
}

/// A conditional `?`, as opposed to `??` or an optional chain `?.`.
fn scan_ternary_qmark<L: Lexer>(lexer: &mut L) -> bool {
    while lexer.lookahead().is_some_and(is_white_space_like) {
        lexer.skip();
    }

    if lexer.lookahead() != Some(QUESTION) {
        return false;
    }
    lexer.advance();

    if lexer.lookahead() == Some(QUESTION) {
        return false;
    }
    lexer.mark_end();

    lexer.lookahead() != Some(DOT)
}

/// Literal markup text up to a tag `<`, an expression `{`, or the end of
/// input.
fn scan_jsx_text<L: Lexer>(lexer: &mut L) -> bool {
    let mut has_content = false;
    loop {
        lexer.mark_end();
        match lexer.lookahead() {
            None | Some(LESS_THAN) | Some(OPEN_BRACE) => return has_content,
            Some(_) => lexer.advance(),
        }
        has_content = true;
    }
}
