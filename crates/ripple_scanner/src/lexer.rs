//! The host-side lexing primitives the scanner drives, and a reference
//! implementation over in-memory source text.

use ripple_core::text::{TextPos, TextRange, TextSpan};

/// The cursor primitives a parsing engine exposes to the contextual scanner.
///
/// The scanner never owns the cursor. It reads the lookahead and asks the
/// host to move past it, either into the pending token (`advance`) or as
/// trivia (`skip`). The token's end is whatever position was last staked with
/// `mark_end`, so a recognizer may look further ahead than it commits.
pub trait Lexer {
    /// The next unconsumed code point, or `None` at end of input.
    fn lookahead(&self) -> Option<char>;

    /// Consume the lookahead into the pending token.
    fn advance(&mut self);

    /// Consume the lookahead as trivia, excluded from any token.
    fn skip(&mut self);

    /// Stake the current position as the end of the pending token.
    fn mark_end(&mut self);

    /// Whether the current position begins a region the host hands to an
    /// embedded language.
    fn is_at_included_range_start(&self) -> bool;

    #[inline]
    fn is_eof(&self) -> bool {
        self.lookahead().is_none()
    }
}

/// A reference [`Lexer`] over a borrowed source string.
///
/// Cloning is cheap (a few offsets and two borrowed slices), which is what
/// lets the scanner try a recognizer on a copy and write back only a
/// successful attempt.
#[derive(Debug, Clone)]
pub struct SourceLexer<'a> {
    /// The source text being scanned.
    text: &'a str,
    /// Byte offset of the lookahead.
    pos: usize,
    /// Start of the pending token; moves forward while only trivia is seen.
    token_start: usize,
    /// Position staked by `mark_end`, if any.
    token_end: Option<usize>,
    /// Whether anything has been advanced into the pending token.
    has_content: bool,
    /// Regions owned by an embedded language, sorted by start.
    included_ranges: &'a [TextRange],
}

impl<'a> SourceLexer<'a> {
    /// Create a lexer positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            token_start: 0,
            token_end: None,
            has_content: false,
            included_ranges: &[],
        }
    }

    /// Create a lexer positioned at byte offset `pos`.
    pub fn at(text: &'a str, pos: TextPos) -> Self {
        let mut lexer = Self::new(text);
        lexer.set_pos(pos);
        lexer
    }

    /// Report `ranges` as embedded-language regions.
    pub fn with_included_ranges(mut self, ranges: &'a [TextRange]) -> Self {
        self.included_ranges = ranges;
        self
    }

    /// The full source text.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the lookahead.
    #[inline]
    pub fn pos(&self) -> TextPos {
        self.pos as TextPos
    }

    /// Move the cursor to `pos` and begin a fresh pending token there.
    ///
    /// Hosts call this when they resume scanning at an arbitrary position,
    /// for example after an edit. An offset past the end clamps to the end;
    /// one inside a multi-byte character snaps back to that character's start.
    pub fn set_pos(&mut self, pos: TextPos) {
        let mut pos = (pos as usize).min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        self.pos = pos;
        self.start_token();
    }

    /// Forget the pending token and begin a new one at the cursor.
    pub fn start_token(&mut self) {
        self.token_start = self.pos;
        self.token_end = None;
        self.has_content = false;
    }

    /// The span of the pending token, if an end has been marked.
    ///
    /// Trivia skipped after the mark never widens the span: a token whose
    /// end was staked before any trivia is reported as empty at the mark.
    pub fn token_span(&self) -> Option<TextSpan> {
        let end = self.token_end?;
        let start = self.token_start.min(end);
        Some(TextSpan::from_bounds(start as TextPos, end as TextPos))
    }

    /// The source text of the pending token, if an end has been marked.
    pub fn token_text(&self) -> Option<&'a str> {
        self.token_span().and_then(|span| span.slice(self.text))
    }

    /// Accept the pending token: rewind the cursor to its marked end and
    /// start the next token there. Returns the accepted span.
    pub fn finish_token(&mut self) -> Option<TextSpan> {
        let span = self.token_span()?;
        self.pos = span.end() as usize;
        self.start_token();
        Some(span)
    }

    #[inline]
    fn bump(&mut self) {
        if let Some(ch) = self.lookahead() {
            self.pos += ch.len_utf8();
        }
    }
}

impl Lexer for SourceLexer<'_> {
    #[inline]
    fn lookahead(&self) -> Option<char> {
        self.text.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    #[inline]
    fn advance(&mut self) {
        self.bump();
        self.has_content = true;
    }

    #[inline]
    fn skip(&mut self) {
        self.bump();
        if !self.has_content {
            self.token_start = self.pos;
        }
    }

    #[inline]
    fn mark_end(&mut self) {
        self.token_end = Some(self.pos);
    }

    fn is_at_included_range_start(&self) -> bool {
        let pos = self.pos as TextPos;
        self.included_ranges
            .binary_search_by_key(&pos, |range| range.pos)
            .is_ok()
    }
}
