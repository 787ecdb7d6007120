//! Character code constants and classifiers used by the scanner.

pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const LINE_SEPARATOR: char = '\u{2028}';
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';

pub const DOLLAR_SIGN: char = '$';
pub const ASTERISK: char = '*';
pub const DOT: char = '.';
pub const SLASH: char = '/';
pub const LESS_THAN: char = '<';
pub const QUESTION: char = '?';
pub const BACKSLASH: char = '\\';
pub const BACKTICK: char = '`';
pub const OPEN_BRACE: char = '{';
pub const CLOSE_BRACE: char = '}';

/// Check if a character is a line terminator.
#[inline]
pub fn is_line_break(ch: char) -> bool {
    ch == LINE_FEED
        || ch == CARRIAGE_RETURN
        || ch == LINE_SEPARATOR
        || ch == PARAGRAPH_SEPARATOR
}

/// Check if a character is whitespace (not line break).
#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\u{000B}' // vertical tab
            | '\u{000C}' // form feed
            | '\u{00A0}' // no-break space
            | '\u{1680}' // ogham space mark
            | '\u{2000}'..='\u{200A}' // various spaces
            | '\u{202F}' // narrow no-break space
            | '\u{205F}' // medium mathematical space
            | '\u{3000}' // ideographic space
            | '\u{FEFF}' // BOM / zero-width no-break space
    )
}

/// Whitespace of either kind, as skipped between tokens.
#[inline]
pub fn is_white_space_like(ch: char) -> bool {
    is_white_space_single_line(ch) || is_line_break(ch)
}

/// Characters that, as the first token on a new line, continue the previous
/// statement: binary operators, member access, argument and index openers.
/// A line break followed by one of these never ends a statement.
#[inline]
pub fn is_continuation_start(ch: char) -> bool {
    matches!(
        ch,
        ',' | '.'
            | ':'
            | ';'
            | '*'
            | '%'
            | '^'
            | '+'
            | '-'
            | '/'
            | '<'
            | '='
            | '>'
            | '|'
            | '&'
            | '?'
            | '['
            | '('
    )
}
