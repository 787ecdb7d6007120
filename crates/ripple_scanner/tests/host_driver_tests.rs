//! Host simulation tests.
//!
//! A toy parsing engine walks Ripple source with a small mode stack, decides
//! which external tokens its "grammar" would accept at each position, asks the
//! scanner, and lexes the position itself whenever the scanner declines.

use ripple_scanner::{ExternalToken, Scanner, SourceLexer, ValidTokens};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Statements,
    Interpolation,
    MarkupExpression,
    Template,
    Markup,
}

/// A lexed token: `Some(kind)` when the scanner produced it, `None` when the
/// host lexed it.
type Token<'a> = (Option<ExternalToken>, &'a str);

struct Host<'a> {
    lexer: SourceLexer<'a>,
    scanner: Scanner,
    modes: Vec<Mode>,
    ends_expression: bool,
    tokens: Vec<Token<'a>>,
}

impl<'a> Host<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            lexer: SourceLexer::new(source),
            scanner: Scanner::new(),
            modes: vec![Mode::Statements],
            ends_expression: false,
            tokens: Vec::new(),
        }
    }

    fn mode(&self) -> Mode {
        self.modes.last().copied().unwrap_or(Mode::Statements)
    }

    fn admissible(&self) -> ValidTokens {
        match self.mode() {
            Mode::Template => ValidTokens::TEMPLATE_CHARS,
            Mode::Markup => ValidTokens::JSX_TEXT,
            Mode::Statements if self.ends_expression => {
                ValidTokens::AUTOMATIC_SEMICOLON | ValidTokens::TERNARY_QMARK
            }
            Mode::Interpolation | Mode::MarkupExpression if self.ends_expression => {
                ValidTokens::TERNARY_QMARK
            }
            _ => ValidTokens::NONE,
        }
    }

    fn run(mut self) -> Vec<Token<'a>> {
        loop {
            let valid = self.admissible();
            if !valid.is_empty() {
                if let Some(kind) = self.scanner.scan(&mut self.lexer, valid) {
                    let text = self.lexer.token_text().unwrap_or_default();
                    self.lexer.finish_token();
                    self.tokens.push((Some(kind), text));
                    self.ends_expression = false;
                    continue;
                }
            }
            if !self.lex_host_token() {
                return self.tokens;
            }
        }
    }

    /// Lex one token the scanner declined. Returns `false` at end of input.
    fn lex_host_token(&mut self) -> bool {
        let text = self.lexer.text();
        let mut pos = self.lexer.pos() as usize;
        let mode = self.mode();
        if !matches!(mode, Mode::Template | Mode::Markup) {
            pos += text[pos..].len() - text[pos..].trim_start().len();
        }
        let rest = &text[pos..];
        let mut chars = rest.chars();
        let Some(ch) = chars.next() else {
            return false;
        };
        let next = chars.next();
        let tag_len = || rest.find('>').map_or(rest.len(), |i| i + 1);

        let len = match (mode, ch) {
            (Mode::Template, '`') => {
                self.modes.pop();
                self.ends_expression = true;
                1
            }
            (Mode::Template, '$') => {
                self.modes.push(Mode::Interpolation);
                2
            }
            (Mode::Template, '\\') => 1 + next.map_or(0, char::len_utf8),
            (Mode::Template, other) => panic!("scanner left template text {other:?} at {pos}"),
            (_, '<') if next == Some('/') => {
                self.modes.pop();
                self.ends_expression = true;
                tag_len()
            }
            (_, '<') if next.is_some_and(char::is_alphabetic) => {
                self.modes.push(Mode::Markup);
                tag_len()
            }
            (Mode::Markup, '{') => {
                self.modes.push(Mode::MarkupExpression);
                1
            }
            (Mode::Markup, other) => panic!("scanner left markup text {other:?} at {pos}"),
            (_, '`') => {
                self.modes.push(Mode::Template);
                self.ends_expression = false;
                1
            }
            (_, '{') => {
                self.modes.push(Mode::Statements);
                self.ends_expression = false;
                1
            }
            (_, '}') => {
                self.modes.pop();
                self.ends_expression = false;
                1
            }
            (_, '?') if matches!(next, Some('?') | Some('.')) => {
                self.ends_expression = false;
                2
            }
            (_, c) if c.is_alphanumeric() || c == '_' || c == '$' => {
                self.ends_expression = true;
                rest.find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
                    .unwrap_or(rest.len())
            }
            (_, c) => {
                self.ends_expression = matches!(c, ')' | ']');
                c.len_utf8()
            }
        };

        self.tokens.push((None, &rest[..len]));
        self.lexer.set_pos((pos + len) as u32);
        true
    }
}

fn tokenize(source: &str) -> Vec<Token<'_>> {
    Host::new(source).run()
}

fn external_tokens(source: &str) -> Vec<(ExternalToken, &str)> {
    tokenize(source)
        .into_iter()
        .filter_map(|(kind, text)| kind.map(|kind| (kind, text)))
        .collect()
}

#[test]
fn test_component_walk() {
    let source = "let a = x\nlet b = y ? `n=${a}$` : c ?? d\n<p>Hi {a}!</p>";
    assert_eq!(
        external_tokens(source),
        vec![
            (ExternalToken::AutomaticSemicolon, ""),
            (ExternalToken::TernaryQmark, "?"),
            (ExternalToken::TemplateChars, "n="),
            (ExternalToken::TemplateChars, "$"),
            (ExternalToken::JsxText, "Hi "),
            (ExternalToken::JsxText, "!"),
            (ExternalToken::AutomaticSemicolon, ""),
        ]
    );

    let host_tokens: Vec<&str> = tokenize(source)
        .into_iter()
        .filter(|(kind, _)| kind.is_none())
        .map(|(_, text)| text)
        .collect();
    assert!(host_tokens.contains(&"??"));
    assert!(host_tokens.contains(&"${"));
    assert!(host_tokens.contains(&"<p>"));
    assert!(host_tokens.contains(&"</p>"));
}

#[test]
fn test_statements_split_at_line_breaks() {
    let source = "let a = 1\nlet b = a\n  + 2\nfoo(b)\n(bar)\n";
    let semicolons = external_tokens(source)
        .into_iter()
        .filter(|(kind, _)| *kind == ExternalToken::AutomaticSemicolon)
        .count();
    // After `1`, after `2`, and at the end of input. `+ 2` and `(bar)`
    // continue the statements above them.
    assert_eq!(semicolons, 3);
}

#[test]
fn test_tokens_cover_source() {
    let source = "const s = `a\\`b${c ? d : e}f`\n<div>\n  text {s}\n</div>";
    let tokens = tokenize(source);
    let rebuilt: String = tokens.iter().map(|(_, text)| *text).collect();
    let without_trivia: String = source.split_whitespace().collect();
    // Host tokens drop whitespace between code tokens; markup text keeps it.
    assert_eq!(
        rebuilt.split_whitespace().collect::<String>(),
        without_trivia
    );
    assert!(tokens.contains(&(Some(ExternalToken::TemplateChars), "a")));
    assert!(tokens.contains(&(None, "\\`")));
    assert!(tokens.contains(&(Some(ExternalToken::TemplateChars), "b")));
    assert!(tokens.contains(&(Some(ExternalToken::TernaryQmark), "?")));
    assert!(tokens.contains(&(Some(ExternalToken::TemplateChars), "f")));
    assert!(tokens.contains(&(Some(ExternalToken::JsxText), "\n  text ")));
}

#[test]
fn test_walk_is_repeatable() {
    let source = "x\n? y : z\nlet t = `${x}`\n<b>{t}</b>";
    assert_eq!(tokenize(source), tokenize(source));
}
