//! External token kinds and the admissible-kind set supplied by the host.

use std::fmt;

/// A token kind the contextual scanner can produce.
///
/// The discriminants are the host grammar's external symbol indices, so the
/// order here must match the grammar's `externals` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum ExternalToken {
    /// A zero-width statement terminator inserted at a line break.
    AutomaticSemicolon = 0,
    /// A run of literal template-string characters.
    TemplateChars = 1,
    /// The `?` of a conditional expression.
    TernaryQmark = 2,
    /// A run of literal text inside a markup body.
    JsxText = 3,
}

impl ExternalToken {
    pub const ALL: [ExternalToken; 4] = [
        ExternalToken::AutomaticSemicolon,
        ExternalToken::TemplateChars,
        ExternalToken::TernaryQmark,
        ExternalToken::JsxText,
    ];

    /// The host symbol index of this token.
    #[inline]
    pub fn symbol(self) -> u16 {
        self as u16
    }

    /// Look up a token by host symbol index.
    pub fn from_symbol(symbol: u16) -> Option<Self> {
        Self::ALL.get(symbol as usize).copied()
    }

    /// The single-element admissible set for this kind.
    #[inline]
    pub fn as_valid(self) -> ValidTokens {
        match self {
            ExternalToken::AutomaticSemicolon => ValidTokens::AUTOMATIC_SEMICOLON,
            ExternalToken::TemplateChars => ValidTokens::TEMPLATE_CHARS,
            ExternalToken::TernaryQmark => ValidTokens::TERNARY_QMARK,
            ExternalToken::JsxText => ValidTokens::JSX_TEXT,
        }
    }

    /// The grammar-facing name of this token.
    pub fn name(self) -> &'static str {
        match self {
            ExternalToken::AutomaticSemicolon => "_automatic_semicolon",
            ExternalToken::TemplateChars => "_template_chars",
            ExternalToken::TernaryQmark => "_ternary_qmark",
            ExternalToken::JsxText => "jsx_text",
        }
    }
}

impl fmt::Display for ExternalToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// The set of external tokens the grammar can accept at the current
    /// position. Bit `n` corresponds to host symbol index `n`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ValidTokens: u8 {
        const NONE                = 0;
        const AUTOMATIC_SEMICOLON = 1 << 0;
        const TEMPLATE_CHARS      = 1 << 1;
        const TERNARY_QMARK       = 1 << 2;
        const JSX_TEXT            = 1 << 3;
    }
}

impl ValidTokens {
    /// Build the set from the host's valid-symbol array, indexed by symbol.
    /// Entries past the known tokens are ignored.
    pub fn from_valid_symbols(valid_symbols: &[bool]) -> Self {
        valid_symbols
            .iter()
            .zip(ExternalToken::ALL)
            .filter(|&(&valid, _)| valid)
            .fold(ValidTokens::NONE, |set, (_, token)| set | token.as_valid())
    }

    /// Whether `token` is admissible.
    #[inline]
    pub fn allows(self, token: ExternalToken) -> bool {
        self.contains(token.as_valid())
    }
}

impl From<ExternalToken> for ValidTokens {
    fn from(token: ExternalToken) -> Self {
        token.as_valid()
    }
}

impl FromIterator<ExternalToken> for ValidTokens {
    fn from_iter<I: IntoIterator<Item = ExternalToken>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ValidTokens::NONE, |set, token| set | token.as_valid())
    }
}
