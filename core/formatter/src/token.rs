//! FILENAME: core/formatter/src/token.rs
//! PURPOSE: Token definitions shared by the layout and display lexers.
//! CONTEXT: Tokens are the atomic units produced by the lexer. The formatter
//! consumes the structural kinds; the highlighter collapses them into the
//! coarser display taxonomy sent to the frontend.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Structural token categories recognized by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier immediately followed by `(`: SUM, IF, CONCATENATE
    Function,
    /// Field reference: {Revenue}
    Field,
    /// Quoted literal: "abc" or 'abc'
    String,
    /// Digits and dots, plus the TRUE/FALSE literals
    Number,
    /// + - * / & = ! > < == != >= <=
    Operator,
    Comma,
    OpenParen,
    CloseParen,
    /// Plain identifiers and any character no other rule claims
    Text,
    /// Runs of whitespace (only emitted when the scan policy keeps them)
    Whitespace,
}

/// A classified, contiguous slice of a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    /// Byte offsets into the scanned formula.
    pub(crate) span: Range<usize>,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, text: impl Into<String>, span: Range<usize>) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The consumed text. Function names and TRUE/FALSE are upper-cased;
    /// everything else is verbatim.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Display taxonomy consumed by the highlighting frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayKind {
    Function,
    Field,
    String,
    Number,
    Operator,
    Punctuation,
    Text,
}

impl From<TokenKind> for DisplayKind {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Function => DisplayKind::Function,
            TokenKind::Field => DisplayKind::Field,
            TokenKind::String => DisplayKind::String,
            TokenKind::Number => DisplayKind::Number,
            TokenKind::Operator => DisplayKind::Operator,
            TokenKind::Comma | TokenKind::OpenParen | TokenKind::CloseParen => {
                DisplayKind::Punctuation
            }
            TokenKind::Text | TokenKind::Whitespace => DisplayKind::Text,
        }
    }
}

/// A highlighted token returned to the frontend.
/// Serializes as `{ "text": "...", "kind": "field" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayToken {
    pub text: String,
    pub kind: DisplayKind,
}

impl From<Token> for DisplayToken {
    fn from(token: Token) -> Self {
        DisplayToken {
            kind: token.kind.into(),
            text: token.text,
        }
    }
}
