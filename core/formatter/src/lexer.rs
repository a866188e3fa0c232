//! FILENAME: core/formatter/src/lexer.rs
//! PURPOSE: Scans a raw formula string and produces a stream of Tokens.
//! CONTEXT: One scanner serves both consumers. The formatter scans with
//! `ScanPolicy::LAYOUT` (whitespace dropped, call paren must be adjacent);
//! the highlighter scans with `ScanPolicy::DISPLAY` (whitespace kept, text
//! verbatim, whitespace allowed before a call paren).
//!
//! SCANNING RULES (in priority order):
//! - `{` field reference up to and including the first `}`
//! - `"` / `'` string literal with single-character backslash escapes
//! - digits and dots as one number, no validation
//! - single char operators: + - * / &
//! - = ! > < optionally followed by `=`
//! - ( ) , punctuation
//! - identifiers: function when followed by `(`, TRUE/FALSE as numbers
//! - whitespace runs, anything else as a one-character text token
//!
//! Unterminated fields and strings run to end of input. The lexer never fails.

use crate::logging::{log_enter, log_exit};
use crate::token::{Token, TokenKind};
use std::iter::Peekable;
use std::str::CharIndices;

/// Emission policy for the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanPolicy {
    /// Emit whitespace runs as tokens instead of skipping them.
    pub emit_whitespace: bool,
    /// Treat `name (` as a call, not only `name(`.
    pub allow_space_before_call_paren: bool,
    /// Upper-case function names and TRUE/FALSE.
    pub normalize_case: bool,
}

impl ScanPolicy {
    /// Token stream for the formatter.
    pub const LAYOUT: ScanPolicy = ScanPolicy {
        emit_whitespace: false,
        allow_space_before_call_paren: false,
        normalize_case: true,
    };

    /// Lossless token stream for highlighting.
    pub const DISPLAY: ScanPolicy = ScanPolicy {
        emit_whitespace: true,
        allow_space_before_call_paren: true,
        normalize_case: false,
    };
}

impl Default for ScanPolicy {
    fn default() -> Self {
        ScanPolicy::LAYOUT
    }
}

pub struct Lexer<'a> {
    source: &'a str,
    input: Peekable<CharIndices<'a>>,
    policy: ScanPolicy,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer::with_policy(source, ScanPolicy::LAYOUT)
    }

    pub fn with_policy(source: &'a str, policy: ScanPolicy) -> Self {
        Lexer {
            source,
            input: source.char_indices().peekable(),
            policy,
        }
    }

    /// Advances the lexer and returns the next token, or None at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            let (start, ch) = self.input.next()?;

            let kind = match ch {
                '{' => self.read_field(),

                '"' | '\'' => self.read_string(ch),

                ch if ch.is_ascii_digit() => {
                    self.consume_while(|c| c.is_ascii_digit() || c == '.');
                    TokenKind::Number
                }

                '+' | '-' | '*' | '/' | '&' => TokenKind::Operator,

                // = ! > < and their two-character forms ending in '='
                '=' | '!' | '>' | '<' => {
                    self.input.next_if(|&(_, c)| c == '=');
                    TokenKind::Operator
                }

                '(' => TokenKind::OpenParen,
                ')' => TokenKind::CloseParen,
                ',' => TokenKind::Comma,

                ch if is_identifier_start(ch) => return Some(self.read_identifier(start)),

                ch if ch.is_whitespace() => {
                    self.consume_while(char::is_whitespace);
                    if !self.policy.emit_whitespace {
                        continue;
                    }
                    TokenKind::Whitespace
                }

                _ => TokenKind::Text,
            };

            let end = self.offset();
            return Some(Token::new(kind, &self.source[start..end], start..end));
        }
    }

    /// Byte offset of the next unconsumed character.
    fn offset(&mut self) -> usize {
        self.input
            .peek()
            .map(|&(index, _)| index)
            .unwrap_or(self.source.len())
    }

    fn consume_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.input.next_if(|&(_, c)| predicate(c)).is_some() {}
    }

    /// Consumes through the closing brace, or to end of input.
    fn read_field(&mut self) -> TokenKind {
        for (_, ch) in self.input.by_ref() {
            if ch == '}' {
                break;
            }
        }
        TokenKind::Field
    }

    /// Consumes through the matching quote, or to end of input.
    /// A backslash takes the following character verbatim.
    fn read_string(&mut self, quote: char) -> TokenKind {
        while let Some((_, ch)) = self.input.next() {
            if ch == '\\' {
                self.input.next();
            } else if ch == quote {
                break;
            }
        }
        TokenKind::String
    }

    fn read_identifier(&mut self, start: usize) -> Token {
        self.consume_while(is_identifier_continue);
        let end = self.offset();
        let ident = &self.source[start..end];

        let rest = &self.source[end..];
        let is_call = if self.policy.allow_space_before_call_paren {
            rest.trim_start().starts_with('(')
        } else {
            rest.starts_with('(')
        };

        let upper = ident.to_ascii_uppercase();
        let kind = if is_call {
            TokenKind::Function
        } else if upper == "TRUE" || upper == "FALSE" {
            TokenKind::Number
        } else {
            return Token::new(TokenKind::Text, ident, start..end);
        };

        let text = if self.policy.normalize_case {
            upper
        } else {
            ident.to_string()
        };
        Token::new(kind, text, start..end)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Scans a formula for layout: whitespace dropped, calls need an adjacent `(`.
pub fn tokenize(formula: &str) -> Vec<Token> {
    tokenize_with(formula, ScanPolicy::LAYOUT)
}

/// Scans a formula under an explicit policy.
pub fn tokenize_with(formula: &str, policy: ScanPolicy) -> Vec<Token> {
    log_enter!("LEXER", "tokenize_with", "len={} policy={:?}", formula.len(), policy);
    let tokens: Vec<Token> = Lexer::with_policy(formula, policy).collect();
    log_exit!("LEXER", "tokenize_with", "tokens={}", tokens.len());
    tokens
}

/// Returns true if `ch` can start an identifier: ASCII letters and underscore.
fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
