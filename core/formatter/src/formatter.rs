//! FILENAME: core/formatter/src/formatter.rs
//! PURPOSE: Pretty-prints a formula with one argument per line for multi-argument calls.
//! CONTEXT: Runs the layout lexer, precomputes the call table, then folds
//! over the tokens with an immutable LayoutState. Output goes through the
//! cleanup pass before it is returned.
//!
//! LAYOUT RULES:
//! - `(` of a call with two or more arguments opens a new indent level
//! - `)` drops one level (floor 0) and sits on its own line while multi-line
//! - `,` always starts a new line unless `)` follows
//! - operators get one space on each side, except next to `(`, `,`, `)` or
//!   another operator
//! - every other token is emitted verbatim

use crate::calls::{CallTable, analyze_calls};
use crate::cleanup::tidy;
use crate::lexer::tokenize_with;
use crate::logging::{log_enter, log_exit, log_trace};
use crate::options::FormatOptions;
use crate::token::{Token, TokenKind};

/// Indent depth and break mode, threaded through the emission pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutState {
    pub indent: usize,
    pub multi_line: bool,
}

impl LayoutState {
    fn open_call(self) -> Self {
        LayoutState {
            indent: self.indent + 1,
            multi_line: true,
        }
    }

    fn close_call(self) -> Self {
        let indent = self.indent.saturating_sub(1);
        LayoutState {
            indent,
            multi_line: self.multi_line && indent > 0,
        }
    }
}

struct Printer<'t> {
    tokens: &'t [Token],
    calls: &'t CallTable,
    indent_unit: &'t str,
}

impl Printer<'_> {
    fn kind_at(&self, index: Option<usize>) -> Option<TokenKind> {
        index
            .and_then(|i| self.tokens.get(i))
            .map(Token::kind)
    }

    fn newline(&self, out: &mut String, depth: usize) {
        out.push('\n');
        for _ in 0..depth {
            out.push_str(self.indent_unit);
        }
    }

    /// Emits the token at `index` and returns the state for the next token.
    fn emit(&self, state: LayoutState, index: usize, out: &mut String) -> LayoutState {
        let token = &self.tokens[index];
        let prev = self.kind_at(index.checked_sub(1));
        let next = self.kind_at(Some(index + 1));

        match token.kind() {
            TokenKind::OpenParen => {
                out.push('(');
                if !self.calls.get(index).is_some_and(|call| call.breaks()) {
                    return state;
                }
                let state = state.open_call();
                log_trace!("FORMAT", "break call at token {} (indent {})", index, state.indent);
                self.newline(out, state.indent);
                state
            }

            TokenKind::CloseParen => {
                let closed = state.close_call();
                if state.multi_line && prev != Some(TokenKind::OpenParen) {
                    self.newline(out, closed.indent);
                }
                out.push(')');
                closed
            }

            TokenKind::Comma => {
                out.push(',');
                if next != Some(TokenKind::CloseParen) {
                    self.newline(out, state.indent);
                }
                state
            }

            TokenKind::Operator => {
                let glued_before = matches!(
                    prev,
                    None | Some(TokenKind::OpenParen | TokenKind::Comma | TokenKind::Operator)
                );
                let spaced_already = out.ends_with([' ', '\t', '\n']);
                if !glued_before && !spaced_already {
                    out.push(' ');
                }
                out.push_str(token.text());
                let glued_after = matches!(
                    next,
                    None | Some(TokenKind::CloseParen | TokenKind::Comma | TokenKind::Operator)
                );
                if !glued_after {
                    out.push(' ');
                }
                state
            }

            _ => {
                out.push_str(token.text());
                state
            }
        }
    }
}

/// Pretty-prints a formula with tab indentation.
pub fn format(formula: &str) -> String {
    format_with(formula, &FormatOptions::default())
}

/// Pretty-prints a formula. Never fails; malformed input gets a best-effort layout.
pub fn format_with(formula: &str, options: &FormatOptions) -> String {
    log_enter!("FORMAT", "format_with", "len={}", formula.len());

    if formula.trim().is_empty() {
        log_exit!("FORMAT", "format_with", "empty input");
        return String::new();
    }

    let tokens = tokenize_with(formula, options.scan_policy());
    let calls = analyze_calls(&tokens);
    let printer = Printer {
        tokens: &tokens,
        calls: &calls,
        indent_unit: &options.indent_unit,
    };

    let mut out = String::with_capacity(formula.len() * 2);
    let end = (0..tokens.len()).fold(LayoutState::default(), |state, index| {
        printer.emit(state, index, &mut out)
    });

    let formatted = tidy(&out);
    log_exit!(
        "FORMAT",
        "format_with",
        "tokens={} broken_calls={} final_indent={} lines={}",
        tokens.len(),
        calls.broken_count(),
        end.indent,
        formatted.lines().count()
    );
    formatted
}
