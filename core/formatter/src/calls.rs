//! FILENAME: core/formatter/src/calls.rs
//! PURPOSE: Precomputes paren matching and top-level argument counts.
//! CONTEXT: The formatter decides per `(` whether to break a call across
//! lines. Instead of re-scanning forward from every paren, a single pass with
//! an explicit stack records each paren's match and how many commas sit
//! directly inside it.

use crate::logging::log_trace;
use crate::token::{Token, TokenKind};

/// Facts about the call opened by one `(` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallInfo {
    /// Token index of the matching `)`, None when unbalanced.
    pub close: Option<usize>,
    /// Commas at nesting depth one relative to this paren.
    pub top_level_commas: usize,
}

impl CallInfo {
    /// Calls with two or more arguments are laid out one argument per line.
    pub fn breaks(&self) -> bool {
        self.top_level_commas >= 1
    }
}

/// Per-token call facts, indexed by token position. Only `(` tokens have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallTable {
    calls: Vec<Option<CallInfo>>,
}

impl CallTable {
    pub fn get(&self, index: usize) -> Option<&CallInfo> {
        self.calls.get(index).and_then(Option::as_ref)
    }

    pub fn matching_close(&self, open: usize) -> Option<usize> {
        self.get(open).and_then(|call| call.close)
    }

    /// Number of calls that will be broken across lines.
    pub fn broken_count(&self) -> usize {
        self.calls.iter().flatten().filter(|call| call.breaks()).count()
    }
}

pub fn analyze_calls(tokens: &[Token]) -> CallTable {
    let mut calls = vec![None; tokens.len()];
    // (index of '(', commas seen directly inside it)
    let mut open: Vec<(usize, usize)> = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        match token.kind() {
            TokenKind::OpenParen => open.push((index, 0)),
            TokenKind::Comma => {
                if let Some((_, commas)) = open.last_mut() {
                    *commas += 1;
                }
            }
            TokenKind::CloseParen => match open.pop() {
                Some((start, commas)) => {
                    calls[start] = Some(CallInfo {
                        close: Some(index),
                        top_level_commas: commas,
                    });
                }
                None => log_trace!("FORMAT", "stray ')' at byte {}", token.span.start),
            },
            _ => {}
        }
    }

    // Unclosed parens count their commas through end of input.
    for (start, commas) in open {
        calls[start] = Some(CallInfo {
            close: None,
            top_level_commas: commas,
        });
    }

    CallTable { calls }
}
