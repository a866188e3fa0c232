//! FILENAME: core/formatter/src/highlight.rs
//! PURPOSE: Display tokenization for syntax highlighting.
//! CONTEXT: Every character of the input lands in exactly one token, so the
//! frontend can rebuild the text by concatenating token texts and color each
//! span by its DisplayKind.

use serde::{Deserialize, Serialize};

use crate::formatter::format;
use crate::lexer::{ScanPolicy, tokenize_with};
use crate::logging::{log_enter, log_exit};
use crate::token::DisplayToken;

/// Formatted text together with its highlighting tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedFormula {
    pub formatted: String,
    pub tokens: Vec<DisplayToken>,
}

/// Splits a formula into display tokens. Lossless: joining the token texts
/// yields the input exactly.
pub fn tokenize_for_display(formula: &str) -> Vec<DisplayToken> {
    log_enter!("HIGHLIGHT", "tokenize_for_display", "len={}", formula.len());
    let tokens: Vec<DisplayToken> = tokenize_with(formula, ScanPolicy::DISPLAY)
        .into_iter()
        .map(DisplayToken::from)
        .collect();
    log_exit!("HIGHLIGHT", "tokenize_for_display", "tokens={}", tokens.len());
    tokens
}

/// Formats a formula and tokenizes the result for display.
pub fn format_and_highlight(formula: &str) -> FormattedFormula {
    let formatted = format(formula);
    let tokens = tokenize_for_display(&formatted);
    FormattedFormula { formatted, tokens }
}
