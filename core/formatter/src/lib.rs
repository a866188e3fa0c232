//! FILENAME: core/formatter/src/lib.rs
//! PURPOSE: Library root for the formula formatter and highlighter.
//! CONTEXT: Exposes two pure operations to the formula editor: `format`
//! (re-indented, normalized text) and `tokenize_for_display` (classified
//! tokens for colorizing). Both are total; malformed formulas mid-edit are
//! handled with a best-effort result, never an error.
//!
//! PIPELINE:
//!   Formula String --> Lexer (layout) --> Tokens --> Call table --> Printer --> Cleanup
//!   Formula String --> Lexer (display) --> Display tokens
//!
//! SUPPORTED SYNTAX:
//! - Field references: {Revenue}
//! - Strings: "abc", 'abc', with backslash escapes
//! - Numbers: 1, 3.14, TRUE, FALSE
//! - Operators: + - * / & = ! > < == != >= <=
//! - Function calls: IF({Status}="Active",1,0)

mod logging;

pub mod calls;
mod cleanup;
pub mod error;
pub mod formatter;
pub mod highlight;
pub mod lexer;
pub mod options;
pub mod token;


// Re-export commonly used types for convenience
pub use calls::{CallInfo, CallTable, analyze_calls};
pub use error::FormatterError;
pub use formatter::{LayoutState, format, format_with};
pub use highlight::{FormattedFormula, format_and_highlight, tokenize_for_display};
pub use lexer::{Lexer, ScanPolicy, tokenize, tokenize_with};
pub use options::FormatOptions;
pub use token::{DisplayKind, DisplayToken, Token, TokenKind};
