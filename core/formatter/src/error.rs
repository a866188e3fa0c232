//! FILENAME: core/formatter/src/error.rs

use thiserror::Error;

/// Configuration errors. Lexing and formatting themselves never fail.
#[derive(Error, Debug)]
pub enum FormatterError {
    #[error("Invalid options JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid indent unit {0:?}: expected one or more spaces or tabs")]
    InvalidIndentUnit(String),
}
