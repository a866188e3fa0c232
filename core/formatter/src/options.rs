//! FILENAME: core/formatter/src/options.rs
//! PURPOSE: Formatter configuration.
//! CONTEXT: Options arrive from the frontend as camelCase JSON. Every field
//! has a default, so `{}` is a valid document.

use serde::{Deserialize, Serialize};

use crate::error::FormatterError;
use crate::lexer::ScanPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    /// Text repeated once per indent level. Spaces and tabs only.
    pub indent_unit: String,
    /// Recognize `NAME (` as a call when formatting, as the highlighter does.
    pub allow_space_before_call_paren: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            indent_unit: "\t".to_string(),
            allow_space_before_call_paren: false,
        }
    }
}

impl FormatOptions {
    /// Parses and validates options from JSON.
    pub fn from_json(json: &str) -> Result<Self, FormatterError> {
        let options: FormatOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), FormatterError> {
        let spaces_or_tabs = !self.indent_unit.is_empty()
            && self.indent_unit.chars().all(|c| c == ' ' || c == '\t');
        if !spaces_or_tabs {
            return Err(FormatterError::InvalidIndentUnit(self.indent_unit.clone()));
        }
        Ok(())
    }

    /// Lexer policy used when formatting under these options.
    pub fn scan_policy(&self) -> ScanPolicy {
        ScanPolicy {
            allow_space_before_call_paren: self.allow_space_before_call_paren,
            ..ScanPolicy::LAYOUT
        }
    }
}
