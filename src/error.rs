//! Errors raised while applying a single rule effect.
//!
//! These never escape the public API. The dispatcher logs them and drops the
//! effect that failed, so a malformed rule degrades to partial metadata.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The rule reads a parameter position that was not supplied (`between:1`).
    #[error("rule `{rule}` is missing parameter #{index}")]
    MissingParameter { rule: String, index: usize },

    /// A parameter that must be numeric could not be read as a number.
    #[error("rule `{rule}` expects a number, got `{value}`")]
    InvalidNumber { rule: String, value: String },

    /// A date bound could not be resolved to a calendar date.
    #[error("rule `{rule}` expects a date, got `{value}`")]
    InvalidDate { rule: String, value: String },

    /// A list-valued rule (`in`, `mimes`, ...) was given no items.
    #[error("rule `{rule}` expects at least one value")]
    EmptyList { rule: String },
}
