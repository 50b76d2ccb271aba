//! Configuration error types.

use thiserror::Error;

/// A single problem found in a stepper configuration.
///
/// Under [`ConfigPolicy::IgnoreAndLog`](super::ConfigPolicy::IgnoreAndLog)
/// each issue is logged and the offending value replaced by its default.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("Unknown size variant '{0}', expected S, M or L")]
    UnknownSize(String),

    #[error("Maximum count must not be negative (got {0})")]
    NegativeMaximum(i64),

    #[error("Invalid tint '{0}', expected #RRGGBB")]
    InvalidTint(String),
}

/// Errors that can occur when loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for this schema
    #[error("Failed to parse stepper configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Issues were found and the policy is to reject
    #[error("Stepper configuration rejected: {}", format_issues(.0))]
    Rejected(Vec<ConfigIssue>),
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
