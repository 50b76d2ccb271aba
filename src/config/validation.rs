//! Validation of raw configuration values.
//!
//! Uses Stillwater's `Validation` so every issue in a configuration is
//! reported together instead of stopping at the first one.

use crate::config::error::ConfigIssue;
use crate::config::style::{Size, Tint};
use crate::config::StepperConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of a single configuration check.
pub type Check = Validation<(), NonEmptyVec<ConfigIssue>>;

fn from_result<T>(result: Result<T, ConfigIssue>) -> Check {
    match result {
        Ok(_) => Validation::success(()),
        Err(issue) => Validation::fail(issue),
    }
}

fn check_size(config: &StepperConfig) -> Check {
    match config.size.as_deref() {
        Some(name) => from_result(name.parse::<Size>()),
        None => Validation::success(()),
    }
}

fn check_maximum(config: &StepperConfig) -> Check {
    match config.maximum_count {
        Some(max) if max < 0 => Validation::fail(ConfigIssue::NegativeMaximum(max)),
        _ => Validation::success(()),
    }
}

fn check_tint(config: &StepperConfig) -> Check {
    match config.tint.as_deref() {
        Some(hex) => from_result(hex.parse::<Tint>()),
        None => Validation::success(()),
    }
}

/// Run every check, accumulating ALL issues.
pub fn validate(config: &StepperConfig) -> Check {
    let checks = vec![
        check_size(config),
        check_maximum(config),
        check_tint(config),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Flatten a validation outcome into the list of issues it carries.
pub fn issues(check: Check) -> Vec<ConfigIssue> {
    match check {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(issues) => issues.iter().cloned().collect(),
    }
}
