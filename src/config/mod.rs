//! Stepper configuration.
//!
//! [`StepperConfig`] is the raw, deserialisable form an owner can load from
//! JSON. [`StepperConfig::resolve`] validates it and produces the
//! [`ResolvedConfig`] the widget is built from.
//!
//! # Example
//!
//! ```rust
//! use cart_stepper::config::{Size, StepperConfig};
//!
//! let config = StepperConfig::from_json(r#"{ "maximum_count": 5, "size": "z" }"#).unwrap();
//! let resolved = config.resolve().unwrap();
//!
//! assert_eq!(resolved.limits.maximum_count, 5);
//! assert_eq!(resolved.style.size, Size::L);
//! ```

pub mod error;
pub mod style;
pub mod validation;

pub use error::{ConfigError, ConfigIssue};
pub use style::{Font, FontWeight, IconSize, Size, SizeMetrics, Style, Tint};

use crate::core::{Limits, DEFAULT_HISTORY_CAPACITY};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// What to do with configuration issues.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigPolicy {
    /// Log each issue and fall back to the default value
    #[default]
    IgnoreAndLog,

    /// Fail with every issue found
    Reject,
}

/// Raw stepper configuration. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperConfig {
    /// Ceiling on the quantity; absent means unbounded.
    pub maximum_count: Option<i64>,
    /// Size variant name, `S`, `M` or `L` in any case.
    pub size: Option<String>,
    /// Tint as `#RRGGBB`.
    pub tint: Option<String>,
    /// Number of committed transitions kept in history.
    pub history_capacity: Option<usize>,
    pub policy: ConfigPolicy,
}

/// Validated configuration with defaults filled in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub limits: Limits,
    pub style: Style,
    pub history_capacity: usize,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            limits: Limits::unbounded(),
            style: Style::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl StepperConfig {
    /// Parse a configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate and fill in defaults according to `self.policy`.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let issues = validation::issues(validation::validate(self));

        if !issues.is_empty() {
            match self.policy {
                ConfigPolicy::Reject => return Err(ConfigError::Rejected(issues)),
                ConfigPolicy::IgnoreAndLog => {
                    for issue in &issues {
                        warn!(%issue, "coercing stepper configuration to default");
                    }
                }
            }
        }

        let limits = match self.maximum_count {
            Some(max) if max >= 0 => {
                Limits::new(usize::try_from(max).unwrap_or(usize::MAX))
            }
            _ => Limits::unbounded(),
        };
        let size: Size = self
            .size
            .as_deref()
            .and_then(|name| name.parse().ok())
            .unwrap_or_default();
        let tint: Tint = self
            .tint
            .as_deref()
            .and_then(|hex| hex.parse().ok())
            .unwrap_or_default();

        Ok(ResolvedConfig {
            limits,
            style: Style::new(size, tint),
            history_capacity: self.history_capacity.unwrap_or(DEFAULT_HISTORY_CAPACITY),
        })
    }
}
