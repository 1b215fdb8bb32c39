
use crate::error::ConfigError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::debug;

///
/// ErrorPolicy
///
/// Strict raises typed errors for operand mismatches and arithmetic
/// failures. Permissive substitutes null and keeps evaluating.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    #[display("strict")]
    Strict,

    #[default]
    #[display("permissive")]
    Permissive,
}

impl ErrorPolicy {
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

///
/// OperatorConfig
///
/// Evaluator settings. Loaded from TOML; every field is optional.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OperatorConfig {
    pub policy: ErrorPolicy,

    /// Emit a warning event whenever the permissive policy swallows a
    /// failure by producing null.
    pub warn_on_null: bool,
}

impl OperatorConfig {
    #[must_use]
    pub const fn new(policy: ErrorPolicy) -> Self {
        Self {
            policy,
            warn_on_null: true,
        }
    }

    #[must_use]
    pub const fn strict() -> Self {
        Self::new(ErrorPolicy::Strict)
    }

    #[must_use]
    pub const fn permissive() -> Self {
        Self::new(ErrorPolicy::Permissive)
    }

    #[must_use]
    pub const fn with_warn_on_null(mut self, warn_on_null: bool) -> Self {
        self.warn_on_null = warn_on_null;
        self
    }

    /// Parse a TOML document; missing fields take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        debug!(
            policy = %config.policy,
            warn_on_null = config.warn_on_null,
            "loaded operator config"
        );

        Ok(config)
    }
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self::permissive()
    }
}
