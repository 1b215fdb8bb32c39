//! Operator semantics over [`Value`].
//!
//! Relational operators are policy-free functions in [`relational`]. Every
//! operator whose failure behavior depends on [`ErrorPolicy`] is a method on
//! [`Evaluator`].

mod arithmetic;
mod auxiliary;
mod collection;
mod logical;
pub mod relational;

#[cfg(test)]
mod tests;

use crate::{
    coerce,
    config::{ErrorPolicy, OperatorConfig},
    error::{OperatorError, OperatorResult, OperatorTypeError},
    value::Value,
};
use derive_more::Display;
use tracing::{debug, warn};

///
/// OperatorKind
///
/// Stable operator label used in error messages and log fields.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum OperatorKind {
    #[display("+")]
    Plus,
    #[display("-")]
    Minus,
    #[display("*")]
    Times,
    #[display("/")]
    Divide,
    #[display("%")]
    Modulus,
    #[display("unary +")]
    UnaryPlus,
    #[display("unary -")]
    UnaryMinus,
    #[display("NOT")]
    Not,
    #[display("AND")]
    And,
    #[display("OR")]
    Or,
    #[display("IN")]
    In,
    #[display("NOT IN")]
    NotIn,
    #[display("?:")]
    Ternary,
    #[display("MIN")]
    Min,
    #[display("MAX")]
    Max,
    #[display("UNIQUE")]
    Unique,
    #[display("SORTED")]
    Sorted,
}

///
/// Evaluator
///
/// Applies operators under one fixed [`OperatorConfig`].
/// Policies are never mixed within a single evaluator.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Evaluator {
    config: OperatorConfig,
}

impl Evaluator {
    #[must_use]
    pub const fn new(config: OperatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn strict() -> Self {
        Self::new(OperatorConfig::strict())
    }

    #[must_use]
    pub const fn permissive() -> Self {
        Self::new(OperatorConfig::permissive())
    }

    #[must_use]
    pub const fn config(&self) -> &OperatorConfig {
        &self.config
    }

    #[must_use]
    pub const fn policy(&self) -> ErrorPolicy {
        self.config.policy
    }

    ///
    /// COERCION
    ///

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn to_bool(&self, value: &Value) -> bool {
        coerce::to_bool(value)
    }

    /// Numeric coercion with the policy's failure value:
    /// `0` when strict, null when permissive.
    #[must_use]
    pub fn to_number(&self, value: &Value) -> Value {
        match coerce::to_number(value) {
            Some(n) => Value::number(n),
            None => match self.policy() {
                ErrorPolicy::Strict => Value::from(0),
                ErrorPolicy::Permissive => Value::Null,
            },
        }
    }

    #[must_use]
    pub fn to_string(&self, value: &Value) -> String {
        coerce::to_string(value, self.policy())
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn to_list(&self, value: &Value) -> Vec<Value> {
        coerce::to_list(value)
    }

    ///
    /// FAILURE HANDLING
    ///

    // Resolve an operator failure under the configured policy:
    // strict propagates the error, permissive substitutes null.
    fn fail(&self, err: impl Into<OperatorError>) -> OperatorResult<Value> {
        let err = err.into();

        match self.policy() {
            ErrorPolicy::Strict => {
                debug!(op = %err.op(), error = %err, "operator failed");
                Err(err)
            }
            ErrorPolicy::Permissive => {
                // operand coercion failures are silent; the rest are query warnings
                let silent = matches!(
                    err,
                    OperatorError::Type(OperatorTypeError::InvalidArithmeticValue { .. })
                );
                if self.config.warn_on_null && !silent {
                    warn!(op = %err.op(), error = %err, "operator produced null");
                }
                Ok(Value::Null)
            }
        }
    }

    // Strict-only failure; permissive callers never reach this.
    fn raise<T>(err: impl Into<OperatorError>) -> OperatorResult<T> {
        let err = err.into();
        debug!(op = %err.op(), error = %err, "operator failed");

        Err(err)
    }
}
