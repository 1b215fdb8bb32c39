use crate::{ops::OperatorKind, value::ValueKind};
use thiserror::Error as ThisError;

///
/// ErrorClass
///
/// Coarse classification for callers that map operator failures to codes.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorClass {
    TypeMismatch,
    Arithmetic,
}

///
/// OperatorTypeError
///
/// An operand had a kind the operator cannot accept.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum OperatorTypeError {
    #[error("invalid arithmetic value: operator '{op}' cannot use a {kind} operand")]
    InvalidArithmeticValue { op: OperatorKind, kind: ValueKind },

    #[error("invalid logical value: operator '{op}' requires a bool operand, got {kind}")]
    InvalidLogicalValue { op: OperatorKind, kind: ValueKind },

    #[error("list expected: operator '{op}' requires an array operand, got {kind}")]
    ListExpected { op: OperatorKind, kind: ValueKind },
}

impl OperatorTypeError {
    #[must_use]
    pub const fn op(&self) -> OperatorKind {
        match self {
            Self::InvalidArithmeticValue { op, .. }
            | Self::InvalidLogicalValue { op, .. }
            | Self::ListExpected { op, .. } => *op,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::InvalidArithmeticValue { kind, .. }
            | Self::InvalidLogicalValue { kind, .. }
            | Self::ListExpected { kind, .. } => *kind,
        }
    }
}

///
/// ArithmeticError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ArithmeticError {
    #[error("division by zero in operator '{op}'")]
    DivisionByZero { op: OperatorKind },

    #[error("number out of range in operator '{op}'")]
    NumberOutOfRange { op: OperatorKind },
}

impl ArithmeticError {
    #[must_use]
    pub const fn op(&self) -> OperatorKind {
        match self {
            Self::DivisionByZero { op } | Self::NumberOutOfRange { op } => *op,
        }
    }
}

///
/// OperatorError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum OperatorError {
    #[error(transparent)]
    Type(#[from] OperatorTypeError),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl OperatorError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Type(_) => ErrorClass::TypeMismatch,
            Self::Arithmetic(_) => ErrorClass::Arithmetic,
        }
    }

    #[must_use]
    pub const fn op(&self) -> OperatorKind {
        match self {
            Self::Type(err) => err.op(),
            Self::Arithmetic(err) => err.op(),
        }
    }
}

pub type OperatorResult<T> = Result<T, OperatorError>;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid operator config: {0}")]
    Parse(#[from] toml::de::Error),
}
