//! Value model and operator semantics for a document query language:
//! the dynamic `Value`, its total canonical ordering, type coercions, and
//! arithmetic/logical/relational operators under a configurable error policy.

// public exports are one module level down
pub mod coerce;
pub mod config;
pub mod error;
pub mod ops;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or coercion helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        config::{ErrorPolicy, OperatorConfig},
        ops::{Evaluator, OperatorKind},
        value::{Number, Value, ValueKind},
    };
}
