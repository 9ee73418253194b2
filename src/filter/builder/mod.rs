//! Filter expression builders, one per member kind.
//!
//! Filters added to a builder combine with AND; `not()` and `or()` set a
//! pending operator that applies to the next filter added. OR combines
//! with the immediately preceding entry in the list, never with all prior
//! entries, so `a().or().b().c()` reads `(a or b) and c`.

use thiserror::Error;

mod class;
mod constructor;
mod field;
mod method;

pub use class::ClassFilterBuilder;
pub use constructor::ConstructorFilterBuilder;
pub use field::FieldFilterBuilder;
pub use method::MethodFilterBuilder;

/// Errors surfaced by `build()`.
#[derive(Debug, Error)]
pub enum FilterBuildError {
    /// `build()` was called with no filters configured.
    #[error("no filters specified")]
    NoFilters,

    /// A `name()` pattern failed to parse; the builder records the first
    /// such failure and reports it at `build()`.
    #[error("invalid name pattern '{pattern}'")]
    InvalidNamePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// `or()` was invoked before any filter had been added, leaving the
    /// operator nothing to combine with.
    #[error("or() requires a preceding filter")]
    DanglingOr,
}

/// Operator applied to the next filter added.
///
/// The state resets to `None` after every add; only the next filter is
/// affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) enum Pending {
    #[default]
    None,
    Not,
    Or,
}
