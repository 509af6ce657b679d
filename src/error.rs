use thiserror::Error;

/// Failures of the runtime-checked [`Variant`](crate::Variant) operations.
///
/// Operations with compile-time indices never fail this way; only the
/// `usize`-indexed API and the checked accessors return these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The index does not name any alternative.
    #[error("alternative index {index} is out of range for a variant of {count} alternatives")]
    OutOfRange { index: usize, count: usize },

    /// The declared type at `index` is not the type that was supplied or
    /// requested.
    #[error("alternative {index} has type `{expected}`, not `{found}`")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// The requested alternative is not the live one.
    #[error("alternative {requested} was requested, but alternative {active} is live")]
    Inactive { requested: usize, active: usize },
}
