use thiserror::Error;

/// Failure modes of the math layer.
///
/// Both variants are violated preconditions, surfaced immediately rather than
/// recovered from; pure arithmetic has no retry semantics.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Tried to normalize a vector with zero length.
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,

    /// Component index outside the valid axis range.
    #[error("component index {index} out of range (expected 0..=2)")]
    OutOfRange { index: usize },
}
