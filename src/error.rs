use thiserror::Error;

/// Errors reported by the runtime-checked construction and row/column
/// replacement operations.
///
/// Operations whose operand shapes are fully described by const generics
/// cannot fail and do not return this type. Every failure is detected before
/// any mutation takes place, so a returned error leaves the receiver
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A runtime-sized input does not hold the statically required number of
    /// elements.
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch {
        /// The element count the target shape requires.
        expected: usize,
        /// The element count the input actually provided.
        actual: usize,
    },

    /// A row or column index lies outside the declared extent.
    #[error("index {index} out of bounds for extent {extent}")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The extent it was checked against.
        extent: usize,
    },
}
