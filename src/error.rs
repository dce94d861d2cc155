//! Error types for vector construction and arithmetic.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorError>;

/// Everything that can go wrong when building or operating on a vector.
///
/// All errors are raised synchronously at the call site that detects the
/// violation; there is no retry or recovery layer. The one intentional
/// non-error fallback is lenient coercion passing a scalar through, which is
/// a documented part of the operand protocol rather than a swallowed failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// Construction-time length violation (e.g. a 2-axis point built from a
    /// 3-length buffer).
    #[error("expected {expected} coordinates, got {actual}")]
    Dimension { expected: usize, actual: usize },

    /// Operands of differing length in distance, arithmetic, or slice
    /// assignment.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The coerced operand resolved to a scalar where a vector was required.
    #[error("operand must coerce to a {expected}, got a scalar")]
    TypeMismatch { expected: &'static str },

    /// The operand is textual or mapping-shaped, or strict coercion refused
    /// a scalar. Such inputs are never valid vector operands.
    #[error("unsupported operand of kind `{kind}`; expected a coordinate sequence, vector, or scalar")]
    UnsupportedOperand { kind: &'static str },

    /// Structural mutation was attempted, or an operator was applied that the
    /// underlying numeric representation does not define.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// The elementwise numeric operation has no defined result.
    #[error("arithmetic error: {0}")]
    Arithmetic(&'static str),

    /// Checked indexed access past the end of the coordinate buffer.
    #[error("index {index} out of bounds for {len} coordinates")]
    OutOfBounds { index: usize, len: usize },
}
