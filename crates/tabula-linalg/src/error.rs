use crate::Shape;

/// Convenience alias for results of fallible matrix operations.
pub type Result<T, E = LinalgError> = std::result::Result<T, E>;

/// Runtime faults raised by matrix operations.
///
/// Shape errors involving only compile-time dimensions never get here: they fail to type-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LinalgError {
    /// The operands of `op` have incompatible shapes.
    #[error("shape mismatch in {op}: {left} vs {right}")]
    ShapeMismatch {
        op: &'static str,
        left: Shape,
        right: Shape,
    },
    /// A square-only operation was invoked on a non-square matrix.
    #[error("not a square matrix ({rows}x{cols})")]
    NotSquareMatrix { rows: usize, cols: usize },
    /// A row or column index (or the end of a window) is not inside the matrix.
    #[error("index out of range: {index} (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// Inversion was attempted on a (numerically) singular matrix.
    #[error("this matrix cannot be inverted")]
    SingularMatrix,
}

impl LinalgError {
    pub(crate) fn mismatch(op: &'static str, left: Shape, right: Shape) -> Self {
        Self::ShapeMismatch { op, left, right }
    }
}
