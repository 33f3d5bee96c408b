use std::fmt;

use thiserror::Error;

use crate::mat::OutOfBoundsError;

/// Operations that are part of the API but deliberately not implemented
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Operation {
    /// Matrix-by-matrix division (would require an inverse)
    MatrixDivision,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatrixDivision => f.write_str("matrix division"),
        }
    }
}

/// Error generated by vector and matrix operations
#[derive(Copy, Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error("Wrong number of elements (actual: {actual}, expected: {expected})")]
    InvalidLength {
        actual: usize,
        expected: usize,
    },
    #[error("Component index out of range (index: {index}, length: {len})")]
    ComponentOutOfRange {
        index: usize,
        len: usize,
    },
    #[error("Matrix cell out of bounds")]
    CellOutOfBounds(#[from] OutOfBoundsError),
    #[error("Cannot normalize a vector with zero magnitude")]
    ZeroMagnitude,
    #[error("Operation not supported: {0}")]
    Unsupported(Operation),
}

impl MathError {
    /// Helper to log and build an [Unsupported](Self::Unsupported) error
    pub(crate) fn unsupported(op: Operation) -> Self {
        log::debug!("rejected unsupported operation: {op}");
        Self::Unsupported(op)
    }

    /// Helper to log and build a [ZeroMagnitude](Self::ZeroMagnitude) error
    pub(crate) fn zero_magnitude() -> Self {
        log::debug!("rejected normalization of a zero-magnitude vector");
        Self::ZeroMagnitude
    }
}
