pub mod angle;
pub mod cross;
pub mod projection;
pub mod utils;
pub mod vector;

use std::fmt;
use thiserror::Error;

/// The operation that ran into a zero vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroVectorOp {
    Normalize,
    Angle,
}

impl fmt::Display for ZeroVectorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZeroVectorOp::Normalize => write!(f, "Cannot normalize the zero vector"),
            ZeroVectorOp::Angle => write!(f, "Cannot compute an angle with the zero vector"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("{0}")]
    ZeroVector(ZeroVectorOp),
    #[error("No unique parallel component")]
    NoUniqueParallelComponent,
    #[error("No unique orthogonal component")]
    NoUniqueOrthogonalComponent,
    #[error("only two or three dimensional vectors can be processed (got {left} and {right})")]
    UnsupportedDimension { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use angle::AngleUnit;
pub use utils::{approx_eq, generate_random_vectors, DEFAULT_TOLERANCE};
pub use vector::Vector;
