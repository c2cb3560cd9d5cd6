//! The immutable [`Vector`] value type and its element-wise algebra.
//!
//! Every operation returns a new vector. Binary operations require both
//! operands to share a dimension and report [`VectorError::DimensionMismatch`]
//! otherwise.

use crate::{Result, VectorError, ZeroVectorOp};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, Mul, Neg};

/// An ordered, fixed-length sequence of real coordinates.
///
/// Serializes as a plain sequence of numbers. Deserialization goes through
/// the same validation as [`Vector::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    coordinates: Array1<f64>,
}

impl Vector {
    /// Builds a vector from any iterable of numbers that widen losslessly
    /// into `f64` (`f64`, `f32`, and integers up to 32 bits).
    ///
    /// `i64`, `u64` and `usize` have no lossless conversion; map them with
    /// `as f64` first.
    ///
    /// ```
    /// use vector_algebra::Vector;
    ///
    /// let v = Vector::new([3, 4]).unwrap();
    /// assert_eq!(v.dimension(), 2);
    /// assert_eq!(v.magnitude(), 5.0);
    ///
    /// let counts: Vec<u64> = vec![1, 2, 2];
    /// let w = Vector::new(counts.iter().map(|&c| c as f64)).unwrap();
    /// assert_eq!(w.magnitude(), 3.0);
    /// ```
    pub fn new<I, T>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        coordinates
            .into_iter()
            .map(Into::into)
            .collect::<Array1<f64>>()
            .try_into()
    }

    /// The zero vector of the given dimension.
    pub fn zero(dimension: usize) -> Result<Self> {
        Array1::<f64>::zeros(dimension).try_into()
    }

    pub fn coordinates(&self) -> &Array1<f64> {
        &self.coordinates
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.coordinates.iter()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.coordinates.to_vec()
    }

    pub(crate) fn ensure_same_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            log::debug!(
                "dimension mismatch: {} vs {}",
                self.dimension(),
                other.dimension()
            );
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(other)?;
        Ok(Self {
            coordinates: &self.coordinates + &other.coordinates,
        })
    }

    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        self.ensure_same_dimension(other)?;
        Ok(Self {
            coordinates: &self.coordinates - &other.coordinates,
        })
    }

    pub fn scale(&self, scalar: f64) -> Vector {
        Self {
            coordinates: &self.coordinates * scalar,
        }
    }

    /// Euclidean (L2) norm.
    ///
    /// Coordinates are scaled by the largest absolute coordinate before
    /// squaring, so the result only overflows or underflows when the norm
    /// itself does.
    pub fn magnitude(&self) -> f64 {
        let largest = self
            .coordinates
            .iter()
            .fold(0.0_f64, |acc, coordinate| acc.max(coordinate.abs()));
        if largest == 0.0 || largest.is_infinite() {
            return largest;
        }
        let scaled = &self.coordinates / largest;
        largest * scaled.dot(&scaled).sqrt()
    }

    /// The unit vector pointing the same way as `self`.
    ///
    /// Only an exactly zero magnitude is rejected; use
    /// [`Vector::is_zero`] for a tolerance-based check.
    pub fn normalized(&self) -> Result<Vector> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            log::debug!("refusing to normalize zero vector of dimension {}", self.dimension());
            return Err(VectorError::ZeroVector(ZeroVectorOp::Normalize));
        }
        Ok(Self {
            coordinates: &self.coordinates / magnitude,
        })
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.ensure_same_dimension(other)?;
        Ok(self.coordinates.dot(&other.coordinates))
    }
}

impl TryFrom<Array1<f64>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Array1<f64>) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(VectorError::InvalidArgument(
                "coordinates must be nonempty".to_string(),
            ));
        }
        Ok(Self { coordinates })
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<f64>) -> Result<Self> {
        Array1::from_vec(coordinates).try_into()
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: &[f64]) -> Result<Self> {
        Self::new(coordinates.iter().copied())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.coordinates.to_vec()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coordinates[index]
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.scale(scalar)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.scale(scalar)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, coordinate) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coordinate)?;
        }
        write!(f, ")")
    }
}
