use crate::utils::DEFAULT_TOLERANCE;
use crate::{vector::Vector, Result, VectorError, ZeroVectorOp};
use std::f64::consts::PI;

/// Unit in which [`Vector::angle_with`] reports its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    fn convert_radians(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians * (180.0 / PI),
        }
    }
}

fn as_angle_error(err: VectorError) -> VectorError {
    match err {
        VectorError::ZeroVector(_) => VectorError::ZeroVector(ZeroVectorOp::Angle),
        other => other,
    }
}

impl Vector {
    /// Angle between `self` and `other`, in `[0, π]` radians (or `[0, 180]`
    /// degrees).
    ///
    /// Fails with [`VectorError::ZeroVector`] if either side is the zero
    /// vector. The cosine is clamped into `[-1, 1]` so rounding in the unit
    /// dot product can't leave the domain of `acos`.
    pub fn angle_with(&self, other: &Vector, unit: AngleUnit) -> Result<f64> {
        let cosine = self.unit_cosine(other)?;
        Ok(unit.convert_radians(cosine.acos()))
    }

    fn unit_cosine(&self, other: &Vector) -> Result<f64> {
        let unit1 = self.normalized().map_err(as_angle_error)?;
        let unit2 = other.normalized().map_err(as_angle_error)?;
        Ok(unit1.dot(&unit2)?.clamp(-1.0, 1.0))
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero_within(DEFAULT_TOLERANCE)
    }

    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.magnitude() < tolerance
    }

    pub fn is_orthogonal_to(&self, other: &Vector) -> Result<bool> {
        self.is_orthogonal_within(other, DEFAULT_TOLERANCE)
    }

    pub fn is_orthogonal_within(&self, other: &Vector, tolerance: f64) -> Result<bool> {
        Ok(self.dot(other)?.abs() < tolerance)
    }

    /// True when either vector is zero or the angle between them is exactly
    /// `0` or `π`.
    ///
    /// The angle comparison is exact, so vectors that are parallel only up
    /// to rounding can come back `false`. [`Vector::is_parallel_within`] is
    /// the tolerant variant.
    pub fn is_parallel_to(&self, other: &Vector) -> Result<bool> {
        self.ensure_same_dimension(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }
        let angle = self.angle_with(other, AngleUnit::Radians)?;
        Ok(angle == 0.0 || angle == PI)
    }

    /// True when either vector is zero (by [`Vector::is_zero_within`]) or the
    /// unit vectors' dot product is within `tolerance` of `1` or `-1`.
    pub fn is_parallel_within(&self, other: &Vector, tolerance: f64) -> Result<bool> {
        self.ensure_same_dimension(other)?;
        if self.is_zero_within(tolerance) || other.is_zero_within(tolerance) {
            return Ok(true);
        }
        let cosine = self.unit_cosine(other)?;
        Ok(1.0 - cosine.abs() < tolerance)
    }
}
