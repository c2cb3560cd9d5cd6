use crate::{vector::Vector, Result, VectorError};

impl Vector {
    /// Cross product. Two 2-D operands are embedded in 3-D with a zero third
    /// coordinate, so the result is always 3-D.
    ///
    /// Any other pairing of dimensions, including a 2-D with a 3-D operand,
    /// fails with [`VectorError::UnsupportedDimension`].
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        let (a, b) = match (self.dimension(), other.dimension()) {
            (3, 3) => (self.to_vec(), other.to_vec()),
            (2, 2) => (
                vec![self[0], self[1], 0.0],
                vec![other[0], other[1], 0.0],
            ),
            (left, right) => {
                log::debug!("cross product undefined for dimensions {} and {}", left, right);
                return Err(VectorError::UnsupportedDimension { left, right });
            }
        };
        Vector::new([
            a[1] * b[2] - a[2] * b[1],
            -(a[0] * b[2] - a[2] * b[0]),
            a[0] * b[1] - a[1] * b[0],
        ])
    }

    pub fn area_of_parallelogram_with(&self, other: &Vector) -> Result<f64> {
        Ok(self.cross(other)?.magnitude())
    }

    pub fn area_of_triangle_with(&self, other: &Vector) -> Result<f64> {
        Ok(self.area_of_parallelogram_with(other)? / 2.0)
    }
}
