//! Decomposition of a vector into the parts parallel and orthogonal to a
//! basis vector.

use crate::{vector::Vector, Result, VectorError};

impl Vector {
    /// Projection of `self` onto the direction of `basis`.
    ///
    /// Fails with [`VectorError::NoUniqueParallelComponent`] when `basis` is
    /// the zero vector.
    pub fn component_parallel_to(&self, basis: &Vector) -> Result<Vector> {
        let unit = basis.normalized().map_err(|err| match err {
            VectorError::ZeroVector(_) => VectorError::NoUniqueParallelComponent,
            other => other,
        })?;
        let weight = self.dot(&unit)?;
        Ok(unit.scale(weight))
    }

    /// `self` minus its projection onto `basis`.
    ///
    /// Fails with [`VectorError::NoUniqueOrthogonalComponent`] when `basis` is
    /// the zero vector.
    pub fn component_orthogonal_to(&self, basis: &Vector) -> Result<Vector> {
        let projection = self.component_parallel_to(basis).map_err(|err| match err {
            VectorError::NoUniqueParallelComponent => VectorError::NoUniqueOrthogonalComponent,
            other => other,
        })?;
        self.subtract(&projection)
    }
}
