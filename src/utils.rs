use crate::{vector::Vector, Result, VectorError};
use rand::Rng;

/// Tolerance used by the predicates that don't take one explicitly.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Element-wise comparison within `tolerance`. Vectors of different
/// dimension are never approximately equal.
pub fn approx_eq(a: &Vector, b: &Vector, tolerance: f64) -> bool {
    a.dimension() == b.dimension()
        && a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tolerance)
}

/// `count` vectors of the given dimension with coordinates drawn uniformly
/// from `[-1, 1)`.
pub fn generate_random_vectors(dimension: usize, count: usize) -> Result<Vec<Vector>> {
    if dimension == 0 {
        return Err(VectorError::InvalidArgument(
            "dimension must be at least 1".to_string(),
        ));
    }
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|_| {
            Vector::new(
                (0..dimension)
                    .map(|_| rng.gen_range(-1.0..1.0))
                    .collect::<Vec<f64>>(),
            )
        })
        .collect()
}
