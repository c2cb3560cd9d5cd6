use vector_algebra::{AngleUnit, Vector, VectorError};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Vector Algebra Demo");
    println!("===================\n");

    let v = Vector::new([3.039, 1.879])?;
    let basis = Vector::new([0.825, 2.036])?;

    println!("v       = {}", v);
    println!("basis   = {}", basis);
    println!("|v|     = {:.3}", v.magnitude());
    println!("v . b   = {:.3}", v.dot(&basis)?);
    println!("angle   = {:.3} deg", v.angle_with(&basis, AngleUnit::Degrees)?);

    let parallel = v.component_parallel_to(&basis)?;
    let orthogonal = v.component_orthogonal_to(&basis)?;
    println!("\nParallel component:   {}", parallel);
    println!("Orthogonal component: {}", orthogonal);

    let a = Vector::new([8.462, 7.893, -8.187])?;
    let b = Vector::new([6.984, -5.975, 4.778])?;
    println!("\na x b = {}", a.cross(&b)?);
    println!("parallelogram area = {:.3}", a.area_of_parallelogram_with(&b)?);
    println!("triangle area      = {:.3}", a.area_of_triangle_with(&b)?);

    // Degenerate cases surface as typed errors
    let zero = Vector::zero(2)?;
    match v.component_parallel_to(&zero) {
        Err(VectorError::NoUniqueParallelComponent) => {
            println!("\nProjection onto the zero vector has no unique answer")
        }
        other => anyhow::bail!("unexpected projection result: {:?}", other),
    }
    if let Err(err) = Vector::new([1.0, 2.0, 3.0, 4.0])?.cross(&a) {
        println!("4-d cross product: {}", err);
    }

    Ok(())
}
