use anyhow::{ensure, Result};
use chiolab::Matrix;
use rand::{rngs::SmallRng, SeedableRng};

/// Transpose, add and multiply the small sample matrices
pub fn arithmetic() -> Result<()> {
    let a = Matrix::from_rows([[1, 0, 2], [-1, 3, 1]])?;
    let b = Matrix::new(2, 3, 1.0)?;
    let c = Matrix::from_rows([[3, 1], [2, 1], [1, 0]])?;

    println!("Transposed matrix:\n{}", a.transposed());
    println!("A + B\n{}", a.add(&b)?);
    println!("A * C\n{}", a.multiply(&c)?);
    println!();
    Ok(())
}

/// Determinants of the reference matrices, then a seeded random matrix checked against Laplace
/// expansion
pub fn chio(seed: u64, size: usize) -> Result<()> {
    let a = Matrix::from_rows([
        [5, 1, 1, 2, 3],
        [4, 2, 1, 7, 3],
        [2, 1, 2, 4, 7],
        [9, 1, 0, 7, 0],
        [1, 4, 7, 2, 2],
    ])?;
    let mut b = a.clone();
    b[(0, 0)] = 0.0;

    println!("Determinant of A: {}", a.determinant()?);
    println!("Determinant of B: {}", b.determinant()?);

    let mut rng = SmallRng::seed_from_u64(seed);
    let m = Matrix::random(&mut rng, size, size)?;
    let chio = m.determinant()?;
    ensure!(chio.is_finite(), "Chio determinant is not finite: {}", chio);
    println!("Random {}x{} matrix (seed {}):\n{}", size, size, seed, m);
    println!("Chio: {}", chio);

    // Laplace expansion is factorial in the size
    if size <= 9 {
        let laplace = m.cofactor_determinant()?;
        println!("Laplace: {}", laplace);
        ensure!(
            (chio - laplace).abs() <= 1e-6 * laplace.abs().max(1.0),
            "Chio and Laplace disagree: {} != {}",
            chio,
            laplace
        );
    } else {
        log::warn!("skipping Laplace cross-check for a {}x{} matrix", size, size);
    }
    println!();
    Ok(())
}
