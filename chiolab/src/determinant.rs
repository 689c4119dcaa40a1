//! Determinants of square [`Matrix`] values
//!
//! The main entry point is [`Matrix::determinant`], which uses Chio's condensation: an `n x n`
//! determinant is reduced to a scaled `(n-1) x (n-1)` determinant whose cells are the 2x2 minors
//! anchored at the top-left pivot,
//!
//! ```text
//! det(A) = det(B) / a00^(n-2),   where b[i-1][j-1] = | a00  a0j |
//!                                                    | ai0  aij |
//! ```
//!
//! and the reduction is repeated until a 2x2 matrix is left. Each row of `B` is divided by `a00`
//! as it is built, which turns the identity into `det(A) = a00 * det(B / a00)`. Without that the
//! cells grow like `a00^(2^k)` while the factor shrinks towards zero, and anything from about
//! 10x10 up overflows to `inf * 0`. [`Matrix::cofactor_determinant`]
//! computes the same value by Laplace expansion and is mostly useful for checking the former.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Determinant of the 2x2 matrix `[[a, b], [c, d]]`, i.e. `a*d - b*c`
#[inline]
pub fn determinant_2x2(m: [[f64; 2]; 2]) -> f64 {
    m[0][0] * m[1][1] - m[0][1] * m[1][0]
}

/// Result of a single condensation step
enum Step {
    /// the first column is entirely zero, so the determinant is zero
    Singular,

    /// the reduced matrix, along with the factor its determinant must be multiplied by
    Reduced(f64, Matrix),
}

/// Perform one step of Chio's condensation on an `n x n` matrix with `n > 2`
///
/// If the pivot `m[0][0]` is zero, the first row below it with a non-zero entry in column 0 is
/// swapped into place and the sign of `coeff` flipped.
fn condense(mut coeff: f64, mut m: Matrix) -> Step {
    let n = m.rows();
    if m[(0, 0)] == 0.0 {
        match (1..n).find(|&i| m[(i, 0)] != 0.0) {
            Some(i) => {
                log::trace!("chio: zero pivot at order {}, swapping rows 0 and {}", n, i);
                m.swap_rows(0, i);
                coeff = -coeff;
            }
            None => {
                log::debug!("chio: column 0 is zero at order {}, matrix is singular", n);
                return Step::Singular;
            }
        }
    }

    let pivot = m[(0, 0)];
    let coeff = coeff * pivot;
    log::trace!("chio: order {} pivot {} coefficient {}", n, pivot, coeff);

    // scaled minors: det(reduced) = det(minors) / pivot^(n-1)
    let reduced = Matrix::build_unchecked(n - 1, n - 1, |i, j| {
        determinant_2x2([
            [pivot, m[(0, j + 1)]],
            [m[(i + 1, 0)], m[(i + 1, j + 1)]],
        ]) / pivot
    });
    Step::Reduced(coeff, reduced)
}

impl Matrix {
    #[inline]
    fn check_square(&self) -> Result<usize> {
        if self.is_square() {
            Ok(self.rows())
        } else {
            Err(Error::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    /// Compute the determinant using Chio's condensation
    ///
    /// A 2x2 matrix is evaluated directly and a 1x1 matrix is its own determinant. Larger
    /// matrices are condensed one order at a time on a private copy, so `self` is never changed
    /// even when rows have to be swapped to find a non-zero pivot. If no non-zero pivot can be
    /// found the matrix is singular and `0.0` is returned.
    ///
    /// # Errors
    ///
    /// [`Error::NotSquare`] if the matrix is not square
    pub fn determinant(&self) -> Result<f64> {
        let n = self.check_square()?;
        match n {
            1 => return Ok(self[(0, 0)]),
            2 => return Ok(determinant_2x2(self.block_2x2())),
            _ => {}
        }

        let mut coeff = 1.0;
        let mut m = self.clone();
        while m.rows() > 2 {
            match condense(coeff, m) {
                Step::Singular => return Ok(0.0),
                Step::Reduced(c, reduced) => {
                    coeff = c;
                    m = reduced;
                }
            }
        }
        Ok(coeff * determinant_2x2(m.block_2x2()))
    }

    /// Compute the determinant by Laplace expansion along the first row
    ///
    /// This takes `O(n!)` time and is only meant for small matrices.
    ///
    /// # Errors
    ///
    /// [`Error::NotSquare`] if the matrix is not square
    pub fn cofactor_determinant(&self) -> Result<f64> {
        self.check_square()?;
        Ok(self.laplace())
    }

    fn laplace(&self) -> f64 {
        match self.rows() {
            1 => self[(0, 0)],
            2 => determinant_2x2(self.block_2x2()),
            n => (0..n)
                .filter(|&j| self[(0, j)] != 0.0)
                .map(|j| {
                    let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                    sign * self[(0, j)] * self.minor(0, j).laplace()
                })
                .sum(),
        }
    }

    /// Returns a copy of the matrix with row `row` and column `col` removed
    ///
    /// # Panics
    ///
    /// If the matrix has only one row or one column
    pub fn minor(&self, row: usize, col: usize) -> Matrix {
        assert!(
            self.rows() > 1 && self.cols() > 1,
            "cannot take a minor of a {}x{} matrix",
            self.rows(),
            self.cols()
        );
        Matrix::build_unchecked(self.rows() - 1, self.cols() - 1, |i, j| {
            let i = if i < row { i } else { i + 1 };
            let j = if j < col { j } else { j + 1 };
            self[(i, j)]
        })
    }

    #[inline]
    fn block_2x2(&self) -> [[f64; 2]; 2] {
        [
            [self[(0, 0)], self[(0, 1)]],
            [self[(1, 0)], self[(1, 1)]],
        ]
    }
}
