use crate::error::{Error, Result};
use rand::Rng;
use ref_cast::RefCast;
use std::{
    fmt,
    ops::{Add, Deref, DerefMut, Index, IndexMut, Mul},
};

/// A dense matrix of `f64` cells
///
/// The matrix is stored in row-major order as a single flat vector of `rows * cols` cells. Both
/// dimensions are always positive and every row has exactly `cols` cells; the constructors reject
/// anything else.
///
/// Arithmetic never modifies its operands: [`Matrix::add`], [`Matrix::multiply`] and
/// [`Matrix::transposed`] each allocate and return a new matrix. In-place changes are only made
/// through cell and row assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    /// the number of rows in the matrix
    rows: usize,

    /// the number of columns in the matrix, i.e. the length of every row
    cols: usize,

    /// the cells of the matrix, stored in row-major order
    data: Vec<f64>,
}

/// A single row of a [`Matrix`], represented as a slice of cells
///
/// Dereferences to `[f64]`, so the usual slice methods are available.
#[derive(RefCast, PartialEq, Debug)]
#[repr(transparent)]
pub struct Row([f64]);

impl Deref for Row {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Row {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (j, x) in self.0.iter().enumerate() {
            if j > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

#[inline]
fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        Err(Error::InvalidDimension { rows, cols })
    } else {
        Ok(())
    }
}

impl Matrix {
    /// Creates a `rows` x `cols` matrix with every cell set to `fill`
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if either dimension is zero
    pub fn new(rows: usize, cols: usize, fill: f64) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Ok(Matrix {
            rows,
            cols,
            data: vec![fill; rows * cols],
        })
    }

    /// Creates a `rows` x `cols` matrix of zeros
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if either dimension is zero
    #[inline]
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols, 0.0)
    }

    /// Builds a matrix from a function `f` that determines the value of each cell
    ///
    /// # Arguments
    /// * `rows` - the number of rows in the matrix
    /// * `cols` - the number of columns in the matrix
    /// * `f` - a function that takes the row and column indices and returns the cell value
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if either dimension is zero
    pub fn build(rows: usize, cols: usize, f: impl FnMut(usize, usize) -> f64) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self::build_unchecked(rows, cols, f))
    }

    /// Same as [`Matrix::build`], for callers that already know both dimensions are positive
    pub(crate) fn build_unchecked(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> Self {
        let data = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        Matrix { rows, cols, data }
    }

    /// Creates a matrix from a sequence of rows
    ///
    /// Accepts anything that yields slices of values convertible to `f64`, e.g. nested arrays of
    /// integers or a `Vec<Vec<f64>>`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if there are no rows or the first row is empty, and
    /// [`Error::InvalidShape`] if the rows are not all the same length
    pub fn from_rows<I, R, T>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
        T: Copy + Into<f64>,
    {
        let mut data = Vec::new();
        let mut cols = 0;
        let mut nrows = 0;
        for (i, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            if i == 0 {
                cols = row.len();
            } else if row.len() != cols {
                return Err(Error::InvalidShape {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend(row.iter().map(|&x| x.into()));
            nrows += 1;
        }
        check_dimensions(nrows, cols)?;
        Ok(Matrix {
            rows: nrows,
            cols,
            data,
        })
    }

    /// Creates the `size` x `size` identity matrix
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if `size` is zero
    pub fn identity(size: usize) -> Result<Self> {
        Self::build(size, size, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Creates a matrix of random integer-valued cells in the range `-9..=9`
    ///
    /// Integer cells keep products and determinants exactly representable for small matrices,
    /// which makes the result easy to compare against other methods.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if either dimension is zero
    pub fn random(rng: &mut impl Rng, rows: usize, cols: usize) -> Result<Self> {
        Self::build(rows, cols, |_, _| f64::from(rng.random_range(-9i32..=9)))
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    pub fn row(&self, row: usize) -> &Row {
        Row::ref_cast(&self.data[row * self.cols..(row + 1) * self.cols])
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut Row {
        Row::ref_cast_mut(&mut self.data[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterates over the rows of the matrix, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.data.chunks_exact(self.cols).map(Row::ref_cast)
    }

    /// Replaces the whole of row `row` with `values`
    ///
    /// # Errors
    ///
    /// [`Error::InvalidShape`] if `values` does not have exactly `cols` entries
    pub fn set_row(&mut self, row: usize, values: impl AsRef<[f64]>) -> Result<()> {
        let values = values.as_ref();
        if values.len() != self.cols {
            return Err(Error::InvalidShape {
                row,
                expected: self.cols,
                found: values.len(),
            });
        }
        self.row_mut(row).copy_from_slice(values);
        Ok(())
    }

    /// Swaps rows `a` and `b` in place
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    /// Returns the elementwise sum of two matrices of the same size
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the sizes differ
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        if self.size() != other.size() {
            return Err(Error::ShapeMismatch {
                op: "add",
                left: self.size(),
                right: other.size(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Returns the matrix product `self * other`
    ///
    /// Each cell is accumulated row by row, column by column, with the inner index ascending, so
    /// floating-point results are reproducible.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if `self.cols() != other.rows()`
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(Error::ShapeMismatch {
                op: "multiply",
                left: self.size(),
                right: other.size(),
            });
        }
        let mut res = Matrix::build_unchecked(self.rows, other.cols, |_, _| 0.0);
        for i in 0..self.rows {
            for j in 0..other.cols {
                for k in 0..self.cols {
                    res[(i, j)] += self[(i, k)] * other[(k, j)];
                }
            }
        }
        Ok(res)
    }

    /// Returns a transposed copy of the matrix
    pub fn transposed(&self) -> Matrix {
        Matrix::build_unchecked(self.cols, self.rows, |i, j| self[(j, i)])
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(index.1 < self.cols, "column index out of range");
        &self.data[index.0 * self.cols + index.1]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(index.1 < self.cols, "column index out of range");
        &mut self.data[index.0 * self.cols + index.1]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl Add for &Matrix {
    type Output = Result<Matrix>;
    fn add(self, rhs: Self) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

impl Mul for &Matrix {
    type Output = Result<Matrix>;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn sample_a() -> Matrix {
        Matrix::from_rows([[1, 0, 2], [-1, 3, 1]]).unwrap()
    }

    fn sample_c() -> Matrix {
        Matrix::from_rows([[3, 1], [2, 1], [1, 0]]).unwrap()
    }

    #[test]
    fn new_fills() {
        let m = Matrix::new(2, 3, 1.5).unwrap();
        assert_eq!(m.size(), (2, 3));
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], 1.5);
            }
        }
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(
            Matrix::new(0, 3, 0.0),
            Err(Error::InvalidDimension { rows: 0, cols: 3 })
        );
        assert_eq!(
            Matrix::zeros(3, 0),
            Err(Error::InvalidDimension { rows: 3, cols: 0 })
        );
    }

    #[test]
    fn from_rows_checks_shape() {
        let ragged: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            Matrix::from_rows(ragged),
            Err(Error::InvalidShape {
                row: 1,
                expected: 2,
                found: 1
            })
        );

        let empty: Vec<Vec<f64>> = vec![];
        assert_eq!(
            Matrix::from_rows(empty),
            Err(Error::InvalidDimension { rows: 0, cols: 0 })
        );

        let m = sample_a();
        assert_eq!(m.size(), (2, 3));
        assert_eq!(&m.row(1)[..], &[-1.0, 3.0, 1.0]);
    }

    #[test]
    fn add_samples() {
        let a = sample_a();
        let b = Matrix::new(2, 3, 1.0).unwrap();
        let sum = (&a + &b).unwrap();
        assert_eq!(sum, Matrix::from_rows([[2, 1, 3], [0, 4, 2]]).unwrap());

        // operands are untouched
        assert_eq!(a, sample_a());
        assert_eq!(b, Matrix::new(2, 3, 1.0).unwrap());
    }

    #[test]
    fn add_shape_mismatch() {
        let err = sample_a().add(&sample_c()).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                op: "add",
                left: (2, 3),
                right: (3, 2)
            }
        );
    }

    #[test]
    fn add_commutative_associative() {
        let mut rng = SmallRng::seed_from_u64(1);
        let a = Matrix::random(&mut rng, 4, 5).unwrap();
        let b = Matrix::random(&mut rng, 4, 5).unwrap();
        let c = Matrix::random(&mut rng, 4, 5).unwrap();

        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        assert_eq!(
            a.add(&b).unwrap().add(&c).unwrap(),
            a.add(&b.add(&c).unwrap()).unwrap()
        );
    }

    #[test]
    fn multiply_samples() {
        let prod = (&sample_a() * &sample_c()).unwrap();
        assert_eq!(prod, Matrix::from_rows([[5, 1], [4, 2]]).unwrap());

        let err = sample_a().multiply(&sample_a()).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                op: "multiply",
                left: (2, 3),
                right: (2, 3)
            }
        );
    }

    #[test]
    fn matrix_mult() {
        let mut rng = SmallRng::seed_from_u64(1);
        let m1 = Matrix::random(&mut rng, 8, 10).unwrap();
        let m2 = Matrix::random(&mut rng, 10, 7).unwrap();
        let m3 = m1.multiply(&m2).unwrap();
        assert_eq!(m3.size(), (8, 7));

        for i in 0..m3.rows() {
            for j in 0..m3.cols() {
                let mut x = 0.0;
                for k in 0..m1.cols() {
                    x += m1[(i, k)] * m2[(k, j)];
                }
                assert_eq!(m3[(i, j)], x);
            }
        }
    }

    #[test]
    fn multiply_identity() {
        let mut rng = SmallRng::seed_from_u64(2);
        let m = Matrix::random(&mut rng, 6, 4).unwrap();
        assert_eq!(m.multiply(&Matrix::identity(4).unwrap()).unwrap(), m);
        assert_eq!(Matrix::identity(6).unwrap().multiply(&m).unwrap(), m);
    }

    #[test]
    fn transpose() {
        let a = sample_a();
        let t = a.transposed();
        assert_eq!(t, Matrix::from_rows([[1, -1], [0, 3], [2, 1]]).unwrap());

        let mut rng = SmallRng::seed_from_u64(1);
        let m = Matrix::random(&mut rng, 10, 4).unwrap();
        let n = m.transposed();
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                assert_eq!(m[(i, j)], n[(j, i)]);
            }
        }
        assert_eq!(n.transposed(), m);
    }

    #[test]
    fn rows_and_cells() {
        let mut m = Matrix::zeros(3, 3).unwrap();
        m[(1, 2)] = 4.0;
        m.row_mut(2)[0] = 7.0;
        m.set_row(0, [1.0, 2.0, 3.0]).unwrap();
        assert_eq!(
            m.set_row(0, [1.0]),
            Err(Error::InvalidShape {
                row: 0,
                expected: 3,
                found: 1
            })
        );
        assert_eq!(m, Matrix::from_rows([[1, 2, 3], [0, 0, 4], [7, 0, 0]]).unwrap());

        m.swap_rows(0, 2);
        assert_eq!(m, Matrix::from_rows([[7, 0, 0], [0, 0, 4], [1, 2, 3]]).unwrap());
        m.swap_rows(2, 1);
        assert_eq!(m, Matrix::from_rows([[7, 0, 0], [1, 2, 3], [0, 0, 4]]).unwrap());
        m.swap_rows(1, 1);
        assert_eq!(m.row(1)[2], 3.0);
    }

    #[test]
    #[should_panic]
    fn column_out_of_range() {
        let m = sample_a();
        let _ = m[(0, 3)];
    }

    #[test]
    fn display() {
        assert_eq!(sample_a().to_string(), "[1, 0, 2]\n[-1, 3, 1]");
        assert_eq!(Matrix::new(1, 2, 0.5).unwrap().to_string(), "[0.5, 0.5]");
    }
}
