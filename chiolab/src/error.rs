use thiserror::Error;

/// Errors raised when an operation receives malformed input
///
/// Every fallible operation in this crate fails fast: the error is returned to the caller
/// immediately and no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot {op} a {}x{} matrix with a {}x{} matrix", .left.0, .left.1, .right.0, .right.1)]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("determinant requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    InvalidShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("count must be at least 1, got {0}")]
    InvalidCount(usize),

    #[error("list is empty")]
    EmptyList,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        let e = Error::ShapeMismatch {
            op: "add",
            left: (2, 3),
            right: (3, 2),
        };
        assert_eq!(e.to_string(), "cannot add a 2x3 matrix with a 3x2 matrix");
        assert_eq!(
            Error::NotSquare { rows: 2, cols: 3 }.to_string(),
            "determinant requires a square matrix, got 2x3"
        );
        assert_eq!(Error::InvalidCount(0).to_string(), "count must be at least 1, got 0");
        assert_eq!(Error::EmptyList.to_string(), "list is empty");
    }
}
