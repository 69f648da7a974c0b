//! Fixed linear maps over coordinates

use std::fmt;

use crate::errors::ShapeError;

use super::metric::dot;
use super::scalar::Scalar;
use super::vect::Vect;

/// A `lines x columns` array of scalars, stored column-major.
///
/// Indices are 1-based. [`Matrix::apply`] maps a vector with one coordinate
/// per line to a vector with one coordinate per column.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    lines: usize,
    columns: usize,
    coords: Vec<Scalar<T>>,
}

impl<T: Clone + PartialEq> Matrix<T> {
    /// Create a matrix from column-major coordinates (unchecked).
    /// Use `try_new` for caller-provided shapes.
    pub(crate) fn new(lines: usize, columns: usize, coords: Vec<Scalar<T>>) -> Self {
        Matrix {
            lines,
            columns,
            coords,
        }
    }

    /// Create a matrix, checking the coordinate count against the shape.
    pub fn try_new(
        lines: usize,
        columns: usize,
        coords: impl IntoIterator<Item = Scalar<T>>,
    ) -> Result<Self, ShapeError> {
        let coords: Vec<Scalar<T>> = coords.into_iter().collect();
        let expected = lines * columns;
        if coords.len() != expected {
            return Err(ShapeError {
                lines,
                columns,
                expected,
                got: coords.len(),
            });
        }
        Ok(Matrix::new(lines, columns, coords))
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// All coordinates, column after column
    pub fn coords(&self) -> &[Scalar<T>] {
        &self.coords
    }

    /// Column `col` (1-based), contiguous in storage
    pub fn column(&self, col: usize) -> Option<&[Scalar<T>]> {
        if col == 0 || col > self.columns {
            return None;
        }
        let first = self.index(1, col);
        self.coords.get(first..first + self.lines)
    }

    /// Line `lin` (1-based), strided by the line count
    pub fn line(&self, lin: usize) -> Option<Vec<Scalar<T>>> {
        if lin == 0 || lin > self.lines {
            return None;
        }
        (1..=self.columns)
            .map(|col| self.coords.get(self.index(lin, col)).cloned())
            .collect()
    }

    /// Coordinate at (`lin`, `col`), both 1-based
    pub fn get(&self, lin: usize, col: usize) -> Option<&Scalar<T>> {
        if lin == 0 || col == 0 || lin > self.lines || col > self.columns {
            return None;
        }
        self.coords.get(self.index(lin, col))
    }

    /// The vector whose i-th coordinate is the inner product of `vect` with
    /// column i. `vect` is expected to have one coordinate per line.
    pub fn apply(&self, vect: &Vect<T>) -> Vect<T> {
        let input = vect.coords();
        Vect::fixed(
            (1..=self.columns)
                .map(|col| dot(&input, self.column(col).unwrap_or_default())),
        )
    }

    fn index(&self, lin: usize, col: usize) -> usize {
        self.lines * (col - 1) + lin - 1
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, column) in self.coords.chunks(self.lines.max(1)).enumerate() {
            if idx > 0 {
                write!(f, "; ")?;
            }
            for (pos, coord) in column.iter().enumerate() {
                if pos > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", coord)?;
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Decimal;

    fn lits(values: &[f64]) -> Vec<Scalar<f64>> {
        values.iter().copied().map(Scalar::literal).collect()
    }

    #[test]
    fn try_new_rejects_wrong_count() {
        let err = Matrix::try_new(2, 3, lits(&[1.0, 2.0, 3.0, 4.0])).unwrap_err();
        assert_eq!(err.expected, 6);
        assert_eq!(err.got, 4);
    }

    #[test]
    fn columns_are_contiguous_and_lines_strided() {
        // column-major: columns (1, 2, 3) and (4, 5, 6)
        let matrix = Matrix::try_new(3, 2, lits(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])).unwrap();
        assert_eq!(matrix.column(2), Some(&lits(&[4.0, 5.0, 6.0])[..]));
        assert_eq!(matrix.line(1), Some(lits(&[1.0, 4.0])));
        assert_eq!(matrix.line(3), Some(lits(&[3.0, 6.0])));
        assert_eq!(matrix.get(2, 2), Some(&Scalar::literal(5.0)));
        assert_eq!(matrix.column(0), None);
        assert_eq!(matrix.column(3), None);
        assert_eq!(matrix.line(4), None);
    }

    #[test]
    fn apply_takes_inner_product_with_columns() {
        let field = Decimal::seeded(5);
        let matrix = Matrix::try_new(3, 2, lits(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])).unwrap();
        let input = Vect::fixed(lits(&[1.0, 0.0, -1.0]));
        let output = matrix.apply(&input);
        assert_eq!(output.resolve(&field), Ok(vec![-2.0, -2.0]));
        assert_eq!(matrix.lines(), 3);
        assert_eq!(matrix.columns(), 2);
    }

    #[test]
    fn apply_is_lazy_over_input() {
        let field = Decimal::seeded(5);
        let swap = Matrix::try_new(
            2,
            2,
            [
                Scalar::AddIdentity,
                Scalar::MultIdentity,
                Scalar::MultIdentity,
                Scalar::AddIdentity,
            ],
        )
        .unwrap();
        let output = swap.apply(&Vect::fixed(lits(&[3.0, 8.0])));
        assert_eq!(output.resolve(&field), Ok(vec![8.0, 3.0]));
    }
}
