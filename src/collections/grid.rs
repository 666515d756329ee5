use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Debug, Formatter};

/// A container of elements arranged in rows and columns
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    row_count: usize,
    col_count: usize,
    elements: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a new grid with the given dimensions, filled with the default value
    pub fn with_size(row_count: usize, col_count: usize) -> Self
    where
        T: Clone + Default,
    {
        Self {
            row_count,
            col_count,
            elements: vec![T::default(); row_count * col_count],
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Returns an iterator over the elements of one column, top to bottom
    pub fn col(&self, index: usize) -> impl Iterator<Item = &T> + '_ {
        assert!(index < self.col_count);
        self.elements.iter().skip(index).step_by(self.col_count)
    }

    /// Returns an iterator over the rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() panics on zero, and a grid without columns has no elements anyway
        self.elements.chunks(self.col_count.max(1))
    }

    /// Returns a mutable iterator over the rows of the grid
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.elements.chunks_mut(self.col_count.max(1))
    }

    /// Returns an iterator over the columns of the grid
    pub fn cols(&self) -> impl Iterator<Item = impl Iterator<Item = &T> + '_> + '_ {
        (0..self.col_count).map(move |col| self.col(col))
    }
}

#[derive(PartialEq)]
pub struct NonRectangular {
    row: usize,
    expected: usize,
    actual: usize,
}

impl Debug for NonRectangular {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} has {} elements, expected {}",
            self.row, self.actual, self.expected
        )
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Grid<T> {
    type Error = NonRectangular;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        let mut elements = Vec::with_capacity(row_count * col_count);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != col_count {
                return Err(NonRectangular {
                    row,
                    expected: col_count,
                    actual: values.len(),
                });
            }
            elements.extend(values);
        }
        Ok(Self {
            row_count,
            col_count,
            elements,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use crate::collections::grid::NonRectangular;
    use crate::collections::Grid;

    #[test]
    fn try_from_vec() {
        let grid = Grid::try_from(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(2, grid.row_count());
        assert_eq!(3, grid.col_count());
        assert_eq!(vec![&[1, 2, 3][..], &[4, 5, 6][..]], grid.rows().collect::<Vec<_>>());
    }

    #[test]
    fn try_from_ragged_vec() {
        assert_eq!(
            Err(NonRectangular {
                row: 1,
                expected: 2,
                actual: 1
            }),
            Grid::try_from(vec![vec![1, 2], vec![3]])
        );
    }

    #[test]
    fn columns() {
        let grid = Grid::try_from(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let cols: Vec<Vec<i32>> = grid.cols().map(|col| col.copied().collect()).collect();
        assert_eq!(vec![vec![1, 4], vec![2, 5], vec![3, 6]], cols);
    }

    #[test]
    fn rows_mut() {
        let mut grid: Grid<bool> = Grid::with_size(2, 2);
        for (i, row) in grid.rows_mut().enumerate() {
            row[i] = true;
        }
        assert_eq!(
            vec![&[true, false][..], &[false, true][..]],
            grid.rows().collect::<Vec<_>>()
        );
    }
}
