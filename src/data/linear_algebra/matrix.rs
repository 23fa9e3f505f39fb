//! # Matrix implementations
//!
//! A dense, row major matrix supporting the elementary row operations of Gauss-Jordan
//! elimination.
use itertools::Itertools;

use crate::data::number_types::traits::Scalar;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Scalar> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows, all of length `nr_columns`.
    /// * `nr_columns`: Needed to have a well defined shape when there are no rows.
    pub fn from_data(data: Vec<Vec<F>>, nr_columns: usize) -> Self {
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        let nr_rows = data.len();
        Self { data, nr_rows, nr_columns }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> &F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Get all values in column `j` of this matrix, from the top row down.
    pub fn column(&self, j: usize) -> impl Iterator<Item=&F> + Clone + '_ {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(move |row| &row[j])
    }

    /// Divide all values in row `i` by `divisor`.
    pub fn divide_row(&mut self, i: usize, divisor: &F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(*divisor != F::zero());

        for value in self.data[i].iter_mut() {
            *value = value.clone() / divisor.clone();
        }
    }

    /// Subtract a multiple of row `read_row` from row `write_row`.
    pub fn sub_multiple_of_row(&mut self, read_row: usize, write_row: usize, factor: &F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        if factor.is_zero() {
            return;
        }

        let (read, write) = if read_row < write_row {
            let (head, tail) = self.data.split_at_mut(write_row);
            (&head[read_row], &mut tail[0])
        } else {
            let (head, tail) = self.data.split_at_mut(read_row);
            (&tail[0], &mut head[write_row])
        };

        for (target, source) in write.iter_mut().zip_eq(read.iter()) {
            *target = target.clone() - factor.clone() * source.clone();
        }
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}
