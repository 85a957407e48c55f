// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use crate::{ensure, Error, Result};
use getset::CopyGetters;
use std::iter::StepBy;
use std::slice;


/// Rectangular, row-major grid. Rows are competitors, columns are laps.
#[derive(Clone, Debug, PartialEq, CopyGetters)]
pub struct Matrix<T> {
  #[getset(get_copy = "pub")]
  rows: usize,
  #[getset(get_copy = "pub")]
  cols: usize,
  data: Vec<T>,
}

impl<T: Copy> Matrix<T> {
  /// Builds a matrix from nested rows. Fails if there are no rows, no
  /// columns or if the rows differ in length.
  pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
    ensure!(!rows.is_empty(), Error::shape("no competitors"));
    let cols = rows[0].len();
    ensure!(cols > 0, Error::shape("no laps"));

    let mut data = Vec::with_capacity(rows.len() * cols);
    for (idx, row) in rows.iter().enumerate() {
      ensure!(row.len() == cols,
              Error::shape(format!("row {} has {} laps, expected {}",
                                   idx,
                                   row.len(),
                                   cols)));
      data.extend_from_slice(row);
    }

    Ok(Self { rows: rows.len(),
              cols,
              data })
  }

  /// Builds a `rows` x `cols` matrix by evaluating `f(row, col)` for each
  /// cell. Callers guarantee `rows > 0` and `cols > 0`.
  pub(crate) fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where F: FnMut(usize, usize) -> T
  {
    let mut data = Vec::with_capacity(rows * cols);
    for row in 0..rows {
      for col in 0..cols {
        data.push(f(row, col));
      }
    }
    Self { rows, cols, data }
  }

  /// Applies `f` to each row and collects the results into a matrix of the
  /// same shape. Panics if `f` changes the row length.
  pub(crate) fn map_rows<U, F>(&self, mut f: F) -> Matrix<U>
    where U: Copy,
          F: FnMut(&[T]) -> Vec<U>
  {
    let mut data = Vec::with_capacity(self.data.len());
    for row in self.iter_rows() {
      let mapped = f(row);
      assert_eq!(mapped.len(), self.cols, "row length changed in map_rows");
      data.extend(mapped);
    }
    Matrix { rows: self.rows,
             cols: self.cols,
             data }
  }

  /// Applies `f` to each column and collects the results into a matrix of
  /// the same shape. Panics if `f` changes the column length.
  pub(crate) fn map_columns<U, F>(&self, mut f: F) -> Matrix<U>
    where U: Copy,
          F: FnMut(Column<'_, T>) -> Vec<U>
  {
    let columns = (0..self.cols).map(|col| {
                                  let mapped = f(self.column(col));
                                  assert_eq!(mapped.len(),
                                             self.rows,
                                             "column length changed in \
                                              map_columns");
                                  mapped
                                })
                                .collect::<Vec<Vec<U>>>();
    Matrix::from_fn(self.rows, self.cols, |row, col| columns[col][row])
  }

  pub fn shape(&self) -> (usize, usize) {
    (self.rows, self.cols)
  }

  /// Value at `(row, col)`. Panics if either index is out of range.
  pub fn get(&self, row: usize, col: usize) -> T {
    assert!(row < self.rows && col < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols);
    self.data[row * self.cols + col]
  }

  /// All values of one row, i.e. one competitor over all laps.
  pub fn row(&self, row: usize) -> &[T] {
    assert!(row < self.rows, "row {} out of range", row);
    &self.data[row * self.cols..(row + 1) * self.cols]
  }

  /// All values of one column, i.e. one lap over all competitors.
  pub fn column(&self, col: usize) -> Column<'_, T> {
    assert!(col < self.cols, "column {} out of range", col);
    Column { inner: self.data[col..].iter().step_by(self.cols) }
  }

  pub fn iter_rows(&self) -> slice::Chunks<'_, T> {
    self.data.chunks(self.cols)
  }

  pub fn to_rows(&self) -> Vec<Vec<T>> {
    self.iter_rows().map(|row| row.to_vec()).collect()
  }
}


/// Iterator over the values of a single column, top to bottom.
#[derive(Clone, Debug)]
pub struct Column<'a, T> {
  inner: StepBy<slice::Iter<'a, T>>,
}

impl<'a, T: Copy> Iterator for Column<'a, T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    self.inner.next().copied()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<'a, T: Copy> ExactSizeIterator for Column<'a, T> {}
