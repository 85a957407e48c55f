// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use crate::{CumulativeTimeMatrix, Matrix, RowValues};
use std::cmp::Ordering;
use tracing::debug;


/// Running position of each competitor per lap, `0` being the competitor
/// with the lowest cumulative time at the end of that lap.
///
/// Each column is a permutation of `0..competitors`. Competitors with the
/// exact same cumulative time are ranked by index, the lower index getting
/// the better position.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionMatrix {
  positions: Matrix<usize>,
}

impl PositionMatrix {
  pub fn from_cumulative(cumulative: &CumulativeTimeMatrix) -> Self {
    let positions = cumulative.as_matrix().map_columns(|column| {
                                            let times =
                                              column.collect::<Vec<f64>>();
                                            invert(&argsort(&times))
                                          });

    debug!(competitors = positions.rows(),
           laps = positions.cols(),
           "computed positions");
    Self { positions }
  }

  pub fn competitors(&self) -> usize {
    self.positions.rows()
  }

  pub fn laps(&self) -> usize {
    self.positions.cols()
  }

  pub fn shape(&self) -> (usize, usize) {
    self.positions.shape()
  }

  /// Position of `competitor` at the end of lap `lap`.
  pub fn position(&self, competitor: usize, lap: usize) -> usize {
    self.positions.get(competitor, lap)
  }

  /// Competitor indices ordered by position at the end of lap `lap`, i.e.
  /// the leader first.
  pub fn standings(&self, lap: usize) -> Vec<usize> {
    invert(&self.positions.column(lap).collect::<Vec<usize>>())
  }

  pub fn as_matrix(&self) -> &Matrix<usize> {
    &self.positions
  }
}

impl RowValues for PositionMatrix {
  fn rows(&self) -> usize {
    self.positions.rows()
  }

  fn cols(&self) -> usize {
    self.positions.cols()
  }

  fn row_values(&self, row: usize) -> Vec<f64> {
    self.positions
        .row(row)
        .iter()
        .map(|&position| position as f64)
        .collect()
  }
}


/// Indices of `values` in ascending order of their value. The sort is
/// stable, equal values keep their original relative order.
fn argsort(values: &[f64]) -> Vec<usize> {
  let mut indices = (0..values.len()).collect::<Vec<usize>>();
  // validated matrices hold no NaN
  indices.sort_by(|&a, &b| {
           values[a].partial_cmp(&values[b])
                    .unwrap_or(Ordering::Equal)
         });
  indices
}

/// Inverts `permutation` so that entry `i` holds the position of `i` within
/// `permutation`. Sorting the indices by the permutation once more does
/// exactly that.
fn invert(permutation: &[usize]) -> Vec<usize> {
  let mut inverse = (0..permutation.len()).collect::<Vec<usize>>();
  inverse.sort_by_key(|&idx| permutation[idx]);
  inverse
}
