// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use crate::{ensure, CumulativeTimeMatrix, Error, Matrix, Result};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use tracing::debug;


/// Lap times in seconds as produced by a race simulation. One row per
/// competitor, one column per lap.
///
/// A `LapTimeMatrix` is validated on construction: it holds at least one
/// competitor and one lap, all rows have the same number of laps and every
/// lap time is a finite, nonnegative number of seconds. Everything derived
/// from it can therefore be computed without failing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct LapTimeMatrix {
  times: Matrix<f64>,
}

impl LapTimeMatrix {
  pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
    let times = Matrix::from_rows(rows)?;
    validate_durations(&times)?;
    validate_running_totals(&times)?;

    debug!(competitors = times.rows(),
           laps = times.cols(),
           "validated lap time matrix");
    Ok(Self { times })
  }

  pub fn competitors(&self) -> usize {
    self.times.rows()
  }

  pub fn laps(&self) -> usize {
    self.times.cols()
  }

  pub fn shape(&self) -> (usize, usize) {
    self.times.shape()
  }

  /// Time in seconds competitor `competitor` needed for lap `lap`.
  pub fn lap_time(&self, competitor: usize, lap: usize) -> f64 {
    self.times.get(competitor, lap)
  }

  /// All lap times of competitor `competitor`.
  pub fn lap_times(&self, competitor: usize) -> &[f64] {
    self.times.row(competitor)
  }

  /// Total race time of competitor `competitor`, i.e. the sum of all of its
  /// lap times.
  pub fn total_time(&self, competitor: usize) -> f64 {
    self.times.row(competitor).iter().sum()
  }

  /// Running race time per competitor and lap, see `CumulativeTimeMatrix`.
  pub fn cumulative(&self) -> CumulativeTimeMatrix {
    CumulativeTimeMatrix::from_lap_times(self)
  }

  pub fn as_matrix(&self) -> &Matrix<f64> {
    &self.times
  }
}

impl TryFrom<Vec<Vec<f64>>> for LapTimeMatrix {
  type Error = Error;

  fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
    Self::new(rows)
  }
}

impl From<LapTimeMatrix> for Vec<Vec<f64>> {
  fn from(matrix: LapTimeMatrix) -> Self {
    matrix.times.to_rows()
  }
}


/// Checks that each value in `matrix` is a valid duration, i.e. finite and
/// not negative. Reports the first offending cell in row-major order.
pub(crate) fn validate_durations(matrix: &Matrix<f64>) -> Result<()> {
  for (row, values) in matrix.iter_rows().enumerate() {
    for (col, &value) in values.iter().enumerate() {
      ensure!(value.is_finite(),
              Error::value(row, col, value, "not a finite number"));
      ensure!(value >= 0.0, Error::value(row, col, value, "negative time"));
    }
  }
  Ok(())
}

/// Checks that summing up each row from the first lap on never leaves the
/// finite range, so cumulative times and the gaps between them stay finite.
fn validate_running_totals(matrix: &Matrix<f64>) -> Result<()> {
  for (row, values) in matrix.iter_rows().enumerate() {
    let mut elapsed = 0.0;
    for (col, &value) in values.iter().enumerate() {
      elapsed += value;
      ensure!(elapsed.is_finite(),
              Error::value(row, col, value, "cumulative time overflows"));
    }
  }
  Ok(())
}


#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;


  #[test]
  fn lap_time_matrix_test() {
    let lap_times =
      LapTimeMatrix::new(vec![vec![10.0, 10.0, 10.0], vec![12.0, 9.0, 9.0]])
        .unwrap();

    assert_eq!(2, lap_times.competitors());
    assert_eq!(3, lap_times.laps());
    assert_eq!((2, 3), lap_times.shape());
    assert_eq!(12.0, lap_times.lap_time(1, 0));
    assert_eq!(&[12.0, 9.0, 9.0], lap_times.lap_times(1));
    assert_eq!(30.0, lap_times.total_time(0));
    assert_eq!(30.0, lap_times.total_time(1));
  }

  #[test]
  fn lap_time_matrix_zero_times_test() {
    // a zero lap time is a valid (if unlikely) duration
    let lap_times = LapTimeMatrix::new(vec![vec![0.0, 0.0]]).unwrap();
    assert_eq!(0.0, lap_times.total_time(0));
  }

  #[test]
  fn lap_time_matrix_shape_error_test() {
    assert_eq!(LapTimeMatrix::new(vec![]),
               Err(Error::shape("no competitors")));
    assert_eq!(LapTimeMatrix::new(vec![vec![]]), Err(Error::shape("no laps")));
    assert_eq!(LapTimeMatrix::new(vec![vec![90.1, 91.2], vec![90.5]]),
               Err(Error::shape("row 1 has 1 laps, expected 2")));
  }

  #[test]
  fn lap_time_matrix_value_error_test() {
    assert_eq!(LapTimeMatrix::new(vec![vec![90.1, -0.5]]),
               Err(Error::value(0, 1, -0.5, "negative time")));

    let err = LapTimeMatrix::new(vec![vec![90.1], vec![f64::INFINITY]]);
    assert_eq!(err,
               Err(Error::value(1, 0, f64::INFINITY, "not a finite number")));

    // NaN never compares equal, so match on the variant instead
    match LapTimeMatrix::new(vec![vec![f64::NAN]]) {
      Err(Error::InvalidValue { row: 0,
                                col: 0,
                                reason: "not a finite number",
                                .. }) => (),
      other => panic!("unexpected result {:?}", other),
    }
  }

  #[test]
  fn lap_time_matrix_overflow_test() {
    // every lap time on its own is fine, their sum is not
    assert_eq!(LapTimeMatrix::new(vec![vec![f64::MAX, f64::MAX],
                                       vec![f64::MAX, f64::MAX]]),
               Err(Error::value(0, 1, f64::MAX, "cumulative time overflows")));
    assert_eq!(LapTimeMatrix::new(vec![vec![1.0, 1.0],
                                       vec![f64::MAX / 2.0, f64::MAX]]),
               Err(Error::value(1, 1, f64::MAX, "cumulative time overflows")));

    let lap_times =
      LapTimeMatrix::new(vec![vec![f64::MAX / 2.0, f64::MAX / 2.0],
                              vec![1.0, 1.0]]).unwrap();
    let gaps = lap_times.cumulative().gap_to_leader();
    assert!(gaps.as_matrix().iter_rows().flatten().all(|gap| gap.is_finite()));
    assert_eq!(1, gaps.leader(1));
  }

  #[test]
  fn lap_time_matrix_serde_test() {
    let lap_times: LapTimeMatrix =
      serde_json::from_str("[[10, 10, 10], [12, 9, 9]]").unwrap();
    assert_eq!(LapTimeMatrix::new(vec![vec![10.0, 10.0, 10.0],
                                       vec![12.0, 9.0, 9.0]]).unwrap(),
               lap_times);

    assert_eq!("[[10.0,10.0,10.0],[12.0,9.0,9.0]]",
               serde_json::to_string(&lap_times).unwrap());

    assert!(serde_json::from_str::<LapTimeMatrix>("[[1, 2], [3]]").is_err());
    assert!(serde_json::from_str::<LapTimeMatrix>("[[1, -2]]").is_err());
    assert!(serde_json::from_str::<LapTimeMatrix>("[]").is_err());
  }
}
