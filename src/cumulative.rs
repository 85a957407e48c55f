// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use crate::{ensure,
            lap_times::validate_durations,
            Error,
            GapMatrix,
            LapTimeMatrix,
            Matrix,
            PositionMatrix,
            Result};
use tracing::debug;


/// Running race time per competitor and lap: entry `(i, j)` is the sum of
/// competitor `i`'s lap times for laps `0..=j`.
#[derive(Clone, Debug, PartialEq)]
pub struct CumulativeTimeMatrix {
  times: Matrix<f64>,
}

impl CumulativeTimeMatrix {
  /// Prefix sums of each competitor's lap times along the lap axis.
  pub fn from_lap_times(lap_times: &LapTimeMatrix) -> Self {
    let times = lap_times.as_matrix().map_rows(|row| {
                                       let mut elapsed = 0.0;
                                       row.iter()
                                          .map(|lap_time| {
                                            elapsed += lap_time;
                                            elapsed
                                          })
                                          .collect()
                                     });

    debug!(competitors = times.rows(),
           laps = times.cols(),
           "computed cumulative race times");
    Self { times }
  }

  /// Takes precomputed cumulative race times. Besides the shape and value
  /// checks applied to lap times, each row must be non-decreasing. Finite,
  /// nonnegative entries keep every gap between them finite as well.
  pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
    let times = Matrix::from_rows(rows)?;
    validate_durations(&times)?;

    for (row, values) in times.iter_rows().enumerate() {
      for (col, pair) in values.windows(2).enumerate() {
        ensure!(pair[0] <= pair[1],
                Error::value(row,
                             col + 1,
                             pair[1],
                             "cumulative time decreases"));
      }
    }

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

  /// Elapsed race time of `competitor` at the end of lap `lap`.
  pub fn time(&self, competitor: usize, lap: usize) -> f64 {
    self.times.get(competitor, lap)
  }

  /// Gap of each competitor to the per-lap leader, see `GapMatrix`.
  pub fn gap_to_leader(&self) -> GapMatrix {
    GapMatrix::from_cumulative(self)
  }

  /// Rank of each competitor per lap, see `PositionMatrix`.
  pub fn positions(&self) -> PositionMatrix {
    PositionMatrix::from_cumulative(self)
  }

  pub fn as_matrix(&self) -> &Matrix<f64> {
    &self.times
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;


  #[test]
  fn cumulative_test() {
    let lap_times =
      LapTimeMatrix::new(vec![vec![10.0, 10.0, 10.0], vec![12.0, 9.0, 9.0]])
        .unwrap();
    let cumulative = lap_times.cumulative();

    assert_eq!((2, 3), cumulative.shape());
    assert_eq!(vec![vec![10.0, 20.0, 30.0], vec![12.0, 21.0, 30.0]],
               cumulative.as_matrix().to_rows());
    assert_eq!(cumulative, CumulativeTimeMatrix::from_lap_times(&lap_times));
  }

  #[test]
  fn cumulative_total_time_test() {
    let lap_times = LapTimeMatrix::new(vec![vec![91.25, 89.5, 90.125, 88.0],
                                            vec![92.0, 88.75, 89.5, 89.25],
                                            vec![90.5, 90.5, 90.5, 90.5]])
      .unwrap();
    let cumulative = lap_times.cumulative();

    // the last lap holds the total race time of each competitor
    let last = lap_times.laps() - 1;
    for competitor in 0..lap_times.competitors() {
      assert_eq!(lap_times.total_time(competitor),
                 cumulative.time(competitor, last));
    }
  }

  #[test]
  fn cumulative_single_lap_test() {
    let lap_times = LapTimeMatrix::new(vec![vec![71.3], vec![70.9]]).unwrap();
    let cumulative = lap_times.cumulative();
    assert_eq!(vec![vec![71.3], vec![70.9]], cumulative.as_matrix().to_rows());
  }

  #[test]
  fn cumulative_from_rows_test() {
    let cumulative =
      CumulativeTimeMatrix::from_rows(vec![vec![10.0, 20.0], vec![10.0, 20.0]])
        .unwrap();
    assert_eq!(20.0, cumulative.time(1, 1));

    assert_eq!(CumulativeTimeMatrix::from_rows(vec![vec![10.0, 9.0]]),
               Err(Error::value(0, 1, 9.0, "cumulative time decreases")));
    assert_eq!(CumulativeTimeMatrix::from_rows(vec![vec![-1.0]]),
               Err(Error::value(0, 0, -1.0, "negative time")));
    assert_eq!(CumulativeTimeMatrix::from_rows(vec![vec![1.0], vec![]]),
               Err(Error::shape("row 1 has 0 laps, expected 1")));
  }

  #[test]
  fn cumulative_from_rows_limits_test() {
    assert_eq!(CumulativeTimeMatrix::from_rows(vec![vec![f64::MAX,
                                                         f64::INFINITY]]),
               Err(Error::value(0, 1, f64::INFINITY, "not a finite number")));

    let cumulative =
      CumulativeTimeMatrix::from_rows(vec![vec![f64::MAX, f64::MAX],
                                           vec![0.0, f64::MAX]]).unwrap();
    let gaps = cumulative.gap_to_leader();
    assert_eq!(f64::MAX, gaps.gap(0, 0));
    assert_eq!(vec![1, 0], vec![gaps.leader(0), gaps.leader(1)]);
  }
}
