// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use crate::{CumulativeTimeMatrix, Matrix, RowValues};
use tracing::{debug, trace};


/// Time in seconds each competitor is behind the leader, per lap.
///
/// The leader is determined for each lap on its own: it is whoever has the
/// lowest cumulative time at the end of that lap, not whoever ends up
/// winning the race. A competitor may thus show a gap of zero on a lap even
/// though it doesn't win, and the gaps of one competitor are not offsets
/// against a single reference competitor.
#[derive(Clone, Debug, PartialEq)]
pub struct GapMatrix {
  gaps: Matrix<f64>,
}

impl GapMatrix {
  pub fn from_cumulative(cumulative: &CumulativeTimeMatrix) -> Self {
    let gaps = cumulative.as_matrix().map_columns(|column| {
                                       let times = column.collect::<Vec<_>>();
                                       let fastest =
                                         times.iter()
                                              .copied()
                                              .fold(f64::INFINITY, f64::min);
                                       times.iter()
                                            .map(|time| time - fastest)
                                            .collect()
                                     });
    let gaps = Self { gaps };

    let mut leader = None;
    for lap in 0..gaps.laps() {
      match gaps.zero_gap(lap) {
        Some(current) if leader != Some(current) => {
          trace!(lap, competitor = current, "lead change");
          leader = Some(current);
        }
        _ => (),
      }
    }
    debug!(competitors = gaps.competitors(),
           laps = gaps.laps(),
           "computed gaps to leader");

    gaps
  }

  pub fn competitors(&self) -> usize {
    self.gaps.rows()
  }

  pub fn laps(&self) -> usize {
    self.gaps.cols()
  }

  pub fn shape(&self) -> (usize, usize) {
    self.gaps.shape()
  }

  /// Seconds `competitor` is behind the leader at the end of lap `lap`.
  pub fn gap(&self, competitor: usize, lap: usize) -> f64 {
    self.gaps.get(competitor, lap)
  }

  /// The competitor leading at the end of lap `lap`. If several competitors
  /// share the lead, the one with the lowest index is returned.
  pub fn leader(&self, lap: usize) -> usize {
    self.zero_gap(lap)
        .expect("every lap has a competitor with zero gap")
  }

  fn zero_gap(&self, lap: usize) -> Option<usize> {
    self.gaps.column(lap).position(|gap| gap == 0.0)
  }

  pub fn as_matrix(&self) -> &Matrix<f64> {
    &self.gaps
  }
}

impl RowValues for GapMatrix {
  fn rows(&self) -> usize {
    self.gaps.rows()
  }

  fn cols(&self) -> usize {
    self.gaps.cols()
  }

  fn row_values(&self, row: usize) -> Vec<f64> {
    self.gaps.row(row).to_vec()
  }
}
