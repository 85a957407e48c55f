// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use crate::{ensure, Error, LapTimeMatrix, Result};
use getset::Getters;
use serde::Serialize;
use tracing::debug;


const DEFAULT_PREFIX: &str = "Driver";


/// Read access to the rows of a derived matrix, one row per competitor.
pub trait RowValues {
  fn rows(&self) -> usize;
  fn cols(&self) -> usize;
  fn row_values(&self, row: usize) -> Vec<f64>;
}


/// One competitor's line in a chart: lap index on x, derived value on y.
#[derive(Clone, Debug, PartialEq, Getters, Serialize)]
#[getset(get = "pub")]
pub struct Series {
  label:  String,
  points: Vec<(usize, f64)>,
}

impl Series {
  pub fn new(label: String, points: Vec<(usize, f64)>) -> Self {
    Self { label, points }
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn xs(&self) -> Vec<usize> {
    self.points.iter().map(|&(x, _)| x).collect()
  }

  pub fn ys(&self) -> Vec<f64> {
    self.points.iter().map(|&(_, y)| y).collect()
  }
}


/// Turns a derived matrix into one `Series` per competitor.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct SeriesBuilder {
  prefix: String,
}

impl Default for SeriesBuilder {
  fn default() -> Self {
    Self::with_prefix(DEFAULT_PREFIX)
  }
}

impl SeriesBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Labels series `"{prefix} {index}"` instead of `"Driver {index}"`.
  pub fn with_prefix(prefix: &str) -> Self {
    Self { prefix: prefix.to_string() }
  }

  pub fn label(&self, competitor: usize) -> String {
    format!("{} {}", self.prefix, competitor)
  }

  /// Builds one series per row of `values`, in row order. The number of
  /// competitors and laps is taken from `lap_times`, which `values` must
  /// have been derived from.
  pub fn build<M: RowValues>(&self,
                             values: &M,
                             lap_times: &LapTimeMatrix)
                             -> Result<Vec<Series>> {
    let (competitors, laps) = lap_times.shape();
    ensure!(values.rows() == competitors && values.cols() == laps,
            Error::shape(format!("derived matrix is {}x{}, lap times are \
                                  {}x{}",
                                 values.rows(),
                                 values.cols(),
                                 competitors,
                                 laps)));

    let series = (0..competitors).map(|competitor| {
                                   let points =
                                     values.row_values(competitor)
                                           .into_iter()
                                           .enumerate()
                                           .collect();
                                   Series::new(self.label(competitor), points)
                                 })
                                 .collect::<Vec<Series>>();

    debug!(series = series.len(), laps, "built series");
    Ok(series)
  }
}
