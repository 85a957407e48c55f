// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use crate::{LapTimeMatrix, Result, Series, SeriesBuilder};
use getset::Getters;
use serde::Serialize;


const LAP_AXIS: &str = "Lap";
const GAP_AXIS: &str = "Gap from first place (in seconds)";
const GAP_TITLE: &str = "Race simulation results";
const POSITION_AXIS: &str = "Driver position";


/// Everything a renderer needs to draw a chart: the series plus axis and
/// chart titles. A `Chart` holds data only, drawing it is up to a `Render`
/// implementation.
#[derive(Clone, Debug, PartialEq, Getters, Serialize)]
#[getset(get = "pub")]
pub struct Chart {
  title:   Option<String>,
  x_title: String,
  y_title: String,
  series:  Vec<Series>,
}

impl Chart {
  pub fn new(title: Option<String>,
             x_title: String,
             y_title: String,
             series: Vec<Series>)
             -> Self {
    Self { title,
           x_title,
           y_title,
           series }
  }

  /// Gap to the per-lap leader in seconds for each competitor over the
  /// course of the race.
  pub fn gap_to_leader(lap_times: &LapTimeMatrix,
                       builder: &SeriesBuilder)
                       -> Result<Self> {
    let gaps = lap_times.cumulative().gap_to_leader();
    Ok(Self::new(Some(GAP_TITLE.to_string()),
                 LAP_AXIS.to_string(),
                 GAP_AXIS.to_string(),
                 builder.build(&gaps, lap_times)?))
  }

  /// Position of each competitor over the course of the race.
  pub fn positions(lap_times: &LapTimeMatrix,
                   builder: &SeriesBuilder)
                   -> Result<Self> {
    let positions = lap_times.cumulative().positions();
    Ok(Self::new(None,
                 LAP_AXIS.to_string(),
                 POSITION_AXIS.to_string(),
                 builder.build(&positions, lap_times)?))
  }

  /// Highest lap index over all series, `0` for a chart without points.
  pub fn max_lap(&self) -> usize {
    self.series
        .iter()
        .flat_map(|series| series.xs())
        .max()
        .unwrap_or(0)
  }

  /// Smallest and largest y value over all series, `None` for a chart
  /// without points.
  pub fn value_range(&self) -> Option<(f64, f64)> {
    self.series
        .iter()
        .flat_map(|series| series.ys())
        .fold(None, |range, y| match range {
          None => Some((y, y)),
          Some((lo, hi)) => Some((f64::min(lo, y), f64::max(hi, y))),
        })
  }
}
