// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

//! Race analytics derived from simulated lap times.
//!
//! A `LapTimeMatrix` holds one row per competitor and one column per lap.
//! From it lapviz derives running race times (`CumulativeTimeMatrix`), the
//! gap of each competitor to the per-lap leader (`GapMatrix`) and each
//! competitor's running position (`PositionMatrix`), and turns those into
//! labeled `Series` ready to be charted:
//!
//! ```
//! use lapviz::{LapTimeMatrix, SeriesBuilder};
//!
//! let lap_times =
//!   LapTimeMatrix::new(vec![vec![10.0, 10.0, 10.0], vec![12.0, 9.0, 9.0]])?;
//! let gaps = lap_times.cumulative().gap_to_leader();
//! let series = SeriesBuilder::default().build(&gaps, &lap_times)?;
//!
//! assert_eq!("Driver 1", series[1].label());
//! assert_eq!(vec![2.0, 1.0, 0.0], series[1].ys());
//! # Ok::<(), lapviz::Error>(())
//! ```
//!
//! Drawing is left to a `Render` implementation, which receives a `Chart`.

mod chart;
mod cumulative;
mod error;
mod gap;
mod lap_times;
mod matrix;
mod position;
mod render;
mod series;
mod settings;

pub use chart::Chart;
pub use cumulative::CumulativeTimeMatrix;
pub use error::{Error, Result};
pub use gap::GapMatrix;
pub use lap_times::LapTimeMatrix;
pub use matrix::{Column, Matrix};
pub use position::PositionMatrix;
pub use render::{JsonRenderer, Render, SvgRenderer};
pub use series::{RowValues, Series, SeriesBuilder};
pub use settings::Settings;
