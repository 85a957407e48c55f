// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use std::result;
use thiserror::Error;


/// lapviz's result type `Result` carries the validation errors of the
/// transformation layer.
pub type Result<T> = result::Result<T, Error>;


/// Errors raised when a lap time grid is handed to lapviz.
///
/// All of them are detected at construction time of the respective matrix,
/// i.e. before any derived value is computed. There is no such thing as a
/// partially computed result.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
  /// The grid is empty (no competitors or no laps) or its rows don't all
  /// have the same length.
  #[error("invalid shape: {0}")]
  InvalidShape(String),

  /// A value at `(row, col)` is not a valid duration.
  #[error("invalid value {value} at row {row}, lap {col}: {reason}")]
  InvalidValue {
    row:    usize,
    col:    usize,
    value:  f64,
    reason: &'static str,
  },
}

impl Error {
  pub fn shape(msg: impl Into<String>) -> Self {
    Self::InvalidShape(msg.into())
  }

  pub fn value(row: usize, col: usize, value: f64, reason: &'static str)
               -> Self {
    Self::InvalidValue { row,
                         col,
                         value,
                         reason }
  }
}


/// The `ensure!` macro provides an easy way to make sure a condition is true,
/// and if not, return the given `Error`. Use it as follows:
///
/// ```ignore
/// fn my_function(rows: &[Vec<f64>]) -> Result<()> {
///   ensure!(!rows.is_empty(), Error::shape("no competitors"));
///   Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
  ($cond:expr, $err:expr) => {
    if !($cond) {
      return Err($err.into());
    }
  };
}
