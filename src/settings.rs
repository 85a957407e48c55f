// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use crate::SeriesBuilder;
use config::{Config, Environment, File};
use eyre::{Result, WrapErr};
use getset::{CopyGetters, Getters};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;


/// Presentation settings. Values are layered: built-in defaults, then an
/// optional settings file, then `LAPVIZ_*` environment variables.
#[derive(Clone, Debug, PartialEq, Deserialize, CopyGetters, Getters)]
pub struct Settings {
  #[getset(get = "pub")]
  label_prefix: String,
  #[getset(get_copy = "pub")]
  width:        u32,
  #[getset(get_copy = "pub")]
  height:       u32,
}

impl Default for Settings {
  fn default() -> Self {
    Self { label_prefix: "Driver".to_string(),
           width:        1280,
           height:       720, }
  }
}

impl Settings {
  /// Loads settings, reading `path` (YAML, TOML or JSON, picked by
  /// extension) if given.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    let defaults = Self::default();
    let mut builder =
      Config::builder().set_default("label_prefix",
                                    defaults.label_prefix.as_str())?
                       .set_default("width", defaults.width as i64)?
                       .set_default("height", defaults.height as i64)?;

    if let Some(path) = path {
      builder = builder.add_source(File::from(path));
    }

    let settings: Self =
      builder.add_source(Environment::with_prefix("LAPVIZ"))
             .build()
             .and_then(|config| config.try_deserialize())
             .wrap_err("failed to load settings")?;

    debug!(?settings, "loaded settings");
    Ok(settings)
  }

  pub fn series_builder(&self) -> SeriesBuilder {
    SeriesBuilder::with_prefix(&self.label_prefix)
  }
}
