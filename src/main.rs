// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use clap::{Parser, ValueEnum};
use eyre::{Result, WrapErr};
use lapviz::{Chart, JsonRenderer, LapTimeMatrix, Render, Settings, SvgRenderer};
use std::{fs, fs::File, io, path::PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;


#[derive(Parser, Debug)]
#[command(author, version, about = "Gap-to-leader and position charts from \
                                    simulated lap times")]
struct Cli {
  /// Which view to derive from the lap times
  #[arg(value_enum)]
  view: View,

  /// JSON file holding the lap times, one array of seconds per competitor
  input: PathBuf,

  /// Draw the chart into this SVG file
  #[arg(long)]
  svg: Option<PathBuf>,

  /// Write the chart as JSON into this file (`-` for stdout)
  #[arg(long)]
  json: Option<PathBuf>,

  /// Settings file (YAML, TOML or JSON)
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Log debug output
  #[arg(short, long)]
  verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum View {
  /// Gap to the per-lap leader in seconds
  Gap,
  /// Running position
  Position,
}


fn main() -> Result<()> {
  color_eyre::install()?;
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(default_level));
  let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                   .with_writer(io::stderr)
                                   .try_init();

  let settings = Settings::load(cli.config.as_deref())?;

  let raw = fs::read_to_string(&cli.input)
    .wrap_err_with(|| format!("failed to read {}", cli.input.display()))?;
  let lap_times: LapTimeMatrix =
    serde_json::from_str(&raw).wrap_err_with(|| {
                                 format!("invalid lap times in {}",
                                         cli.input.display())
                               })?;
  info!(competitors = lap_times.competitors(),
        laps = lap_times.laps(),
        "loaded lap times");

  let builder = settings.series_builder();
  let chart = match cli.view {
    View::Gap => Chart::gap_to_leader(&lap_times, &builder)?,
    View::Position => Chart::positions(&lap_times, &builder)?,
  };

  if let Some(path) = &cli.svg {
    SvgRenderer::new(path, settings.width(), settings.height()).render(&chart)?;
  }

  match &cli.json {
    Some(path) if path.as_os_str() != "-" => {
      let file = File::create(path)
        .wrap_err_with(|| format!("failed to create {}", path.display()))?;
      JsonRenderer::new(file).render(&chart)?;
    }
    Some(_) => JsonRenderer::new(io::stdout()).render(&chart)?,
    None if cli.svg.is_none() => {
      JsonRenderer::new(io::stdout()).render(&chart)?
    }
    None => (),
  }

  Ok(())
}
