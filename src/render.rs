// Copyright 2021 bmc::labs Gmbh. All rights reserved.
//
// Authors:
//   Florian Eich <florian@bmc-labs.com>
//   Jonas Reitemeyer <alumni@bmc-labs.com>

use crate::Chart;
use eyre::{Result, WrapErr};
use getset::{CopyGetters, Getters};
use plotters::prelude::*;
use std::{io::Write,
          path::{Path, PathBuf}};
use tracing::info;


/// Something that draws or exports a `Chart`. Called at most once per chart.
pub trait Render {
  fn render(&mut self, chart: &Chart) -> Result<()>;
}


/// Draws a chart as SVG file, one line per series plus a legend.
#[derive(Clone, Debug, PartialEq, CopyGetters, Getters)]
pub struct SvgRenderer {
  #[getset(get = "pub")]
  path:   PathBuf,
  #[getset(get_copy = "pub")]
  width:  u32,
  #[getset(get_copy = "pub")]
  height: u32,
}

impl SvgRenderer {
  pub fn new(path: &Path, width: u32, height: u32) -> Self {
    Self { path: path.to_owned(),
           width,
           height }
  }
}

impl Render for SvgRenderer {
  fn render(&mut self, chart: &Chart) -> Result<()> {
    let (x_range, y_range) = axis_ranges(chart);

    let root = SVGBackend::new(&self.path, (self.width, self.height))
      .into_drawing_area();
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(25)
           .set_label_area_size(LabelAreaPosition::Left, 60)
           .set_label_area_size(LabelAreaPosition::Bottom, 40);
    if let Some(title) = chart.title() {
      builder.caption(title, ("sans-serif", 24));
    }
    let mut ctx = builder.build_cartesian_2d(x_range, y_range)?;

    ctx.configure_mesh()
       .x_desc(chart.x_title())
       .y_desc(chart.y_title())
       .x_label_formatter(&|lap| format!("{:.0}", lap))
       .draw()?;

    for (idx, series) in chart.series().iter().enumerate() {
      let color = Palette99::pick(idx).to_rgba();
      ctx.draw_series(LineSeries::new(series.points()
                                            .iter()
                                            .map(|&(lap, y)| (lap as f64, y)),
                                      color))?
         .label(series.label().as_str())
         .legend(move |(x, y)| {
           PathElement::new(vec![(x, y), (x + 20, y)], color)
         });
    }

    ctx.configure_series_labels()
       .background_style(&WHITE.mix(0.8))
       .border_style(&BLACK)
       .position(SeriesLabelPosition::UpperRight)
       .draw()?;

    root.present()
        .wrap_err_with(|| format!("failed to write {}", self.path.display()))?;
    info!(path = %self.path.display(),
          series = chart.series().len(),
          "rendered chart");
    Ok(())
  }
}


/// Writes a chart as pretty-printed JSON, for plotting front-ends living
/// outside of this crate.
#[derive(Debug)]
pub struct JsonRenderer<W: Write> {
  writer: W,
}

impl<W: Write> JsonRenderer<W> {
  pub fn new(writer: W) -> Self {
    Self { writer }
  }

  pub fn into_inner(self) -> W {
    self.writer
  }
}

impl<W: Write> Render for JsonRenderer<W> {
  fn render(&mut self, chart: &Chart) -> Result<()> {
    serde_json::to_writer_pretty(&mut self.writer, chart)
      .wrap_err("failed to serialize chart")?;
    writeln!(self.writer)?;
    self.writer.flush()?;
    Ok(())
  }
}


/// Plot ranges for both axes. Degenerate ranges (a single lap, all values
/// equal) are widened to one unit, the value axis gets 5% headroom.
fn axis_ranges(chart: &Chart)
               -> (std::ops::Range<f64>, std::ops::Range<f64>) {
  let x_max = chart.max_lap().max(1) as f64;

  let (lo, hi) = chart.value_range().unwrap_or((0.0, 1.0));
  let hi = if hi - lo < f64::EPSILON { lo + 1.0 } else { hi };
  let headroom = (hi - lo) * 0.05;

  (0.0..x_max, lo..hi + headroom)
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::{LapTimeMatrix, SeriesBuilder};
  use pretty_assertions::assert_eq;
  use std::{env, fs};


  fn lap_times() -> LapTimeMatrix {
    LapTimeMatrix::new(vec![vec![10.0, 10.0, 10.0], vec![12.0, 9.0, 9.0]])
      .unwrap()
  }

  #[test]
  fn json_renderer_test() {
    let chart =
      Chart::gap_to_leader(&lap_times(), &SeriesBuilder::default()).unwrap();

    let mut renderer = JsonRenderer::new(Vec::new());
    renderer.render(&chart).unwrap();
    let json = String::from_utf8(renderer.into_inner()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!("Race simulation results", value["title"]);
    assert_eq!("Lap", value["x_title"]);
    assert_eq!("Driver 1", value["series"][1]["label"]);
    assert_eq!(2.0, value["series"][1]["points"][0][1]);
    assert!(json.ends_with('\n'));
  }

  #[test]
  fn svg_renderer_test() {
    let chart =
      Chart::positions(&lap_times(), &SeriesBuilder::default()).unwrap();
    let path = env::temp_dir().join("lapviz_svg_renderer_test.svg");

    let mut renderer = SvgRenderer::new(&path, 640, 480);
    assert_eq!(640, renderer.width());
    assert_eq!(480, renderer.height());
    renderer.render(&chart).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Driver position"));
    assert!(svg.contains("Driver 1"));

    fs::remove_file(&path).unwrap();
  }

  #[test]
  fn axis_ranges_test() {
    let chart =
      Chart::gap_to_leader(&lap_times(), &SeriesBuilder::default()).unwrap();
    let (x, y) = axis_ranges(&chart);
    assert_eq!(0.0..2.0, x);
    assert_eq!(0.0, y.start);
    assert!((y.end - 2.1).abs() < 1e-9);

    // one competitor, one lap: everything collapses onto a single point
    let single = LapTimeMatrix::new(vec![vec![80.0]]).unwrap();
    let chart =
      Chart::gap_to_leader(&single, &SeriesBuilder::default()).unwrap();
    let (x, y) = axis_ranges(&chart);
    assert_eq!(0.0..1.0, x);
    assert_eq!(0.0, y.start);
    assert!((y.end - 1.05).abs() < 1e-9);
  }
}
