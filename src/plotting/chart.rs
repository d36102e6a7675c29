use chrono::{Datelike, NaiveDate};
use log::debug;
use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::error::Error;
use std::ops::Range;
use std::path::Path;

use super::{ChartStyle, ChartTheme};
use crate::analysis::FilteredView;
use crate::error::DashboardError;
use crate::types::FilterParams;

type PlotError = Box<dyn Error + Send + Sync>;

pub const X_AXIS_LABEL: &str = "Date";
pub const Y_AXIS_LABEL: &str = "Subscription Count";
pub const LEGEND_TITLE: &str = "Subscription Type";

// Legend box offset inside the plotting area, in pixels
const LEGEND_X: i32 = 12;
const LEGEND_Y: i32 = 32;

/// Fraction of the data span added on each side of both axes
const AXIS_MARGIN: f64 = 0.05;

/// One line of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedSeries {
    pub label: String,
    pub color: RGBColor,
    /// (day number, count)
    pub points: Vec<(f64, f64)>,
}

/// Everything needed to draw a chart, resolved from a filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPlan {
    pub series: Vec<PlottedSeries>,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
}

impl ChartPlan {
    /// Lay out the view. When the view is empty the x axis spans the selected
    /// months, or `fallback` when the selection is inverted.
    pub fn new(
        view: &FilteredView,
        params: &FilterParams,
        fallback: Option<(NaiveDate, NaiveDate)>,
        theme: &ChartTheme,
    ) -> Self {
        let series: Vec<PlottedSeries> = view
            .groups
            .iter()
            .enumerate()
            .map(|(i, group)| PlottedSeries {
                label: group.subscription_type.clone(),
                color: theme.series_color(i),
                points: group
                    .points
                    .iter()
                    .map(|(date, count)| (day_number(*date), *count as f64))
                    .collect(),
            })
            .collect();

        let all_points = || series.iter().flat_map(|s| s.points.iter());
        let x_bounds = min_max(all_points().map(|(x, _)| *x)).or_else(|| {
            let (start, end) = if params.is_inverted() {
                fallback?
            } else {
                (params.start_date(), params.end_date())
            };
            Some((day_number(start), day_number(end)))
        });
        let y_bounds = min_max(all_points().map(|(_, y)| *y));

        let x_range = x_bounds
            .map(|(lo, hi)| padded(lo, hi, 15.0))
            .unwrap_or(0.0..1.0);
        let y_range = y_bounds
            .map(|(lo, hi)| padded(lo, hi, (hi.abs() * AXIS_MARGIN).max(1.0)))
            .unwrap_or(0.0..1.0);

        Self {
            series,
            x_range,
            y_range,
        }
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }
}

/// A chart rendered to an RGB pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChart {
    pub width: u32,
    pub height: u32,
    /// Row-major RGB, three bytes per pixel
    pub pixels: Vec<u8>,
    pub series_count: usize,
}

impl RenderedChart {
    /// Encode the chart as PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> crate::error::Result<()> {
        let image = image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| DashboardError::Plot("pixel buffer has the wrong size".to_string()))?;
        image
            .save(path.as_ref())
            .map_err(|e| DashboardError::Plot(e.to_string()))
    }
}

/// Draw the plan into an in-memory bitmap.
pub fn render_chart(
    plan: &ChartPlan,
    theme: &ChartTheme,
    style: &ChartStyle,
) -> crate::error::Result<RenderedChart> {
    let (width, height) = (style.width, style.height);
    let mut pixels = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        draw_plan(plan, theme, style, &root).map_err(|e| DashboardError::Plot(e.to_string()))?;
        root.present()
            .map_err(|e| DashboardError::Plot(e.to_string()))?;
    }

    debug!(
        "Rendered {}x{} chart with {} series",
        width,
        height,
        plan.series_count()
    );
    Ok(RenderedChart {
        width,
        height,
        pixels,
        series_count: plan.series_count(),
    })
}

fn draw_plan(
    plan: &ChartPlan,
    theme: &ChartTheme,
    style: &ChartStyle,
    root_area: &DrawingArea<BitMapBackend, Shift>,
) -> Result<(), PlotError> {
    root_area.fill(&theme.figure_face)?;
    let (width, height) = root_area.dim_in_pixel();
    root_area.draw(&Rectangle::new(
        [(0, 0), (width as i32 - 1, height as i32 - 1)],
        theme.figure_edge.stroke_width(1),
    ))?;

    let mut chart = ChartBuilder::on(root_area)
        .margin(style.margin)
        .x_label_area_size(style.label_area_size)
        .y_label_area_size(style.label_area_size + 20)
        .build_cartesian_2d(plan.x_range.clone(), plan.y_range.clone())?;

    chart.plotting_area().fill(&theme.axes_face)?;

    let x_label_formatter = |x: &f64| date_label(*x);
    let y_label_formatter = |y: &f64| count_label(*y);
    let font = |color: &RGBColor| {
        FontDesc::new(FontFamily::SansSerif, style.font_size, FontStyle::Normal).color(color)
    };

    chart
        .configure_mesh()
        .disable_mesh()
        .axis_style(theme.axes_edge)
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .axis_desc_style(font(&theme.axes_label))
        .x_labels(style.x_labels)
        .y_labels(style.y_labels)
        .x_label_style(font(&theme.xtick))
        .y_label_style(font(&theme.ytick))
        .x_label_formatter(&x_label_formatter)
        .y_label_formatter(&y_label_formatter)
        .draw()?;

    draw_dashed_grid(&mut chart, plan, theme, style)?;

    for series in &plan.series {
        let color = series.color;
        chart
            .draw_series(LineSeries::new(
                series.points.iter().copied(),
                color.stroke_width(style.line_width),
            ))?
            .label(series.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    if !plan.series.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::Coordinate(LEGEND_X, LEGEND_Y))
            .background_style(theme.axes_face.mix(0.8))
            .border_style(theme.axes_edge)
            .label_font(font(&theme.text))
            .draw()?;
        chart.plotting_area().strip_coord_spec().draw(&Text::new(
            LEGEND_TITLE,
            (LEGEND_X + 4, LEGEND_Y - 20),
            font(&theme.axes_title),
        ))?;
    }

    Ok(())
}

fn draw_dashed_grid(
    chart: &mut ChartContext<BitMapBackend, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    plan: &ChartPlan,
    theme: &ChartTheme,
    style: &ChartStyle,
) -> Result<(), PlotError> {
    let grid_style = ShapeStyle::from(&theme.grid.mix(style.grid_alpha)).stroke_width(1);
    let x = plan.x_range.clone();
    let y = plan.y_range.clone();
    let x_ticks = RangedCoordf64::from(x.clone()).key_points(style.x_labels);
    let y_ticks = RangedCoordf64::from(y.clone()).key_points(style.y_labels);

    let x_dash = (x.end - x.start) / 120.0;
    let y_dash = (y.end - y.start) / 60.0;

    let mut segments: Vec<Vec<(f64, f64)>> = Vec::new();
    for tick in y_ticks {
        segments.extend(
            dashes(x.clone(), x_dash)
                .into_iter()
                .map(|(a, b)| vec![(a, tick), (b, tick)]),
        );
    }
    for tick in x_ticks {
        segments.extend(
            dashes(y.clone(), y_dash)
                .into_iter()
                .map(|(a, b)| vec![(tick, a), (tick, b)]),
        );
    }

    chart.draw_series(
        segments
            .into_iter()
            .map(|points| PathElement::new(points, grid_style)),
    )?;
    Ok(())
}

/// Split `span` into dashes of length `dash` separated by gaps of 60% of a dash.
pub(crate) fn dashes(span: Range<f64>, dash: f64) -> Vec<(f64, f64)> {
    if dash.is_nan() || dash <= 0.0 {
        return Vec::new();
    }
    let step = dash * 1.6;
    let mut out = Vec::new();
    let mut start = span.start;
    while start < span.end {
        out.push((start, (start + dash).min(span.end)));
        start += step;
    }
    out
}

/// Days since the common era; the chart's x coordinate.
pub fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

pub(crate) fn date_label(x: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(|d| d.format("%Y-%m").to_string())
        .unwrap_or_default()
}

pub(crate) fn count_label(y: f64) -> String {
    if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1_000.0 {
        format!("{:.1}K", y / 1_000.0)
    } else {
        format!("{:.0}", y)
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Pad `[lo, hi]` by the axis margin, or by `flat_pad` when the span is zero.
fn padded(lo: f64, hi: f64, flat_pad: f64) -> Range<f64> {
    let pad = if hi > lo {
        (hi - lo) * AXIS_MARGIN
    } else {
        flat_pad
    };
    (lo - pad)..(hi + pad)
}
