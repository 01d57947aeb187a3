//! Two-panel chart rendering (linear + log-log) to a PNG file.
//!
//! The renderer is intentionally data-driven: scatter series and fit curves
//! are computed up front, then drawn identically on both panels. This keeps
//! the panel functions focused on axes/styling and makes the data prep
//! testable without a drawing backend.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use plotters::chart::{ChartContext, SeriesAnno, SeriesLabelPosition};
use plotters::coord::{CoordTranslate, Shift};
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::{DashedLineSeries, LineSeries};

use crate::domain::Document;
use crate::error::AppError;
use crate::fit::FitSpec;
use crate::plot::marker::{is_hollow, marker_element, parse_marker, scatter_color, MarkerShape};
use crate::plot::style::{parse_shortcode, strip_math_markup, LinePattern, LineStyle, PlotStyle};

/// Number of evenly spaced abscissae a fit curve is evaluated on.
const FIT_SAMPLES: usize = 101;

/// Linear-panel bounds: both axes over [0, 1].
const LIN_X_RANGE: (f64, f64) = (0.0, 1.0);
const LIN_Y_RANGE: (f64, f64) = (0.0, 1.0);

/// Log-panel bounds: x in [0.01, 1], y in [0.01, 0.8].
const LOG_X_RANGE: (f64, f64) = (0.01, 1.0);
const LOG_Y_RANGE: (f64, f64) = (0.01, 0.8);

/// The backend draws series even outside the plotting area, so out-of-range
/// points must be dropped up front to get axes-limit clipping.
fn in_bounds(x_range: (f64, f64), y_range: (f64, f64)) -> impl Fn(&(f64, f64)) -> bool {
    move |&(x, y)| x >= x_range.0 && x <= x_range.1 && y >= y_range.0 && y <= y_range.1
}

/// Renderer configuration.
///
/// This replaces the original tool's ad hoc keyword options with an explicit
/// structure: figure size in pixels, output path, the named fit overlays, and
/// the per-call text styling.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub figure_size: (u32, u32),
    pub output_path: PathBuf,
    pub fits: BTreeMap<String, FitSpec>,
    pub style: PlotStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            figure_size: (1200, 600),
            output_path: PathBuf::from("gilliland.png"),
            fits: BTreeMap::new(),
            style: PlotStyle::default(),
        }
    }
}

/// A scatter series prepared for drawing: one experiment's samples.
#[derive(Debug, Clone)]
struct ScatterSeries {
    label: String,
    points: Vec<(f64, f64)>,
    shape: MarkerShape,
    hollow: bool,
}

/// A fit curve prepared for drawing.
#[derive(Debug, Clone)]
struct FitCurve {
    label: String,
    points: Vec<(f64, f64)>,
    line: LineStyle,
}

/// Render the two-panel figure and write it to `config.output_path`.
pub fn render_chart(document: &Document, config: &ChartConfig) -> Result<(), AppError> {
    let scatter = scatter_series(document);
    let fits = fit_curves(&config.fits);
    let x_label = strip_math_markup(&document.x);
    let y_label = strip_math_markup(&document.y);

    // The scatter markers are erased to `DynElement`, whose trait-object
    // backing (`Box<dyn DynDrawable<DB> + 'static>`) forces the drawing
    // backend to be `'static` once it flows through `draw_series`. A
    // `BitMapBackend` borrows its output path, so promote that path to a
    // `'static` reference for the lifetime of this one-shot render.
    let out_path: &'static Path = Box::leak(config.output_path.clone().into_boxed_path());
    let root = BitMapBackend::new(out_path, config.figure_size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| AppError::render(format!("Failed to clear figure: {e}")))?;

    let panels = root.split_evenly((1, 2));
    draw_linear_panel(&panels[0], &scatter, &fits, &x_label, &y_label, &config.style)
        .map_err(|e| AppError::render(format!("Failed to render linear panel: {e}")))?;
    draw_log_panel(&panels[1], &scatter, &fits, &x_label, &y_label, &config.style)
        .map_err(|e| AppError::render(format!("Failed to render log panel: {e}")))?;

    root.present().map_err(|e| {
        AppError::render(format!(
            "Failed to write image '{}': {e}",
            config.output_path.display()
        ))
    })?;
    Ok(())
}

/// Flatten the document into per-experiment scatter series.
fn scatter_series(document: &Document) -> Vec<ScatterSeries> {
    let mut out = Vec::new();
    for (dataset_name, dataset) in &document.datasets {
        let n_experiments = dataset.experiments.len();
        for (experiment_name, experiment) in &dataset.experiments {
            out.push(ScatterSeries {
                label: Document::series_label(dataset_name, experiment_name, n_experiments),
                points: experiment.data.points().collect(),
                shape: parse_marker(&experiment.matplotlib.marker),
                hollow: is_hollow(experiment.matplotlib.fillstyle.as_deref()),
            });
        }
    }
    out
}

/// Evaluate each fit on `FIT_SAMPLES` evenly spaced abscissae across [0, 1].
fn fit_curves(fits: &BTreeMap<String, FitSpec>) -> Vec<FitCurve> {
    fits.values()
        .map(|spec| FitCurve {
            label: spec.label.clone(),
            points: (0..FIT_SAMPLES)
                .map(|i| {
                    let x = i as f64 / (FIT_SAMPLES - 1) as f64;
                    (x, spec.kind.eval(x))
                })
                .collect(),
            line: parse_shortcode(&spec.shortcode),
        })
        .collect()
}

/// Linear panel: both axes over [0, 1] with 11 ticks, legend attached here.
fn draw_linear_panel<DB: DrawingBackend + 'static>(
    area: &DrawingArea<DB, Shift>,
    scatter: &[ScatterSeries],
    fits: &[FitCurve],
    x_label: &str,
    y_label: &str,
    style: &PlotStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 55)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)?;

    chart
        .configure_mesh()
        .x_labels(11)
        .y_labels(11)
        .x_label_formatter(&|v| format!("{v:.1}"))
        .y_label_formatter(&|v| format!("{v:.1}"))
        .x_desc(x_label)
        .y_desc(y_label)
        .label_style(("sans-serif", style.tick_size))
        .axis_desc_style(("sans-serif", style.label_size))
        .light_line_style(&BLACK.mix(0.08))
        .bold_line_style(&BLACK.mix(0.2))
        .draw()?;

    for series in scatter {
        let hollow = series.hollow;
        let glyph_style: ShapeStyle = if hollow {
            scatter_color().stroke_width(1)
        } else {
            scatter_color().filled()
        };
        chart
            .draw_series(
                series
                    .points
                    .iter()
                    .copied()
                    .filter(in_bounds(LIN_X_RANGE, LIN_Y_RANGE))
                    .map(|p| marker_element::<DB>(series.shape, p, hollow)),
            )?
            .label(&series.label)
            .legend(move |(x, y)| Circle::new((x + 10, y), 4, glyph_style));
    }

    for curve in fits {
        let line_color = curve.line.color.mix(0.5);
        let points: Vec<(f64, f64)> = curve
            .points
            .iter()
            .copied()
            .filter(in_bounds(LIN_X_RANGE, LIN_Y_RANGE))
            .collect();
        draw_fit_line(&mut chart, curve, points)?
            .label(&curve.label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], line_color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.7))
        .border_style(&BLACK.mix(0.3))
        .label_font(("sans-serif", style.legend_size))
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    Ok(())
}

/// Log-log panel: x in [0.01, 1], y in [0.01, 0.8], no legend.
fn draw_log_panel<DB: DrawingBackend + 'static>(
    area: &DrawingArea<DB, Shift>,
    scatter: &[ScatterSeries],
    fits: &[FitCurve],
    x_label: &str,
    y_label: &str,
    style: &PlotStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 55)
        .build_cartesian_2d(
            (LOG_X_RANGE.0..LOG_X_RANGE.1).log_scale(),
            (LOG_Y_RANGE.0..LOG_Y_RANGE.1).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_label_formatter(&|v| format_log_tick(*v))
        .y_label_formatter(&|v| format_log_tick(*v))
        .x_desc(x_label)
        .y_desc(y_label)
        .label_style(("sans-serif", style.tick_size))
        .axis_desc_style(("sans-serif", style.label_size))
        .light_line_style(&BLACK.mix(0.08))
        .bold_line_style(&BLACK.mix(0.2))
        .draw()?;

    for series in scatter {
        let hollow = series.hollow;
        chart.draw_series(
            series
                .points
                .iter()
                .copied()
                .filter(in_bounds(LOG_X_RANGE, LOG_Y_RANGE))
                .map(|p| marker_element::<DB>(series.shape, p, hollow)),
        )?;
    }

    for curve in fits {
        let points: Vec<(f64, f64)> = curve
            .points
            .iter()
            .copied()
            .filter(in_bounds(LOG_X_RANGE, LOG_Y_RANGE))
            .collect();
        draw_fit_line(&mut chart, curve, points)?;
    }

    Ok(())
}

/// Draw one fit curve with its shortcode dash pattern.
fn draw_fit_line<'a, 'b, DB, CT>(
    chart: &'b mut ChartContext<'a, DB, CT>,
    curve: &FitCurve,
    points: Vec<(f64, f64)>,
) -> Result<&'b mut SeriesAnno<'a, DB>, DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend + 'a,
    CT: CoordTranslate<From = (f64, f64)>,
{
    let style = curve.line.color.mix(0.5).stroke_width(2);
    match curve.line.pattern {
        LinePattern::Solid => chart.draw_series(LineSeries::new(points, style)),
        LinePattern::Dashed => chart.draw_series(DashedLineSeries::new(points, 10, 8, style)),
        LinePattern::Dotted => chart.draw_series(DashedLineSeries::new(points, 2, 5, style)),
        LinePattern::DashDot => chart.draw_series(DashedLineSeries::new(points, 6, 5, style)),
    }
}

fn format_log_tick(v: f64) -> String {
    if v >= 1.0 {
        format!("{v:.0}")
    } else if v >= 0.1 {
        format!("{v:.1}")
    } else {
        format!("{v:.2}")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::{Dataset, Experiment, MarkerHints, Samples};
    use crate::fit::{default_fits, FitKind};

    fn one_point_document() -> Document {
        let experiment = Experiment {
            data: Samples {
                x: vec![0.5],
                y: vec![0.3],
            },
            matplotlib: MarkerHints {
                marker: "o".to_string(),
                fillstyle: None,
            },
        };
        Document {
            x: "R".to_string(),
            y: "N".to_string(),
            datasets: BTreeMap::from([(
                "A".to_string(),
                Dataset {
                    experiments: BTreeMap::from([("1".to_string(), experiment)]),
                },
            )]),
        }
    }

    #[test]
    fn fit_curves_span_unit_interval() {
        let curves = fit_curves(&default_fits());
        assert_eq!(curves.len(), 3);
        for curve in &curves {
            assert_eq!(curve.points.len(), FIT_SAMPLES);
            assert_eq!(curve.points[0].0, 0.0);
            assert_eq!(curve.points[FIT_SAMPLES - 1].0, 1.0);
        }
    }

    #[test]
    fn scatter_series_labels_follow_disambiguation_rule() {
        let mut document = one_point_document();
        let series = scatter_series(&document);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label, "A");

        let extra = document.datasets["A"].experiments["1"].clone();
        document
            .datasets
            .get_mut("A")
            .unwrap()
            .experiments
            .insert("2".to_string(), extra);
        let series = scatter_series(&document);
        let labels: Vec<&str> = series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["A-1", "A-2"]);
    }

    #[test]
    fn renders_minimal_document_to_png() {
        let document = one_point_document();
        let config = ChartConfig {
            output_path: std::env::temp_dir().join("gilliland_render_test.png"),
            fits: crate::fit::fit_map(&[FitKind::Liddle, FitKind::DavisRational]),
            ..ChartConfig::default()
        };

        render_chart(&document, &config).unwrap();

        let meta = std::fs::metadata(&config.output_path).unwrap();
        assert!(meta.len() > 0, "image file should not be empty");
        std::fs::remove_file(&config.output_path).ok();
    }
}
