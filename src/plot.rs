//! Plotters helpers for [MeanBand] summaries, behind the `plot` feature.
//!
//! These draw into a caller-built `ChartContext` over an f64 cartesian
//! coordinate system and leave figure setup (backend, mesh, labels) to the
//! caller. NaN points are converted as-is and simply fall outside the
//! plotting range.

use crate::band::{DegreeAxis, MeanBand};
use crate::float_trait::Float;

use num_traits::NumCast;
use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::element::{ErrorBar, Polygon};
use plotters::prelude::{Color, DrawingBackend, LineSeries, RGBColor};

type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

fn to_f64<T: Float>(v: T) -> f64 {
    <f64 as NumCast>::from(v).unwrap_or(f64::NAN)
}

fn points<T: Float>(x: &[T], y: &[T]) -> Vec<(f64, f64)> {
    x.iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (to_f64(xi), to_f64(yi)))
        .collect()
}

/// X range of a chart built over a degree axis, for `build_cartesian_2d`.
pub fn degree_range<T: Float>(axis: &DegreeAxis<T>) -> std::ops::Range<f64> {
    let (lo, hi) = axis.limits();
    to_f64(lo)..to_f64(hi)
}

/// Filled band between the lower and upper curves plus the mean line.
pub fn draw_mean_band<DB, T>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    band: &MeanBand<T>,
    color: RGBColor,
) -> DrawResult<DB>
where
    DB: DrawingBackend,
    T: Float,
{
    let x: Vec<T> = band.x().to_vec();
    let mut vertices = points(&x, &band.upper_curve().to_vec());
    let mut lower = points(&x, &band.lower_curve().to_vec());
    lower.reverse();
    vertices.extend(lower);
    chart.draw_series(std::iter::once(Polygon::new(
        vertices,
        color.mix(0.2).filled(),
    )))?;
    chart.draw_series(LineSeries::new(
        points(&x, &band.mean().to_vec()),
        color.stroke_width(2),
    ))?;
    Ok(())
}

/// Lower and upper band edges as thin lines, without the fill.
pub fn draw_band_outline<DB, T>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    band: &MeanBand<T>,
    color: RGBColor,
) -> DrawResult<DB>
where
    DB: DrawingBackend,
    T: Float,
{
    let x: Vec<T> = band.x().to_vec();
    for curve in [band.lower_curve(), band.upper_curve()] {
        chart.draw_series(LineSeries::new(
            points(&x, &curve.to_vec()),
            color.mix(0.6).stroke_width(1),
        ))?;
    }
    Ok(())
}

/// One vertical error bar per x position, from the lower to the upper edge
/// through the mean.
pub fn draw_error_bars<DB, T>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    band: &MeanBand<T>,
    color: RGBColor,
) -> DrawResult<DB>
where
    DB: DrawingBackend,
    T: Float,
{
    let lower = band.lower_curve();
    let upper = band.upper_curve();
    chart.draw_series(band.x().iter().enumerate().map(|(i, &xi)| {
        ErrorBar::new_vertical(
            to_f64(xi),
            to_f64(lower[i]),
            to_f64(band.mean()[i]),
            to_f64(upper[i]),
            color.filled(),
            6,
        )
    }))?;
    Ok(())
}
