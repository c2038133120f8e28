//! "Revenue" line chart: current series plus an optional simulated previous
//! period.

use super::axis::{axis_ticks, AxisTick, PlotArea};
use super::{svg_num, Point, TimeSeriesPoint};
use crate::shared::format::thousands_money_label;
use crate::shared::synthetic::{previous_period, SyntheticRng};

const TICK_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: &'static str,
    pub values: Vec<f64>,
    pub points: Vec<Point>,
}

impl LineSeries {
    /// `points` attribute of an SVG `<polyline>`.
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", svg_num(p.x), svg_num(p.y)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChartLayout {
    pub area: PlotArea,
    pub labels: Vec<(String, f64)>,
    pub current: LineSeries,
    pub previous: Option<LineSeries>,
    pub ticks: Vec<AxisTick>,
}

fn place(values: &[f64], area: &PlotArea, axis_max: f64) -> Vec<Point> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Point::new(area.slot_center(i, values.len()), area.y_for(*v, axis_max)))
        .collect()
}

/// Lay out the chart. With `previous` set, a "Previous Week" series is
/// simulated from the current values using that generator.
pub fn layout(points: &[TimeSeriesPoint], previous: Option<&mut SyntheticRng>, area: PlotArea) -> LineChartLayout {
    let current: Vec<f64> = points.iter().map(|p| p.value).collect();
    let previous: Option<Vec<f64>> =
        previous.map(|rng| current.iter().map(|v| previous_period(*v, rng)).collect());

    let max = current
        .iter()
        .chain(previous.iter().flatten())
        .copied()
        .fold(0.0_f64, f64::max);
    let ticks = axis_ticks(max, TICK_COUNT, &area, thousands_money_label);
    let axis_max = ticks.last().map(|t| t.value).unwrap_or(0.0);

    let labels = points
        .iter()
        .enumerate()
        .map(|(i, p)| (p.label.clone(), area.slot_center(i, points.len())))
        .collect();

    LineChartLayout {
        area,
        labels,
        current: LineSeries {
            name: "Current Week",
            points: place(&current, &area, axis_max),
            values: current,
        },
        previous: previous.map(|values| LineSeries {
            name: "Previous Week",
            points: place(&values, &area, axis_max),
            values,
        }),
        ticks,
    }
}
