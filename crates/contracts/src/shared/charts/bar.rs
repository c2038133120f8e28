//! "Projections vs Actuals" column chart.
//!
//! Each category gets an actual column and a projection column at the same
//! x. Columns are not grouped side by side: the projection is drawn first,
//! behind the actual value.

use super::axis::{axis_ticks, AxisTick, PlotArea, Rect};
use super::TimeSeriesPoint;
use crate::shared::format::millions_label;
use crate::shared::synthetic::{projection, SyntheticRng};

/// Share of a category slot the columns occupy.
const COLUMN_FILL: f64 = 0.64;
const TICK_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub label: String,
    pub label_x: f64,
    pub actual: f64,
    pub projection: f64,
    pub actual_rect: Rect,
    pub projection_rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartLayout {
    pub area: PlotArea,
    pub groups: Vec<BarGroup>,
    pub ticks: Vec<AxisTick>,
}

fn column(area: &PlotArea, index: usize, count: usize, value: f64, axis_max: f64) -> Rect {
    let slot = area.width / count as f64;
    let width = slot * COLUMN_FILL;
    let top = area.y_for(value, axis_max);
    Rect {
        x: area.slot_center(index, count) - width / 2.0,
        y: top,
        width,
        height: area.bottom() - top,
    }
}

/// Lay out the chart. Projections are drawn from `rng`, one per point in
/// order, so a fixed seed gives a stable chart across renders.
pub fn layout(points: &[TimeSeriesPoint], rng: &mut SyntheticRng, area: PlotArea) -> BarChartLayout {
    let projections: Vec<f64> = points.iter().map(|p| projection(p.value, rng)).collect();

    let max = points
        .iter()
        .map(|p| p.value)
        .chain(projections.iter().copied())
        .fold(0.0_f64, f64::max);
    let ticks = axis_ticks(max, TICK_COUNT, &area, millions_label);
    let axis_max = ticks.last().map(|t| t.value).unwrap_or(0.0);

    let count = points.len();
    let groups = points
        .iter()
        .zip(projections)
        .enumerate()
        .map(|(index, (point, projected))| BarGroup {
            label: point.label.clone(),
            label_x: area.slot_center(index, count),
            actual: point.value,
            projection: projected,
            actual_rect: column(&area, index, count, point.value, axis_max),
            projection_rect: column(&area, index, count, projected, axis_max),
        })
        .collect();

    BarChartLayout { area, groups, ticks }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months() -> Vec<TimeSeriesPoint> {
        vec![
            TimeSeriesPoint::new("Jan", 15_000_000.0),
            TimeSeriesPoint::new("Feb", 18_000_000.0),
            TimeSeriesPoint::new("Mar", 22_000_000.0),
        ]
    }

    fn area() -> PlotArea {
        PlotArea::new(40.0, 10.0, 300.0, 180.0)
    }

    #[test]
    fn test_projection_at_least_actual() {
        let chart = layout(&months(), &mut SyntheticRng::from_seed(1), area());
        assert_eq!(chart.groups.len(), 3);
        for group in &chart.groups {
            assert!(group.projection >= group.actual * 1.1 - 0.5);
            assert!(group.projection_rect.height >= group.actual_rect.height);
            assert_eq!(group.projection_rect.x, group.actual_rect.x);
        }
    }

    #[test]
    fn test_columns_stay_in_area() {
        let chart = layout(&months(), &mut SyntheticRng::from_seed(2), area());
        for group in &chart.groups {
            for rect in [&group.actual_rect, &group.projection_rect] {
                assert!(rect.y >= 10.0);
                assert!((rect.y + rect.height - 190.0).abs() < 1e-9);
                assert!(rect.x >= 40.0 && rect.x + rect.width <= 340.0);
            }
        }
        assert_eq!(chart.ticks[0].label, "0.0M");
    }

    #[test]
    fn test_same_seed_same_chart() {
        let a = layout(&months(), &mut SyntheticRng::from_seed(9), area());
        let b = layout(&months(), &mut SyntheticRng::from_seed(9), area());
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_series() {
        let chart = layout(&[], &mut SyntheticRng::from_seed(1), area());
        assert!(chart.groups.is_empty());
        assert_eq!(chart.ticks.len(), 1);
    }
}
