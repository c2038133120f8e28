//! Donut chart layout: values to annular SVG sectors.
//!
//! Angles are degrees clockwise from 12 o'clock. Segments partition
//! `[0, 360]` in input order; each start equals the previous end and the
//! last segment ends at exactly 360.

use super::{svg_num, Point};
use crate::shared::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};

/// Largest span drawn as a single arc. A full circle has identical arc
/// endpoints, which SVG renders as nothing.
const MAX_DRAWN_SPAN: f64 = 359.999;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutInput {
    pub name: String,
    pub value: f64,
    pub color: String,
}

impl DonutInput {
    pub fn new(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub name: String,
    pub value: f64,
    pub color: String,
    pub start_angle: f64,
    pub end_angle: f64,
    /// SVG path `d` attribute. Empty when the total is zero.
    pub path: String,
    /// Share of the total with one decimal, e.g. `"31.2"`.
    pub percentage: String,
}

impl DonutSegment {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Radii and center of a donut drawn in a square of the given side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutGeometry {
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub center: Point,
}

impl DonutGeometry {
    pub fn for_size(size: f64) -> Self {
        let outer_radius = (size / 1.5 - 40.0).max(0.0);
        Self {
            outer_radius,
            inner_radius: outer_radius * 0.6,
            center: Point::new(size / 2.0, size / 2.0),
        }
    }
}

pub fn polar_to_cartesian(center: Point, radius: f64, angle_deg: f64) -> Point {
    let radians = (angle_deg - 90.0).to_radians();
    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

/// Closed annular sector between `start` and `end` degrees.
pub fn arc_path(start: f64, end: f64, geometry: &DonutGeometry) -> String {
    let end = if end - start >= 360.0 {
        start + MAX_DRAWN_SPAN
    } else {
        end
    };
    let outer = geometry.outer_radius;
    let inner = geometry.inner_radius;

    let outer_end = polar_to_cartesian(geometry.center, outer, end);
    let outer_start = polar_to_cartesian(geometry.center, outer, start);
    let inner_end = polar_to_cartesian(geometry.center, inner, end);
    let inner_start = polar_to_cartesian(geometry.center, inner, start);

    let large_arc = if end - start > 180.0 { "1" } else { "0" };

    format!(
        "M {} {} A {} {} 0 {} 0 {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
        svg_num(outer_end.x),
        svg_num(outer_end.y),
        svg_num(outer),
        svg_num(outer),
        large_arc,
        svg_num(outer_start.x),
        svg_num(outer_start.y),
        svg_num(inner_start.x),
        svg_num(inner_start.y),
        svg_num(inner),
        svg_num(inner),
        large_arc,
        svg_num(inner_end.x),
        svg_num(inner_end.y),
    )
}

pub fn total(inputs: &[DonutInput]) -> f64 {
    inputs.iter().map(|i| i.value).sum()
}

fn has_usable_total(total: f64) -> bool {
    total.is_finite() && total > 0.0
}

/// Lay out all segments. A zero (or non-finite) total yields degenerate
/// segments with empty paths and `"0.0"` percentages.
pub fn layout(inputs: &[DonutInput], geometry: &DonutGeometry) -> Vec<DonutSegment> {
    let total = total(inputs);

    if !has_usable_total(total) {
        return inputs
            .iter()
            .map(|input| DonutSegment {
                name: input.name.clone(),
                value: input.value,
                color: input.color.clone(),
                start_angle: 0.0,
                end_angle: 0.0,
                path: String::new(),
                percentage: "0.0".to_string(),
            })
            .collect();
    }

    let last = inputs.len().saturating_sub(1);
    let mut current = 0.0;

    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            let start = current;
            let end = if index == last {
                360.0
            } else {
                start + 360.0 * input.value / total
            };
            current = end;

            DonutSegment {
                name: input.name.clone(),
                value: input.value,
                color: input.color.clone(),
                start_angle: start,
                end_angle: end,
                path: arc_path(start, end, geometry),
                percentage: format!("{:.1}", input.value * 100.0 / total),
            }
        })
        .collect()
}

/// Same as [`layout`] but reports an unusable total as an error.
pub fn try_layout(inputs: &[DonutInput], geometry: &DonutGeometry) -> Result<Vec<DonutSegment>> {
    if !has_usable_total(total(inputs)) {
        return Err(DashboardError::EmptyTotal);
    }
    Ok(layout(inputs, geometry))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(values: &[f64]) -> Vec<DonutInput> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| DonutInput::new(format!("s{}", i), *v, "#000"))
            .collect()
    }

    fn geometry() -> DonutGeometry {
        DonutGeometry::for_size(150.0)
    }

    #[test]
    fn test_spans_and_percentages() {
        let segments = layout(&inputs(&[10.0, 20.0, 30.0, 40.0]), &geometry());
        let spans: Vec<f64> = segments.iter().map(|s| s.span()).collect();
        assert_eq!(spans, vec![36.0, 72.0, 108.0, 144.0]);
        assert_eq!(spans.iter().sum::<f64>(), 360.0);

        let pct: Vec<&str> = segments.iter().map(|s| s.percentage.as_str()).collect();
        assert_eq!(pct, vec!["10.0", "20.0", "30.0", "40.0"]);
    }

    #[test]
    fn test_segments_are_contiguous() {
        let segments = layout(&inputs(&[450.0, 385.0, 321.0, 283.0]), &geometry());
        assert_eq!(segments[0].start_angle, 0.0);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        assert_eq!(segments[3].end_angle, 360.0);
    }

    #[test]
    fn test_zero_total_has_no_nan() {
        let segments = layout(&inputs(&[0.0, 0.0]), &geometry());
        assert_eq!(segments.len(), 2);
        for s in &segments {
            assert_eq!(s.start_angle, 0.0);
            assert_eq!(s.end_angle, 0.0);
            assert!(s.path.is_empty());
            assert_eq!(s.percentage, "0.0");
        }
        assert!(layout(&[], &geometry()).is_empty());
        assert_eq!(try_layout(&inputs(&[0.0]), &geometry()), Err(DashboardError::EmptyTotal));
        assert!(try_layout(&inputs(&[1.0]), &geometry()).is_ok());
    }

    #[test]
    fn test_quarter_arc_path() {
        let path = arc_path(0.0, 90.0, &geometry());
        assert_eq!(path, "M 135 75 A 60 60 0 0 0 75 15 L 75 39 A 36 36 0 0 1 111 75 Z");
    }

    #[test]
    fn test_large_arc_flag() {
        let segments = layout(&inputs(&[30.0, 70.0]), &geometry());
        assert!(segments[0].path.contains("A 60 60 0 0 0"));
        assert!(segments[1].path.contains("A 60 60 0 1 0"));
    }

    #[test]
    fn test_single_segment_full_circle() {
        let segments = layout(&inputs(&[5.0]), &geometry());
        assert_eq!(segments[0].span(), 360.0);
        assert_eq!(segments[0].percentage, "100.0");
        assert!(segments[0].path.contains(" 0 1 0 "));
        // endpoints must differ or the arc disappears
        let parts: Vec<&str> = segments[0].path.split(' ').collect();
        assert_ne!((parts[1], parts[2]), (parts[9], parts[10]));
    }

    #[test]
    fn test_geometry_for_size() {
        let g = DonutGeometry::for_size(150.0);
        assert_eq!(g.outer_radius, 60.0);
        assert_eq!(g.center, Point::new(75.0, 75.0));
        assert_eq!(DonutGeometry::for_size(30.0).outer_radius, 0.0);
    }
}
