//! Pure SVG geometry for the dashboard charts.
//!
//! Every builder returns plain coordinates and path strings; the frontend
//! only binds them into `<svg>` elements.

pub mod axis;
pub mod bar;
pub mod donut;
pub mod line;
pub mod scatter_map;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One category of a time series ("Jan" -> 15_000_000).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub label: String,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Number as written into SVG attributes: at most three decimals, no
/// trailing zeros, never `-0`.
pub fn svg_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 || !rounded.is_finite() {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_num() {
        assert_eq!(svg_num(50.0), "50");
        assert_eq!(svg_num(12.34567), "12.346");
        assert_eq!(svg_num(-0.0001), "0");
        assert_eq!(svg_num(f64::NAN), "0");
    }
}
