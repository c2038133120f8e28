//! Value axis ticks and the plot rectangle shared by the cartesian charts.

use super::svg_num;

/// Inner drawing rectangle of a chart, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Vertical position of `value` on an axis running from 0 to `axis_max`.
    pub fn y_for(&self, value: f64, axis_max: f64) -> f64 {
        if axis_max <= 0.0 || !axis_max.is_finite() {
            return self.bottom();
        }
        let ratio = (value / axis_max).clamp(0.0, 1.0);
        self.bottom() - ratio * self.height
    }

    /// Center of category `index` out of `count` equal slots.
    pub fn slot_center(&self, index: usize, count: usize) -> f64 {
        if count == 0 {
            return self.left;
        }
        let slot = self.width / count as f64;
        self.left + slot * (index as f64 + 0.5)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Attribute strings `(x, y, width, height)`.
    pub fn attrs(&self) -> (String, String, String, String) {
        (
            svg_num(self.x),
            svg_num(self.y),
            svg_num(self.width),
            svg_num(self.height),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// Ticks from 0 up to a rounded ceiling at or above `max`.
///
/// The step is 1, 2, 5 or 10 times a power of ten, chosen so that about
/// `count` intervals cover `max`. A non-positive `max` yields `[0.0]`.
pub fn nice_ticks(max: f64, count: usize) -> Vec<f64> {
    if !max.is_finite() || max <= 0.0 || count == 0 {
        return vec![0.0];
    }

    let raw_step = max / count as f64;
    let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = nice * magnitude;
    let intervals = (max / step).ceil() as usize;

    (0..=intervals).map(|i| i as f64 * step).collect()
}

/// Ticks positioned in `area` and labelled with `label`.
pub fn axis_ticks(max: f64, count: usize, area: &PlotArea, label: fn(f64) -> String) -> Vec<AxisTick> {
    let values = nice_ticks(max, count);
    let axis_max = values.last().copied().unwrap_or(0.0);
    values
        .into_iter()
        .map(|value| AxisTick {
            value,
            y: area.y_for(value, axis_max),
            label: label(value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::format::millions_label;

    #[test]
    fn test_nice_ticks() {
        assert_eq!(
            nice_ticks(28_000_000.0, 4),
            vec![0.0, 10_000_000.0, 20_000_000.0, 30_000_000.0]
        );
        assert_eq!(nice_ticks(100.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(nice_ticks(0.0, 4), vec![0.0]);
        assert_eq!(nice_ticks(f64::NAN, 4), vec![0.0]);
    }

    #[test]
    fn test_ticks_cover_max() {
        for max in [1.0, 7.5, 33.0, 999.0, 123_456.0] {
            let ticks = nice_ticks(max, 4);
            assert!(*ticks.last().unwrap() >= max);
            assert_eq!(ticks[0], 0.0);
        }
    }

    #[test]
    fn test_axis_ticks_positions() {
        let area = PlotArea::new(40.0, 10.0, 300.0, 200.0);
        let ticks = axis_ticks(28_000_000.0, 4, &area, millions_label);
        assert_eq!(ticks.first().unwrap().y, 210.0);
        assert_eq!(ticks.last().unwrap().y, 10.0);
        assert_eq!(ticks[1].label, "10.0M");
    }

    #[test]
    fn test_y_for_degenerate_axis() {
        let area = PlotArea::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(area.y_for(10.0, 0.0), 50.0);
        assert_eq!(area.slot_center(0, 4), 12.5);
        assert_eq!(area.slot_center(0, 0), 0.0);
    }
}
