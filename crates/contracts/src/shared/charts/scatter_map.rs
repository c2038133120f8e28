//! "Revenue by Location" markers over an equirectangular world map.

use super::axis::PlotArea;
use super::Point;
use crate::shared::theme::Palette;

/// `(longitude, latitude)` of the cities the dashboard knows about.
pub fn city_coordinates(city: &str) -> (f64, f64) {
    match city {
        "New York" => (-74.006, 40.7128),
        "San Francisco" => (-122.4194, 37.7749),
        "Sydney" => (151.2093, -33.8688),
        "Singapore" => (103.8198, 1.3521),
        _ => (0.0, 0.0),
    }
}

/// Longitude `[-180, 180]` and latitude `[-90, 90]` onto `area`.
pub fn project(lon: f64, lat: f64, area: &PlotArea) -> Point {
    let x = area.left + (lon.clamp(-180.0, 180.0) + 180.0) / 360.0 * area.width;
    let y = area.top + (90.0 - lat.clamp(-90.0, 90.0)) / 180.0 * area.height;
    Point::new(x, y)
}

pub fn marker_radius(value: f64) -> f64 {
    (3.0 + value / 10_000.0 * 1.5).clamp(2.0, 8.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub name: String,
    pub value: f64,
    pub center: Point,
    pub radius: f64,
    pub color: &'static str,
}

pub fn markers<'a>(
    locations: impl IntoIterator<Item = (&'a str, f64)>,
    palette: &Palette,
    area: &PlotArea,
) -> Vec<MapMarker> {
    let colors = [palette.primary, palette.success, palette.warning, palette.secondary];
    locations
        .into_iter()
        .enumerate()
        .map(|(index, (name, value))| {
            let (lon, lat) = city_coordinates(name);
            MapMarker {
                name: name.to_string(),
                value,
                center: project(lon, lat, area),
                radius: marker_radius(value),
                color: colors[index % colors.len()],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::theme::ThemeMode;

    #[test]
    fn test_projection_corners() {
        let area = PlotArea::new(0.0, 0.0, 360.0, 180.0);
        assert_eq!(project(-180.0, 90.0, &area), Point::new(0.0, 0.0));
        assert_eq!(project(180.0, -90.0, &area), Point::new(360.0, 180.0));
        assert_eq!(project(0.0, 0.0, &area), Point::new(180.0, 90.0));
    }

    #[test]
    fn test_marker_radius_clamped() {
        assert_eq!(marker_radius(0.0), 3.0);
        assert_eq!(marker_radius(72_000.0), 8.0);
        assert_eq!(marker_radius(-100_000.0), 2.0);
    }

    #[test]
    fn test_markers_cycle_colors_and_unknown_city() {
        let palette = ThemeMode::Light.palette();
        let area = PlotArea::new(0.0, 0.0, 360.0, 180.0);
        let data = [
            ("New York", 72_000.0),
            ("San Francisco", 39_000.0),
            ("Sydney", 28_000.0),
            ("Singapore", 19_000.0),
            ("Atlantis", 1_000.0),
        ];
        let markers = markers(data, palette, &area);
        assert_eq!(markers[1].color, palette.success);
        assert_eq!(markers[4].color, palette.primary);
        assert_eq!(markers[4].center, Point::new(180.0, 90.0));
        assert!(markers[2].center.y > 90.0);
    }
}
