//! Static data behind the e-commerce dashboard.

use super::dto::*;
use crate::shared::charts::TimeSeriesPoint;

fn metric(id: &str, title: &str, value: &str, change: f64, icon: &str) -> DashboardMetric {
    DashboardMetric {
        id: id.to_string(),
        title: title.to_string(),
        value: value.to_string(),
        change,
        change_type: if change >= 0.0 {
            ChangeType::Increase
        } else {
            ChangeType::Decrease
        },
        icon: icon.to_string(),
    }
}

fn location(name: &str, value: f64, percentage: f64) -> LocationRevenue {
    LocationRevenue {
        location: name.to_string(),
        value,
        percentage: Some(percentage),
    }
}

fn product(name: &str, price: &str, qty: u32, amount: &str) -> TopProduct {
    TopProduct {
        name: name.to_string(),
        price: price.to_string(),
        qty,
        amount: amount.to_string(),
    }
}

fn channel(name: &str, value: f64, color: &str) -> SalesChannel {
    SalesChannel {
        name: name.to_string(),
        value,
        color: color.to_string(),
    }
}

pub fn mock_dashboard() -> EcommerceDashboard {
    EcommerceDashboard {
        metrics: vec![
            metric("customers", "Customers", "3,781", 11.01, "users"),
            metric("orders", "Orders", "1,219", -0.03, "shopping-cart"),
            metric("revenue", "Revenue", "$695", 15.03, "dollar-sign"),
            metric("growth", "Growth", "30.1%", 6.08, "trending-up"),
        ],
        monthly: vec![
            TimeSeriesPoint::new("Jan", 15_000_000.0),
            TimeSeriesPoint::new("Feb", 18_000_000.0),
            TimeSeriesPoint::new("Mar", 22_000_000.0),
            TimeSeriesPoint::new("Apr", 25_000_000.0),
            TimeSeriesPoint::new("May", 19_000_000.0),
            TimeSeriesPoint::new("Jun", 28_000_000.0),
        ],
        revenue: RevenueSummary {
            current: 58_211.0,
            previous: 68_768.0,
            growth: -15.3,
            period: "This Week".to_string(),
        },
        locations: vec![
            location("New York", 72_000.0, 45.0),
            location("San Francisco", 39_000.0, 25.0),
            location("Sydney", 28_000.0, 18.0),
            location("Singapore", 19_000.0, 12.0),
        ],
        top_products: vec![
            product("ASOS Ridley High Waist", "$79.49", 82, "$6518.18"),
            product("Marco Lightweight Shirt", "$128.50", 37, "$4754.50"),
            product("Half Sleeve Shirt", "$39.99", 64, "$2559.36"),
            product("Lightweight Jacket", "$20.00", 184, "$3680.00"),
            product("Marco Shoes", "$79.49", 64, "$1965.81"),
        ],
        sales_channels: vec![
            channel("Direct", 450.0, "#3B82F6"),
            channel("Affiliate", 385.0, "#10B981"),
            channel("Sponsored", 321.0, "#F59E0B"),
            channel("E-mail", 283.0, "#8B5CF6"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::charts::donut::{layout, total, DonutGeometry};

    #[test]
    fn test_metric_change_types() {
        let dashboard = mock_dashboard();
        assert_eq!(dashboard.metrics.len(), 4);
        assert_eq!(dashboard.metrics[1].change_type, ChangeType::Decrease);
        assert_eq!(dashboard.metrics[3].change_type, ChangeType::Increase);
    }

    #[test]
    fn test_sales_donut() {
        let inputs = mock_dashboard().donut_inputs();
        assert_eq!(total(&inputs), 1439.0);
        let segments = layout(&inputs, &DonutGeometry::for_size(150.0));
        assert_eq!(segments[0].percentage, "31.3");
        assert_eq!(segments.last().unwrap().end_angle, 360.0);
    }

    #[test]
    fn test_location_shares_sum_to_hundred() {
        let dashboard = mock_dashboard();
        let sum: f64 = dashboard.locations.iter().filter_map(|l| l.percentage).sum();
        assert_eq!(sum, 100.0);
        assert_eq!(dashboard.map_points()[0], ("New York", 72_000.0));
    }

    #[test]
    fn test_metric_serializes_camel_case() {
        let json = serde_json::to_value(&mock_dashboard().metrics[0]).unwrap();
        assert_eq!(json["changeType"], "increase");
    }
}
