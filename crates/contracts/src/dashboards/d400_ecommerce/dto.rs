use crate::shared::charts::donut::DonutInput;
use crate::shared::charts::TimeSeriesPoint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Increase,
    Decrease,
}

impl ChangeType {
    pub fn icon_name(&self) -> &'static str {
        match self {
            ChangeType::Increase => "trending-up",
            ChangeType::Decrease => "trending-down",
        }
    }
}

/// Headline number shown in a metric card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetric {
    pub id: String,
    pub title: String,
    /// Already formatted ("3,781", "$695", "30.1%")
    pub value: String,
    /// Percent change against the previous period
    pub change: f64,
    pub change_type: ChangeType,
    /// Icon name for `icons::icon`
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummary {
    pub current: f64,
    pub previous: f64,
    pub growth: f64,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRevenue {
    pub location: String,
    pub value: f64,
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub price: String,
    pub qty: u32,
    pub amount: String,
}

/// One slice of the "Total Sales" donut
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesChannel {
    pub name: String,
    pub value: f64,
    pub color: String,
}

impl From<&SalesChannel> for DonutInput {
    fn from(channel: &SalesChannel) -> Self {
        DonutInput::new(channel.name.clone(), channel.value, channel.color.clone())
    }
}

/// Everything the e-commerce dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcommerceDashboard {
    pub metrics: Vec<DashboardMetric>,
    pub monthly: Vec<TimeSeriesPoint>,
    pub revenue: RevenueSummary,
    pub locations: Vec<LocationRevenue>,
    pub top_products: Vec<TopProduct>,
    pub sales_channels: Vec<SalesChannel>,
}

impl EcommerceDashboard {
    pub fn donut_inputs(&self) -> Vec<DonutInput> {
        self.sales_channels.iter().map(DonutInput::from).collect()
    }

    /// `(location, value)` pairs for the world map.
    pub fn map_points(&self) -> Vec<(&str, f64)> {
        self.locations
            .iter()
            .map(|l| (l.location.as_str(), l.value))
            .collect()
    }
}
