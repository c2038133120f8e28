use crate::shared::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Status
// ============================================================================

/// Статус заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "approved")]
    Approved,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "rejected")]
    Rejected,
}

impl OrderStatus {
    /// Wire / display value, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in progress",
            OrderStatus::Approved => "approved",
            OrderStatus::Completed => "completed",
            OrderStatus::Rejected => "rejected",
        }
    }

    /// Label used in the status filter popover.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Approved => "Approved",
            OrderStatus::Completed => "Completed",
            OrderStatus::Rejected => "Rejected",
        }
    }

    /// Badge colour. Completed and rejected follow the palette's success/error.
    pub fn color(&self, palette: &crate::shared::theme::Palette) -> &'static str {
        match self {
            OrderStatus::Completed => palette.success,
            OrderStatus::Approved => "#F97316",
            OrderStatus::Pending => "#0EA5E9",
            OrderStatus::InProgress => "#8B5CF6",
            OrderStatus::Rejected => palette.error,
        }
    }

    /// All statuses in provider cycling order.
    pub fn all() -> [OrderStatus; 5] {
        [
            OrderStatus::Pending,
            OrderStatus::InProgress,
            OrderStatus::Approved,
            OrderStatus::Completed,
            OrderStatus::Rejected,
        ]
    }
}

impl FromStr for OrderStatus {
    type Err = DashboardError;

    /// Parses the wire name, e.g. `"in progress"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::all()
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DashboardError::Decode(format!("unknown order status: {}", s)))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Заказ. Immutable once created; the list only ever grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// 6 uppercase alphanumeric characters. Uniqueness is not enforced.
    pub id: String,
    pub customer: String,
    pub product: String,
    pub amount: f64,
    pub status: OrderStatus,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Order {
    /// Seed for per-order pseudo-random display fields (address, ...).
    ///
    /// Derived from the id only, so the same order renders the same values
    /// on every pass.
    pub fn display_seed(&self) -> u64 {
        crate::shared::synthetic::stable_seed(&self.id)
    }

    /// Avatar placeholder keyed by the customer name without whitespace.
    pub fn avatar_url(&self) -> String {
        let seed: String = self.customer.split_whitespace().collect();
        format!("https://picsum.photos/seed/{}/24/24", seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_uses_wire_names() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"in progress\"");
        let parsed: OrderStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(parsed, OrderStatus::Rejected);
    }

    #[test]
    fn test_status_from_str_matches_as_str() {
        for status in OrderStatus::all() {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert_eq!(
            "shipped".parse::<OrderStatus>(),
            Err(DashboardError::Decode("unknown order status: shipped".to_string()))
        );
    }

    #[test]
    fn test_order_without_location_deserializes() {
        let order: Order = serde_json::from_str(
            r#"{"id":"AB12CD","customer":"Leanne Graham","product":"Mobile App","amount":120.0,"status":"approved","date":"2024-03-15"}"#,
        )
        .unwrap();
        assert_eq!(order.location, None);
        assert_eq!(order.status, OrderStatus::Approved);
    }

    #[test]
    fn test_avatar_url_strips_whitespace() {
        let order = Order {
            id: "AAAAAA".into(),
            customer: "Ervin  Howell".into(),
            product: "Mobile App".into(),
            amount: 1.0,
            status: OrderStatus::Pending,
            date: "2024-01-01".into(),
            location: None,
        };
        assert_eq!(order.avatar_url(), "https://picsum.photos/seed/ErvinHowell/24/24");
    }
}
