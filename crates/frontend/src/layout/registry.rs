//! View registry - the one place mapping a view key to its page.

use crate::dashboards::d400_ecommerce::ui::EcommerceDashboard;
use crate::domain::a001_order::ui::list::OrderList;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewKey {
    #[default]
    Dashboard,
    Orders,
}

impl ViewKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKey::Dashboard => "dashboard",
            ViewKey::Orders => "orders",
        }
    }

    /// Unknown keys fall back to the dashboard.
    pub fn from_key(key: &str) -> Self {
        match key {
            "orders" => ViewKey::Orders,
            _ => ViewKey::Dashboard,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewKey::Dashboard => "Default",
            ViewKey::Orders => "Orders",
        }
    }
}

pub fn render_view(key: ViewKey) -> AnyView {
    match key {
        ViewKey::Dashboard => view! { <EcommerceDashboard /> }.into_any(),
        ViewKey::Orders => view! { <OrderList /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_key_round_trip_and_fallback() {
        for key in [ViewKey::Dashboard, ViewKey::Orders] {
            assert_eq!(ViewKey::from_key(key.as_str()), key);
        }
        assert_eq!(ViewKey::from_key("p900_sales_register"), ViewKey::Dashboard);
        assert_eq!(ViewKey::from_key(""), ViewKey::Dashboard);
    }
}
