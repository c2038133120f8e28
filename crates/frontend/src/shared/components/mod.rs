pub mod charts;
pub mod metric_card;
pub mod notification_dropdown;
pub mod pagination_controls;

pub use metric_card::MetricCard;
pub use notification_dropdown::NotificationDropdown;
pub use pagination_controls::PaginationControls;
