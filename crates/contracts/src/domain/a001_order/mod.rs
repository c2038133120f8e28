pub mod aggregate;
pub mod list_view;
pub mod provider;
pub mod query;

pub use aggregate::{Order, OrderStatus};
pub use list_view::{ListPage, OrderListView};
pub use query::{apply, QueryState, SortDirection, SortField, StatusFilter};
