pub mod dto;
pub mod mock;

pub use dto::*;
pub use mock::mock_dashboard;
