pub mod panel;
pub mod right;

pub use right::Right;
