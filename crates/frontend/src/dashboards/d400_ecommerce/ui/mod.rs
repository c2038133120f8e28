pub mod dashboard;

pub use dashboard::EcommerceDashboard;
