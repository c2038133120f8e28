pub mod charts;
pub mod config;
pub mod error;
pub mod format;
pub mod notifications;
pub mod pagination;
pub mod synthetic;
pub mod theme;
