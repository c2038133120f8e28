//! Error types shared by the dashboard crates.
//!
//! None of these reach the end user as a dialog: callers log them and fall
//! back to an empty or default visual state.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// Provider unreachable (DNS, CORS, connection reset, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// Provider answered with a non-2xx status.
    #[error("HTTP error: {status}")]
    Http { status: u16 },

    /// Provider answered 2xx but the body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Donut chart input whose values sum to zero (or to a non-finite number).
    #[error("Chart total is zero")]
    EmptyTotal,

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        DashboardError::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_http() {
        let error = DashboardError::Http { status: 503 };
        assert_eq!(format!("{}", error), "HTTP error: 503");
    }

    #[test]
    fn test_error_display_network() {
        let error = DashboardError::Network("connection refused".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Network error"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: DashboardError = json_error.into();
        assert!(matches!(error, DashboardError::Decode(_)));
    }
}
