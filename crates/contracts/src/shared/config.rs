use crate::shared::error::{DashboardError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub orders: OrdersConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Placeholder API the order list is synthesized from.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProviderConfig {
    pub posts_url: String,
    pub users_url: String,
    /// How many posts are turned into orders.
    pub order_limit: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OrdersConfig {
    pub page_size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// localStorage key holding the JSON dark-mode flag.
    pub storage_key: String,
    /// Used when nothing has been stored yet.
    pub default_dark: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed seed for synthetic data. `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            posts_url: "https://jsonplaceholder.typicode.com/posts".to_string(),
            users_url: "https://jsonplaceholder.typicode.com/users".to_string(),
            order_limit: 50,
        }
    }
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            default_dark: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        // DEFAULT_CONFIG mirrors these values; kept in sync by test_default_config_loads
        Self {
            provider: ProviderConfig::default(),
            orders: OrdersConfig::default(),
            theme: ThemeConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[provider]
posts_url = "https://jsonplaceholder.typicode.com/posts"
users_url = "https://jsonplaceholder.typicode.com/users"
order_limit = 50

[orders]
page_size = 10

[theme]
storage_key = "theme"
default_dark = false
"#;

/// Load configuration.
///
/// `source` is the text of a `config.toml` served next to the app, if one was
/// found. Missing sections and fields fall back to the defaults.
pub fn load_config(source: Option<&str>) -> Result<Config> {
    let text = source.unwrap_or(DEFAULT_CONFIG);
    let config: Config =
        toml::from_str(text).map_err(|e| DashboardError::Config(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.orders.page_size == 0 {
        return Err(DashboardError::Config(
            "orders.page_size must be at least 1".to_string(),
        ));
    }
    if config.theme.storage_key.trim().is_empty() {
        return Err(DashboardError::Config(
            "theme.storage_key must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.orders.page_size, 10);
        assert_eq!(config.provider.order_limit, 50);
        assert_eq!(config.generator.seed, None);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = load_config(Some("[orders]\npage_size = 25\n\n[generator]\nseed = 7\n")).unwrap();
        assert_eq!(config.orders.page_size, 25);
        assert_eq!(config.generator.seed, Some(7));
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.provider.order_limit, 50);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(load_config(Some("")).unwrap(), Config::default());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = load_config(Some("[orders]\npage_size = 0\n")).unwrap_err();
        assert_eq!(
            err,
            DashboardError::Config("orders.page_size must be at least 1".to_string())
        );
    }

    #[test]
    fn test_blank_storage_key_rejected() {
        let err = load_config(Some("[theme]\nstorage_key = \"  \"\n")).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
        assert!(err.to_string().starts_with("Config error: "));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = load_config(Some("[orders\npage_size = ")).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }
}
