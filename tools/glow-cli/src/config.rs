//! CLI configuration.

use anyhow::{Context, Result};
use glow_commerce::cart::DeliveryFees;
use glow_commerce::money::RUPEE;
use glow_commerce::search::SortKey;
use glow_commerce::Money;
use glow_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, when no `--config` is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["glow.toml", ".glow.toml", "glow.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GlowConfig {
    /// Storefront presentation.
    #[serde(default)]
    pub storefront: StorefrontConfig,

    /// Delivery fees applied to the cart.
    #[serde(default)]
    pub delivery: DeliveryFees,

    /// Session log settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GlowConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config text; `path` decides between JSON and TOML.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Format a price with the configured currency symbol.
    pub fn price(&self, money: Money) -> String {
        format!("{}{}", self.storefront.currency_symbol, money.amount)
    }
}

/// Storefront presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    /// Store name shown in headers.
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Sort used when `--sort` is not given.
    #[serde(default)]
    pub default_sort: SortKey,

    /// Products per page in listings.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_name() -> String {
    "GlowCommerce".to_string()
}

fn default_currency_symbol() -> String {
    RUPEE.to_string()
}

fn default_page_size() -> usize {
    12
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            currency_symbol: default_currency_symbol(),
            default_sort: SortKey::default(),
            page_size: default_page_size(),
        }
    }
}

/// Session log settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Minimum level for session logs and the default tracing filter.
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

/// Generate a default glow.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# GlowCommerce storefront configuration

[storefront]
name = "{name}"
currency_symbol = "{RUPEE}"
# One of: price-low-high, price-high-low, popularity, new-arrivals
default_sort = "popularity"
page_size = 12

[delivery]
standard = 49
express = 149

[logging]
# trace, debug, info, warn, error
level = "info"
# human or json
format = "human"
"#,
        name = name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generated_config_matches_defaults() {
        let parsed = GlowConfig::parse("glow.toml", &generate_default_config("GlowCommerce")).unwrap();
        assert_eq!(parsed, GlowConfig::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GlowConfig::parse(
            "glow.toml",
            r#"
[storefront]
default_sort = "price-low-high"

[delivery]
express = 199
"#,
        )
        .unwrap();
        assert_eq!(config.storefront.default_sort, SortKey::PriceLowHigh);
        assert_eq!(config.storefront.page_size, 12);
        assert_eq!(config.delivery.standard, Money::new(49));
        assert_eq!(config.delivery.express, Money::new(199));
    }

    #[test]
    fn test_json_config() {
        let config = GlowConfig::parse(
            "glow.json",
            r#"{"logging": {"level": "debug", "format": "json"}}"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_sort_is_rejected() {
        let result = GlowConfig::parse("glow.toml", "[storefront]\ndefault_sort = \"cheapest\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_price_uses_symbol() {
        let mut config = GlowConfig::default();
        assert_eq!(config.price(Money::new(599)), "\u{20b9}599");
        config.storefront.currency_symbol = "Rs ".into();
        assert_eq!(config.price(Money::new(599)), "Rs 599");
    }
}
