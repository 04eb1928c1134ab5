//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, GlowConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { name, force } => init_config(&name, force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("");
    ctx.output.info("[storefront]");
    ctx.output.kv("name", &config.storefront.name);
    ctx.output.kv("currency_symbol", &config.storefront.currency_symbol);
    ctx.output
        .kv("default_sort", config.storefront.default_sort.as_str());
    ctx.output
        .kv("page_size", &config.storefront.page_size.to_string());

    ctx.output.info("");
    ctx.output.info("[delivery]");
    ctx.output.kv("standard", &config.price(config.delivery.standard));
    ctx.output.kv("express", &config.price(config.delivery.express));

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", config.logging.level.as_str());
    ctx.output.kv("format", &format!("{:?}", config.logging.format).to_lowercase());

    Ok(())
}

async fn init_config(name: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("glow.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config(name))?;

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check(&ctx.config);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Returns (errors, warnings).
fn check(config: &GlowConfig) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if config.storefront.name.trim().is_empty() {
        errors.push("storefront.name is required".to_string());
    }

    if config.storefront.page_size == 0 {
        errors.push("storefront.page_size must be at least 1".to_string());
    }

    if config.storefront.currency_symbol.is_empty() {
        warnings.push("storefront.currency_symbol is empty; prices will show bare numbers".to_string());
    }

    if config.delivery.standard.amount < 0 || config.delivery.express.amount < 0 {
        errors.push("delivery fees cannot be negative".to_string());
    }

    if config.delivery.express < config.delivery.standard {
        warnings.push(format!(
            "delivery.express ({}) is cheaper than delivery.standard ({})",
            config.delivery.express.amount, config.delivery.standard.amount
        ));
    }

    (errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glow_commerce::Money;

    #[test]
    fn test_default_config_is_clean() {
        let (errors, warnings) = check(&GlowConfig::default());
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_problems_are_reported() {
        let mut config = GlowConfig::default();
        config.storefront.page_size = 0;
        config.delivery.express = Money::new(10);

        let (errors, warnings) = check(&config);
        assert_eq!(errors, vec!["storefront.page_size must be at least 1"]);
        assert_eq!(warnings.len(), 1);
    }
}
