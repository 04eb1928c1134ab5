//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod formula;
pub mod launch;
pub mod product;
pub mod products;
pub mod scan;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only products suited to this skin type (repeatable).
    #[arg(long = "skin")]
    pub skin_types: Vec<String>,

    /// Only products from this brand (repeatable).
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// Only products containing this ingredient (repeatable).
    #[arg(long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Minimum price (inclusive).
    #[arg(long)]
    pub min: Option<i64>,

    /// Maximum price (inclusive).
    #[arg(long)]
    pub max: Option<i64>,

    /// Free-text search over name, brand and description.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort key: price-low-high, price-high-low, popularity, new-arrivals.
    #[arg(long)]
    pub sort: Option<String>,

    /// Page to show (1-indexed).
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Print query timings.
    #[arg(long)]
    pub stats: bool,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: u32,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Add a product, as ID or ID:QTY (repeatable).
    #[arg(long)]
    pub add: Vec<String>,

    /// Remove a product by ID (repeatable).
    #[arg(long)]
    pub remove: Vec<u32>,

    /// Set a quantity, as ID:QTY (repeatable).
    #[arg(long)]
    pub set: Vec<String>,

    /// Start from an empty cart instead of the demo cart.
    #[arg(long)]
    pub empty: bool,

    /// Use express delivery.
    #[arg(long)]
    pub express: bool,

    /// Place the (mock) order.
    #[arg(long)]
    pub checkout: bool,
}

/// Arguments for the formula command.
#[derive(Args)]
pub struct FormulaArgs {
    /// Ingredients to add, in order (at most three).
    pub ingredients: Vec<String>,
}

/// Arguments for the launch command.
#[derive(Args)]
pub struct LaunchArgs {
    /// Product name.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Target skin type (repeatable).
    #[arg(long = "skin")]
    pub skin_types: Vec<String>,

    /// Key ingredient (repeatable).
    #[arg(long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Self-manufactured or Lab-manufactured.
    #[arg(short, long)]
    pub manufacturing: Option<String>,

    /// Allergy information.
    #[arg(long)]
    pub allergies: Option<String>,

    /// Prompt for each field.
    #[arg(short, long)]
    pub interactive: bool,
}

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Report this skin type instead of guessing.
    #[arg(long)]
    pub skin: Option<String>,

    /// Skip the simulated scan delay.
    #[arg(long)]
    pub instant: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Store name.
        #[arg(long, default_value = "GlowCommerce")]
        name: String,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
