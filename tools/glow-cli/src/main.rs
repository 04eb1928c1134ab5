//! Glow CLI - Command line storefront for GlowCommerce.
//!
//! Commands:
//! - `glow products` - Browse, filter and sort the catalog
//! - `glow product` - Show one product
//! - `glow cart` - Price the mock cart and check out
//! - `glow formula` - Build a custom formula
//! - `glow launch` - Submit a product for launch review
//! - `glow scan` - Run a simulated face scan
//! - `glow config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use glow_observability::LogLevel;
use tracing_subscriber::EnvFilter;

use commands::{
    CartArgs, ConfigArgs, FormulaArgs, LaunchArgs, ProductArgs, ProductsArgs, ScanArgs,
};

/// Glow CLI - Browse and shop the GlowCommerce skincare catalog
#[derive(Parser)]
#[command(name = "glow")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog with filters and sorting
    Products(ProductsArgs),

    /// Show a single product
    Product(ProductArgs),

    /// Price the cart and optionally check out
    Cart(CartArgs),

    /// Build a custom formula from up to three ingredients
    Formula(FormulaArgs),

    /// Submit a new product for launch review
    Launch(LaunchArgs),

    /// Detect a skin type and get recommendations
    Scan(ScanArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Products(_) => "products",
            Commands::Product(_) => "product",
            Commands::Cart(_) => "cart",
            Commands::Formula(_) => "formula",
            Commands::Launch(_) => "launch",
            Commands::Scan(_) => "scan",
            Commands::Config(_) => "config",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?.for_command(cli.command.name());

    initialize_tracing(cli.verbose, cli.json, ctx.config.logging.level);

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Formula(args) => commands::formula::run(args, &ctx).await,
        Commands::Launch(args) => commands::launch::run(args, &ctx).await,
        Commands::Scan(args) => commands::scan::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Domain events go to stderr. `RUST_LOG` wins over the configured level.
fn initialize_tracing(verbose: bool, json: bool, level: LogLevel) {
    let default_level = if verbose { LogLevel::Debug } else { level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = default_level.as_str();
        EnvFilter::new(format!("glow_commerce={level},glow_observability={level}"))
    });

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}
