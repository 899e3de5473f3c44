//! Catalog CLI - Product management from the terminal
//!
//! Thin client of the catalog HTTP API.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;

use api::{CatalogClient, Product, ProductDetails};
use config::Config;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Catalog CLI - Product management", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Login and store API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
        /// Server URL (keeps the configured one if omitted)
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Product operations
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    List {
        /// Only active products (service staff view)
        #[arg(short, long)]
        active: bool,
    },
    /// Create a new draft product
    Create {
        name: String,
        /// Net price in cents
        #[arg(long)]
        price: i64,
        /// food, beverage or other
        #[arg(short, long)]
        category: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Replace name, description, price and category
    Update {
        id: i64,
        name: String,
        /// Net price in cents
        #[arg(long)]
        price: i64,
        /// food, beverage or other
        #[arg(short, long)]
        category: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Make a product visible to service staff
    Activate { id: i64 },
    /// Hide a product from service staff
    Deactivate { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Login { key, url } => cmd_login(key, url).await,
        Commands::Product { action } => cmd_product(action).await,
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(key: Option<String>, url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(url) = url {
        config.base_url = url;
    }

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Test connection
    let client = CatalogClient::new(&config.base_url, &api_key);
    print!("Testing connection to {}... ", config.base_url);

    match client.health().await {
        Ok(true) => println!("{}", "OK".green()),
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach the catalog API at {}", config.base_url);
        }
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

async fn cmd_product(action: ProductAction) -> Result<()> {
    let config = Config::load()?;
    let api_key = config
        .api_key
        .as_ref()
        .context("Not logged in. Run 'catalog login' first.")?;

    let client = CatalogClient::new(&config.base_url, api_key);

    match action {
        ProductAction::List { active } => {
            let products = client.list_products(active).await?;

            if products.is_empty() {
                println!("No products found.");
                return Ok(());
            }

            let title = if active { "Active products:" } else { "Products:" };
            println!("{}", title.bold());
            for product in &products {
                print_product(product);
            }
        }

        ProductAction::Create {
            name,
            price,
            category,
            description,
        } => {
            let details = ProductDetails {
                name,
                description,
                net_price_cents: price,
                category,
            };
            let id = client.create_product(&details).await?;

            println!(
                "{} Product '{}' created as draft (id {})",
                "✓".green(),
                details.name.cyan(),
                id
            );
            println!("  {}", format!("catalog product activate {}", id).dimmed());
        }

        ProductAction::Update {
            id,
            name,
            price,
            category,
            description,
        } => {
            let details = ProductDetails {
                name,
                description,
                net_price_cents: price,
                category,
            };
            client.update_product(id, &details).await?;
            println!("{} Product {} updated", "✓".green(), id);
        }

        ProductAction::Activate { id } => {
            client.activate_product(id).await?;
            println!("{} Product {} activated", "✓".green(), id);
        }

        ProductAction::Deactivate { id } => {
            client.deactivate_product(id).await?;
            println!("{} Product {} deactivated", "✓".green(), id);
        }
    }

    Ok(())
}

fn print_product(product: &Product) {
    let status = match product.status.as_deref() {
        Some("active") => " [active]".green().to_string(),
        Some("inactive") => " [inactive]".red().to_string(),
        Some(other) => format!(" [{}]", other).yellow().to_string(),
        None => String::new(),
    };

    println!(
        "  {} {} {} ({}){}",
        format!("#{}", product.id).dimmed(),
        product.name.cyan().bold(),
        format_price(product.net_price_cents),
        product.category,
        status
    );
    if !product.description.is_empty() {
        println!("      {}", truncate_string(&product.description, 60).dimmed());
    }
    if let Some(created_at) = product.created_at {
        println!(
            "      {}",
            format!("created {}", created_at.format("%Y-%m-%d %H:%M")).dimmed()
        );
    }
}

/// Render a cent amount as `12.34`
fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        format!("{}...", s.chars().take(max_chars).collect::<String>())
    } else {
        s.to_string()
    }
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    match config.masked_api_key() {
        Some(masked) => println!("  API Key: {}", masked.green()),
        None => println!("  API Key: {}", "Not set".red()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0.00");
        assert_eq!(format_price(5), "0.05");
        assert_eq!(format_price(1999), "19.99");
        assert_eq!(format_price(-250), "-2.50");
    }

    #[test]
    fn test_truncate_string_counts_chars() {
        assert_eq!(truncate_string("crispy", 10), "crispy");
        assert_eq!(truncate_string("Käsespätzle", 4), "Käse...");
    }

    #[test]
    fn test_parses_product_create() {
        let cli = Cli::try_parse_from([
            "catalog", "product", "create", "Fries", "--price", "1999", "--category", "food",
        ])
        .unwrap();

        match cli.command {
            Commands::Product {
                action:
                    ProductAction::Create {
                        name,
                        price,
                        category,
                        description,
                    },
            } => {
                assert_eq!(name, "Fries");
                assert_eq!(price, 1999);
                assert_eq!(category, "food");
                assert_eq!(description, "");
            }
            _ => panic!("expected product create"),
        }
    }
}
