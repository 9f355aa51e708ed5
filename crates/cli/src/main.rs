//! Tidecart CLI - Cart and wishlist front end over file-backed storage.
//!
//! # Usage
//!
//! ```bash
//! # Add a line to the cart
//! tc-cli cart add -p A -n Shirt --price 10 -q 1 -v M
//!
//! # Show the cart
//! tc-cli cart show
//!
//! # Toggle a product on the wishlist
//! tc-cli wishlist toggle -p A
//!
//! # Forget all persisted state
//! tc-cli reset
//! ```
//!
//! # Commands
//!
//! - `cart` - Show, add, remove, update and clear cart lines
//! - `wishlist` - Show, toggle and clear wishlist entries
//! - `reset` - Remove the stored cart and wishlist snapshots
//!
//! Storage location and keys come from the environment, see
//! [`StoreConfig`](tidecart_storefront::StoreConfig).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tidecart_core::{LineItem, Money, ProductId};
use tidecart_storefront::{FileStorage, StoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::OutputFormat;

#[derive(Parser)]
#[command(name = "tc-cli")]
#[command(author, version, about = "Tidecart cart and wishlist tools")]
struct Cli {
    /// Output format for command results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage cart lines
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Remove the stored cart and wishlist
    Reset,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show,
    /// Add a line (merges with a matching product and variant)
    Add {
        /// Product ID
        #[arg(short, long)]
        product: String,

        /// Product display name
        #[arg(short, long)]
        name: String,

        /// Unit price (e.g. 19.99)
        #[arg(long)]
        price: Money,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,

        /// Variant (size, color, ...)
        #[arg(short, long)]
        variant: Option<String>,

        /// Image reference
        #[arg(short, long, default_value = "")]
        image: String,
    },
    /// Remove a line
    Remove {
        /// Product ID
        #[arg(short, long)]
        product: String,

        /// Variant of the line to remove
        #[arg(short, long)]
        variant: Option<String>,
    },
    /// Set a line's quantity (0 removes it)
    Update {
        /// Product ID
        #[arg(short, long)]
        product: String,

        /// Variant of the line to update
        #[arg(short, long)]
        variant: Option<String>,

        /// New quantity
        #[arg(short, long)]
        quantity: u32,
    },
    /// Remove every line
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show the wishlist
    Show,
    /// Add the product if absent, remove it if present
    Toggle {
        /// Product ID
        #[arg(short, long)]
        product: String,
    },
    /// Remove every product
    Clear,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so command output on stdout stays parseable
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tidecart_cli=info,tidecart_storefront=info".into());
    let json_layer = cli
        .log_json
        .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!cli.log_json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    match run(cli) {
        Ok(output) => print_output(&output),
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    }
}

#[allow(clippy::print_stdout)]
fn print_output(output: &str) {
    println!("{output}");
}

fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    let mut storage = FileStorage::open(&config.storage_path);
    let format = cli.format;

    let output = match cli.command {
        Commands::Cart { action } => {
            let key = config.cart_key.as_str();
            match action {
                CartAction::Show => commands::cart::show(&mut storage, key, format)?,
                CartAction::Add {
                    product,
                    name,
                    price,
                    quantity,
                    variant,
                    image,
                } => {
                    let mut item = LineItem::new(product, name, price, quantity).with_image(image);
                    item.variant = variant;
                    commands::cart::add(&mut storage, key, item, format)?
                }
                CartAction::Remove { product, variant } => commands::cart::remove(
                    &mut storage,
                    key,
                    &ProductId::new(product),
                    variant.as_deref(),
                    format,
                )?,
                CartAction::Update {
                    product,
                    variant,
                    quantity,
                } => commands::cart::update(
                    &mut storage,
                    key,
                    &ProductId::new(product),
                    variant.as_deref(),
                    quantity,
                    format,
                )?,
                CartAction::Clear => commands::cart::clear(&mut storage, key, format)?,
            }
        }
        Commands::Wishlist { action } => {
            let key = config.wishlist_key.as_str();
            match action {
                WishlistAction::Show => commands::wishlist::show(&mut storage, key, format)?,
                WishlistAction::Toggle { product } => {
                    commands::wishlist::toggle(&mut storage, key, ProductId::new(product), format)?
                }
                WishlistAction::Clear => commands::wishlist::clear(&mut storage, key, format)?,
            }
        }
        Commands::Reset => commands::reset::run(
            &mut storage,
            &[config.cart_key.as_str(), config.wishlist_key.as_str()],
        )?,
    };

    tracing::debug!(path = %storage.path().display(), "Command complete");
    Ok(output)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cart_add() {
        let cli = Cli::try_parse_from([
            "tc-cli", "cart", "add", "-p", "A", "-n", "Shirt", "--price", "10", "-v", "M",
        ])
        .unwrap();

        match cli.command {
            Commands::Cart {
                action:
                    CartAction::Add {
                        quantity,
                        price,
                        variant,
                        ..
                    },
            } => {
                assert_eq!(quantity, 1);
                assert_eq!(price, Money::from(10));
                assert_eq!(variant.as_deref(), Some("M"));
            }
            _ => panic!("expected cart add"),
        }
    }

    #[test]
    fn test_add_rejects_zero_quantity() {
        let result = Cli::try_parse_from([
            "tc-cli", "cart", "add", "-p", "A", "-n", "Shirt", "--price", "10", "-q", "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_add_rejects_price_beyond_max() {
        let result = Cli::try_parse_from([
            "tc-cli",
            "cart",
            "add",
            "-p",
            "A",
            "-n",
            "Gem",
            "--price",
            "79228162514264337593543950335",
            "-q",
            "2",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::try_parse_from(["tc-cli", "cart", "show", "--format", "json"]).ok();
        assert!(matches!(cli.map(|c| c.format), Some(OutputFormat::Json)));
    }
}
