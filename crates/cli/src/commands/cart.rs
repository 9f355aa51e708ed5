//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! # Add two medium shirts
//! tc-cli cart add -p A -n Shirt --price 10 -q 2 -v M
//!
//! # Change the quantity (0 removes the line)
//! tc-cli cart update -p A -v M -q 1
//!
//! # Show the cart as JSON
//! tc-cli --format json cart show
//! ```

use std::fmt::Write as _;

use tidecart_core::{LineItem, ProductId};
use tidecart_storefront::{CartStore, Storage};

use super::OutputFormat;

/// Show the current cart.
///
/// # Errors
///
/// Returns an error if JSON rendering fails.
pub fn show<S: Storage>(
    storage: S,
    key: &str,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let cart = CartStore::hydrate_with_key(storage, key);
    render(&cart, format)
}

/// Add a line, merging with an existing line of the same product and variant.
///
/// # Errors
///
/// Returns an error if JSON rendering fails.
pub fn add<S: Storage>(
    storage: S,
    key: &str,
    item: LineItem,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let mut cart = CartStore::hydrate_with_key(storage, key);
    cart.add_item(item);
    render(&cart, format)
}

/// Remove a line.
///
/// # Errors
///
/// Returns an error if JSON rendering fails.
pub fn remove<S: Storage>(
    storage: S,
    key: &str,
    product_id: &ProductId,
    variant: Option<&str>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let mut cart = CartStore::hydrate_with_key(storage, key);
    cart.remove_item(product_id, variant);
    render(&cart, format)
}

/// Set a line's quantity.
///
/// # Errors
///
/// Returns an error if JSON rendering fails.
pub fn update<S: Storage>(
    storage: S,
    key: &str,
    product_id: &ProductId,
    variant: Option<&str>,
    quantity: u32,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let mut cart = CartStore::hydrate_with_key(storage, key);
    cart.update_quantity(product_id, variant, quantity);
    render(&cart, format)
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if JSON rendering fails.
pub fn clear<S: Storage>(
    storage: S,
    key: &str,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let mut cart = CartStore::hydrate_with_key(storage, key);
    cart.clear();
    render(&cart, format)
}

fn render<S: Storage>(cart: &CartStore<S>, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&cart.summary()),
        OutputFormat::Text => Ok(render_text(cart)),
    }
}

fn render_text<S: Storage>(cart: &CartStore<S>) -> String {
    if cart.is_empty() {
        return "Cart is empty".to_string();
    }

    let count = cart.count();
    let noun = if count == 1 { "item" } else { "items" };
    let mut out = format!("Cart ({count} {noun})\n");
    for line in cart.items() {
        let variant = line
            .variant
            .as_deref()
            .map(|v| format!(" [{v}]"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  {}{variant}  {}  {} x {} = {}",
            line.product_id,
            line.name,
            line.quantity,
            line.unit_price,
            line.line_total(),
        );
    }
    let _ = write!(out, "Total: {}", cart.total());
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tidecart_core::Money;
    use tidecart_storefront::MemoryStorage;

    use super::*;

    fn shirt(quantity: u32) -> LineItem {
        LineItem::new("A", "Shirt", Money::from(10), quantity).with_variant("M")
    }

    #[test]
    fn test_show_empty() {
        let output = show(MemoryStorage::new(), "cart", OutputFormat::Text).unwrap();
        assert_eq!(output, "Cart is empty");
    }

    #[test]
    fn test_add_then_show_across_invocations() {
        let mut storage = MemoryStorage::new();
        add(&mut storage, "cart", shirt(1), OutputFormat::Text).unwrap();
        add(&mut storage, "cart", shirt(2), OutputFormat::Text).unwrap();

        let output = show(&mut storage, "cart", OutputFormat::Text).unwrap();
        assert_eq!(
            output,
            "Cart (3 items)\n  A [M]  Shirt  3 x $10.00 = $30.00\nTotal: $30.00"
        );
    }

    #[test]
    fn test_update_and_remove() {
        let mut storage = MemoryStorage::new();
        let id = ProductId::new("A");
        add(&mut storage, "cart", shirt(3), OutputFormat::Text).unwrap();

        let output = update(&mut storage, "cart", &id, Some("M"), 1, OutputFormat::Text).unwrap();
        assert!(output.starts_with("Cart (1 item)\n"));

        let output = remove(&mut storage, "cart", &id, Some("M"), OutputFormat::Text).unwrap();
        assert_eq!(output, "Cart is empty");
    }

    #[test]
    fn test_json_output() {
        let mut storage = MemoryStorage::new();
        let output = add(&mut storage, "cart", shirt(2), OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["total"], 20.0);
        assert_eq!(value["items"][0]["variant"], "M");
    }

    #[test]
    fn test_clear() {
        let mut storage = MemoryStorage::new();
        add(&mut storage, "cart", shirt(2), OutputFormat::Text).unwrap();
        let output = clear(&mut storage, "cart", OutputFormat::Text).unwrap();
        assert_eq!(output, "Cart is empty");
        assert_eq!(storage.get("cart").as_deref(), Some("[]"));
    }
}
