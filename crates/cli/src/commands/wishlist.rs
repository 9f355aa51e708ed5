//! Wishlist commands.

use tidecart_core::ProductId;
use tidecart_storefront::{Storage, WishlistStore};

use super::OutputFormat;

/// Show the wishlist.
///
/// # Errors
///
/// Returns an error if JSON rendering fails.
pub fn show<S: Storage>(
    storage: S,
    key: &str,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    render(&WishlistStore::hydrate_with_key(storage, key), format)
}

/// Add or remove a product.
///
/// # Errors
///
/// Returns an error if JSON rendering fails.
pub fn toggle<S: Storage>(
    storage: S,
    key: &str,
    product_id: ProductId,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let mut wishlist = WishlistStore::hydrate_with_key(storage, key);
    let wishlisted = wishlist.toggle(product_id);
    tracing::info!(wishlisted, "Wishlist updated");
    render(&wishlist, format)
}

/// Empty the wishlist.
///
/// # Errors
///
/// Returns an error if JSON rendering fails.
pub fn clear<S: Storage>(
    storage: S,
    key: &str,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let mut wishlist = WishlistStore::hydrate_with_key(storage, key);
    wishlist.clear();
    render(&wishlist, format)
}

fn render<S: Storage>(
    wishlist: &WishlistStore<S>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(wishlist.items()),
        OutputFormat::Text if wishlist.is_empty() => Ok("Wishlist is empty".to_string()),
        OutputFormat::Text => {
            let lines: Vec<String> = wishlist
                .items()
                .iter()
                .map(|id| format!("  {id}"))
                .collect();
            Ok(format!("Wishlist ({})\n{}", wishlist.len(), lines.join("\n")))
        }
    }
}
