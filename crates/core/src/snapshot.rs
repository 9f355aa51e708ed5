//! Persisted snapshot codec.
//!
//! Every string read from or written to storage passes through this module.
//! Decoding parses the JSON into typed records and then validates the
//! invariants the stores rely on, so malformed input is rejected here and
//! nowhere else.

use std::collections::HashSet;

use thiserror::Error;

use crate::types::{LineItem, ProductId};

/// Errors that can occur when decoding a persisted snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot is not valid JSON or does not match the record shape.
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// A line carries a quantity of zero.
    #[error("line for product {product_id} has zero quantity")]
    ZeroQuantity {
        /// Product of the offending line.
        product_id: ProductId,
    },

    /// A line carries a negative unit price.
    #[error("line for product {product_id} has a negative unit price")]
    NegativePrice {
        /// Product of the offending line.
        product_id: ProductId,
    },

    /// A line has an empty product id.
    #[error("line {index} has an empty product id")]
    EmptyProductId {
        /// Position of the offending line.
        index: usize,
    },

    /// Two lines share the same identity key.
    #[error("duplicate line for product {product_id} (variant {variant:?})")]
    DuplicateLine {
        /// Product of the duplicated line.
        product_id: ProductId,
        /// Variant of the duplicated line.
        variant: Option<String>,
    },

    /// A wishlist lists the same product twice.
    #[error("duplicate wishlist entry for product {product_id}")]
    DuplicateWishlistEntry {
        /// The duplicated product.
        product_id: ProductId,
    },
}

/// Encode cart lines as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(items: &[LineItem]) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(items)?)
}

/// Decode and validate cart lines.
///
/// # Errors
///
/// Returns an error if the input is not a JSON array of line items, or if any
/// line has a zero quantity, a negative price, an empty product id, or shares
/// its identity key with an earlier line.
pub fn decode(raw: &str) -> Result<Vec<LineItem>, SnapshotError> {
    let items: Vec<LineItem> = serde_json::from_str(raw)?;
    validate(&items)?;
    Ok(items)
}

/// Check the cart invariants over a sequence of lines.
///
/// # Errors
///
/// Returns the first violation found, in line order.
pub fn validate(items: &[LineItem]) -> Result<(), SnapshotError> {
    let mut seen = HashSet::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        if item.product_id.is_empty() {
            return Err(SnapshotError::EmptyProductId { index });
        }
        if item.quantity == 0 {
            return Err(SnapshotError::ZeroQuantity {
                product_id: item.product_id.clone(),
            });
        }
        if item.unit_price.is_negative() {
            return Err(SnapshotError::NegativePrice {
                product_id: item.product_id.clone(),
            });
        }
        if !seen.insert(item.key()) {
            return Err(SnapshotError::DuplicateLine {
                product_id: item.product_id.clone(),
                variant: item.variant.clone(),
            });
        }
    }

    Ok(())
}

/// Encode wishlist entries as a JSON array of product ids.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_wishlist(items: &[ProductId]) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(items)?)
}

/// Decode and validate wishlist entries.
///
/// # Errors
///
/// Returns an error if the input is not a JSON array of strings, or if an id
/// is empty or listed twice.
pub fn decode_wishlist(raw: &str) -> Result<Vec<ProductId>, SnapshotError> {
    let items: Vec<ProductId> = serde_json::from_str(raw)?;
    let mut seen = HashSet::with_capacity(items.len());

    for (index, id) in items.iter().enumerate() {
        if id.is_empty() {
            return Err(SnapshotError::EmptyProductId { index });
        }
        if !seen.insert(id) {
            return Err(SnapshotError::DuplicateWishlistEntry {
                product_id: id.clone(),
            });
        }
    }

    Ok(items)
}
