//! Integration tests for Tidecart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tidecart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - End-to-end cart and wishlist flows over real storage
//! - `cart_properties` - Property tests of the cart invariants
//!
//! This library holds the fixtures shared by both.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tidecart_core::{LineItem, Money, ProductId};
use tidecart_storefront::{CartStore, Storage};

/// Build a line item with a price given in cents.
#[must_use]
pub fn line(product: &str, variant: Option<&str>, cents: i64, quantity: u32) -> LineItem {
    let item = LineItem::new(product, format!("Product {product}"), Money::from_cents(cents), quantity)
        .with_image(format!("{product}.jpg"));
    match variant {
        Some(v) => item.with_variant(v),
        None => item,
    }
}

/// One user-triggered cart operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOp {
    Add(LineItem),
    Remove {
        product: String,
        variant: Option<String>,
    },
    Update {
        product: String,
        variant: Option<String>,
        quantity: u32,
    },
    Clear,
}

impl CartOp {
    /// Apply the operation to a cart.
    pub fn apply<S: Storage>(&self, cart: &mut CartStore<S>) {
        match self {
            Self::Add(item) => cart.add_item(item.clone()),
            Self::Remove { product, variant } => {
                cart.remove_item(&ProductId::new(product.as_str()), variant.as_deref());
            }
            Self::Update {
                product,
                variant,
                quantity,
            } => cart.update_quantity(
                &ProductId::new(product.as_str()),
                variant.as_deref(),
                *quantity,
            ),
            Self::Clear => cart.clear(),
        }
    }
}

/// Apply every operation in order.
pub fn apply_all<S: Storage>(cart: &mut CartStore<S>, ops: &[CartOp]) {
    for op in ops {
        op.apply(cart);
    }
}
