//! Cart line items and the catalog products they are built from.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Money;

/// Identity of a cart line: the product plus its optional variant.
///
/// Two additions land on the same line iff both parts match. A missing
/// variant is its own key value and never equals any named variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineKey {
    pub product_id: ProductId,
    pub variant: Option<String>,
}

impl LineKey {
    /// Create a key from a product id and optional variant.
    #[must_use]
    pub fn new(product_id: impl Into<ProductId>, variant: Option<&str>) -> Self {
        Self {
            product_id: product_id.into(),
            variant: variant.map(str::to_owned),
        }
    }

    /// Returns true if this key identifies the given product/variant pair.
    #[must_use]
    pub fn matches(&self, product_id: &ProductId, variant: Option<&str>) -> bool {
        self.product_id == *product_id && self.variant.as_deref() == variant
    }
}

/// One entry in the cart.
///
/// Field names follow the persisted JSON schema (`productId`, `unitPrice`,
/// `imageRef`, optional `variant`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub image_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl LineItem {
    /// Create a line item without a variant.
    #[must_use]
    pub fn new(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            unit_price,
            quantity,
            image_ref: String::new(),
            variant: None,
        }
    }

    /// Set the variant (size, color, ...).
    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// Build a line item for a catalog product.
    ///
    /// The line's image is the product's first image, or empty if the product
    /// has none.
    #[must_use]
    pub fn from_product(product: &Product, quantity: u32, variant: Option<&str>) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            image_ref: product.images.first().cloned().unwrap_or_default(),
            variant: variant.map(str::to_owned),
        }
    }

    /// The identity key of this line.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product_id.clone(),
            variant: self.variant.clone(),
        }
    }

    /// Returns true if this line has the given identity.
    #[must_use]
    pub fn matches(&self, product_id: &ProductId, variant: Option<&str>) -> bool {
        self.product_id == *product_id && self.variant.as_deref() == variant
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// A catalog product as handed to the cart by a product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub images: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tee() -> Product {
        Product {
            id: ProductId::new("tee"),
            name: "Pineapple Tee".to_string(),
            price: Money::from_cents(2500),
            images: vec!["tee-front.jpg".to_string(), "tee-back.jpg".to_string()],
        }
    }

    #[test]
    fn test_missing_variant_is_distinct_key() {
        let plain = LineItem::new("A", "Shirt", Money::from(10), 1);
        let sized = plain.clone().with_variant("M");

        assert_ne!(plain.key(), sized.key());
        assert_eq!(plain.key(), LineKey::new("A", None));
        assert_eq!(sized.key(), LineKey::new("A", Some("M")));
    }

    #[test]
    fn test_matches() {
        let line = LineItem::new("A", "Shirt", Money::from(10), 1).with_variant("M");
        let id = ProductId::new("A");

        assert!(line.matches(&id, Some("M")));
        assert!(!line.matches(&id, Some("L")));
        assert!(!line.matches(&id, None));
        assert!(line.key().matches(&id, Some("M")));
    }

    #[test]
    fn test_from_product_uses_first_image() {
        let line = LineItem::from_product(&tee(), 2, Some("L"));
        assert_eq!(line.image_ref, "tee-front.jpg");
        assert_eq!(line.unit_price, Money::from_cents(2500));
        assert_eq!(line.quantity, 2);
        assert_eq!(line.variant.as_deref(), Some("L"));
    }

    #[test]
    fn test_from_product_without_images() {
        let mut product = tee();
        product.images.clear();
        let line = LineItem::from_product(&product, 1, None);
        assert_eq!(line.image_ref, "");
    }

    #[test]
    fn test_line_total() {
        let line = LineItem::new("A", "Shirt", Money::from_cents(1999), 3);
        assert_eq!(line.line_total(), Money::from_cents(5997));
    }

    #[test]
    fn test_json_shape() {
        let line = LineItem::new("A", "Shirt", Money::from(10), 2).with_image("a.jpg");
        let value = serde_json::to_value(&line).unwrap();

        assert_eq!(value["productId"], "A");
        assert_eq!(value["unitPrice"], 10.0);
        assert_eq!(value["quantity"], 2);
        assert_eq!(value["imageRef"], "a.jpg");
        assert!(value.get("variant").is_none());

        let sized = line.with_variant("M");
        let value = serde_json::to_value(&sized).unwrap();
        assert_eq!(value["variant"], "M");
    }
}
