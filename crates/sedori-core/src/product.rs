//! # Product Input Model
//!
//! The read-only product record supplied by the catalog collaborator.
//! The engine owns no product lifecycle; it only reads these fields as
//! text and number input to keyword matching and tariff estimation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::identity::ProductId;

/// A product under evaluation.
///
/// Free-text fields (name, description, category name, metadata values)
/// feed the keyword matcher; the retail price feeds tariff estimation.
/// Metadata keys are not matched, only their values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Listing title.
    pub name: String,
    /// Listing body text.
    pub description: String,
    /// Seller-assigned category name (free text, not a `DealerCategory`).
    pub category_name: String,
    /// Free-form key/value attributes (brand, condition, material, ...).
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    /// Declared retail price in JPY, if the seller set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retail_price: Option<f64>,
}

impl Product {
    /// Create a product with empty metadata and no price.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category_name: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(),
            name: name.into(),
            description: description.into(),
            category_name: category_name.into(),
            metadata: BTreeMap::new(),
            retail_price: None,
        }
    }

    /// Set a metadata attribute, returning `self` for chaining.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Set the declared retail price, returning `self` for chaining.
    #[must_use]
    pub fn with_retail_price(mut self, price: f64) -> Self {
        self.retail_price = Some(price);
        self
    }
}
