//! Domain DTOs for the products API.
//!
//! # Design
//! `Product` mirrors what the API returns and is lenient: older records may
//! lack a description or carry a category outside the fixed set.
//! `ProductInput` is what we send, and is strict: its category is always one
//! of the known variants.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A product as returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub available: bool,
    #[serde(default)]
    pub category: Option<String>,
}

impl Product {
    /// Selection label, `"<id> - <title>"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.id, self.title)
    }

    /// Stored category mapped onto the fixed set.
    pub fn category(&self) -> Category {
        Category::coerce(self.category.as_deref().unwrap_or_default())
    }
}

/// Request payload for creating a product or replacing all of its fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

impl ProductInput {
    /// Local checks run before any request: a non-blank title and a price
    /// above zero.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::Validation("title is empty"));
        }
        if self.price <= Decimal::ZERO {
            return Err(ApiError::Validation("price must be greater than zero"));
        }
        Ok(())
    }
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price,
            available: product.available,
            category: product.category(),
        }
    }
}

/// The fixed set of categories offered by the forms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Category {
    Electronics,
    Computing,
    Furniture,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Computing,
        Category::Furniture,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Computing => "Computing",
            Category::Furniture => "Furniture",
            Category::Other => "Other",
        }
    }

    /// Maps free text onto the fixed set, ignoring case and surrounding
    /// whitespace. Anything unrecognised becomes `Other`.
    pub fn coerce(raw: &str) -> Self {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(raw))
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
