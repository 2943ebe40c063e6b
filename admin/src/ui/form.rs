//! Form payloads and the values used to pre-populate forms.

use product_core::{ApiError, Category, Decimal, Product, ProductInput};
use serde::Deserialize;

/// Fields posted by the insert and edit forms.
///
/// Everything is optional on the wire: a missing field reaches validation as
/// empty instead of being rejected by the extractor. Unchecked checkboxes are
/// simply absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub available: Option<String>,
    pub category: String,
}

impl ProductForm {
    /// Accepts `,` as the decimal separator.
    pub fn parse_price(&self) -> Option<Decimal> {
        self.price.trim().replace(',', ".").parse().ok()
    }

    pub fn to_input(&self) -> Result<ProductInput, ApiError> {
        let price = self
            .parse_price()
            .ok_or(ApiError::Validation("price is not a number"))?;
        let input = ProductInput {
            title: self.title.clone(),
            description: self.description.clone(),
            price,
            available: self.available.is_some(),
            category: Category::coerce(&self.category),
        };
        input.validate()?;
        Ok(input)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeleteForm {
    pub confirm: Option<String>,
}

/// `?id=` on the edit and delete screens.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub id: Option<i64>,
}

/// What a product form shows when rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    pub title: String,
    pub description: String,
    pub price: String,
    pub available: bool,
    pub category: Category,
}

impl FormValues {
    /// Insert screen defaults.
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: "0.01".to_string(),
            available: true,
            category: Category::default(),
        }
    }
}

impl From<&Product> for FormValues {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            available: product.available,
            category: product.category(),
        }
    }
}

impl From<&ProductForm> for FormValues {
    fn from(form: &ProductForm) -> Self {
        Self {
            title: form.title.clone(),
            description: form.description.clone(),
            price: form.price.clone(),
            available: form.available.is_some(),
            category: Category::coerce(&form.category),
        }
    }
}
