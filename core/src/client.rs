//! Stateless HTTP request builder and response parser for the products API.
//!
//! # Design
//! `ProductClient` holds only the resource URL and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Every operation expects 200 on success; the status codes
//! that carry extra meaning differ per operation.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Product, ProductInput};

const UNKNOWN_DETAIL: &str = "Unknown error";

/// Synchronous, stateless client for the products API.
///
/// `resource_url` is the collection URL itself (for example
/// `https://host/products`); item URLs append `/{id}`.
#[derive(Debug, Clone)]
pub struct ProductClient {
    resource_url: String,
}

impl ProductClient {
    pub fn new(resource_url: &str) -> Self {
        Self {
            resource_url: resource_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    pub fn build_list_products(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.resource_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_product(&self, input: &ProductInput) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.resource_url.clone(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_product(&self, id: i64, input: &ProductInput) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_url(id),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_product(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        expect_ok(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// 400 carries a `detail` message meant for the user.
    pub fn parse_create_product(&self, response: HttpResponse) -> Result<(), ApiError> {
        if response.status == 400 {
            return Err(ApiError::Rejected {
                detail: rejection_detail(&response.body),
            });
        }
        expect_ok(&response)
    }

    pub fn parse_update_product(&self, response: HttpResponse) -> Result<(), ApiError> {
        reject_not_found(&response)?;
        expect_ok(&response)
    }

    pub fn parse_delete_product(&self, response: HttpResponse) -> Result<(), ApiError> {
        reject_not_found(&response)?;
        expect_ok(&response)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{id}", self.resource_url)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(input: &ProductInput) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn expect_ok(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn reject_not_found(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Ok(())
}

/// Pull the `detail` field out of an error body. Non-string details (such as
/// a list of field errors) are passed through as their JSON text.
fn rejection_detail(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return UNKNOWN_DETAIL.to_string();
    };
    match value.get("detail") {
        Some(serde_json::Value::String(detail)) => detail.clone(),
        Some(serde_json::Value::Null) | None => UNKNOWN_DETAIL.to_string(),
        Some(other) => other.to_string(),
    }
}
