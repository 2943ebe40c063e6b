//! Client operations wired to a caller-supplied transport.
//!
//! # Design
//! `ProductApi` runs `build_*`, hands the request to a `Transport`, and feeds
//! the response to `parse_*`. Each call is a single attempt with no retry
//! and no state kept between calls. Input is validated before a request is
//! built, so invalid input never reaches the transport.

use std::sync::Arc;

use thiserror::Error;

use crate::client::ProductClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Product, ProductInput};

/// Failure to obtain any response at all (connection refused, DNS, TLS, I/O).
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Executes one HTTP round-trip.
///
/// Implementations must return non-2xx responses as `Ok`; status
/// interpretation belongs to `ProductClient`.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

#[derive(Debug, Clone)]
pub struct ProductApi<T> {
    client: ProductClient,
    transport: T,
}

impl<T: Transport> ProductApi<T> {
    pub fn new(resource_url: &str, transport: T) -> Self {
        Self {
            client: ProductClient::new(resource_url),
            transport,
        }
    }

    pub fn client(&self) -> &ProductClient {
        &self.client
    }

    pub fn create(&self, input: &ProductInput) -> Result<(), ApiError> {
        input.validate()?;
        let request = self.client.build_create_product(input)?;
        let response = self.send(&request)?;
        self.client.parse_create_product(response)
    }

    /// An empty `Ok` means the collection really is empty; failures are
    /// always `Err`.
    pub fn list(&self) -> Result<Vec<Product>, ApiError> {
        let request = self.client.build_list_products();
        let response = self.send(&request)?;
        self.client.parse_list_products(response)
    }

    /// Replaces every field of product `id`.
    pub fn update(&self, id: i64, input: &ProductInput) -> Result<(), ApiError> {
        input.validate()?;
        let request = self.client.build_update_product(id, input)?;
        let response = self.send(&request)?;
        self.client.parse_update_product(response)
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        let request = self.client.build_delete_product(id);
        let response = self.send(&request)?;
        self.client.parse_delete_product(response)
    }

    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = %request.method, path = %request.path, "sending request");
        let response = self.transport.execute(request).map_err(|e| {
            tracing::warn!(method = %request.method, path = %request.path, error = %e, "transport failed");
            ApiError::Transport(e.to_string())
        })?;
        if response.status == 200 {
            tracing::debug!(method = %request.method, path = %request.path, status = response.status, "request completed");
        } else {
            tracing::warn!(method = %request.method, path = %request.path, status = response.status, "request failed");
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::test_support::ScriptedTransport;
    use crate::types::Category;

    const URL: &str = "http://api.test/products";

    fn input(title: &str, price: &str) -> ProductInput {
        ProductInput {
            title: title.to_string(),
            description: String::new(),
            price: price.parse().unwrap(),
            available: true,
            category: Category::Computing,
        }
    }

    #[test]
    fn create_issues_exactly_one_post() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"{"id":1}"#);
        let api = ProductApi::new(URL, &transport);

        api.create(&input("Keyboard", "99.90")).unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[0].path, URL);
    }

    #[test]
    fn create_with_invalid_input_sends_nothing() {
        let transport = ScriptedTransport::new();
        let api = ProductApi::new(URL, &transport);

        assert!(matches!(api.create(&input("", "5.0")), Err(ApiError::Validation(_))));
        assert!(matches!(api.create(&input("Mouse", "0.0")), Err(ApiError::Validation(_))));
        assert!(matches!(api.create(&input("Mouse", "-1.0")), Err(ApiError::Validation(_))));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn update_with_invalid_input_sends_nothing() {
        let transport = ScriptedTransport::new();
        let api = ProductApi::new(URL, &transport);

        assert!(api.update(3, &input(" ", "5.0")).is_err());
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn list_distinguishes_empty_from_failure() {
        let transport = ScriptedTransport::new();
        transport.respond(200, "[]");
        transport.respond(500, "boom");
        transport.fail("connection refused");
        let api = ProductApi::new(URL, &transport);

        assert!(api.list().unwrap().is_empty());
        assert!(matches!(api.list(), Err(ApiError::HttpError { status: 500, .. })));
        assert!(matches!(api.list(), Err(ApiError::Transport(ref msg)) if msg == "connection refused"));
    }

    #[test]
    fn update_and_delete_target_the_given_id() {
        let transport = ScriptedTransport::new();
        transport.respond(200, "{}");
        transport.respond(404, r#"{"detail":"Product not found"}"#);
        let api = ProductApi::new(URL, &transport);

        api.update(8, &input("Desk", "300.0")).unwrap();
        assert!(matches!(api.delete(9), Err(ApiError::NotFound)));

        let sent = transport.requests();
        assert_eq!(sent[0].method, HttpMethod::Put);
        assert_eq!(sent[0].path, "http://api.test/products/8");
        assert_eq!(sent[1].method, HttpMethod::Delete);
        assert_eq!(sent[1].path, "http://api.test/products/9");
    }

    #[test]
    fn works_through_shared_transport() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond(200, "[]");
        let api = ProductApi::new(URL, transport.clone());

        assert!(api.list().unwrap().is_empty());
        assert_eq!(transport.requests().len(), 1);
    }
}
