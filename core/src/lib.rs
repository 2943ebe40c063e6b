//! Synchronous API client core for the remote products service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). A `Transport` supplied by the
//! caller executes the actual round-trip, so everything in this crate stays
//! deterministic and testable.
//!
//! # Design
//! - `ProductClient` is stateless: it holds only the resource URL.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `ProductApi` glues a client to a transport, validates input before any
//!   request is issued, and returns a `Result` per operation.
//! - `Notice` turns those results into the messages shown to the user.
//! - Prices are `Decimal` in memory and plain JSON numbers on the wire.
//! - `PriceFormat` is passed explicitly wherever prices are displayed.

pub mod api;
pub mod client;
pub mod error;
pub mod format;
pub mod http;
pub mod notice;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod types;

pub use api::{ProductApi, Transport, TransportError};
pub use client::ProductClient;
pub use error::ApiError;
pub use format::PriceFormat;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notice::{Level, Notice, Operation};
pub use rust_decimal::Decimal;
pub use types::{Category, Product, ProductInput};
