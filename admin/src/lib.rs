//! Web admin for the remote products API, plus the manual smoke menu.
//!
//! # Overview
//! - `ui`: axum screens for inserting, editing, listing and deleting.
//! - `transport`: the ureq-backed `Transport` both binaries hand to
//!   `product_core::ProductApi`.
//! - `settings` / `telemetry`: layered configuration and tracing setup.
//! - `smoke` / `database`: the interactive checks run by `product-smoke`.

pub mod database;
pub mod settings;
pub mod smoke;
pub mod telemetry;
pub mod transport;
pub mod ui;
