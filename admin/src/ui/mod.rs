//! Form-driven web UI over the products API.
//!
//! # Design
//! Four independent screens share nothing but `AppState`, which is
//! immutable. Every page render fetches fresh data, and each form submission
//! makes exactly one blocking API call on tokio's blocking pool before the
//! page is rendered. Failures never become HTTP errors here; they are
//! rendered as notices on the page.

pub mod form;
pub mod render;
pub mod screens;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use product_core::{ApiError, PriceFormat, ProductApi, Transport};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub type SharedTransport = Arc<dyn Transport + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    api: ProductApi<SharedTransport>,
    price_format: PriceFormat,
}

impl AppState {
    pub fn new(resource_url: &str, transport: SharedTransport, price_format: PriceFormat) -> Self {
        Self {
            api: ProductApi::new(resource_url, transport),
            price_format,
        }
    }

    pub fn price_format(&self) -> &PriceFormat {
        &self.price_format
    }

    /// Run one API call off the async runtime and wait for it.
    pub(crate) async fn call<R, F>(&self, op: F) -> Result<R, ApiError>
    where
        F: FnOnce(&ProductApi<SharedTransport>) -> Result<R, ApiError> + Send + 'static,
        R: Send + 'static,
    {
        let api = self.api.clone();
        match tokio::task::spawn_blocking(move || op(&api)).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, "API call task failed");
                Err(ApiError::Transport(e.to_string()))
            }
        }
    }
}

/// The four screens offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Insert,
    Edit,
    List,
    Delete,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Insert, Screen::Edit, Screen::List, Screen::Delete];

    pub fn path(self) -> &'static str {
        match self {
            Screen::Insert => "/insert",
            Screen::Edit => "/edit",
            Screen::List => "/list",
            Screen::Delete => "/delete",
        }
    }

    /// Label in the menu.
    pub fn label(self) -> &'static str {
        match self {
            Screen::Insert => "Insert Products",
            Screen::Edit => "Edit Products",
            Screen::List => "View Products",
            Screen::Delete => "Delete Products",
        }
    }

    /// Heading on the screen itself.
    pub fn heading(self) -> &'static str {
        match self {
            Screen::Insert => "Insert Product",
            Screen::Edit => "Edit Product",
            Screen::List => "Product List",
            Screen::Delete => "Delete Product",
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to(Screen::Insert.path()) }))
        .route("/healthz", get(health_check))
        .route("/insert", get(screens::insert_page).post(screens::insert_submit))
        .route("/edit", get(screens::edit_page))
        .route("/edit/{id}", post(screens::edit_submit))
        .route("/list", get(screens::list_page))
        .route("/delete", get(screens::delete_page))
        .route("/delete/{id}", post(screens::delete_submit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let addr = listener.local_addr().context("failed to read bound address")?;
    tracing::info!("product admin listening on http://{addr}");
    axum::serve(listener, router(state))
        .await
        .context("HTTP server failed")
}

async fn health_check() -> &'static str {
    "ok"
}
