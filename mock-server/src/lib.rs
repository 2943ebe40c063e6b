//! In-memory stand-in for the remote products API.
//!
//! Answers 200 for every successful operation, 400 with a `detail` body for
//! rejected input, and 404 with a `detail` body for unknown ids.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub available: bool,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Detail {
    pub detail: String,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    products: BTreeMap<i64, Product>,
}

impl Store {
    fn check(&self, payload: &ProductPayload, updating: Option<i64>) -> Result<(), Rejection> {
        if payload.title.trim().is_empty() {
            return Err(bad_request("Title must not be empty"));
        }
        if payload.price <= 0.0 {
            return Err(bad_request("Price must be greater than zero"));
        }
        let duplicate = self
            .products
            .values()
            .any(|p| Some(p.id) != updating && p.title.eq_ignore_ascii_case(payload.title.trim()));
        if duplicate {
            return Err(bad_request("A product with this title already exists"));
        }
        Ok(())
    }
}

pub type Db = Arc<RwLock<Store>>;

type Rejection = (StatusCode, Json<Detail>);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", put(update_product).delete(delete_product))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn bad_request(detail: &str) -> Rejection {
    (
        StatusCode::BAD_REQUEST,
        Json(Detail {
            detail: detail.to_string(),
        }),
    )
}

fn not_found() -> Rejection {
    (
        StatusCode::NOT_FOUND,
        Json(Detail {
            detail: "Product not found".to_string(),
        }),
    )
}

fn build(id: i64, payload: ProductPayload) -> Product {
    Product {
        id,
        title: payload.title.trim().to_string(),
        description: payload.description,
        price: payload.price,
        available: payload.available,
        category: payload.category,
    }
}

async fn list_products(State(db): State<Db>) -> Json<Vec<Product>> {
    let store = db.read().await;
    Json(store.products.values().cloned().collect())
}

async fn create_product(
    State(db): State<Db>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, Rejection> {
    let mut store = db.write().await;
    store.check(&payload, None)?;
    store.next_id += 1;
    let product = build(store.next_id, payload);
    store.products.insert(product.id, product.clone());
    tracing::info!(id = product.id, title = %product.title, "product created");
    Ok(Json(product))
}

async fn update_product(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, Rejection> {
    let mut store = db.write().await;
    if !store.products.contains_key(&id) {
        return Err(not_found());
    }
    store.check(&payload, Some(id))?;
    let product = build(id, payload);
    store.products.insert(id, product.clone());
    tracing::info!(id, "product updated");
    Ok(Json(product))
}

async fn delete_product(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, Rejection> {
    let mut store = db.write().await;
    let product = store.products.remove(&id).ok_or_else(not_found)?;
    tracing::info!(id, "product deleted");
    Ok(Json(product))
}
