//! Screen tests through the router with a scripted transport.
//!
//! Each test queues the API responses it expects, drives one screen, and
//! checks both the rendered page and the requests that reached the API.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{self, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use product_admin::ui::{router, AppState};
use product_core::{test_support::ScriptedTransport, HttpMethod, PriceFormat};
use tower::ServiceExt;

const URL: &str = "http://api.test/products";

const CATALOG: &str = r#"[
    {"id":2,"title":"Keyboard","description":"","price":99.9,"available":true,"category":"Computing"},
    {"id":5,"title":"Lamp","description":null,"price":1250.0,"available":false,"category":"Toys"}
]"#;

fn setup() -> (Arc<ScriptedTransport>, Router) {
    let transport = Arc::new(ScriptedTransport::new());
    let state = AppState::new(URL, transport.clone(), PriceFormat::pt_br());
    (transport, router(state))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn page(app: Router, request: Request<Body>) -> String {
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// --- navigation ---

#[tokio::test]
async fn root_redirects_to_insert_screen() {
    let (_, app) = setup();
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[http::header::LOCATION], "/insert");
}

#[tokio::test]
async fn healthz_answers_ok() {
    let (transport, app) = setup();
    assert_eq!(page(app, get("/healthz")).await, "ok");
    assert!(transport.requests().is_empty());
}

// --- insert ---

#[tokio::test]
async fn insert_page_needs_no_api_call() {
    let (transport, app) = setup();
    let html = page(app, get("/insert")).await;
    assert!(html.contains("<h2>Insert Product</h2>"));
    assert!(html.contains("name=\"available\" checked"));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn insert_success_posts_once_and_confirms() {
    let (transport, app) = setup();
    transport.respond(200, r#"{"id":1}"#);

    let html = page(
        app,
        post_form(
            "/insert",
            "title=Keyboard&description=&price=99.90&available=on&category=Computing",
        ),
    )
    .await;

    assert!(html.contains("<div class=\"notice success\">Product &#39;Keyboard&#39; added successfully!</div>"));
    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, HttpMethod::Post);
    assert_eq!(sent[0].path, URL);
    let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "title": "Keyboard",
            "description": "",
            "price": 99.90,
            "available": true,
            "category": "Computing"
        })
    );
}

#[tokio::test]
async fn insert_rejection_shows_server_detail_and_keeps_input() {
    let (transport, app) = setup();
    transport.respond(400, r#"{"detail":"duplicate title"}"#);

    let html = page(
        app,
        post_form(
            "/insert",
            "title=Keyboard&description=&price=99.90&available=on&category=Computing",
        ),
    )
    .await;

    assert!(html.contains("<div class=\"notice error\">duplicate title</div>"));
    assert!(html.contains("value=\"Keyboard\""));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn insert_with_missing_fields_never_calls_the_api() {
    for body in [
        "title=&price=10&category=Other",
        "title=Mouse&price=0&category=Other",
        "title=Mouse&price=-2&category=Other",
        "title=Mouse&price=&category=Other",
    ] {
        let (transport, app) = setup();
        let html = page(app, post_form("/insert", body)).await;
        assert!(
            html.contains("<div class=\"notice error\">Please fill in all required fields.</div>"),
            "{body}"
        );
        assert!(transport.requests().is_empty(), "{body}");
    }
}

#[tokio::test]
async fn insert_transport_failure_reports_raw_text() {
    let (transport, app) = setup();
    transport.fail("connection refused");

    let html = page(app, post_form("/insert", "title=Mouse&price=10&category=Other")).await;
    assert!(html.contains("Error connecting to the API: connection refused"));
}

// --- list ---

#[tokio::test]
async fn list_renders_table_with_locale_prices() {
    let (transport, app) = setup();
    transport.respond(200, CATALOG);

    let html = page(app, get("/list")).await;
    assert!(html.contains("<td>Keyboard</td>"));
    assert!(html.contains("R$ 99,90"));
    assert!(html.contains("R$ 1.250,00"));
    assert!(!html.contains("<div class=\"notice"));
}

#[tokio::test]
async fn list_empty_shows_warning() {
    let (transport, app) = setup();
    transport.respond(200, "[]");

    let html = page(app, get("/list")).await;
    assert!(html.contains("<div class=\"notice warning\">No products found.</div>"));
    assert!(!html.contains("<table>"));
}

#[tokio::test]
async fn list_failure_is_an_error_not_an_empty_list() {
    let (transport, app) = setup();
    transport.respond(500, "boom");

    let html = page(app, get("/list")).await;
    assert!(html.contains("<div class=\"notice error\">Error fetching products: 500</div>"));
    assert!(!html.contains("No products found."));
}

// --- edit ---

#[tokio::test]
async fn edit_page_defaults_to_first_product() {
    let (transport, app) = setup();
    transport.respond(200, CATALOG);

    let html = page(app, get("/edit")).await;
    assert!(html.contains("<option value=\"2\" selected>2 - Keyboard</option>"));
    assert!(html.contains("<option value=\"5\">5 - Lamp</option>"));
    assert!(html.contains("action=\"/edit/2\""));
    assert!(html.contains("value=\"99.9\""));
}

#[tokio::test]
async fn edit_page_coerces_unknown_category_to_other() {
    let (transport, app) = setup();
    transport.respond(200, CATALOG);

    let html = page(app, get("/edit?id=5")).await;
    assert!(html.contains("action=\"/edit/5\""));
    assert!(html.contains("<option value=\"Other\" selected>Other</option>"));
    assert!(!html.contains(" checked"));
}

#[tokio::test]
async fn edit_page_with_no_products_shows_warning_only() {
    let (transport, app) = setup();
    transport.respond(200, "[]");

    let html = page(app, get("/edit")).await;
    assert!(html.contains("No products found."));
    assert!(!html.contains("<form"));
}

#[tokio::test]
async fn edit_submit_replaces_all_fields_of_selected_id() {
    let (transport, app) = setup();
    transport.respond(200, "{}");
    transport.respond(200, CATALOG);

    let html = page(
        app,
        post_form(
            "/edit/5",
            "title=Desk+lamp&description=LED&price=130,00&category=Furniture",
        ),
    )
    .await;

    assert!(html.contains("Product &#39;Desk lamp&#39; updated successfully!"));
    let sent = transport.requests();
    assert_eq!(sent[0].method, HttpMethod::Put);
    assert_eq!(sent[0].path, "http://api.test/products/5");
    let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "title": "Desk lamp",
            "description": "LED",
            "price": 130.0,
            "available": false,
            "category": "Furniture"
        })
    );
    assert_eq!(sent[1].method, HttpMethod::Get);
}

#[tokio::test]
async fn edit_submit_not_found_uses_fixed_message() {
    let (transport, app) = setup();
    transport.respond(404, r#"{"detail":"Product not found"}"#);
    transport.respond(200, CATALOG);

    let html = page(app, post_form("/edit/7", "title=Ghost&price=1&category=Other")).await;
    assert!(html.contains("<div class=\"notice error\">Product not found.</div>"));
    assert!(!html.contains("Error updating product"));
    assert_eq!(transport.requests()[0].path, "http://api.test/products/7");
}

#[tokio::test]
async fn edit_submit_other_failure_shows_status() {
    let (transport, app) = setup();
    transport.respond(500, "");
    transport.respond(200, CATALOG);

    let html = page(app, post_form("/edit/2", "title=Keyboard+v2&price=5&category=Computing")).await;
    assert!(html.contains("Error updating product: 500"));
    assert!(html.contains("value=\"Keyboard v2\""));
}

#[tokio::test]
async fn edit_page_keeps_stored_price_precision() {
    let (transport, app) = setup();
    transport.respond(
        200,
        r#"[{"id":3,"title":"Bolt","description":"M4","price":12.345,"available":true,"category":"Other"}]"#,
    );

    let html = page(app, get("/edit?id=3")).await;
    assert!(html.contains("name=\"price\" min=\"0.01\" step=\"any\" value=\"12.345\""));
}

#[tokio::test]
async fn list_rounds_half_cents_away_from_zero() {
    let (transport, app) = setup();
    transport.respond(
        200,
        r#"[{"id":1,"title":"Cable","price":1.005,"available":true,"category":"Other"}]"#,
    );

    let html = page(app, get("/list")).await;
    assert!(html.contains("R$ 1,01"));
}

// --- delete ---

#[tokio::test]
async fn delete_page_offers_confirmation() {
    let (transport, app) = setup();
    transport.respond(200, CATALOG);

    let html = page(app, get("/delete?id=5")).await;
    assert!(html.contains("action=\"/delete/5\""));
    assert!(html.contains("name=\"confirm\""));
}

#[tokio::test]
async fn delete_without_confirmation_sends_no_delete() {
    let (transport, app) = setup();
    transport.respond(200, CATALOG);

    let html = page(app, post_form("/delete/5", "")).await;
    assert!(html.contains("Please confirm the deletion."));
    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, HttpMethod::Get);
}

#[tokio::test]
async fn delete_confirmed_targets_the_id() {
    let (transport, app) = setup();
    transport.respond(200, "{}");
    transport.respond(200, "[]");

    let html = page(app, post_form("/delete/5", "confirm=on")).await;
    assert!(html.contains("<div class=\"notice success\">Product 5 deleted successfully!</div>"));
    assert!(html.contains("No products found."));
    let sent = transport.requests();
    assert_eq!(sent[0].method, HttpMethod::Delete);
    assert_eq!(sent[0].path, "http://api.test/products/5");
}

#[tokio::test]
async fn delete_not_found_is_distinct_from_generic_failure() {
    let (transport, app) = setup();
    transport.respond(404, "");
    transport.respond(200, CATALOG);
    let html = page(app, post_form("/delete/9", "confirm=on")).await;
    assert!(html.contains("Product not found."));

    let (transport, app) = setup();
    transport.respond(503, "");
    transport.respond(200, CATALOG);
    let html = page(app, post_form("/delete/9", "confirm=on")).await;
    assert!(html.contains("Error deleting product: 503"));
    assert!(!html.contains("Product not found."));
}
