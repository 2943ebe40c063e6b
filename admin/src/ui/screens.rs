//! Handlers for the insert, edit, list and delete screens.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Form,
};
use product_core::{Notice, Operation, Product};

use super::form::{DeleteForm, FormValues, ProductForm, Selection};
use super::{render, AppState, Screen};

/// Products for a selection screen, or the notice explaining why there are
/// none to show.
async fn fetch_products(state: &AppState) -> Result<Vec<Product>, Notice> {
    match state.call(|api| api.list()).await {
        Ok(products) if products.is_empty() => Err(Notice::empty_list()),
        Ok(products) => Ok(products),
        Err(e) => Err(Notice::from_error(Operation::List, &e)),
    }
}

/// The product matching `id`, falling back to the first one.
fn pick(products: &[Product], id: Option<i64>) -> &Product {
    id.and_then(|id| products.iter().find(|p| p.id == id))
        .unwrap_or(&products[0])
}

pub async fn insert_page() -> Html<String> {
    let body = render::product_form(Screen::Insert.path(), &FormValues::blank(), "Add Product");
    render::page(Screen::Insert, &[], &body)
}

pub async fn insert_submit(State(state): State<AppState>, Form(form): Form<ProductForm>) -> Html<String> {
    let outcome = match form.to_input() {
        Ok(input) => {
            let title = input.title.clone();
            state
                .call(move |api| api.create(&input))
                .await
                .map(|()| Notice::created(&title))
        }
        Err(e) => Err(e),
    };

    // Keep what was typed when the insert did not go through.
    let (notice, values) = match outcome {
        Ok(notice) => (notice, FormValues::blank()),
        Err(e) => {
            tracing::info!(error = %e, "insert failed");
            (Notice::from_error(Operation::Create, &e), FormValues::from(&form))
        }
    };
    let body = render::product_form(Screen::Insert.path(), &values, "Add Product");
    render::page(Screen::Insert, &[notice], &body)
}

pub async fn edit_page(State(state): State<AppState>, Query(selection): Query<Selection>) -> Html<String> {
    render_edit(&state, selection.id, Vec::new(), None).await
}

pub async fn edit_submit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ProductForm>,
) -> Html<String> {
    let outcome = match form.to_input() {
        Ok(input) => {
            let title = input.title.clone();
            state
                .call(move |api| api.update(id, &input))
                .await
                .map(|()| Notice::updated(&title))
        }
        Err(e) => Err(e),
    };

    match outcome {
        Ok(notice) => render_edit(&state, Some(id), vec![notice], None).await,
        Err(e) => {
            tracing::info!(id, error = %e, "update failed");
            let notice = Notice::from_error(Operation::Update, &e);
            render_edit(&state, Some(id), vec![notice], Some(FormValues::from(&form))).await
        }
    }
}

/// `submitted` replaces the stored values of the selected product so a
/// rejected edit is not lost.
async fn render_edit(
    state: &AppState,
    selected: Option<i64>,
    mut notices: Vec<Notice>,
    submitted: Option<FormValues>,
) -> Html<String> {
    let body = match fetch_products(state).await {
        Ok(products) => {
            let product = pick(&products, selected);
            let values = match submitted {
                Some(values) if selected == Some(product.id) => values,
                _ => FormValues::from(product),
            };
            let action = format!("{}/{}", Screen::Edit.path(), product.id);
            render::selector(Screen::Edit.path(), &products, product.id)
                + &render::product_form(&action, &values, "Update Product")
        }
        Err(notice) => {
            notices.push(notice);
            String::new()
        }
    };
    render::page(Screen::Edit, &notices, &body)
}

pub async fn list_page(State(state): State<AppState>) -> Html<String> {
    match fetch_products(&state).await {
        Ok(products) => {
            let body = render::product_table(&products, state.price_format());
            render::page(Screen::List, &[], &body)
        }
        Err(notice) => render::page(Screen::List, &[notice], ""),
    }
}

pub async fn delete_page(State(state): State<AppState>, Query(selection): Query<Selection>) -> Html<String> {
    render_delete(&state, selection.id, Vec::new()).await
}

pub async fn delete_submit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<DeleteForm>,
) -> Html<String> {
    if form.confirm.is_none() {
        let notice = Notice::error("Please confirm the deletion.");
        return render_delete(&state, Some(id), vec![notice]).await;
    }

    let notice = match state.call(move |api| api.delete(id)).await {
        Ok(()) => Notice::deleted(id),
        Err(e) => {
            tracing::info!(id, error = %e, "delete failed");
            Notice::from_error(Operation::Delete, &e)
        }
    };
    render_delete(&state, None, vec![notice]).await
}

async fn render_delete(state: &AppState, selected: Option<i64>, mut notices: Vec<Notice>) -> Html<String> {
    let body = match fetch_products(state).await {
        Ok(products) => {
            let product = pick(&products, selected);
            render::selector(Screen::Delete.path(), &products, product.id) + &render::delete_form(product)
        }
        Err(notice) => {
            notices.push(notice);
            String::new()
        }
    };
    render::page(Screen::Delete, &notices, &body)
}
