use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::instrument;

use crate::models::{DetailPage, DetailState, ServiceError};
use crate::routes::AppState;
use crate::views;

/// `GET /`
#[instrument(name = "home_page", skip(state))]
pub async fn home(State(state): State<AppState>) -> Response {
    match state.catalog.list_categories().await {
        Ok(response) => Html(views::render_home(&response)).into_response(),
        Err(err) => error_page(err),
    }
}

/// `GET /categories`
#[instrument(name = "categories_page", skip(state))]
pub async fn categories(State(state): State<AppState>) -> Response {
    match state.catalog.list_categories().await {
        Ok(response) => Html(views::render_categories(&response)).into_response(),
        Err(err) => error_page(err),
    }
}

/// `GET /categories/:category`
#[instrument(name = "listing_page", skip(state), fields(category = %category))]
pub async fn listing(State(state): State<AppState>, Path(category): Path<String>) -> Response {
    match state.catalog.get_listing(&category).await {
        Ok(listing) => Html(views::render_listing(&listing)).into_response(),
        Err(err) => error_page(err),
    }
}

/// `GET /categories/:category/:id`
///
/// One page instance per request, driven from `Idle` through a single load.
#[instrument(name = "detail_page", skip(state), fields(category = %category, id = %id))]
pub async fn detail(
    State(state): State<AppState>,
    Path((category, id)): Path<(String, String)>,
) -> Response {
    let mut page = DetailPage::new();
    state
        .catalog
        .load_detail(&mut page, Some(&category), Some(&id))
        .await;

    let status = match page.state() {
        DetailState::NotFound { .. } => StatusCode::NOT_FOUND,
        DetailState::Failed { .. } => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    };

    (status, Html(views::render_detail(&page))).into_response()
}

fn error_page(err: ServiceError) -> Response {
    match err {
        ServiceError::CategoryNotFound { slug } => (
            StatusCode::NOT_FOUND,
            Html(views::render_category_not_found(&slug)),
        )
            .into_response(),
        other => {
            crate::error_with_trace!(error = %other, "Page rendering failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Html(views::layout(
                    "Temporarily Unavailable",
                    "<h1>Temporarily Unavailable</h1><p>Please try again shortly.</p>",
                )),
            )
                .into_response()
        }
    }
}
