//! Route tables: book CRUD plus common service endpoints.

use crate::handlers::books;
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Book CRUD. Update goes to the collection path because the record id
/// travels in the body.
pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/buku",
            get(books::list).post(books::create).put(books::update),
        )
        .route("/buku/:id", get(books::get_by_id).delete(books::delete))
        .with_state(state)
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Common routes (no state): GET /health, GET /version.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
}
