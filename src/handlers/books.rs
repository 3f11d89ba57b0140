//! Book handlers: list, get by id, create, update, delete.

use crate::error::AppError;
use crate::model::Book;
use crate::response::{data, message};
use crate::service::{validate_create, validate_update};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}

/// Decode the request body, mapping any rejection to a uniform 400.
fn decode_body(payload: Result<Json<Book>, JsonRejection>) -> Result<Book, AppError> {
    let Json(book) = payload.map_err(|_| AppError::BadRequest("invalid data".into()))?;
    Ok(book)
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let books = state
        .books
        .list()
        .await
        .map_err(|e| e.storage_context("failed to fetch books"))?;
    Ok(data(books))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let book = state
        .books
        .get_by_id(id)
        .await
        .map_err(|e| e.storage_context("failed to fetch book"))?;
    Ok(data(book))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Book>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let book = decode_body(payload)?;
    validate_create(&book)?;
    state
        .books
        .create(book)
        .await
        .map_err(|e| e.storage_context("failed to add book"))?;
    Ok(message("book added"))
}

pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<Book>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let book = decode_body(payload)?;
    validate_update(&book)?;
    state
        .books
        .update(book)
        .await
        .map_err(|e| e.storage_context("failed to update book"))?;
    Ok(message("book updated"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    state
        .books
        .delete(id)
        .await
        .map_err(|e| e.storage_context("failed to delete book"))?;
    Ok(message(format!("book {id} deleted")))
}
