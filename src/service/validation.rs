//! Field-presence validation shared by create and update.
//!
//! Every violation is collected, not just the first, so a body missing both
//! `judul` and `harga` reports both fields.

use crate::error::AppError;
use crate::model::Book;

/// Create requires a non-empty `judul` and a non-null `harga`.
pub fn validate_create(book: &Book) -> Result<(), AppError> {
    check(book, false)
}

/// Update additionally requires a non-null `id`.
pub fn validate_update(book: &Book) -> Result<(), AppError> {
    check(book, true)
}

fn check(book: &Book, require_id: bool) -> Result<(), AppError> {
    let mut violations = Vec::new();
    if require_id && book.id.is_none() {
        violations.push("field 'id' must not be empty".to_string());
    }
    if book.judul.is_empty() {
        violations.push("field 'judul' must not be empty".to_string());
    }
    if book.harga.is_none() {
        violations.push("field 'harga' must not be empty".to_string());
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(violations))
    }
}
