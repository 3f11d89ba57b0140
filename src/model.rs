//! The book entity as stored and as served on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One catalog entry. `judul` (title) and `harga` (price) keep their wire
/// names; `id` and the timestamps are filled by the storage layer.
///
/// The container-level `default` mirrors zero-value request binding: a body
/// missing `judul` decodes to an empty string and a missing `harga` to `None`,
/// leaving presence checks to the validator instead of the decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Book {
    pub id: Option<i64>,
    pub judul: String,
    pub harga: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
