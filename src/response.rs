//! Response envelopes shared by the book handlers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct DataBody<T> {
    pub data: T,
}

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// 200 with the record(s) wrapped in a `data` envelope.
pub fn data<T: Serialize>(data: T) -> (StatusCode, Json<DataBody<T>>) {
    (StatusCode::OK, Json(DataBody { data }))
}

/// 200 with a confirmation message.
pub fn message(message: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message: message.into(),
        }),
    )
}
