//! Shared application state for all routes.

use crate::service::BookService;
use std::sync::Arc;

/// Built once at startup. Handlers only see the service trait, so tests can
/// substitute an in-memory implementation.
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookService>,
}
