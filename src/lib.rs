//! buku-api: REST CRUD service for a PostgreSQL-backed book catalog.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use migration::{apply_migrations, ensure_database_exists};
pub use model::Book;
pub use response::{data, message};
pub use routes::{book_routes, common_routes};
pub use service::{BookService, PgBookService};
pub use state::AppState;
