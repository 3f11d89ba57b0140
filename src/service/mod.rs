//! Book data access and request validation.

mod books;
mod validation;

pub use books::{BookService, PgBookService};
pub use validation::{validate_create, validate_update};
