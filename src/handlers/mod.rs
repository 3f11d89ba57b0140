//! HTTP handlers, one per route.

pub mod books;
