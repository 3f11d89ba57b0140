//! Data access for books. `PgBookService` is the PostgreSQL implementation;
//! handlers depend on the `BookService` trait so tests can substitute a
//! double.

use crate::error::AppError;
use crate::model::Book;
use async_trait::async_trait;
use sqlx::PgPool;

#[async_trait]
pub trait BookService: Send + Sync {
    /// All records, empty when the table is.
    async fn list(&self) -> Result<Vec<Book>, AppError>;
    /// The record matching `id`, or `AppError::NotFound`.
    async fn get_by_id(&self, id: i64) -> Result<Book, AppError>;
    /// Insert a new record; storage assigns id and timestamps.
    async fn create(&self, book: Book) -> Result<(), AppError>;
    /// Full replace of the mutable fields of the record at `book.id`.
    async fn update(&self, book: Book) -> Result<(), AppError>;
    /// Remove the record at `id`; `AppError::NotFound` when absent.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgBookService {
    pool: PgPool,
}

impl PgBookService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const BOOK_COLUMNS: &str = "id, judul, harga, created_at, updated_at";

#[async_trait]
impl BookService for PgBookService {
    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM buku ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    async fn get_by_id(&self, id: i64) -> Result<Book, AppError> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM buku WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        book.ok_or(AppError::NotFound)
    }

    async fn create(&self, book: Book) -> Result<(), AppError> {
        sqlx::query("INSERT INTO buku (judul, harga) VALUES ($1, $2)")
            .bind(&book.judul)
            .bind(book.harga)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update(&self, book: Book) -> Result<(), AppError> {
        let result =
            sqlx::query("UPDATE buku SET judul = $1, harga = $2, updated_at = NOW() WHERE id = $3")
                .bind(&book.judul)
                .bind(book.harga)
                .bind(book.id)
                .execute(&self.pool)
                .await?;
        // Zero rows means the id does not exist; report it instead of a
        // silent no-op.
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        // Lookup first so a missing id reports not-found.
        self.get_by_id(id).await?;
        sqlx::query("DELETE FROM buku WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
