//! Persistence seam for book records.

use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::books::models::{Book, NewBook, ValidationErrors};

pub mod memory;

pub use memory::MemoryBookStore;

/// Failure outcomes a store operation can produce.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The supplied identifier is not syntactically valid.
    #[error("malformed book id: {0}")]
    MalformedId(String),
    /// No stored record matches the supplied identifier.
    #[error("book not found")]
    NotFound,
    /// The record violates one or more field constraints.
    #[error("{0}")]
    Validation(ValidationErrors),
    /// Anything else the backing store reports.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Storage operations the book handlers depend on.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Returns every stored book in insertion order.
    async fn find_all(&self) -> Result<Vec<Book>, StoreError>;

    /// Returns the first book whose title and author match exactly.
    async fn find_one(&self, title: &str, author: &str) -> Result<Option<Book>, StoreError>;

    /// Looks a book up by its identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, StoreError>;

    /// Persists a new book, assigning its identifier and timestamps.
    async fn insert(&self, book: NewBook) -> Result<Book, StoreError>;

    /// Persists changes to an existing book, bumping its update timestamp.
    async fn save(&self, book: Book) -> Result<Book, StoreError>;

    /// Removes a book by identifier, reporting whether a record was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError>;
}

/// Shared handle to the store backing the book routes.
pub type SharedBookStore = Arc<dyn BookStore>;
