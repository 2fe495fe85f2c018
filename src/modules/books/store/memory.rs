//! In-memory book store used by the service and its tests.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BookStore, StoreError};
use crate::modules::books::models::{Book, NewBook};

/// Book store backed by an in-process vector, preserving insertion order.
#[derive(Default)]
pub struct MemoryBookStore {
    books: RwLock<Vec<Book>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn parse_id(id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn find_all(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.books.read().await.clone())
    }

    async fn find_one(&self, title: &str, author: &str) -> Result<Option<Book>, StoreError> {
        let books = self.books.read().await;
        Ok(books
            .iter()
            .find(|book| book.title == title && book.author == author)
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, StoreError> {
        let id = parse_id(id)?;
        let books = self.books.read().await;
        Ok(books.iter().find(|book| book.id == id).cloned())
    }

    async fn insert(&self, book: NewBook) -> Result<Book, StoreError> {
        let mut draft = book;
        draft.normalize();
        draft.validate().map_err(StoreError::Validation)?;

        let now = Utc::now();
        let book = Book {
            id: Uuid::now_v7(),
            title: draft.title,
            author: draft.author,
            publish_year: draft.publish_year,
            price: draft.price,
            genre: draft.genre,
            created_at: now,
            updated_at: now,
        };

        self.books.write().await.push(book.clone());
        Ok(book)
    }

    async fn save(&self, book: Book) -> Result<Book, StoreError> {
        let mut book = book;
        book.normalize();
        book.validate().map_err(StoreError::Validation)?;
        book.updated_at = Utc::now();

        let mut books = self.books.write().await;
        let slot = books
            .iter_mut()
            .find(|stored| stored.id == book.id)
            .ok_or(StoreError::NotFound)?;
        *slot = book.clone();
        Ok(book)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let id = parse_id(id)?;
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|book| book.id != id);
        Ok(books.len() < before)
    }
}
