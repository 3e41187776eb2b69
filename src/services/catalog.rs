//! Catalog management service.
//!
//! Wraps the book store in a single `RwLock`: the whole store is the
//! shared resource under axum's multi-threaded request handling, and
//! every operation holds the lock for its full duration. No operation
//! does I/O while holding it.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::Book,
    store::BookStore,
};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<RwLock<BookStore>>,
}

impl CatalogService {
    pub fn new(store: BookStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// All books, in catalog order.
    pub async fn list_books(&self) -> Vec<Book> {
        self.store.read().await.list().to_vec()
    }

    /// Get a book by id, or `NotFound`.
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.store
            .read()
            .await
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("no book with id {}", id)))
    }

    /// Add a new book to the catalog.
    pub async fn create_book(&self, title: &str, author: &str) -> AppResult<Book> {
        let book = self.store.write().await.insert(title, author)?;
        tracing::info!(id = book.id, title = %book.title, "created book");
        Ok(book)
    }

    /// Update an existing book's title and author.
    pub async fn update_book(&self, id: i32, title: &str, author: &str) -> AppResult<()> {
        self.store.write().await.update(id, title, author)?;
        tracing::info!(id, "updated book");
        Ok(())
    }

    /// Delete a book by id. Idempotent: deleting an absent id succeeds.
    pub async fn delete_book(&self, id: i32) {
        if self.store.write().await.delete(id) {
            tracing::info!(id, "deleted book");
        }
    }

    /// Delete the book with the highest id, if any.
    pub async fn delete_highest_id(&self) -> Option<i32> {
        let removed = self.store.write().await.delete_max_id();
        if let Some(id) = removed {
            tracing::info!(id, "deleted highest-id book");
        }
        removed
    }
}
