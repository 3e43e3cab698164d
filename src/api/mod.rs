//! Backend client for the book catalog REST API
//!
//! Screens talk to the backend only through the [`BookApi`] trait so that the
//! HTTP transport can be swapped out in tests.

pub mod client;
pub mod errors;
#[cfg(test)]
pub mod testing;

pub use client::HttpBookApi;
pub use errors::ApiError;

use async_trait::async_trait;

use crate::models::{Book, BookDraft, BookPage, ListQuery};

/// Request/response contract of the catalog backend
#[async_trait]
pub trait BookApi: Send + Sync {
    /// `GET /books`
    async fn list_books(&self, query: &ListQuery) -> Result<BookPage, ApiError>;

    /// `GET /book/{id}`
    async fn get_book(&self, id: &str) -> Result<Book, ApiError>;

    /// `POST /book`
    async fn create_book(&self, draft: &BookDraft) -> Result<Book, ApiError>;

    /// `PUT /book/{id}`
    async fn update_book(&self, id: &str, draft: &BookDraft) -> Result<Book, ApiError>;

    /// `DELETE /book/{id}`
    async fn delete_book(&self, id: &str) -> Result<(), ApiError>;
}
