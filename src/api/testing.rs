//! In-memory [`BookApi`] used by screen tests

use std::sync::Mutex;

use async_trait::async_trait;

use super::{ApiError, BookApi};
use crate::models::{Book, BookDraft, BookPage, ListQuery};

#[derive(Default)]
pub struct MemoryBookApi {
    pub books: Mutex<Vec<Book>>,
    pub calls: Mutex<Vec<String>>,
    pub queries: Mutex<Vec<ListQuery>>,
    pub fail: Mutex<bool>,
    next_id: Mutex<u32>,
}

pub fn book(id: &str, title: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: "Ursula K. Le Guin".to_string(),
        description: "A novel".to_string(),
        published_year: "1969".to_string(),
        isbn: "978-0441478125".to_string(),
    }
}

impl MemoryBookApi {
    pub fn with_books(books: Vec<Book>) -> Self {
        let api = Self::default();
        *api.books.lock().unwrap() = books;
        api
    }

    pub fn failing() -> Self {
        let api = Self::default();
        api.set_failing(true);
        api
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if *self.fail.lock().unwrap() {
            return Err(ApiError::Status {
                status_code: 500,
                message: "Internal Server Error".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl BookApi for MemoryBookApi {
    async fn list_books(&self, query: &ListQuery) -> Result<BookPage, ApiError> {
        self.record(format!("list page={}", query.page))?;
        self.queries.lock().unwrap().push(query.clone());

        let mut books: Vec<Book> = self
            .books
            .lock()
            .unwrap()
            .iter()
            .filter(|b| match &query.search {
                Some(term) => b.title.to_lowercase().contains(&term.to_lowercase()),
                None => true,
            })
            .cloned()
            .collect();
        books.sort_by(|a, b| a.title.cmp(&b.title));

        let limit = query.limit.max(1) as usize;
        let total_pages = ((books.len() + limit - 1) / limit).max(1) as u32;
        let start = (query.page.saturating_sub(1) as usize) * limit;
        let books = books.into_iter().skip(start).take(limit).collect();
        Ok(BookPage { books, total_pages })
    }

    async fn get_book(&self, id: &str) -> Result<Book, ApiError> {
        self.record(format!("get {}", id))?;
        self.books
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                status_code: 404,
                message: "Book not found".to_string(),
            })
    }

    async fn create_book(&self, draft: &BookDraft) -> Result<Book, ApiError> {
        self.record(format!("create {}", draft.title))?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let book = Book {
            id: format!("new-{}", *next_id),
            title: draft.title.clone(),
            author: draft.author.clone(),
            description: draft.description.clone(),
            published_year: draft.published_year.clone(),
            isbn: draft.isbn.clone(),
        };
        self.books.lock().unwrap().push(book.clone());
        Ok(book)
    }

    async fn update_book(&self, id: &str, draft: &BookDraft) -> Result<Book, ApiError> {
        self.record(format!("update {}", id))?;
        let mut books = self.books.lock().unwrap();
        let book = books.iter_mut().find(|b| b.id == id).ok_or(ApiError::Status {
            status_code: 404,
            message: "Book not found".to_string(),
        })?;
        book.title = draft.title.clone();
        book.author = draft.author.clone();
        book.description = draft.description.clone();
        book.published_year = draft.published_year.clone();
        book.isbn = draft.isbn.clone();
        Ok(book.clone())
    }

    async fn delete_book(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("delete {}", id))?;
        self.books.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }
}
