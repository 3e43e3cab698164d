//! Screen modules for the book TUI

pub mod book_form;
pub mod book_list;

// Re-export all screens
pub use book_form::BookFormScreen;
pub use book_list::BookListScreen;
