//! Book catalog Terminal User Interface (TUI)
//!
//! Screens for listing, searching, creating, editing and deleting books
//! against the catalog backend.

pub mod app;
pub mod components;
pub mod handlers;
pub mod screens;
pub mod traits;
pub mod ui;

pub use app::{App, Route};
pub use traits::{Screen, ScreenAction};

// Re-export screen modules for easy access
pub use screens::{
    book_form::BookFormScreen,
    book_list::BookListScreen,
};
