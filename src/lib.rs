//! Terminal client for a REST book catalog
//!
//! The [`book_tui`] screens list, search, page through, create, edit and
//! delete books through the [`api::BookApi`] backend client.

pub mod api;
pub mod book_tui;
pub mod cli;
pub mod config;
pub mod models;
pub mod validation;
