//! Reusable UI components for the book TUI
//!
//! This module provides composable UI components that implement common patterns
//! and can be reused across different screens.

pub mod confirm_dialog;
pub mod input_field;
pub mod list_renderer;
pub mod pager;
pub mod search_box;
pub mod toast;

pub use confirm_dialog::{ConfirmDialog, ConfirmOutcome};
pub use input_field::InputField;
pub use list_renderer::{Column, ListAction, ListProps, ListRenderer, Record};
pub use pager::Pager;
pub use search_box::SearchBox;
pub use toast::{ToastKind, Toasts};
