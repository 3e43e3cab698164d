//! Core traits for the book TUI architecture

use std::time::Instant;

use async_trait::async_trait;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use super::app::Route;
use super::components::toast::Toasts;
use crate::api::BookApi;

/// Actions that can be returned from screen event handling
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    /// Navigate to a different screen
    NavigateTo(Route),
    /// Go back to previous screen
    NavigateBack,
    /// No action taken
    None,
}

/// Core trait for all TUI screens.
///
/// Key handling is synchronous and only records intent. A screen that needs
/// the backend marks a pending request; the app loop redraws (showing the
/// loading state) and then calls [`Screen::run_pending_request`].
#[async_trait]
pub trait Screen: Send {
    /// Draw the screen content
    fn draw(&mut self, f: &mut Frame, area: Rect);

    /// Handle keyboard input and return an action for the app
    fn handle_key_event(&mut self, key: KeyEvent, toasts: &mut Toasts) -> ScreenAction;

    /// Title shown in the header bar
    fn title(&self) -> &str;

    /// Context shortcuts shown in the help popup
    fn help(&self) -> &'static str;

    /// Advance timers
    fn tick(&mut self, _now: Instant) {}

    /// Whether a backend request is waiting to run
    fn has_pending_request(&self) -> bool {
        false
    }

    /// Run the pending backend request, if any
    async fn run_pending_request(
        &mut self,
        _api: &dyn BookApi,
        _toasts: &mut Toasts,
    ) -> ScreenAction {
        ScreenAction::None
    }
}
