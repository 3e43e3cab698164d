//! Debounced search input

use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use super::input_field::InputField;
use crate::book_tui::handlers::{EditOutcome, TextEditKeys};

/// Search text being typed, kept apart from the committed query.
///
/// Every edit replaces the single pending deadline, so at most one commit
/// happens per quiet period.
#[derive(Debug, Clone)]
pub struct SearchBox {
    draft: String,
    cursor: usize,
    quiet_period: Duration,
    deadline: Option<Instant>,
}

impl SearchBox {
    pub fn new(initial: &str, quiet_period: Duration) -> Self {
        Self {
            draft: initial.to_string(),
            cursor: initial.chars().count(),
            quiet_period,
            deadline: None,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Apply an editing key; a text change restarts the quiet period from `now`
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) -> EditOutcome {
        let outcome = TextEditKeys::apply(&mut self.draft, &mut self.cursor, key, false);
        if outcome == EditOutcome::Changed {
            self.deadline = Some(now + self.quiet_period);
        }
        outcome
    }

    /// Adopt the parent's committed query unless an edit is still waiting to commit
    pub fn sync(&mut self, committed: &str) {
        if self.deadline.is_none() && self.draft.trim() != committed {
            self.draft = committed.to_string();
            self.cursor = self.draft.chars().count();
        }
    }

    /// The trimmed draft once the quiet period has elapsed without edits
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(self.draft.trim().to_string())
            }
            _ => None,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool) {
        InputField::new("Search", &self.draft)
            .with_placeholder("Search by title")
            .with_icon("⌕")
            .focused(focused, self.cursor)
            .render(f, area);
    }
}
