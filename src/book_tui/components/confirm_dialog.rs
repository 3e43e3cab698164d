//! Modal confirm/cancel prompt

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::book_tui::ui::{centered_box, Styles};

/// Result of answering a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    /// Whether the confirm button (rather than Cancel) has focus
    pub confirm_focused: bool,
}

impl ConfirmDialog {
    pub fn new(title: &str, text: &str, confirm_label: &str) -> Self {
        Self {
            title: title.to_string(),
            text: text.to_string(),
            confirm_label: confirm_label.to_string(),
            confirm_focused: true,
        }
    }

    /// `y` confirms, `n`/Esc cancel, Enter activates the focused button
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<ConfirmOutcome> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(ConfirmOutcome::Confirmed),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Some(ConfirmOutcome::Cancelled)
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.confirm_focused = !self.confirm_focused;
                None
            }
            KeyCode::Enter => Some(if self.confirm_focused {
                ConfirmOutcome::Confirmed
            } else {
                ConfirmOutcome::Cancelled
            }),
            _ => None,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let width = (self.text.chars().count() as u16 + 6).clamp(40, 70);
        let popup = centered_box(width, 8, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title(format!(" ⚠ {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Styles::warning());
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        f.render_widget(
            Paragraph::new(self.text.as_str())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[0],
        );

        let (confirm_style, cancel_style) = if self.confirm_focused {
            (Styles::selected(), Styles::inactive())
        } else {
            (Styles::inactive(), Styles::selected())
        };
        let buttons = Line::from(vec![
            Span::styled(format!(" {} (y) ", self.confirm_label), confirm_style),
            Span::raw("   "),
            Span::styled(" Cancel (n) ", cancel_style),
        ]);
        f.render_widget(Paragraph::new(buttons).alignment(Alignment::Center), chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_shortcuts() {
        let mut dialog = ConfirmDialog::new(
            "Are you sure?",
            "You won't be able to revert this!",
            "Yes, delete it!",
        );
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Char('y'))),
            Some(ConfirmOutcome::Confirmed)
        );
        assert_eq!(dialog.handle_key_event(key(KeyCode::Esc)), Some(ConfirmOutcome::Cancelled));
        assert_eq!(dialog.handle_key_event(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_enter_follows_focus() {
        let mut dialog = ConfirmDialog::new(
            "Confirm Update",
            "Are you sure you want to update the book?",
            "Yes, update",
        );
        assert_eq!(dialog.handle_key_event(key(KeyCode::Enter)), Some(ConfirmOutcome::Confirmed));
        assert_eq!(dialog.handle_key_event(key(KeyCode::Right)), None);
        assert_eq!(dialog.handle_key_event(key(KeyCode::Enter)), Some(ConfirmOutcome::Cancelled));
    }
}
