//! Transient notifications shown on top of the current screen

use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::book_tui::ui::Styles;

/// Types of notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// How long a notification of this kind stays visible
    pub fn duration(&self) -> Duration {
        match self {
            ToastKind::Success => Duration::from_secs(2),
            ToastKind::Info | ToastKind::Error => Duration::from_secs(4),
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ",
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
        }
    }
}

/// Notification with kind, content and expiry
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

/// Stack of live notifications, newest last
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    /// Most notifications drawn at once
    pub const MAX_VISIBLE: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_at(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        let message = message.into();
        tracing::debug!("toast {:?}: {}", kind, message);
        self.items.push(Toast {
            message,
            kind,
            expires_at: now + kind.duration(),
        });
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.push_at(kind, message, Instant::now());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    /// Drop expired notifications
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|t| t.expires_at > now);
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.items.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the newest notifications stacked at the top centre of `area`
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let visible: Vec<&Toast> = self.items.iter().rev().take(Self::MAX_VISIBLE).collect();
        for (i, toast) in visible.iter().rev().enumerate() {
            let text = format!("{} {}", toast.kind.prefix(), toast.message);
            let width = (text.chars().count() as u16 + 4).min(area.width);
            let y = area.y + i as u16 * 3;
            if y + 3 > area.y + area.height {
                break;
            }
            let rect = Rect {
                x: area.x + (area.width - width) / 2,
                y,
                width,
                height: 3,
            };

            let style = match toast.kind {
                ToastKind::Info => Styles::info(),
                ToastKind::Success => Styles::success(),
                ToastKind::Error => Styles::error(),
            };

            f.render_widget(Clear, rect);
            f.render_widget(
                Paragraph::new(text)
                    .style(style)
                    .block(Block::default().borders(Borders::ALL).border_style(style)),
                rect,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire_by_kind() {
        let start = Instant::now();
        let mut toasts = Toasts::new();
        toasts.push_at(ToastKind::Success, "Book added successfully!", start);
        toasts.push_at(ToastKind::Error, "Error adding book. Please try again.", start);

        toasts.prune(start + Duration::from_secs(3));
        assert_eq!(toasts.iter().count(), 1);
        assert_eq!(toasts.latest().map(|t| t.kind), Some(ToastKind::Error));

        toasts.prune(start + Duration::from_secs(5));
        assert!(toasts.is_empty());
    }
}
