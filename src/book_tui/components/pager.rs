//! Page-forward/page-back controls

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::book_tui::ui::Styles;

/// Pager view over a parent-owned page number (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub total_pages: u32,
}

impl Pager {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self { page, total_pages }
    }

    /// An empty result still counts as one page
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.last_page()
    }

    /// Page to request for "Prev", if enabled
    pub fn prev(&self) -> Option<u32> {
        self.can_prev().then(|| self.page - 1)
    }

    /// Page to request for "Next", if enabled
    pub fn next(&self) -> Option<u32> {
        self.can_next().then(|| self.page + 1)
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.last_page())
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let button = |text: &'static str, enabled: bool| {
            Span::styled(text, if enabled { Styles::info() } else { Styles::disabled() })
        };
        let line = Line::from(vec![
            button("◀ Prev", self.can_prev()),
            Span::raw("  "),
            Span::styled(self.label(), Styles::default()),
            Span::raw("  "),
            button("Next ▶", self.can_next()),
        ]);
        f.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
    }
}
