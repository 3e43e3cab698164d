//! Labeled input control with inline validation error

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::book_tui::{handlers::cursor_row_col, ui::Styles};

/// Rows of text shown by a multi-line field
const TEXT_AREA_ROWS: u16 = 4;

/// A single form control.
///
/// Holds no state of its own: the owning form builds one every frame from its
/// draft, errors and focus, and applies edits itself.
#[derive(Debug, Clone, Copy)]
pub struct InputField<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub icon: Option<&'a str>,
    pub multiline: bool,
    pub error: Option<&'a str>,
    pub focused: bool,
    pub cursor: usize,
}

impl<'a> InputField<'a> {
    pub fn new(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            value,
            placeholder: "",
            icon: None,
            multiline: false,
            error: None,
            focused: false,
            cursor: 0,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn with_icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn with_error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Mark the field focused with the cursor at character index `cursor`
    pub fn focused(mut self, focused: bool, cursor: usize) -> Self {
        self.focused = focused;
        self.cursor = cursor;
        self
    }

    /// Rows needed to draw the field and its error caption
    pub fn height(&self) -> u16 {
        let body = if self.multiline { TEXT_AREA_ROWS } else { 1 };
        body + 2 + u16::from(self.error.is_some())
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let box_height = area.height.saturating_sub(u16::from(self.error.is_some()));
        let box_area = Rect { height: box_height, ..area };

        let border_style = if self.error.is_some() {
            Styles::error()
        } else if self.focused {
            Styles::active_border()
        } else {
            Styles::inactive_border()
        };

        let block = Block::default()
            .title(self.name)
            .borders(Borders::ALL)
            .border_style(border_style);

        let icon_prefix = self.icon.map(|i| format!("{} ", i)).unwrap_or_default();
        let icon_width = icon_prefix.width() as u16;

        let show_placeholder = self.value.is_empty() && !self.placeholder.is_empty();
        let mut lines: Vec<Line> = if show_placeholder {
            vec![Line::from(Span::styled(self.placeholder, Styles::inactive()))]
        } else {
            self.value.split('\n').map(|l| Line::from(l.to_string())).collect()
        };
        if let Some(first) = lines.first_mut() {
            first.spans.insert(0, Span::styled(icon_prefix.clone(), Styles::inactive()));
        }
        let indent = " ".repeat(icon_width as usize);
        for line in lines.iter_mut().skip(1) {
            line.spans.insert(0, Span::raw(indent.clone()));
        }

        let (row, col) = cursor_row_col(self.value, self.cursor);
        let visible_rows = box_height.saturating_sub(2).max(1);
        let scroll = row.saturating_sub(visible_rows - 1);

        f.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), box_area);

        if self.focused {
            let cursor_x = box_area.x + 1 + icon_width + col;
            let cursor_y = box_area.y + 1 + row - scroll;
            if cursor_x < box_area.x + box_area.width.saturating_sub(1) {
                f.set_cursor(cursor_x, cursor_y);
            }
        }

        if let Some(error) = self.error {
            let caption = Rect {
                y: area.y + box_height,
                height: 1,
                ..area
            };
            f.render_widget(Paragraph::new(error).style(Styles::error()), caption);
        }
    }
}
