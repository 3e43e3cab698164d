//! Generic record list with search, row actions and pager
//!
//! Renders a table on wide terminals and stacked cards on narrow ones. The
//! renderer keeps only view state (row selection, focus, search draft); the
//! records, page number and committed query belong to the parent and are
//! passed in through [`ListProps`] on every call.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState},
    Frame,
};

use super::{pager::Pager, search_box::SearchBox};
use crate::book_tui::ui::{truncate_to_width, Styles};

/// Narrowest area that still gets the table layout
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;

pub const NO_RECORDS: &str = "⚠ No Records Found";

/// A uniquely identified row
pub trait Record {
    fn id(&self) -> &str;

    /// Display text of the column with `key`
    fn cell(&self, key: &str) -> String;
}

/// Column of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    /// Share of the table width, in percent
    pub percent: u16,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str, percent: u16) -> Self {
        Self { key, label, percent }
    }
}

/// Parent-owned inputs of the renderer
pub struct ListProps<'a, T> {
    pub title: &'a str,
    pub data: &'a [T],
    pub columns: &'a [Column],
    pub search_query: &'a str,
    pub page: u32,
    pub total_pages: u32,
}

impl<'a, T> ListProps<'a, T> {
    pub fn pager(&self) -> Pager {
        Pager::new(self.page, self.total_pages)
    }
}

/// Requests the renderer hands back to its parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    Add,
    Edit(String),
    Delete(String),
    /// New committed search query
    Search(String),
    PageChange(u32),
    None,
}

/// Which part of the list receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFocus {
    Rows,
    Search,
}

pub struct ListRenderer {
    pub selected: Option<usize>,
    pub focus: ListFocus,
    pub search: SearchBox,
}

impl ListRenderer {
    /// `search_query` seeds the search draft
    pub fn new(search_query: &str, quiet_period: Duration) -> Self {
        Self {
            selected: None,
            focus: ListFocus::Rows,
            search: SearchBox::new(search_query, quiet_period),
        }
    }

    /// Keep the selection inside `0..len`
    pub fn sync_selection(&mut self, len: usize) {
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
    }

    pub fn selected_record<'t, T>(&self, data: &'t [T]) -> Option<&'t T> {
        self.selected.and_then(|i| data.get(i))
    }

    pub fn handle_key_event<T: Record>(
        &mut self,
        key: KeyEvent,
        props: &ListProps<T>,
        now: Instant,
    ) -> ListAction {
        self.sync_selection(props.data.len());
        self.search.sync(props.search_query);

        if self.focus == ListFocus::Search {
            match key.code {
                KeyCode::Esc | KeyCode::Tab | KeyCode::Enter | KeyCode::Down => {
                    self.focus = ListFocus::Rows;
                }
                _ => {
                    self.search.handle_key_event(key, now);
                }
            }
            return ListAction::None;
        }

        let pager = props.pager();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.map(|i| i.saturating_sub(1));
                ListAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(i) = self.selected {
                    self.selected = Some((i + 1).min(props.data.len().saturating_sub(1)));
                }
                ListAction::None
            }
            KeyCode::Char('/') | KeyCode::Tab => {
                self.focus = ListFocus::Search;
                ListAction::None
            }
            KeyCode::Char('a') | KeyCode::Char('+') | KeyCode::Insert => ListAction::Add,
            KeyCode::Enter | KeyCode::Char('e') => self
                .selected_record(props.data)
                .map(|r| ListAction::Edit(r.id().to_string()))
                .unwrap_or(ListAction::None),
            KeyCode::Char('d') | KeyCode::Delete => self
                .selected_record(props.data)
                .map(|r| ListAction::Delete(r.id().to_string()))
                .unwrap_or(ListAction::None),
            KeyCode::Left | KeyCode::PageUp => pager
                .prev()
                .map(ListAction::PageChange)
                .unwrap_or(ListAction::None),
            KeyCode::Right | KeyCode::PageDown => pager
                .next()
                .map(ListAction::PageChange)
                .unwrap_or(ListAction::None),
            _ => ListAction::None,
        }
    }

    /// Commit the search draft once its quiet period has passed
    pub fn tick(&mut self, now: Instant) -> ListAction {
        self.search
            .poll(now)
            .map(ListAction::Search)
            .unwrap_or(ListAction::None)
    }

    pub fn render<T: Record>(&mut self, f: &mut Frame, area: Rect, props: &ListProps<T>) {
        self.sync_selection(props.data.len());
        self.search.sync(props.search_query);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title + search
                Constraint::Min(3),    // Records
                Constraint::Length(1), // Pager
            ])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Max(50)])
            .split(chunks[0]);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(props.title, Styles::title()),
            Span::styled("  [a] Add", Styles::info()),
        ]))
        .block(Block::default().borders(Borders::BOTTOM).border_style(Styles::inactive_border()));
        f.render_widget(title, top[0]);
        self.search.render(f, top[1], self.focus == ListFocus::Search);

        if area.width >= WIDE_LAYOUT_MIN_WIDTH {
            self.render_table(f, chunks[1], props);
        } else {
            self.render_cards(f, chunks[1], props);
        }

        props.pager().render(f, chunks[2]);
    }

    fn render_table<T: Record>(&self, f: &mut Frame, area: Rect, props: &ListProps<T>) {
        let header = Row::new(
            props
                .columns
                .iter()
                .map(|c| Cell::from(c.label))
                .chain(std::iter::once(Cell::from("Actions"))),
        )
        .style(Styles::header());

        let rows: Vec<Row> = table_cells(props)
            .into_iter()
            .map(|cells| Row::new(cells.into_iter().map(Cell::from)))
            .collect();

        let widths: Vec<Constraint> = props
            .columns
            .iter()
            .map(|c| Constraint::Percentage(c.percent))
            .chain(std::iter::once(Constraint::Length(12)))
            .collect();

        let border_style = if self.focus == ListFocus::Rows {
            Styles::active_border()
        } else {
            Styles::inactive_border()
        };

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).border_style(border_style))
            .highlight_style(Styles::selected())
            .highlight_symbol("▶ ");

        let mut state = TableState::default();
        if !props.data.is_empty() {
            state.select(self.selected);
        }
        f.render_stateful_widget(table, area, &mut state);
    }

    fn render_cards<T: Record>(&self, f: &mut Frame, area: Rect, props: &ListProps<T>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if self.focus == ListFocus::Rows {
                Styles::active_border()
            } else {
                Styles::inactive_border()
            });

        if props.data.is_empty() {
            f.render_widget(
                Paragraph::new(NO_RECORDS).style(Styles::inactive()).block(block),
                area,
            );
            return;
        }

        let value_width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = props
            .data
            .iter()
            .map(|record| {
                let mut lines: Vec<Line> = props
                    .columns
                    .iter()
                    .map(|c| {
                        let label = format!("{}: ", c.label);
                        let room = value_width.saturating_sub(label.chars().count());
                        Line::from(vec![
                            Span::styled(label, Styles::title()),
                            Span::raw(truncate_to_width(&single_line(&record.cell(c.key)), room)),
                        ])
                    })
                    .collect();
                lines.push(Line::from(Span::styled("[e] Edit  [d] Delete", Styles::info())));
                lines.push(Line::from(""));
                ListItem::new(Text::from(lines))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(Styles::selected());
        let mut state = ListState::default();
        state.select(self.selected);
        f.render_stateful_widget(list, area, &mut state);
    }
}

fn single_line(text: &str) -> String {
    text.replace('\n', " ")
}

/// Cell text of every table row; an empty collection yields the single "no records" row
pub fn table_cells<T: Record>(props: &ListProps<T>) -> Vec<Vec<String>> {
    if props.data.is_empty() {
        return vec![vec![NO_RECORDS.to_string()]];
    }

    props
        .data
        .iter()
        .map(|record| {
            props
                .columns
                .iter()
                .map(|c| single_line(&record.cell(c.key)))
                .chain(std::iter::once("[e] [d]".to_string()))
                .collect()
        })
        .collect()
}
