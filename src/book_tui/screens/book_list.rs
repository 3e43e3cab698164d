//! Book list screen: paged, searchable catalog with delete

use std::time::Instant;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{error, info, warn};

use crate::api::BookApi;
use crate::book_tui::{
    app::Route,
    components::{
        Column, ConfirmDialog, ConfirmOutcome, ListAction, ListProps, ListRenderer, Record, Toasts,
    },
    traits::{Screen, ScreenAction},
    ui::Styles,
};
use crate::config::ListConfig;
use crate::models::{Book, ListQuery};

pub const BOOK_COLUMNS: [Column; 5] = [
    Column::new("title", "Title", 20),
    Column::new("description", "Description", 30),
    Column::new("author", "Author", 18),
    Column::new("publishedYear", "Published Year", 12),
    Column::new("isbn", "ISBN", 16),
];

impl Record for Book {
    fn id(&self) -> &str {
        &self.id
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "description" => self.description.clone(),
            "author" => self.author.clone(),
            "publishedYear" => self.published_year.clone(),
            "isbn" => self.isbn.clone(),
            _ => String::new(),
        }
    }
}

/// Fetch state of the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ListRequest {
    Fetch,
    Delete(String),
}

/// Book list screen state.
///
/// Owns the committed search query and the current page; the list renderer
/// only receives them.
pub struct BookListScreen {
    pub books: Vec<Book>,
    pub search_query: String,
    pub page: u32,
    pub total_pages: u32,
    pub load_state: LoadState,
    pub renderer: ListRenderer,
    /// Delete prompt and the id it is about
    pub confirm: Option<(ConfirmDialog, String)>,
    page_size: u32,
    pending: Option<ListRequest>,
}

impl BookListScreen {
    /// A freshly mounted list starts loading page 1
    pub fn new(config: &ListConfig, quiet_period: std::time::Duration) -> Self {
        Self {
            books: Vec::new(),
            search_query: String::new(),
            page: 1,
            total_pages: 1,
            load_state: LoadState::Loading,
            renderer: ListRenderer::new("", quiet_period),
            confirm: None,
            page_size: config.page_size,
            pending: Some(ListRequest::Fetch),
        }
    }

    fn request_fetch(&mut self) {
        self.load_state = LoadState::Loading;
        self.pending = Some(ListRequest::Fetch);
    }

    /// Adopt a committed query; a changed query refetches the current page
    pub fn set_search_query(&mut self, query: String) {
        if query != self.search_query {
            info!("Search query committed: '{}'", query);
            self.search_query = query;
            self.request_fetch();
        }
    }

    pub fn set_page(&mut self, page: u32) {
        if page != self.page {
            self.page = page;
            self.request_fetch();
        }
    }

    /// Query for the current page
    pub fn list_query(&self) -> ListQuery {
        ListQuery::new(&self.search_query, self.page, self.page_size)
    }

    fn apply_list_action(&mut self, action: ListAction) -> ScreenAction {
        match action {
            ListAction::Add => ScreenAction::NavigateTo(Route::CreateBook),
            ListAction::Edit(id) => ScreenAction::NavigateTo(Route::EditBook(id)),
            ListAction::Delete(id) => {
                self.confirm = Some((
                    ConfirmDialog::new(
                        "Are you sure?",
                        "You won't be able to revert this!",
                        "Yes, delete it!",
                    ),
                    id,
                ));
                ScreenAction::None
            }
            ListAction::Search(query) => {
                self.set_search_query(query);
                ScreenAction::None
            }
            ListAction::PageChange(page) => {
                self.set_page(page);
                ScreenAction::None
            }
            ListAction::None => ScreenAction::None,
        }
    }

    async fn fetch(&mut self, api: &dyn BookApi) {
        let query = self.list_query();
        match api.list_books(&query).await {
            Ok(page) => {
                self.books = page.books;
                self.total_pages = page.total_pages;
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                error!("Failed to fetch books: {}", e);
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
    }

    async fn delete(&mut self, api: &dyn BookApi, id: String, toasts: &mut Toasts) {
        match api.delete_book(&id).await {
            Ok(()) => toasts.success("Book deleted successfully!"),
            Err(e) => {
                warn!("Failed to delete book {}: {}", id, e);
                toasts.error("Failed to delete book. Please try again.");
            }
        }
        // Removed locally whatever the outcome; a failed delete is not rolled back.
        self.books.retain(|b| b.id != id);
    }

    fn draw_message(&self, f: &mut Frame, area: Rect, lines: Vec<Line>) {
        let y = area.y + area.height / 2;
        let rect = Rect {
            y: y.saturating_sub(1),
            height: (lines.len() as u16).min(area.height),
            ..area
        };
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
    }
}

#[async_trait]
impl Screen for BookListScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        match &self.load_state {
            LoadState::Loading => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border());
                f.render_widget(block, area);
                self.draw_message(f, area, vec![Line::styled("Loading...", Styles::warning())]);
            }
            LoadState::Failed(message) => {
                let lines = vec![
                    Line::styled(format!("Error: {}", message), Styles::error()),
                    Line::styled("Press r to retry", Styles::inactive()),
                ];
                self.draw_message(f, area, lines);
            }
            LoadState::Ready => {
                let props = ListProps {
                    title: "Books",
                    data: &self.books,
                    columns: &BOOK_COLUMNS,
                    search_query: &self.search_query,
                    page: self.page,
                    total_pages: self.total_pages,
                };
                self.renderer.render(f, area, &props);
            }
        }

        if let Some((dialog, _)) = &self.confirm {
            dialog.render(f, area);
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, toasts: &mut Toasts) -> ScreenAction {
        if let Some((dialog, id)) = self.confirm.as_mut() {
            match dialog.handle_key_event(key) {
                Some(ConfirmOutcome::Confirmed) => {
                    self.pending = Some(ListRequest::Delete(id.clone()));
                    self.confirm = None;
                }
                Some(ConfirmOutcome::Cancelled) => {
                    toasts.error("Deletion cancelled.");
                    self.confirm = None;
                }
                None => {}
            }
            return ScreenAction::None;
        }

        match self.load_state {
            LoadState::Loading => ScreenAction::None,
            LoadState::Failed(_) => {
                if key.code == KeyCode::Char('r') {
                    self.request_fetch();
                }
                ScreenAction::None
            }
            LoadState::Ready => {
                let now = Instant::now();
                let action = {
                    let props = ListProps {
                        title: "Books",
                        data: &self.books,
                        columns: &BOOK_COLUMNS,
                        search_query: &self.search_query,
                        page: self.page,
                        total_pages: self.total_pages,
                    };
                    self.renderer.handle_key_event(key, &props, now)
                };
                self.apply_list_action(action)
            }
        }
    }

    fn title(&self) -> &str {
        "Books Manager"
    }

    fn help(&self) -> &'static str {
        "Book List:\n\
        ↑/↓ or j/k - Select book\n\
        Enter / e - Edit selected book\n\
        a - Add a new book\n\
        d / Delete - Delete selected book\n\
        ←/→ or PgUp/PgDn - Previous/next page\n\
        / or Tab - Search by title (applied after 2s without typing)\n\
        Esc - Leave the search box\n\
        r - Retry after a failed load"
    }

    fn tick(&mut self, now: Instant) {
        let action = self.renderer.tick(now);
        self.apply_list_action(action);
    }

    fn has_pending_request(&self) -> bool {
        self.pending.is_some()
    }

    async fn run_pending_request(
        &mut self,
        api: &dyn BookApi,
        toasts: &mut Toasts,
    ) -> ScreenAction {
        match self.pending.take() {
            Some(ListRequest::Fetch) => self.fetch(api).await,
            Some(ListRequest::Delete(id)) => self.delete(api, id, toasts).await,
            None => {}
        }
        ScreenAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{book, MemoryBookApi};
    use crate::book_tui::components::ToastKind;
    use crossterm::event::KeyModifiers;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> BookListScreen {
        BookListScreen::new(&ListConfig::default(), Duration::from_secs(2))
    }

    async fn loaded(api: &MemoryBookApi) -> BookListScreen {
        let mut screen = screen();
        let mut toasts = Toasts::new();
        screen.run_pending_request(api, &mut toasts).await;
        screen
    }

    fn sample_api() -> MemoryBookApi {
        MemoryBookApi::with_books(vec![
            book("1", "A Wizard of Earthsea"),
            book("2", "The Dispossessed"),
            book("3", "The Lathe of Heaven"),
        ])
    }

    #[tokio::test]
    async fn test_mount_fetches_first_page_sorted_by_title() {
        let api = sample_api();
        let screen = loaded(&api).await;

        assert_eq!(screen.load_state, LoadState::Ready);
        assert_eq!(screen.books.len(), 3);
        let queries = api.queries.lock().unwrap().clone();
        assert_eq!(queries, vec![ListQuery::new("", 1, 10)]);
        assert_eq!(queries[0].sort_by, "title");
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_error_state() {
        let api = MemoryBookApi::failing();
        let mut screen = loaded(&api).await;
        match &screen.load_state {
            LoadState::Failed(message) => assert!(message.contains("500")),
            other => panic!("unexpected state {:?}", other),
        }

        api.set_failing(false);
        let mut toasts = Toasts::new();
        screen.handle_key_event(key(KeyCode::Char('r')), &mut toasts);
        assert!(screen.has_pending_request());
        screen.run_pending_request(&api, &mut toasts).await;
        assert_eq!(screen.load_state, LoadState::Ready);
    }

    #[tokio::test]
    async fn test_page_change_refetches() {
        let api = MemoryBookApi::with_books(
            (1..=25)
                .map(|i| book(&i.to_string(), &format!("Book {:02}", i)))
                .collect(),
        );
        let mut screen = loaded(&api).await;
        assert_eq!(screen.total_pages, 3);

        let mut toasts = Toasts::new();
        screen.handle_key_event(key(KeyCode::Right), &mut toasts);
        assert_eq!(screen.page, 2);
        assert_eq!(screen.load_state, LoadState::Loading);
        screen.run_pending_request(&api, &mut toasts).await;
        assert_eq!(screen.books[0].title, "Book 11");

        // Left at page 1 never leaves page 1
        screen.set_page(1);
        screen.run_pending_request(&api, &mut toasts).await;
        screen.handle_key_event(key(KeyCode::Left), &mut toasts);
        assert_eq!(screen.page, 1);
        assert!(!screen.has_pending_request());
    }

    #[tokio::test]
    async fn test_debounced_search_triggers_one_fetch() {
        let api = sample_api();
        let mut screen = loaded(&api).await;
        let mut toasts = Toasts::new();

        screen.handle_key_event(key(KeyCode::Char('/')), &mut toasts);
        for c in "lathe ".chars() {
            screen.handle_key_event(key(KeyCode::Char(c)), &mut toasts);
        }
        assert!(!screen.has_pending_request());

        screen.tick(Instant::now() + Duration::from_secs(3));
        assert!(screen.has_pending_request());
        assert_eq!(screen.search_query, "lathe");
        screen.run_pending_request(&api, &mut toasts).await;

        assert_eq!(screen.books.len(), 1);
        assert_eq!(screen.list_query().search.as_deref(), Some("lathe"));
        assert_eq!(api.queries.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_declined_delete_keeps_rows_and_notifies() {
        let api = sample_api();
        let mut screen = loaded(&api).await;
        let mut toasts = Toasts::new();

        screen.handle_key_event(key(KeyCode::Char('d')), &mut toasts);
        assert!(screen.confirm.is_some());
        screen.handle_key_event(key(KeyCode::Char('n')), &mut toasts);

        assert!(screen.confirm.is_none());
        assert!(!screen.has_pending_request());
        assert_eq!(screen.books.len(), 3);
        let toast = toasts.latest().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Deletion cancelled.");
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_row() {
        let api = sample_api();
        let mut screen = loaded(&api).await;
        let mut toasts = Toasts::new();

        screen.handle_key_event(key(KeyCode::Down), &mut toasts);
        screen.handle_key_event(key(KeyCode::Delete), &mut toasts);
        screen.handle_key_event(key(KeyCode::Char('y')), &mut toasts);
        screen.run_pending_request(&api, &mut toasts).await;

        assert!(api.calls().contains(&"delete 2".to_string()));
        assert!(screen.books.iter().all(|b| b.id != "2"));
        assert_eq!(screen.books.len(), 2);
        assert_eq!(toasts.latest().unwrap().message, "Book deleted successfully!");
    }

    #[tokio::test]
    async fn test_failed_delete_still_removes_row_locally() {
        // Known gap: the row disappears even though the backend kept it.
        let api = sample_api();
        let mut screen = loaded(&api).await;
        let mut toasts = Toasts::new();

        api.set_failing(true);
        screen.handle_key_event(key(KeyCode::Char('d')), &mut toasts);
        screen.handle_key_event(key(KeyCode::Enter), &mut toasts);
        screen.run_pending_request(&api, &mut toasts).await;

        assert_eq!(toasts.latest().unwrap().message, "Failed to delete book. Please try again.");
        assert!(screen.books.iter().all(|b| b.id != "1"));
        assert_eq!(api.books.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_add_and_edit_navigate() {
        let api = sample_api();
        let mut screen = loaded(&api).await;
        let mut toasts = Toasts::new();

        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('a')), &mut toasts),
            ScreenAction::NavigateTo(Route::CreateBook)
        );
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Enter), &mut toasts),
            ScreenAction::NavigateTo(Route::EditBook("1".to_string()))
        );
    }
}
