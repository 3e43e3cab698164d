//! Create and edit forms for a single book

use async_trait::async_trait;
use chrono::Datelike;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::{error, info, warn};

use crate::api::BookApi;
use crate::book_tui::{
    app::Route,
    components::{ConfirmDialog, ConfirmOutcome, InputField, Toasts},
    handlers::{EditOutcome, TextEditKeys},
    traits::{Screen, ScreenAction},
    ui::{centered_box, Styles},
};
use crate::models::{BookDraft, BookField};
use crate::validation::{validate_draft, validate_field, FieldErrors};

/// Years the selector can reach
const MIN_YEAR: i32 = 1000;
const MAX_YEAR: i32 = 9999;

/// Which flow the form runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// `snapshot` is the record as fetched, `None` until (or unless) the fetch succeeds
    Edit { id: String, snapshot: Option<BookDraft> },
}

/// What an open confirm dialog is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormConfirm {
    Update,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormRequest {
    Fetch,
    Create,
    Update,
}

/// Book form state shared by the create and edit flows
pub struct BookFormScreen {
    pub mode: FormMode,
    pub draft: BookDraft,
    pub errors: FieldErrors,
    pub focus: BookField,
    /// Character index of the cursor in the focused field
    pub cursor: usize,
    pub confirm: Option<(ConfirmDialog, FormConfirm)>,
    pub loading: bool,
    pending: Option<FormRequest>,
}

/// Step a year selector value by `delta`; an empty value starts at `current_year`
pub fn step_year(value: &str, delta: i32, current_year: i32) -> String {
    let year = match value.trim().parse::<i32>() {
        Ok(year) => year + delta,
        Err(_) => current_year,
    };
    year.clamp(MIN_YEAR, MAX_YEAR).to_string()
}

fn field_icon(field: BookField) -> &'static str {
    match field {
        BookField::Title => "✎",
        BookField::Isbn => "#",
        BookField::PublishedYear => "◷",
        BookField::Author => "✍",
        BookField::Description => "≡",
    }
}

impl BookFormScreen {
    /// Empty form for a new book
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: BookDraft::default(),
            errors: FieldErrors::default(),
            focus: BookField::Title,
            cursor: 0,
            confirm: None,
            loading: false,
            pending: None,
        }
    }

    /// Form for an existing book; the record is fetched on the first loop turn
    pub fn edit(id: &str) -> Self {
        Self {
            mode: FormMode::Edit {
                id: id.to_string(),
                snapshot: None,
            },
            loading: true,
            pending: Some(FormRequest::Fetch),
            ..Self::create()
        }
    }

    /// Whether the draft differs from the state the form started from: the
    /// fetched snapshot, or an empty draft for create and failed fetches
    pub fn is_modified(&self) -> bool {
        match &self.mode {
            FormMode::Edit { snapshot: Some(snapshot), .. } => &self.draft != snapshot,
            FormMode::Create | FormMode::Edit { snapshot: None, .. } => {
                self.draft != BookDraft::default()
            }
        }
    }

    /// Queue a backend request; the form shows its loading state until it completes
    fn start(&mut self, request: FormRequest) {
        self.pending = Some(request);
        self.loading = true;
    }

    fn set_focus(&mut self, field: BookField) {
        self.focus = field;
        self.cursor = self.draft.get(field).chars().count();
    }

    fn revalidate(&mut self, field: BookField) {
        self.errors.set(field, validate_field(field, self.draft.get(field)));
    }

    fn handle_year_key(&mut self, key: KeyEvent) {
        let current_year = chrono::Local::now().year();
        let value = &mut self.draft.published_year;
        match key.code {
            KeyCode::Up => *value = step_year(value, 1, current_year),
            KeyCode::Down => *value = step_year(value, -1, current_year),
            KeyCode::Backspace | KeyCode::Delete => value.clear(),
            _ => return,
        }
        self.cursor = self.draft.published_year.chars().count();
        self.revalidate(BookField::PublishedYear);
    }

    fn submit(&mut self, toasts: &mut Toasts) {
        if let FormMode::Edit { snapshot: Some(snapshot), .. } = &self.mode {
            if snapshot == &self.draft {
                toasts.info("No changes made");
                return;
            }
        }

        self.errors = validate_draft(&self.draft);
        if !self.errors.is_empty() {
            info!("Form has {} invalid field(s)", self.errors.len());
            return;
        }

        match self.mode {
            FormMode::Create => self.start(FormRequest::Create),
            FormMode::Edit { .. } => {
                self.confirm = Some((
                    ConfirmDialog::new(
                        "Confirm Update",
                        "Are you sure you want to update the book?",
                        "Yes, update",
                    ),
                    FormConfirm::Update,
                ));
            }
        }
    }

    fn go_back(&mut self) -> ScreenAction {
        if self.is_modified() {
            self.confirm = Some((
                ConfirmDialog::new(
                    "Unsaved Changes",
                    "You have unsaved changes. Are you sure you want to go back?",
                    "Yes, leave it!",
                ),
                FormConfirm::Leave,
            ));
            ScreenAction::None
        } else {
            ScreenAction::NavigateBack
        }
    }

    async fn fetch(&mut self, api: &dyn BookApi, toasts: &mut Toasts) {
        let FormMode::Edit { id, snapshot } = &mut self.mode else {
            return;
        };
        match api.get_book(id).await {
            Ok(book) => {
                let draft = book.to_draft();
                *snapshot = Some(draft.clone());
                self.draft = draft;
                self.errors.clear();
                self.set_focus(BookField::Title);
            }
            Err(e) => {
                error!("Failed to fetch book {}: {}", id, e);
                toasts.error("Failed to fetch book details");
            }
        }
    }

    async fn create_book(&mut self, api: &dyn BookApi, toasts: &mut Toasts) -> ScreenAction {
        match api.create_book(&self.draft).await {
            Ok(book) => {
                info!("Created book {}", book.id);
                self.draft = BookDraft::default();
                self.errors.clear();
                toasts.success("Book added successfully!");
                ScreenAction::NavigateTo(Route::BookList)
            }
            Err(e) => {
                warn!("Failed to create book: {}", e);
                toasts.error("Error adding book. Please try again.");
                ScreenAction::None
            }
        }
    }

    async fn update_book(&mut self, api: &dyn BookApi, toasts: &mut Toasts) -> ScreenAction {
        let FormMode::Edit { id, .. } = &self.mode else {
            return ScreenAction::None;
        };
        match api.update_book(id, &self.draft).await {
            Ok(_) => {
                toasts.success("Book updated successfully!");
                ScreenAction::NavigateTo(Route::BookList)
            }
            Err(e) => {
                warn!("Failed to update book {}: {}", id, e);
                toasts.error("Error updating book. Please try again.");
                ScreenAction::None
            }
        }
    }

    fn input_field(&self, field: BookField) -> InputField<'_> {
        let name = match field {
            BookField::PublishedYear => "Published Year (↑/↓)",
            other => other.label(),
        };
        let input = InputField::new(name, self.draft.get(field))
            .with_placeholder(field.placeholder())
            .with_icon(field_icon(field))
            .with_error(self.errors.get(field))
            .focused(self.focus == field && !self.loading, self.cursor);
        if field == BookField::Description {
            input.multiline()
        } else {
            input
        }
    }
}

#[async_trait]
impl Screen for BookFormScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        let heading = match self.mode {
            FormMode::Create => "Add Book",
            FormMode::Edit { .. } => "Edit Book",
        };
        let block = Block::default()
            .title(Span::styled(format!(" {} ", heading), Styles::title()))
            .borders(Borders::ALL)
            .border_style(Styles::active_border());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let fields: Vec<InputField> = BookField::ALL
            .iter()
            .map(|field| self.input_field(*field))
            .collect();
        let constraints: Vec<Constraint> = fields
            .iter()
            .map(|field| Constraint::Length(field.height()))
            .chain([Constraint::Min(0), Constraint::Length(1)])
            .collect();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (field, chunk) in fields.iter().zip(chunks.iter()) {
            field.render(f, *chunk);
        }

        let submit_label = match self.mode {
            FormMode::Create => "Add Book",
            FormMode::Edit { .. } => "Update Book",
        };
        let footer = Line::from(vec![
            Span::styled(format!("[Ctrl+S] {}", submit_label), Styles::success()),
            Span::raw("  "),
            Span::styled("[Esc] Back", Styles::inactive()),
        ]);
        if let Some(last) = chunks.last() {
            f.render_widget(Paragraph::new(footer).alignment(Alignment::Right), *last);
        }

        if self.loading {
            let popup = centered_box(20, 3, area);
            f.render_widget(Clear, popup);
            f.render_widget(
                Paragraph::new("Loading...")
                    .alignment(Alignment::Center)
                    .style(Styles::warning())
                    .block(Block::default().borders(Borders::ALL)),
                popup,
            );
        }

        if let Some((dialog, _)) = &self.confirm {
            dialog.render(f, area);
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, toasts: &mut Toasts) -> ScreenAction {
        if let Some((dialog, kind)) = self.confirm.as_mut() {
            let kind = *kind;
            return match dialog.handle_key_event(key) {
                Some(ConfirmOutcome::Confirmed) => {
                    self.confirm = None;
                    match kind {
                        FormConfirm::Update => {
                            self.start(FormRequest::Update);
                            ScreenAction::None
                        }
                        FormConfirm::Leave => ScreenAction::NavigateBack,
                    }
                }
                Some(ConfirmOutcome::Cancelled) => {
                    self.confirm = None;
                    ScreenAction::None
                }
                None => ScreenAction::None,
            };
        }

        if self.loading {
            return ScreenAction::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.submit(toasts);
            return ScreenAction::None;
        }

        match key.code {
            KeyCode::Esc => return self.go_back(),
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                return ScreenAction::None;
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.previous());
                return ScreenAction::None;
            }
            KeyCode::Enter if self.focus != BookField::Description => {
                self.submit(toasts);
                return ScreenAction::None;
            }
            _ => {}
        }

        match self.focus {
            BookField::PublishedYear => self.handle_year_key(key),
            field => match key.code {
                KeyCode::Up if field != BookField::Description => self.set_focus(field.previous()),
                KeyCode::Down if field != BookField::Description => self.set_focus(field.next()),
                _ => {
                    let multiline = field == BookField::Description;
                    let value = self.draft.get_mut(field);
                    let outcome = TextEditKeys::apply(value, &mut self.cursor, key, multiline);
                    if outcome == EditOutcome::Changed {
                        self.revalidate(field);
                    }
                }
            },
        }
        ScreenAction::None
    }

    fn title(&self) -> &str {
        match self.mode {
            FormMode::Create => "Add Book",
            FormMode::Edit { .. } => "Edit Book",
        }
    }

    fn help(&self) -> &'static str {
        "Book Form:\n\
        Tab / Shift+Tab - Next/previous field\n\
        ↑/↓ - Previous/next field, or change the year\n\
        Backspace on year - Clear the year\n\
        Enter / Ctrl+S - Submit (Enter adds a line in Description)\n\
        Esc - Back to the list"
    }

    fn has_pending_request(&self) -> bool {
        self.pending.is_some()
    }

    async fn run_pending_request(
        &mut self,
        api: &dyn BookApi,
        toasts: &mut Toasts,
    ) -> ScreenAction {
        let Some(request) = self.pending.take() else {
            return ScreenAction::None;
        };

        let action = match request {
            FormRequest::Fetch => {
                self.fetch(api, toasts).await;
                ScreenAction::None
            }
            FormRequest::Create => self.create_book(api, toasts).await,
            FormRequest::Update => self.update_book(api, toasts).await,
        };
        self.loading = false;
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{book, MemoryBookApi};
    use crate::book_tui::components::ToastKind;
    use crate::validation::{ISBN_MESSAGE, REQUIRED_MESSAGE, YEAR_REQUIRED_MESSAGE};
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl_s() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)
    }

    fn type_text(screen: &mut BookFormScreen, text: &str, toasts: &mut Toasts) {
        for c in text.chars() {
            screen.handle_key_event(key(KeyCode::Char(c)), toasts);
        }
    }

    fn filled_create_form() -> BookFormScreen {
        let mut screen = BookFormScreen::create();
        screen.draft = BookDraft {
            title: "Solaris".into(),
            author: "Stanisław Lem".into(),
            description: "A planet-wide ocean".into(),
            published_year: "1961".into(),
            isbn: "978-0156027601".into(),
        };
        screen
    }

    async fn loaded_edit_form(api: &MemoryBookApi) -> BookFormScreen {
        let mut screen = BookFormScreen::edit("1");
        let mut toasts = Toasts::new();
        screen.run_pending_request(api, &mut toasts).await;
        screen
    }

    #[test]
    fn test_step_year() {
        assert_eq!(step_year("", 1, 2026), "2026");
        assert_eq!(step_year("", -1, 2026), "2026");
        assert_eq!(step_year("1969", 1, 2026), "1970");
        assert_eq!(step_year("1969", -1, 2026), "1968");
        assert_eq!(step_year("9999", 1, 2026), "9999");
    }

    #[test]
    fn test_typing_validates_field_on_every_change() {
        let mut screen = BookFormScreen::create();
        let mut toasts = Toasts::new();

        screen.handle_key_event(key(KeyCode::Tab), &mut toasts);
        assert_eq!(screen.focus, BookField::Isbn);
        type_text(&mut screen, "978-", &mut toasts);
        assert_eq!(screen.errors.get(BookField::Isbn), Some(ISBN_MESSAGE));
        type_text(&mut screen, "0156027601", &mut toasts);
        assert_eq!(screen.errors.get(BookField::Isbn), None);

        for _ in 0..14 {
            screen.handle_key_event(key(KeyCode::Backspace), &mut toasts);
        }
        assert_eq!(screen.draft.isbn, "");
        assert_eq!(screen.errors.get(BookField::Isbn), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_year_selector_steps_and_clears() {
        let mut screen = BookFormScreen::create();
        let mut toasts = Toasts::new();
        screen.set_focus(BookField::PublishedYear);

        // Digits are not typed into the selector
        type_text(&mut screen, "12", &mut toasts);
        assert_eq!(screen.draft.published_year, "");

        screen.handle_key_event(key(KeyCode::Up), &mut toasts);
        let year = chrono::Local::now().year();
        assert_eq!(screen.draft.published_year, year.to_string());
        screen.handle_key_event(key(KeyCode::Down), &mut toasts);
        assert_eq!(screen.draft.published_year, (year - 1).to_string());
        assert_eq!(screen.errors.get(BookField::PublishedYear), None);

        screen.handle_key_event(key(KeyCode::Backspace), &mut toasts);
        assert_eq!(screen.draft.published_year, "");
        assert_eq!(screen.errors.get(BookField::PublishedYear), Some(YEAR_REQUIRED_MESSAGE));
    }

    #[tokio::test]
    async fn test_create_with_missing_field_sends_nothing() {
        let api = MemoryBookApi::default();
        let mut screen = filled_create_form();
        screen.draft.title.clear();
        let mut toasts = Toasts::new();

        screen.handle_key_event(ctrl_s(), &mut toasts);
        assert!(!screen.has_pending_request());
        assert_eq!(screen.errors.get(BookField::Title), Some(REQUIRED_MESSAGE));
        assert_eq!(screen.errors.len(), 1);

        screen.run_pending_request(&api, &mut toasts).await;
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_empty_create_submit_shows_every_error() {
        let mut screen = BookFormScreen::create();
        let mut toasts = Toasts::new();
        screen.handle_key_event(key(KeyCode::Enter), &mut toasts);
        assert_eq!(screen.errors.len(), 5);
        assert!(toasts.is_empty());
    }

    #[tokio::test]
    async fn test_create_success_clears_draft_and_returns_to_list() {
        let api = MemoryBookApi::default();
        let mut screen = filled_create_form();
        let mut toasts = Toasts::new();

        screen.handle_key_event(ctrl_s(), &mut toasts);
        let action = screen.run_pending_request(&api, &mut toasts).await;

        assert_eq!(action, ScreenAction::NavigateTo(Route::BookList));
        assert_eq!(api.calls(), vec!["create Solaris".to_string()]);
        assert_eq!(screen.draft, BookDraft::default());
        assert!(!screen.loading);
        let toast = toasts.latest().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Book added successfully!");
    }

    #[tokio::test]
    async fn test_create_failure_keeps_draft() {
        let api = MemoryBookApi::failing();
        let mut screen = filled_create_form();
        let mut toasts = Toasts::new();

        screen.handle_key_event(ctrl_s(), &mut toasts);
        let action = screen.run_pending_request(&api, &mut toasts).await;

        assert_eq!(action, ScreenAction::None);
        assert_eq!(screen.draft.title, "Solaris");
        assert_eq!(toasts.latest().unwrap().message, "Error adding book. Please try again.");
    }

    #[tokio::test]
    async fn test_edit_seeds_draft_and_snapshot() {
        let api = MemoryBookApi::with_books(vec![book("1", "The Left Hand of Darkness")]);
        let screen = loaded_edit_form(&api).await;

        assert!(!screen.loading);
        assert_eq!(screen.draft.title, "The Left Hand of Darkness");
        assert!(!screen.is_modified());
        match &screen.mode {
            FormMode::Edit { snapshot, .. } => assert_eq!(snapshot.as_ref(), Some(&screen.draft)),
            FormMode::Create => panic!("expected edit mode"),
        }
    }

    #[tokio::test]
    async fn test_unchanged_edit_submit_sends_nothing() {
        let api = MemoryBookApi::with_books(vec![book("1", "The Left Hand of Darkness")]);
        let mut screen = loaded_edit_form(&api).await;
        let mut toasts = Toasts::new();

        screen.handle_key_event(ctrl_s(), &mut toasts);

        assert!(screen.confirm.is_none());
        assert!(!screen.has_pending_request());
        assert_eq!(api.calls(), vec!["get 1".to_string()]);
        let toast = toasts.latest().unwrap();
        assert_eq!(toast.kind, ToastKind::Info);
        assert_eq!(toast.message, "No changes made");
    }

    #[tokio::test]
    async fn test_edit_update_after_confirmation() {
        let api = MemoryBookApi::with_books(vec![book("1", "The Left Hand of Darkness")]);
        let mut screen = loaded_edit_form(&api).await;
        let mut toasts = Toasts::new();

        type_text(&mut screen, " (50th ed.)", &mut toasts);
        screen.handle_key_event(ctrl_s(), &mut toasts);
        let (dialog, kind) = screen.confirm.as_ref().unwrap();
        assert_eq!(*kind, FormConfirm::Update);
        assert_eq!(dialog.title, "Confirm Update");

        screen.handle_key_event(key(KeyCode::Char('y')), &mut toasts);
        let action = screen.run_pending_request(&api, &mut toasts).await;

        assert_eq!(action, ScreenAction::NavigateTo(Route::BookList));
        assert_eq!(api.calls(), vec!["get 1".to_string(), "update 1".to_string()]);
        assert_eq!(api.books.lock().unwrap()[0].title, "The Left Hand of Darkness (50th ed.)");
        assert_eq!(toasts.latest().unwrap().message, "Book updated successfully!");
    }

    #[tokio::test]
    async fn test_declined_update_sends_nothing() {
        let api = MemoryBookApi::with_books(vec![book("1", "Dune")]);
        let mut screen = loaded_edit_form(&api).await;
        let mut toasts = Toasts::new();

        type_text(&mut screen, "!", &mut toasts);
        screen.handle_key_event(ctrl_s(), &mut toasts);
        screen.handle_key_event(key(KeyCode::Esc), &mut toasts);

        assert!(screen.confirm.is_none());
        assert!(!screen.has_pending_request());
        assert_eq!(screen.draft.title, "Dune!");
    }

    #[tokio::test]
    async fn test_edit_update_failure_keeps_draft() {
        let api = MemoryBookApi::with_books(vec![book("1", "Dune")]);
        let mut screen = loaded_edit_form(&api).await;
        let mut toasts = Toasts::new();

        type_text(&mut screen, " Messiah", &mut toasts);
        screen.handle_key_event(ctrl_s(), &mut toasts);
        screen.handle_key_event(key(KeyCode::Enter), &mut toasts);
        api.set_failing(true);
        let action = screen.run_pending_request(&api, &mut toasts).await;

        assert_eq!(action, ScreenAction::None);
        assert_eq!(screen.draft.title, "Dune Messiah");
        assert_eq!(toasts.latest().unwrap().message, "Error updating book. Please try again.");
    }

    #[tokio::test]
    async fn test_edit_fetch_failure_leaves_form_empty() {
        let api = MemoryBookApi::failing();
        let mut screen = BookFormScreen::edit("missing");
        let mut toasts = Toasts::new();
        screen.run_pending_request(&api, &mut toasts).await;

        assert_eq!(toasts.latest().unwrap().message, "Failed to fetch book details");
        assert_eq!(screen.draft, BookDraft::default());
        assert!(!screen.is_modified());
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Esc), &mut toasts),
            ScreenAction::NavigateBack
        );
        assert!(screen.confirm.is_none());
    }

    #[tokio::test]
    async fn test_typing_after_failed_fetch_guards_leaving() {
        let api = MemoryBookApi::failing();
        let mut screen = BookFormScreen::edit("missing");
        let mut toasts = Toasts::new();
        screen.run_pending_request(&api, &mut toasts).await;

        type_text(&mut screen, "Dune", &mut toasts);
        assert!(screen.is_modified());
        assert_eq!(screen.handle_key_event(key(KeyCode::Esc), &mut toasts), ScreenAction::None);
        assert_eq!(screen.confirm.as_ref().map(|(_, kind)| *kind), Some(FormConfirm::Leave));
    }

    #[tokio::test]
    async fn test_leaving_with_unsaved_changes_asks_first() {
        let api = MemoryBookApi::with_books(vec![book("1", "Dune")]);
        let mut screen = loaded_edit_form(&api).await;
        let mut toasts = Toasts::new();

        type_text(&mut screen, "x", &mut toasts);
        assert_eq!(screen.handle_key_event(key(KeyCode::Esc), &mut toasts), ScreenAction::None);
        let (dialog, kind) = screen.confirm.as_ref().unwrap();
        assert_eq!(*kind, FormConfirm::Leave);
        assert_eq!(dialog.confirm_label, "Yes, leave it!");

        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('n')), &mut toasts),
            ScreenAction::None
        );
        assert!(screen.confirm.is_none());

        screen.handle_key_event(key(KeyCode::Esc), &mut toasts);
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Char('y')), &mut toasts),
            ScreenAction::NavigateBack
        );
    }

    #[test]
    fn test_pristine_form_leaves_immediately() {
        let mut screen = BookFormScreen::create();
        let mut toasts = Toasts::new();
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Esc), &mut toasts),
            ScreenAction::NavigateBack
        );
    }

    #[test]
    fn test_render_shows_inline_errors() {
        let mut screen = BookFormScreen::create();
        let mut toasts = Toasts::new();
        screen.handle_key_event(ctrl_s(), &mut toasts);

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                screen.draw(f, area)
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol().to_string())
            .collect();

        assert!(text.contains("Add Book"));
        assert!(text.contains("Select Published Year"));
        assert!(text.contains(REQUIRED_MESSAGE));
        assert!(text.contains(YEAR_REQUIRED_MESSAGE));
    }
}
