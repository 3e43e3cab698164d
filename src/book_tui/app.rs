//! Main TUI application state and logic

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tracing::info;

use super::components::Toasts;
use super::screens::{BookFormScreen, BookListScreen};
use super::traits::{Screen, ScreenAction};
use super::ui::{centered_rect, Styles};
use crate::api::BookApi;
use crate::config::Config;

/// Longest wait for input before timers are advanced
const TICK_RATE: Duration = Duration::from_millis(100);

/// Application routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    BookList,
    CreateBook,
    EditBook(String),
}

/// Main TUI application state
pub struct App {
    /// Application configuration
    pub config: Config,
    api: Arc<dyn BookApi>,
    /// Route of the current screen
    pub route: Route,
    /// Routes to return to, oldest first
    history: Vec<Route>,
    screen: Box<dyn Screen>,

    // Global application state
    pub toasts: Toasts,
    pub should_quit: bool,
    pub show_help_popup: bool,
}

impl App {
    /// Create a new TUI application showing the book list
    pub fn new(config: Config, api: Arc<dyn BookApi>) -> Self {
        let screen = build_screen(&config, &Route::BookList);
        Self {
            config,
            api,
            route: Route::BookList,
            history: Vec::new(),
            screen,
            toasts: Toasts::new(),
            should_quit: false,
            show_help_popup: false,
        }
    }

    /// Run the main application loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            // Draw first so the screen shows its loading state while a request runs
            terminal.draw(|f| self.draw(f))?;

            if self.should_quit {
                break;
            }

            if self.screen.has_pending_request() {
                self.process_pending_request().await;
                continue;
            }

            if event::poll(TICK_RATE)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }

            self.tick(Instant::now());
        }

        info!("Application loop completed");
        Ok(())
    }

    /// Handle keyboard input events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global shortcuts
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::F(1) => {
                self.show_help_popup = !self.show_help_popup;
                return;
            }
            KeyCode::Esc if self.show_help_popup => {
                self.show_help_popup = false;
                return;
            }
            _ => {}
        }

        if self.show_help_popup {
            return;
        }

        let action = self.screen.handle_key_event(key, &mut self.toasts);
        self.apply_action(action);
    }

    /// Run the current screen's queued backend request
    pub async fn process_pending_request(&mut self) {
        let action = self
            .screen
            .run_pending_request(self.api.as_ref(), &mut self.toasts)
            .await;
        self.apply_action(action);
    }

    /// Advance the screen's timers and expire notifications
    pub fn tick(&mut self, now: Instant) {
        self.screen.tick(now);
        self.toasts.prune(now);
    }

    pub fn apply_action(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::NavigateTo(route) => self.navigate_to(route),
            ScreenAction::NavigateBack => self.navigate_back(),
            ScreenAction::None => {}
        }
    }

    /// Navigate to a route; going to the list starts a fresh history
    pub fn navigate_to(&mut self, route: Route) {
        info!("Navigating to {:?}", route);
        if route == Route::BookList {
            self.history.clear();
        } else {
            self.history.push(self.route.clone());
        }
        self.show_route(route);
    }

    /// Return to the previous route, or the list when there is none
    pub fn navigate_back(&mut self) {
        let route = self.history.pop().unwrap_or(Route::BookList);
        info!("Navigating back to {:?}", route);
        self.show_route(route);
    }

    /// Screens are rebuilt on every visit, so the list always remounts on page 1
    fn show_route(&mut self, route: Route) {
        self.screen = build_screen(&self.config, &route);
        self.route = route;
    }

    /// Draw the UI
    pub fn draw(&mut self, f: &mut Frame) {
        let size = f.size();

        // Main layout: header on top, status bar at bottom, content area between
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        self.draw_header(f, chunks[0]);
        self.screen.draw(f, chunks[1]);
        self.draw_status_bar(f, chunks[2]);
        self.toasts.render(f, chunks[1]);

        if self.show_help_popup {
            self.draw_help_popup(f, size);
        }
    }

    fn draw_header(&self, f: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(format!(" {} ", self.screen.title()), Styles::selected()),
            Span::styled(format!("  {}", self.config.api_base()), Styles::inactive()),
        ]);
        f.render_widget(Paragraph::new(header), area);
    }

    /// Draw status bar with shortcuts
    fn draw_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = "F1: Help | Esc: Back | Ctrl+C: Quit";
        f.render_widget(
            Paragraph::new(status_text).style(Style::default().fg(Color::Gray)),
            area,
        );
    }

    /// Draw help popup with context-sensitive shortcuts
    fn draw_help_popup(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(70, 60, area);

        f.render_widget(Clear, popup_area);

        let help_popup = Paragraph::new(self.get_context_help())
            .block(
                Block::default()
                    .title("Help - Context Shortcuts")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        f.render_widget(help_popup, popup_area);
    }

    /// Get context-sensitive help content
    fn get_context_help(&self) -> String {
        let global_help = "Global Shortcuts:\n\
            F1 - Toggle this help\n\
            Ctrl+C / Ctrl+Q - Quit application\n\n";

        format!("{}{}", global_help, self.screen.help())
    }
}

fn build_screen(config: &Config, route: &Route) -> Box<dyn Screen> {
    match route {
        Route::BookList => Box::new(BookListScreen::new(&config.list, config.search_debounce())),
        Route::CreateBook => Box::new(BookFormScreen::create()),
        Route::EditBook(id) => Box::new(BookFormScreen::edit(id)),
    }
}
