//! Application state and event loop

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    DefaultTerminal, Frame,
};

use crate::services::{Aggregator, FetchService};
use crate::tui::state::{derive_view, reduce, AppEvent, Phase, SessionState};
use crate::tui::theme::Theme;
use crate::tui::widgets::{search::SearchInput, spinner::Spinner, table};
use crate::types::AggregatedProduct;

/// Maximum content width (keeps layout clean on wide terminals)
const MAX_CONTENT_WIDTH: u16 = 100;

/// Result sent back from the loader thread
type FetchOutcome = Result<Vec<AggregatedProduct>, String>;

/// Main application
pub struct App {
    state: SessionState,
    spinner_frame: usize,
    scroll: usize,
    should_quit: bool,
    refresh_requested: bool,
    last_updated: Option<DateTime<Local>>,
    theme: Theme,
}

impl App {
    /// Create a new app in idle state
    pub fn new(theme: Theme) -> Self {
        Self {
            state: SessionState::default(),
            spinner_frame: 0,
            scroll: 0,
            should_quit: false,
            refresh_requested: false,
            last_updated: None,
            theme,
        }
    }

    /// Feed an event through the reducer and re-clamp the scroll window
    pub fn dispatch(&mut self, event: AppEvent) {
        self.state = reduce(std::mem::take(&mut self.state), event);
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let rows = derive_view(&self.state).rows.len();
        self.scroll = self.scroll.min(table::max_scroll(rows));
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match key.code {
                        KeyCode::Char('c') => self.should_quit = true,
                        KeyCode::Char('r') => self.refresh_requested = true,
                        _ => {}
                    }
                    return;
                }

                match key.code {
                    KeyCode::Esc => {
                        // First Esc clears the filter, second quits
                        if self.state.search.is_empty() {
                            self.should_quit = true;
                        } else {
                            self.dispatch(AppEvent::SearchChanged(String::new()));
                        }
                    }
                    KeyCode::Backspace => {
                        let mut term = self.state.search.clone();
                        term.pop();
                        self.dispatch(AppEvent::SearchChanged(term));
                    }
                    KeyCode::Char(c) => {
                        let mut term = self.state.search.clone();
                        term.push(c);
                        self.dispatch(AppEvent::SearchChanged(term));
                    }
                    KeyCode::Up => {
                        self.scroll = self.scroll.saturating_sub(1);
                    }
                    KeyCode::Down => {
                        let rows = derive_view(&self.state).rows.len();
                        self.scroll = (self.scroll + 1).min(table::max_scroll(rows));
                    }
                    _ => {}
                }
            }
        }
    }

    /// Take the pending refresh request, if any
    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }

    /// Record a successful fetch time for the status line
    pub fn mark_updated(&mut self, at: DateTime<Local>) {
        self.last_updated = Some(at);
    }

    /// Update spinner animation
    pub fn tick(&mut self) {
        if self.state.phase == Phase::Loading {
            self.spinner_frame = Spinner::next_frame(self.spinner_frame);
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current search term
    pub fn search(&self) -> &str {
        &self.state.search
    }

    /// Draw the application
    pub fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    fn render_status_line(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled("Esc", Style::default().fg(self.theme.accent())),
            Span::styled(": Clear/Quit", Style::default().fg(self.theme.muted())),
            Span::raw("  "),
            Span::styled("Ctrl+R", Style::default().fg(self.theme.accent())),
            Span::styled(": Refresh", Style::default().fg(self.theme.muted())),
            Span::raw("  "),
            Span::styled("Ctrl+C", Style::default().fg(self.theme.accent())),
            Span::styled(": Quit", Style::default().fg(self.theme.muted())),
        ];

        if let Some(at) = self.last_updated {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("Updated {}", at.format("%H:%M:%S")),
                Style::default().fg(self.theme.muted()),
            ));
        }

        Paragraph::new(Line::from(spans))
            .centered()
            .render(area, buf);
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state.phase {
            Phase::Idle | Phase::Loading => {
                Spinner::new(self.spinner_frame).render(area, buf);
            }
            Phase::Populated | Phase::Failed => {
                // Apply max width constraint and center the content
                let content_width = area.width.min(MAX_CONTENT_WIDTH);
                let x_offset = (area.width.saturating_sub(content_width)) / 2;
                let centered_area = Rect {
                    x: area.x + x_offset,
                    y: area.y,
                    width: content_width,
                    height: area.height,
                };

                let chunks = Layout::vertical([
                    Constraint::Length(1), // Top padding
                    Constraint::Length(1), // Search input
                    Constraint::Length(1), // Blank
                    Constraint::Min(5),    // Table
                    Constraint::Length(1), // Status line
                ])
                .split(centered_area);

                let view = derive_view(&self.state);

                SearchInput::new(
                    &self.state.search,
                    view.rows.len(),
                    self.state.products.len(),
                    self.theme,
                )
                .render(chunks[1], buf);

                table::ProductTable::new(&view, self.scroll, self.theme).render(chunks[3], buf);

                self.render_status_line(chunks[4], buf);
            }
        }
    }
}

/// Run the TUI application
pub fn run() -> anyhow::Result<()> {
    // Detect before raw mode; detection reads the terminal directly
    let theme = Theme::detect();
    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, theme);
    ratatui::restore();
    result
}

/// Run the fetch/merge/sort pipeline (extracted for the loader thread)
fn load_products() -> FetchOutcome {
    let fetcher = FetchService::new();
    match fetcher.fetch_all() {
        Ok(records) => Ok(Aggregator::merge_sorted(&records)),
        Err(e) => Err(e.to_string()),
    }
}

/// Spawn a background loader thread, returning its result channel
fn spawn_loader() -> mpsc::Receiver<FetchOutcome> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(load_products());
    });
    rx
}

fn run_app(terminal: &mut DefaultTerminal, theme: Theme) -> anyhow::Result<()> {
    let mut app = App::new(theme);

    // Kick off the initial fetch
    app.dispatch(AppEvent::FetchStarted);
    let mut loader = Some(spawn_loader());

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if app.should_quit() {
            break;
        }

        // Check for loader completion (non-blocking)
        if let Some(rx) = &loader {
            if let Ok(outcome) = rx.try_recv() {
                loader = None;
                match outcome {
                    Ok(products) => {
                        app.dispatch(AppEvent::FetchSucceeded(products));
                        app.mark_updated(Local::now());
                    }
                    Err(message) => {
                        // Failure renders as an empty table; logged only
                        eprintln!("[revtrack] Warning: fetch failed: {}", message);
                        app.dispatch(AppEvent::FetchFailed);
                    }
                }
            }
        }

        // Poll for events with 100ms timeout for spinner animation
        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?);
            if app.take_refresh_request() && loader.is_none() {
                app.dispatch(AppEvent::FetchStarted);
                loader = Some(spawn_loader());
            }
        } else {
            app.tick();
        }
    }

    Ok(())
}
