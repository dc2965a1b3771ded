//! Application state and main app structure
//!
//! The app assembles one comment box and one comment list over a single
//! store and a comments gateway. All reducer and render work happens
//! synchronously on the loop thread; the only asynchronous boundary is the
//! comments fetch, whose resolution arrives as an [`Event`] over the app
//! channel and is dispatched through the same reducer path.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use cb_core::config::UiConfig;
use cb_core::{comments_fetched, Action, Store};
use cb_net::{fetch_comments, CommentsGateway, FetchHandle};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tracing::{info, warn};

use crate::components::{
    CommentBox, CommentList, Control, FETCH_COMMENTS_BUTTON, SAVE_COMMENT_BUTTON,
};
use crate::events::Event;
use crate::theme::Theme;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Input mode for editing the draft
    Insert,
    /// Help mode
    Help,
}

/// Application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Status message
    pub message: Option<String>,
    /// Should quit
    pub should_quit: bool,
    /// Scroll offset for the comment list
    pub scroll_offset: usize,
}

impl AppState {
    /// Create a new app state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

/// Main application
pub struct App {
    /// Application state
    pub state: AppState,
    store: Store,
    comment_box: CommentBox,
    comment_list: CommentList,
    gateway: Arc<dyn CommentsGateway>,
    events_tx: flume::Sender<Event>,
    events_rx: flume::Receiver<Event>,
    fetch: Option<FetchHandle>,
    theme: Theme,
    tick_rate: Duration,
    show_key_hints: bool,
}

impl App {
    /// Compose the app: one store, one comment box, one comment list
    pub fn new(ui: UiConfig, gateway: Arc<dyn CommentsGateway>) -> Self {
        let mut store = Store::new();
        let comment_list = CommentList::mount(&mut store);
        let (events_tx, events_rx) = flume::unbounded();
        Self {
            state: AppState::new(),
            store,
            comment_box: CommentBox::new(),
            comment_list,
            gateway,
            events_tx,
            events_rx,
            fetch: None,
            theme: Theme::default(),
            tick_rate: Duration::from_millis(ui.tick_rate_ms),
            show_key_hints: ui.show_key_hints,
        }
    }

    /// The store backing the component tree
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Mutable store access for drivers
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// The entry component
    pub fn comment_box(&self) -> &CommentBox {
        &self.comment_box
    }

    /// Mutable entry component access for drivers
    pub fn comment_box_mut(&mut self) -> &mut CommentBox {
        &mut self.comment_box
    }

    /// The list component
    pub fn comment_list(&self) -> &CommentList {
        &self.comment_list
    }

    /// All interactive controls in the tree
    pub fn controls(&self) -> Vec<Control> {
        self.comment_box.controls().to_vec()
    }

    /// Whether a fetch is still in flight
    pub fn fetch_in_flight(&self) -> bool {
        self.fetch.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Activate a control by its stable selector
    pub fn activate(&mut self, selector: &str) -> Result<()> {
        match selector {
            SAVE_COMMENT_BUTTON => {
                let store = &mut self.store;
                self.comment_box.submit(&mut |action| store.dispatch(action));
                Ok(())
            }
            FETCH_COMMENTS_BUTTON => self.start_fetch(),
            other => Err(anyhow!("unknown control selector: {other}")),
        }
    }

    /// Issue a fetch: dispatch the start marker, spawn the GET, keep the
    /// handle. A new activation cancels any fetch still in flight.
    fn start_fetch(&mut self) -> Result<()> {
        if let Some(handle) = self.fetch.take() {
            handle.cancel();
        }
        self.store.dispatch(Action::FetchStarted);
        info!("comments fetch started");

        let tx = self.events_tx.clone();
        let handle = fetch_comments(Arc::clone(&self.gateway), move |outcome| {
            let event = match outcome {
                Ok(comments) => Event::FetchResolved(comments),
                Err(err) => Event::FetchFailed(err.to_string()),
            };
            let _ = tx.send(event);
        });
        self.fetch = Some(handle);
        Ok(())
    }

    /// Flush an in-flight fetch to completion.
    ///
    /// Drivers call this before `pump_events` to observe the resolution
    /// deterministically; the production loop just keeps pumping.
    pub async fn wait_for_fetch(&mut self) {
        if let Some(handle) = self.fetch.take() {
            handle.wait().await;
        }
    }

    /// Drain the event channel, dispatching on the loop thread
    pub fn pump_events(&mut self) -> Result<()> {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event)?;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Input(key) => self.handle_key(key)?,
            Event::FetchResolved(comments) => {
                self.state
                    .set_message(format!("Fetched {} comments", comments.len()));
                self.store.dispatch(comments_fetched(comments));
                self.fetch = None;
            }
            Event::FetchFailed(err) => {
                warn!(error = %err, "comments fetch failed");
                self.state.set_message(format!("Fetch failed: {err}"));
                self.fetch = None;
            }
            // Redraw happens every loop iteration; nothing to track here.
            Event::Tick | Event::Resize(..) => {}
        }
        Ok(())
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::Insert => self.handle_insert_key(key),
            AppMode::Help => self.handle_help_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Char('?') => self.state.mode = AppMode::Help,
            KeyCode::Char('i') => {
                self.state.clear_message();
                self.state.mode = AppMode::Insert;
            }
            KeyCode::Char('f') => self.activate(FETCH_COMMENTS_BUTTON)?,
            KeyCode::Char('j') | KeyCode::Down => {
                let max = self.comment_list.len().saturating_sub(1);
                self.state.scroll_offset = (self.state.scroll_offset + 1).min(max);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.scroll_offset = self.state.scroll_offset.saturating_sub(1);
            }
            KeyCode::Char('g') => self.state.scroll_offset = 0,
            KeyCode::Char('G') => {
                self.state.scroll_offset = self.comment_list.len().saturating_sub(1);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_insert_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.state.mode = AppMode::Normal,
            KeyCode::Enter => self.activate(SAVE_COMMENT_BUTTON)?,
            KeyCode::Char(c) => {
                let mut next = self.comment_box.draft().to_string();
                next.push(c);
                self.comment_box.input(next);
            }
            KeyCode::Backspace => {
                let mut next = self.comment_box.draft().to_string();
                next.pop();
                self.comment_box.input(next);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_help_key(&mut self, _key: KeyEvent) -> Result<()> {
        self.state.mode = AppMode::Normal;
        Ok(())
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        // Install panic hook to restore terminal on panic
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal: Terminal<CrosstermBackend<Stdout>> = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(self.tick_rate)? {
                match event::read()? {
                    event::Event::Key(key) => {
                        let _ = self.events_tx.send(Event::Input(key));
                    }
                    event::Event::Resize(width, height) => {
                        let _ = self.events_tx.send(Event::Resize(width, height));
                    }
                    _ => {}
                }
            } else {
                let _ = self.events_tx.send(Event::Tick);
            }

            self.pump_events()?;

            if self.state.should_quit {
                break;
            }
        }

        if let Some(handle) = self.fetch.take() {
            handle.cancel();
        }
        Ok(())
    }

    /// Draw the UI
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new("Comment Board").style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            chunks[0],
        );

        self.comment_box.render(
            frame,
            chunks[1],
            &self.theme,
            self.state.mode == AppMode::Insert,
        );
        self.comment_list.render(
            frame,
            chunks[2],
            &self.theme,
            self.state.mode == AppMode::Normal,
            self.state.scroll_offset,
        );
        self.render_status_bar(frame, chunks[3]);

        if self.state.mode == AppMode::Help {
            render_help(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mode = match self.state.mode {
            AppMode::Normal => "NORMAL",
            AppMode::Insert => "INSERT",
            AppMode::Help => "HELP",
        };

        let text = self.state.message.clone().unwrap_or_else(|| {
            let hints = if self.show_key_hints {
                " | i: write  f: fetch  ?: help  q: quit"
            } else {
                ""
            };
            format!(" {} | {} comments{} ", mode, self.comment_list.len(), hints)
        });

        frame.render_widget(
            Paragraph::new(text).style(
                Style::default()
                    .bg(self.theme.status_bg)
                    .fg(Color::White),
            ),
            area,
        );
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch.take() {
            handle.cancel();
        }
    }
}

fn render_help(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "comment-board",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Writing", Style::default().fg(Color::Yellow))),
        Line::from("  i           Edit the draft"),
        Line::from("  Enter       Save the draft as a comment"),
        Line::from("  Esc         Back to normal mode"),
        Line::from(""),
        Line::from(Span::styled("Browsing", Style::default().fg(Color::Yellow))),
        Line::from("  j/k         Scroll the list"),
        Line::from("  g/G         Go to top/bottom"),
        Line::from("  f           Fetch comments from the endpoint"),
        Line::from(""),
        Line::from(Span::styled("Other", Style::default().fg(Color::Yellow))),
        Line::from("  q           Quit"),
        Line::from("  ?           Show this help"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help_area = centered_rect(50, 70, area);
    frame.render_widget(Clear, help_area);
    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        help_area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ControlKind;
    use async_trait::async_trait;
    use cb_net::{CommentRecord, NetError};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    /// Gateway double that never resolves anything useful; app unit tests
    /// exercise the synchronous paths only.
    struct NullGateway;

    #[async_trait]
    impl cb_net::CommentsGateway for NullGateway {
        async fn fetch_comments(&self) -> Result<Vec<CommentRecord>, NetError> {
            Ok(Vec::new())
        }
    }

    fn test_app() -> App {
        App::new(UiConfig::default(), Arc::new(NullGateway))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_app_mode_default() {
        assert_eq!(AppMode::default(), AppMode::Normal);
    }

    #[test]
    fn test_app_state_message() {
        let mut state = AppState::new();
        assert!(state.message.is_none());
        state.set_message("Test");
        assert_eq!(state.message, Some("Test".to_string()));
        state.clear_message();
        assert!(state.message.is_none());
    }

    #[test]
    fn test_composition_has_one_box_and_one_list() {
        let app = test_app();
        let controls = app.controls();
        let inputs = controls
            .iter()
            .filter(|c| c.kind == ControlKind::TextInput)
            .count();
        let buttons = controls
            .iter()
            .filter(|c| c.kind == ControlKind::Button)
            .count();
        assert_eq!(inputs, 1);
        assert_eq!(buttons, 2);
        assert!(app.comment_list().is_empty());
        assert_eq!(app.comment_box().draft(), "");
    }

    #[test]
    fn test_typed_keys_echo_into_the_draft() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('i'))).unwrap();
        for c in "new comment".chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.comment_box().draft(), "new comment");

        app.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.comment_box().draft(), "new commen");
    }

    #[test]
    fn test_submit_moves_draft_into_the_list() {
        let mut app = test_app();
        app.comment_box_mut().input("new comment");
        app.activate(SAVE_COMMENT_BUTTON).unwrap();

        assert_eq!(app.comment_box().draft(), "");
        assert_eq!(app.store().comments(), ["new comment".to_string()]);
        assert_eq!(app.comment_list().items(), vec!["new comment".to_string()]);
    }

    #[test]
    fn test_unknown_selector_is_rejected() {
        let mut app = test_app();
        assert!(app.activate("no-such-control").is_err());
    }

    #[test]
    fn test_list_reflects_store_dispatches() {
        let mut app = test_app();
        app.store_mut().dispatch(cb_core::comments_fetched(vec![
            "a".to_string(),
            "b".to_string(),
        ]));
        assert_eq!(app.comment_list().len(), 2);
        assert_eq!(
            app.comment_list().items(),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_draw_renders_box_and_list_once() {
        let mut app = test_app();
        app.store_mut()
            .dispatch(cb_core::save_comment("first comment"));

        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let rows: Vec<String> = terminal
            .backend()
            .buffer()
            .content()
            .chunks(60)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect();
        let screen = rows.join("\n");

        assert_eq!(screen.matches("New Comment").count(), 1);
        assert_eq!(screen.matches("Comments (1)").count(), 1);
        assert!(screen.contains("first comment"));
        assert!(screen.contains("[ Fetch Comments ]"));
    }

    #[test]
    fn test_help_mode_round_trip() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('?'))).unwrap();
        assert_eq!(app.state.mode, AppMode::Help);
        app.handle_key(key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.state.mode, AppMode::Normal);
    }

    #[test]
    fn test_quit_key() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('q'))).unwrap();
        assert!(app.state.should_quit);
    }
}
