//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod board_widget;
pub mod component;
pub mod controls_bar;
pub mod dialogs;
pub mod handlers;
pub mod help_overlay;
pub mod help_registry;
pub mod status_bar;
pub mod theme;
pub mod toasts;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::app::Configurator;
use crate::board::{Card, CardLocation, DragSession};
use crate::config::Config;
use crate::models::Tier;
use crate::shortcuts::ShortcutRegistry;

pub use board_widget::{BoardLayout, BoardWidget};
pub use component::{KeyOutcome, Overlay};
pub use controls_bar::{ControlButton, ControlsBar, ControlsLayout};
pub use dialogs::ConfirmChoice;
pub use help_overlay::HelpOverlayState;
pub use help_registry::HelpRegistry;
pub use status_bar::StatusBar;
pub use theme::Theme;

const TITLE_HEIGHT: u16 = 3;
const CONTROLS_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 5;

/// Popup currently covering the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Keybinding help
    HelpOverlay,
    /// Reset confirmation dialog
    ResetConfirm,
    /// Summary shown after saving
    Summary,
}

/// Vertical split of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    /// Title bar
    pub title: Rect,
    /// Four tier columns
    pub board: Rect,
    /// Save/reset buttons and summary, when any control is present
    pub controls: Option<Rect>,
    /// Status bar
    pub status: Rect,
}

impl FrameLayout {
    /// Splits the terminal area.
    #[must_use]
    pub fn compute(area: Rect, controls: bool) -> Self {
        let mut constraints = vec![Constraint::Length(TITLE_HEIGHT), Constraint::Min(8)];
        if controls {
            constraints.push(Constraint::Length(CONTROLS_HEIGHT));
        }
        constraints.push(Constraint::Length(STATUS_HEIGHT));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        Self {
            title: chunks[0],
            board: chunks[1],
            controls: controls.then(|| chunks[2]),
            status: chunks[chunks.len() - 1],
        }
    }
}

/// Application state for the TUI
pub struct AppState {
    /// Controller owning the board and every payment display
    pub configurator: Configurator,
    /// Application configuration
    pub config: Config,
    /// Current UI theme
    pub theme: Theme,
    /// Selected card slot
    pub cursor: CardLocation,
    /// Card being moved, if any
    pub drag: Option<DragSession>,
    /// Focused button of the reset confirmation
    pub reset_choice: ConfirmChoice,
    /// Help overlay, when open
    pub help: Option<HelpOverlayState>,
    /// Keybinding documentation
    pub help_registry: HelpRegistry,
    /// Key to action bindings
    pub shortcuts: ShortcutRegistry,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Last known terminal area, used for mouse hit-testing
    pub viewport: Rect,
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` around a ready configurator.
    ///
    /// # Errors
    ///
    /// Returns error if the embedded help file cannot be parsed
    pub fn new(configurator: Configurator, config: Config) -> Result<Self> {
        let help_registry = HelpRegistry::load().context("Failed to load help definitions")?;
        let theme = Theme::for_mode(config.ui.theme_mode);
        let help = config
            .ui
            .show_help_on_startup
            .then(|| HelpOverlayState::new(&help_registry));

        Ok(Self {
            configurator,
            config,
            theme,
            cursor: CardLocation::new(Tier::Platinum, 0),
            drag: None,
            reset_choice: ConfirmChoice::default(),
            help,
            help_registry,
            shortcuts: ShortcutRegistry::new(),
            status_message: "Press ? for help".to_string(),
            error_message: None,
            viewport: Rect::default(),
            should_quit: false,
        })
    }

    /// Popup on top, if any. Help covers the dialogs owned by the configurator.
    #[must_use]
    pub fn popup(&self) -> Option<PopupType> {
        if self.help.is_some() {
            Some(PopupType::HelpOverlay)
        } else if self
            .configurator
            .reset_flow()
            .is_some_and(crate::app::ResetFlow::is_pending)
        {
            Some(PopupType::ResetConfirm)
        } else if self
            .configurator
            .save_flow()
            .and_then(crate::app::SaveFlow::summary)
            .is_some()
        {
            Some(PopupType::Summary)
        } else {
            None
        }
    }

    /// Card under the cursor.
    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        self.configurator.board().card_at(self.cursor)
    }

    /// First visible slot of a zone showing `visible` slots.
    #[must_use]
    pub fn scroll_offset(&self, tier: Tier, visible: usize) -> usize {
        let focus = match &self.drag {
            Some(session) if session.target().tier == tier => Some(session.target().index),
            Some(_) => None,
            None if self.cursor.tier == tier => Some(self.cursor.index),
            None => None,
        };
        board_widget::scroll_offset(visible, focus)
    }

    /// Keeps the cursor on an existing card, or on slot 0 of an empty zone.
    pub fn clamp_cursor(&mut self) {
        let len = self.configurator.board().zone(self.cursor.tier).len();
        self.cursor.index = self.cursor.index.min(len.saturating_sub(1));
    }

    /// Screen split for the current viewport.
    #[must_use]
    pub fn frame_layout(&self) -> FrameLayout {
        let controls =
            self.configurator.save_flow().is_some() || self.configurator.reset_flow().is_some();
        FrameLayout::compute(self.viewport, controls)
    }

    /// Board geometry for the current viewport.
    #[must_use]
    pub fn board_layout(&self) -> BoardLayout {
        BoardLayout::compute(self.frame_layout().board, self.config.ui.show_footer_totals)
    }

    /// Controls geometry for the current viewport.
    #[must_use]
    pub fn controls_layout(&self) -> ControlsLayout {
        self.frame_layout().controls.map_or_else(ControlsLayout::default, |area| {
            ControlsLayout::compute(
                area,
                self.configurator.save_flow().is_some(),
                self.configurator.reset_flow().is_some(),
            )
        })
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Open the help overlay component
    pub fn open_help_overlay(&mut self) {
        self.help = Some(HelpOverlayState::new(&self.help_registry));
    }

    /// Close the help overlay component
    pub fn close_help_overlay(&mut self) {
        self.help = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        state.viewport = Rect::new(0, 0, size.width, size.height);

        // Apply highlight, emphasis, toast and flow timers that came due
        if state.configurator.tick(Instant::now()) {
            state.clamp_cursor();
        }

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key, Instant::now())? {
                        break; // User quit
                    }
                }
                Event::Mouse(mouse) => {
                    handlers::handle_mouse_event(state, mouse, Instant::now())?;
                }
                // Terminal resized, will re-render on next loop
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    tracing::info!("configurator closed");
    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.canvas));
    f.render_widget(full_bg, f.area());

    let layout = FrameLayout::compute(
        f.area(),
        state.configurator.save_flow().is_some() || state.configurator.reset_flow().is_some(),
    );

    render_title_bar(f, layout.title, state);
    BoardWidget::render(f, layout.board, state);
    if let Some(area) = layout.controls {
        ControlsBar::render(f, area, state);
    }
    StatusBar::render(f, layout.status, state, &state.theme);

    if let Some(popup) = state.popup() {
        render_popup(f, popup, state);
    }

    toasts::render_toasts(f, state.configurator.toasts(), &state.theme);

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with the card count or the card being moved
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let board = state.configurator.board();
    let title = match state.drag.and_then(|d| board.card(d.card())) {
        Some(card) => {
            let name = state
                .configurator
                .catalog()
                .feature(&card.feature)
                .map_or(card.feature.as_str(), |feat| feat.title.as_str());
            format!(" {} - Moving {name}", crate::constants::APP_NAME)
        }
        None => format!(
            " {} - {} features placed",
            crate::constants::APP_NAME,
            board.card_count()
        ),
    };

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.chrome)
                .bg(state.theme.canvas)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.canvas)),
        );

    f.render_widget(title_widget, area);
}

/// Render active popup
fn render_popup(f: &mut Frame, popup: PopupType, state: &AppState) {
    match popup {
        PopupType::HelpOverlay => {
            if let Some(help) = &state.help {
                help.render(f, f.area(), &state.theme);
            }
        }
        PopupType::ResetConfirm => {
            if let Some(dialog) = state.configurator.reset_flow().and_then(|r| r.dialog()) {
                dialogs::render_confirm_dialog(f, dialog, state.reset_choice, &state.theme);
            }
        }
        PopupType::Summary => {
            if let Some(summary) = state.configurator.save_flow().and_then(|s| s.summary()) {
                dialogs::render_summary_dialog(f, summary, &state.theme);
            }
        }
    }
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    let background = Block::default().style(Style::default().bg(theme.canvas));
    f.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(3), // Help text
        ])
        .split(area);

    let title = Paragraph::new("ERROR")
        .style(Style::default().fg(theme.danger).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.danger).bg(theme.canvas)),
        );
    f.render_widget(title, chunks[0]);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.canvas)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default().fg(theme.focus).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ]))
    .style(Style::default().fg(theme.text).bg(theme.canvas))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.canvas)),
    );
    f.render_widget(help, chunks[2]);
}

/// Helper to create a centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
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
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events. Returns `true` when the user quits.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent, now: Instant) -> Result<bool> {
    use crossterm::event::{KeyCode, KeyEventKind};

    if key.kind == KeyEventKind::Release {
        return Ok(false);
    }

    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    // Route to popup handler if popup is active
    if let Some(popup) = state.popup() {
        return handlers::handle_popup_input(state, popup, key, now);
    }

    if state.drag.is_some() {
        return handlers::handle_drag_input(state, key, now);
    }

    handlers::handle_main_input(state, key, now)
}
