//! Help overlay listing every keybinding context from the help registry.
//!
//! Opened with '?', scrollable, closed with '?' or Escape.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

use super::component::{KeyOutcome, Overlay};
use super::help_registry::HelpRegistry;
use super::Theme;

const KEY_COLUMN_WIDTH: usize = 22;
const PAGE: usize = 10;

/// One line of help text before styling.
#[derive(Debug, Clone, PartialEq, Eq)]
enum HelpLine {
    Heading(String),
    Description(String),
    Binding { keys: String, action: String },
    Blank,
}

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    title: String,
    lines: Vec<HelpLine>,
}

impl HelpOverlayState {
    /// Builds the overlay content from the registry.
    #[must_use]
    pub fn new(registry: &HelpRegistry) -> Self {
        let mut lines = Vec::new();
        for section in registry.sections() {
            lines.push(HelpLine::Heading(section.name.to_uppercase()));
            lines.push(HelpLine::Description(section.description.clone()));
            lines.extend(section.bindings.iter().map(|binding| HelpLine::Binding {
                keys: binding.help_keys(),
                action: binding.action.clone(),
            }));
            lines.push(HelpLine::Blank);
        }

        Self {
            scroll_offset: 0,
            title: format!(" {} - Help ", registry.app_name()),
            lines,
        }
    }

    /// Total number of content lines.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.lines.len() {
            self.scroll_offset += 1;
        }
    }

    /// Scroll down by a page.
    pub fn page_down(&mut self, visible_height: usize) {
        self.scroll_offset =
            (self.scroll_offset + visible_height).min(self.lines.len().saturating_sub(1));
    }

    /// Scroll up by a page.
    pub const fn page_up(&mut self, visible_height: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(visible_height);
    }

    fn styled_lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        self.lines
            .iter()
            .map(|line| match line {
                HelpLine::Heading(text) => Line::from(Span::styled(
                    format!("═══ {text} ═══"),
                    Style::default().fg(theme.focus).add_modifier(Modifier::BOLD),
                )),
                HelpLine::Description(text) => Line::from(Span::styled(
                    format!("  {text}"),
                    Style::default().fg(theme.muted),
                )),
                HelpLine::Binding { keys, action } => Line::from(vec![
                    Span::styled(
                        format!("  {keys:<KEY_COLUMN_WIDTH$}"),
                        Style::default().fg(theme.positive),
                    ),
                    Span::styled(action.clone(), Style::default().fg(theme.text)),
                ]),
                HelpLine::Blank => Line::from(""),
            })
            .collect()
    }
}

impl Overlay for HelpOverlayState {
    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Char('?' | 'q') | KeyCode::Esc => return KeyOutcome::Closed,
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::PageUp => self.page_up(PAGE),
            KeyCode::PageDown => self.page_down(PAGE),
            KeyCode::Home => self.scroll_offset = 0,
            KeyCode::End => self.scroll_offset = self.lines.len().saturating_sub(1),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let modal_area = super::centered_rect(60, 80, area);
        frame.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);
        let content_area = chunks[0];
        let scrollbar_area = chunks[1];

        let visible_height = content_area.height.saturating_sub(2) as usize;
        let paragraph = Paragraph::new(self.styled_lines(theme))
            .block(
                Block::default()
                    .title(self.title.clone())
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.chrome))
                    .style(Style::default().bg(theme.canvas)),
            )
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, content_area);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(theme.chrome));
        let mut scrollbar_state =
            ScrollbarState::new(self.lines.len().saturating_sub(visible_height))
                .position(self.scroll_offset);
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn overlay() -> HelpOverlayState {
        HelpOverlayState::new(&HelpRegistry::load().unwrap())
    }

    #[test]
    fn test_content_lists_every_context() {
        let state = overlay();
        let headings: Vec<&HelpLine> = state
            .lines
            .iter()
            .filter(|l| matches!(l, HelpLine::Heading(_)))
            .collect();
        assert_eq!(headings.len(), crate::tui::help_registry::contexts::ORDER.len());
        assert_eq!(headings[0], &HelpLine::Heading("BOARD".to_string()));
        assert!(state.title.contains("Plan Configurator"));
    }

    #[test]
    fn test_scroll_bounds() {
        let mut state = overlay();
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);

        state.page_down(1000);
        assert_eq!(state.scroll_offset, state.total_lines() - 1);
        state.scroll_down();
        assert_eq!(state.scroll_offset, state.total_lines() - 1);
    }

    #[test]
    fn test_close_keys() {
        let mut state = overlay();
        let key = |code: KeyCode| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(state.handle_key(key(KeyCode::Down)), KeyOutcome::Consumed);
        assert_eq!(state.scroll_offset, 1);
        assert_eq!(state.handle_key(key(KeyCode::Char('z'))), KeyOutcome::Ignored);
        assert_eq!(state.handle_key(key(KeyCode::Esc)), KeyOutcome::Closed);
        assert_eq!(state.handle_key(key(KeyCode::Char('?'))), KeyOutcome::Closed);
    }
}
