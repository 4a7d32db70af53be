//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::help_registry::contexts;
use super::{AppState, PopupType, Theme};

// 5 rows minus 2 borders minus the help line
const MAX_CONTENT_LINES: usize = 2;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let popup = state.popup();

        // Description of the selected feature (only without a popup or drag)
        let description_line = if popup.is_none() && state.drag.is_none() {
            state
                .selected_card()
                .and_then(|card| state.configurator.catalog().feature(&card.feature))
                .map(|feature| &feature.description)
                .filter(|description| !description.is_empty())
                .map(|detail| {
                    let truncated = if detail.chars().count() > 60 {
                        format!("{}...", detail.chars().take(57).collect::<String>())
                    } else {
                        detail.clone()
                    };
                    Line::from(vec![
                        Span::styled("Note: ", Style::default().fg(theme.focus)),
                        Span::styled(truncated, Style::default().fg(theme.text)),
                    ])
                })
        } else {
            None
        };

        let show_hints =
            state.status_message.is_empty() && state.error_message.is_none() && popup.is_none();

        let mut content_lines: Vec<Line> = Vec::new();

        // First line: error, status message, or hints
        if let Some(error) = &state.error_message {
            content_lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.danger)),
                Span::raw(error.as_str()),
            ]));
        } else if !state.status_message.is_empty() {
            content_lines.push(Line::from(state.status_message.as_str()));
        } else if show_hints {
            content_lines.push(Self::get_hints_line(state, theme));
        }

        if let Some(desc_line) = description_line {
            content_lines.push(desc_line);
        }

        let padding_needed = MAX_CONTENT_LINES.saturating_sub(content_lines.len());
        let mut status_text: Vec<Line> = content_lines.into_iter().take(MAX_CONTENT_LINES).collect();
        status_text.extend((0..padding_needed).map(|_| Line::from("")));
        status_text.push(Self::get_contextual_help_line(state, theme));

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(theme.canvas))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.canvas)),
            );

        f.render_widget(status, area);
    }

    /// Get a line of contextual hints from the help registry (top hints line)
    fn get_hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints = state
            .help_registry
            .hints(Self::get_current_context(state))
            .take(5)
            .map(|binding| {
                let (key, label) = binding.short_hint();
                (key.to_string(), label.to_string())
            });

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in hints.enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                key,
                Style::default().fg(theme.focus).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, Style::default().fg(theme.muted)));
        }

        Line::from(spans)
    }

    /// Get the current context name based on application state
    pub(crate) fn get_current_context(state: &AppState) -> &'static str {
        match state.popup() {
            Some(PopupType::HelpOverlay) => contexts::HELP,
            Some(PopupType::ResetConfirm) => contexts::RESET_CONFIRM,
            Some(PopupType::Summary) => contexts::SUMMARY,
            None if state.drag.is_some() => contexts::DRAG,
            None => contexts::MAIN,
        }
    }

    /// Get contextual help line from help registry (bottom help line)
    fn get_contextual_help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let context_name = Self::get_current_context(state);
        let all_hints: Vec<_> = state.help_registry.hints(context_name).collect();

        // Leave room for "?: Help" in the main context
        let max_hints = if context_name == contexts::MAIN { 4 } else { 5 };

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.chrome)));

        if all_hints.is_empty() {
            spans.push(Span::raw("Press ? for help"));
            return Line::from(spans);
        }

        for (i, binding) in all_hints.iter().take(max_hints).enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(binding.status_keys(), Style::default().fg(theme.focus)));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(binding.label().to_string()));
        }

        if context_name == contexts::MAIN {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("?".to_string(), Style::default().fg(theme.focus)));
            spans.push(Span::raw(": Help"));
        }

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CardLocation, DragSession};
    use crate::models::Tier;
    use crate::tui::tests::test_state;

    #[test]
    fn test_context_tracks_mode() {
        let mut state = test_state();
        assert_eq!(StatusBar::get_current_context(&state), contexts::MAIN);

        let location = CardLocation::new(Tier::Bronze, 0);
        state.drag = DragSession::begin(state.configurator.board(), location);
        assert_eq!(StatusBar::get_current_context(&state), contexts::DRAG);
        state.drag = None;

        state.configurator.request_reset();
        assert_eq!(StatusBar::get_current_context(&state), contexts::RESET_CONFIRM);

        state.open_help_overlay();
        assert_eq!(StatusBar::get_current_context(&state), contexts::HELP);
    }
}
