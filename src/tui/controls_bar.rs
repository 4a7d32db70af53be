//! Save and reset buttons plus the summary payment row.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::app::DisplaySlot;
use crate::models::Tier;

const BUTTON_WIDTH: u16 = 24;

/// Screen areas of the controls bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlsLayout {
    /// Save button, when present
    pub save: Option<Rect>,
    /// Reset button, when present
    pub reset: Option<Rect>,
    /// Summary payments, present with the save control
    pub summary: Option<Rect>,
}

/// A clickable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    /// Save Configuration
    Save,
    /// Reset to Default
    Reset,
}

impl ControlsLayout {
    /// Lays out the bar: buttons on the left, summary on the right.
    #[must_use]
    pub fn compute(area: Rect, save: bool, reset: bool) -> Self {
        let mut constraints = Vec::new();
        if save {
            constraints.push(Constraint::Length(BUTTON_WIDTH));
        }
        if reset {
            constraints.push(Constraint::Length(BUTTON_WIDTH));
        }
        constraints.push(Constraint::Min(0));

        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        let mut next = 0;
        let mut take = |present: bool| {
            present.then(|| {
                let rect = parts[next];
                next += 1;
                rect
            })
        };
        let save_rect = take(save);
        let reset_rect = take(reset);
        let summary = take(save);

        Self {
            save: save_rect,
            reset: reset_rect,
            summary,
        }
    }

    /// Button under the point.
    #[must_use]
    pub fn button_at(&self, x: u16, y: u16) -> Option<ControlButton> {
        let contains = |r: Rect| x >= r.x && x < r.right() && y >= r.y && y < r.bottom();
        if self.save.is_some_and(contains) {
            Some(ControlButton::Save)
        } else if self.reset.is_some_and(contains) {
            Some(ControlButton::Reset)
        } else {
            None
        }
    }
}

/// Controls bar widget
pub struct ControlsBar;

impl ControlsBar {
    /// Render buttons and summary
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let configurator = &state.configurator;
        let layout = ControlsLayout::compute(
            area,
            configurator.save_flow().is_some(),
            configurator.reset_flow().is_some(),
        );

        if let (Some(rect), Some(flow)) = (layout.save, configurator.save_flow()) {
            Self::render_button(f, rect, flow.label(), "s", flow.is_saving(), theme);
        }
        if let (Some(rect), Some(flow)) = (layout.reset, configurator.reset_flow()) {
            Self::render_button(f, rect, flow.label(), "r", flow.is_busy(), theme);
        }
        if let Some(rect) = layout.summary {
            Self::render_summary(f, rect, state);
        }
    }

    fn render_button(f: &mut Frame, area: Rect, label: &str, key: &str, busy: bool, theme: &Theme) {
        let style = if busy {
            Style::default().fg(theme.muted)
        } else {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new(Line::from(Span::styled(label.to_string(), style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(format!(" {key} "))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(if busy {
                        theme.idle
                    } else {
                        theme.chrome
                    }))
                    .style(Style::default().bg(theme.canvas)),
            );
        f.render_widget(button, area);
    }

    fn render_summary(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let mut spans: Vec<Span<'static>> = Vec::new();
        for tier in Tier::ALL {
            let Some(display) = state.configurator.displays().get(tier, DisplaySlot::Summary)
            else {
                continue;
            };
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("{} ", tier.label()),
                Style::default().fg(theme.tier_color(tier)),
            ));
            let style = if display.emphasized {
                Style::default()
                    .fg(theme.canvas)
                    .bg(theme.focus)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            spans.push(Span::styled(display.text.clone(), style));
        }

        let summary = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(" Summary ")
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.canvas)),
        );
        f.render_widget(summary, area);
    }
}
