//! Modal dialogs: reset confirmation and plan summary.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::{centered_rect, Theme};
use crate::app::{ConfirmDialog, PlanSummary};

/// Button focused in the confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmChoice {
    /// Discard the request
    #[default]
    Cancel,
    /// Perform the reset
    Confirm,
}

impl ConfirmChoice {
    /// The other button.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Cancel => Self::Confirm,
            Self::Confirm => Self::Cancel,
        }
    }
}

/// Render the reset confirmation
pub fn render_confirm_dialog(f: &mut Frame, dialog: &ConfirmDialog, choice: ConfirmChoice, theme: &Theme) {
    let area = centered_rect(50, 30, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", dialog.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.caution))
        .style(Style::default().bg(theme.canvas));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(dialog.message)
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(message, chunks[0]);

    let button = |label: &str, focused: bool, color: Color| {
        let style = if focused {
            Style::default()
                .fg(theme.canvas)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        Span::styled(format!("[ {label} ]"), style)
    };

    let buttons = Paragraph::new(Line::from(vec![
        button(dialog.cancel_label, choice == ConfirmChoice::Cancel, theme.label),
        Span::raw("    "),
        button(dialog.confirm_label, choice == ConfirmChoice::Confirm, theme.danger),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(buttons, chunks[1]);
}

/// Render the plan summary
pub fn render_summary_dialog(f: &mut Frame, summary: &PlanSummary, theme: &Theme) {
    let area = centered_rect(60, 70, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();
    for quote in &summary.tiers {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<10}", quote.tier.label()),
                Style::default()
                    .fg(theme.tier_color(quote.tier))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{}/month", quote.display),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]));
        if quote.features.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (no features)",
                Style::default().fg(theme.muted),
            )));
        }
        for feature in &quote.features {
            let title = feature.title.as_deref().unwrap_or(&feature.id);
            let price = feature
                .price
                .map_or_else(String::new, |p| format!("  {p}"));
            lines.push(Line::from(vec![
                Span::styled(format!("  - {title}"), Style::default().fg(theme.text)),
                Span::styled(price, Style::default().fg(theme.muted)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("c", Style::default().fg(theme.focus).add_modifier(Modifier::BOLD)),
        Span::raw(" Copy to clipboard   "),
        Span::styled(
            "Enter/Esc",
            Style::default().fg(theme.focus).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Close"),
    ]));

    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Configuration Summary ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.positive))
                .style(Style::default().bg(theme.canvas)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(dialog, area);
}
