//! Toast stack in the top-right corner.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::Theme;
use crate::app::{Toast, ToastKind};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

fn kind_color(kind: ToastKind, theme: &Theme) -> ratatui::style::Color {
    match kind {
        ToastKind::Success => theme.positive,
        ToastKind::Info => theme.chrome,
        ToastKind::Warning => theme.caution,
        ToastKind::Error => theme.danger,
    }
}

/// Areas for up to `count` toasts stacked below the top edge of `area`.
#[must_use]
pub fn toast_areas(area: Rect, count: usize) -> Vec<Rect> {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width + 1).max(area.x);
    (0..count)
        .map(|i| Rect::new(x, area.y + 1 + i as u16 * TOAST_HEIGHT, width, TOAST_HEIGHT))
        .take_while(|r| r.bottom() <= area.bottom())
        .collect()
}

/// Render every visible toast, newest at the bottom
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], theme: &Theme) {
    let areas = toast_areas(f.area(), toasts.len());
    for (toast, area) in toasts.iter().zip(areas) {
        let color = if toast.is_fading() {
            theme.muted
        } else {
            kind_color(toast.kind, theme)
        };
        let text_color = if toast.is_fading() {
            theme.muted
        } else {
            theme.text
        };

        f.render_widget(Clear, area);
        let widget = Paragraph::new(Line::from(Span::styled(
            toast.message.clone(),
            Style::default().fg(text_color),
        )))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} {} ", toast.kind.icon(), toast.title),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(theme.panel)),
        );
        f.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_areas_stack_and_clip() {
        let areas = toast_areas(Rect::new(0, 0, 100, 10), 3);
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].x, 100 - TOAST_WIDTH - 1);
        assert_eq!(areas[1].y, 1 + TOAST_HEIGHT);
    }

    #[test]
    fn test_toast_areas_narrow_screen() {
        let areas = toast_areas(Rect::new(0, 0, 20, 40), 1);
        assert_eq!(areas[0].width, 20);
        assert_eq!(areas[0].x, 0);
    }
}
