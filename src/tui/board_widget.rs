//! Board widget: four tier columns of feature cards.
//!
//! Geometry lives in [`BoardLayout`] so that rendering and mouse hit-testing
//! agree on where every card is.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::app::{DisplaySlot, PriceDisplay};
use crate::board::{Board, Card, CardLocation, DragSession};
use crate::models::{PlanCatalog, Tier};

/// Rows taken by one card, borders included.
pub const CARD_HEIGHT: u16 = 4;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Screen areas of one tier column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Tier shown in the column
    pub tier: Tier,
    /// Header with the tier name and payment
    pub header: Rect,
    /// Drop zone, borders included
    pub zone: Rect,
    /// Footer payment box, when enabled
    pub footer: Option<Rect>,
}

impl ColumnLayout {
    /// Drop zone without its borders.
    #[must_use]
    pub fn zone_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.zone)
    }

    /// Number of card slots that fit in the zone.
    #[must_use]
    pub fn visible_slots(&self) -> usize {
        (self.zone_inner().height / CARD_HEIGHT) as usize
    }
}

/// Screen areas of all four columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Columns in tier order
    pub columns: [ColumnLayout; 4],
}

impl BoardLayout {
    /// Splits `area` into four equal columns.
    #[must_use]
    pub fn compute(area: Rect, footer: bool) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        let columns = Tier::ALL.map(|tier| {
            let column = columns[tier.index()];
            let mut constraints = vec![Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)];
            if footer {
                constraints.push(Constraint::Length(FOOTER_HEIGHT));
            }
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(column);

            ColumnLayout {
                tier,
                header: parts[0],
                zone: parts[1],
                footer: footer.then(|| parts[2]),
            }
        });

        Self { columns }
    }

    /// Column layout of a tier.
    #[must_use]
    pub const fn column(&self, tier: Tier) -> &ColumnLayout {
        &self.columns[tier.index()]
    }

    /// Column whose area contains the point.
    #[must_use]
    pub fn column_at(&self, x: u16, y: u16) -> Option<&ColumnLayout> {
        self.columns.iter().find(|c| {
            let top = c.header.y;
            let bottom = c.footer.unwrap_or(c.zone).bottom();
            x >= c.zone.x && x < c.zone.right() && y >= top && y < bottom
        })
    }

    /// Slot under the point, with the scroll offset of its column applied.
    ///
    /// Points above the drop zone map to slot 0 and points below the last
    /// visible slot map past it, so a drag over a header or footer still
    /// targets the column.
    #[must_use]
    pub fn slot_at(&self, x: u16, y: u16, scroll: impl Fn(Tier) -> usize) -> Option<CardLocation> {
        let column = self.column_at(x, y)?;
        let inner = column.zone_inner();
        let row = if y < inner.y {
            0
        } else {
            ((y - inner.y) / CARD_HEIGHT) as usize
        };
        Some(CardLocation::new(column.tier, row + scroll(column.tier)))
    }
}

/// First visible slot so that `focus` stays on screen.
#[must_use]
pub fn scroll_offset(visible: usize, focus: Option<usize>) -> usize {
    match focus {
        Some(index) if visible > 0 => (index + 1).saturating_sub(visible),
        _ => 0,
    }
}

/// What occupies one slot of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'a> {
    /// A card at rest
    Card(&'a Card),
    /// Where the lifted card would land
    Placeholder(&'a Card),
}

/// Slots of a zone in display order, with the lifted card moved to its
/// drop target.
#[must_use]
pub fn zone_slots<'a>(board: &'a Board, tier: Tier, drag: Option<&DragSession>) -> Vec<Slot<'a>> {
    let Some(session) = drag else {
        return board.zone(tier).cards().iter().map(Slot::Card).collect();
    };

    let mut slots: Vec<Slot<'a>> = board
        .zone(tier)
        .cards()
        .iter()
        .filter(|c| c.id != session.card())
        .map(Slot::Card)
        .collect();

    if session.target().tier == tier {
        if let Some(lifted) = board.card(session.card()) {
            let index = session.target().index.min(slots.len());
            slots.insert(index, Slot::Placeholder(lifted));
        }
    }
    slots
}

/// Board widget
pub struct BoardWidget;

impl BoardWidget {
    /// Render the four columns
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let layout = BoardLayout::compute(area, state.config.ui.show_footer_totals);
        for column in &layout.columns {
            Self::render_header(f, column, state);
            Self::render_zone(f, column, state);
            if let Some(footer) = column.footer {
                Self::render_footer(f, footer, column.tier, state);
            }
        }
    }

    fn price_style(display: Option<&PriceDisplay>, theme: &Theme) -> Style {
        match display {
            Some(d) if d.emphasized => Style::default()
                .fg(theme.canvas)
                .bg(theme.focus)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        }
    }

    fn render_header(f: &mut Frame, column: &ColumnLayout, state: &AppState) {
        let theme = &state.theme;
        let tier = column.tier;
        let display = state.configurator.displays().get(tier, DisplaySlot::Header);
        let text = display.map_or("", |d| d.text.as_str());

        let header = Paragraph::new(Line::from(vec![
            Span::styled(text.to_string(), Self::price_style(display, theme)),
            Span::styled(" /mo", Style::default().fg(theme.muted)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", tier.label()),
                    Style::default()
                        .fg(theme.tier_color(tier))
                        .add_modifier(Modifier::BOLD),
                ))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.tier_color(tier)))
                .style(Style::default().bg(theme.canvas)),
        );
        f.render_widget(header, column.header);
    }

    fn render_footer(f: &mut Frame, area: Rect, tier: Tier, state: &AppState) {
        let theme = &state.theme;
        let display = state.configurator.displays().get(tier, DisplaySlot::Footer);
        let text = display.map_or("", |d| d.text.as_str());

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("Monthly ", Style::default().fg(theme.label)),
            Span::styled(text.to_string(), Self::price_style(display, theme)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.idle))
                .style(Style::default().bg(theme.canvas)),
        );
        f.render_widget(footer, area);
    }

    fn render_zone(f: &mut Frame, column: &ColumnLayout, state: &AppState) {
        let theme = &state.theme;
        let tier = column.tier;
        let board = state.configurator.board();
        let drag = state.drag.as_ref();
        let is_target = drag.is_some_and(|d| d.target().tier == tier);

        let border_color = if is_target {
            theme.focus
        } else if state.cursor.tier == tier && drag.is_none() {
            theme.chrome
        } else {
            theme.idle
        };

        let count = board.zone(tier).len();
        let zone_block = Block::default()
            .title(format!(" {count} feature{} ", if count == 1 { "" } else { "s" }))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.canvas));
        f.render_widget(zone_block, column.zone);

        let inner = column.zone_inner();
        let offset = state.scroll_offset(tier, column.visible_slots());
        let slots = zone_slots(board, tier, drag);

        if slots.is_empty() {
            let empty = Paragraph::new("Drop features here")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.muted));
            f.render_widget(empty, Rect { height: 1.min(inner.height), ..inner });
            return;
        }

        for (row, (index, slot)) in slots.iter().enumerate().skip(offset).enumerate() {
            let y = inner.y + row as u16 * CARD_HEIGHT;
            if y + CARD_HEIGHT > inner.bottom() {
                break;
            }
            let area = Rect::new(inner.x, y, inner.width, CARD_HEIGHT);
            let selected = drag.is_none() && state.cursor == CardLocation::new(tier, index);
            Self::render_card(f, area, *slot, selected, state.configurator.catalog(), theme);
        }
    }

    fn render_card(
        f: &mut Frame,
        area: Rect,
        slot: Slot<'_>,
        selected: bool,
        catalog: &PlanCatalog,
        theme: &Theme,
    ) {
        let (card, placeholder) = match slot {
            Slot::Card(card) => (card, false),
            Slot::Placeholder(card) => (card, true),
        };
        let feature = catalog.feature(&card.feature);
        let title = feature.map_or(card.feature.as_str(), |feat| feat.title.as_str());
        let price = feature.map_or_else(|| "n/a".to_string(), |feat| format!("+{}", feat.price));
        let detail = feature
            .and_then(|feat| feat.details.first())
            .map_or(String::new(), |d| format!("  {d}"));

        let (border_style, border_type) = if placeholder {
            (Style::default().fg(theme.focus), BorderType::Double)
        } else if selected {
            (
                Style::default().fg(theme.focus).add_modifier(Modifier::BOLD),
                BorderType::Thick,
            )
        } else if card.highlighted {
            (Style::default().fg(theme.positive), BorderType::Rounded)
        } else {
            (Style::default().fg(theme.idle), BorderType::Rounded)
        };

        let text_style = if placeholder {
            Style::default().fg(theme.muted)
        } else {
            Style::default().fg(theme.text)
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("▌", Style::default().fg(theme.tier_color(card.marker))),
                Span::styled(title.to_string(), text_style.add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                Span::styled(price, Style::default().fg(theme.positive)),
                Span::styled(detail, Style::default().fg(theme.muted)),
            ]),
        ];

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style);
        if placeholder {
            block = block.title(" drop here ");
        }

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        let catalog = PlanCatalog::builtin().unwrap();
        Board::from_configuration(catalog.default_plan(), &catalog)
    }

    #[test]
    fn test_layout_columns_cover_area() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 120, 40), true);
        assert_eq!(layout.column(Tier::Platinum).header.x, 0);
        assert_eq!(layout.column(Tier::Bronze).zone.right(), 120);
        assert_eq!(layout.column(Tier::Gold).header.height, HEADER_HEIGHT);
        assert_eq!(layout.column(Tier::Gold).footer.map(|r| r.height), Some(FOOTER_HEIGHT));
        // 40 rows - header - footer - zone borders
        assert_eq!(layout.column(Tier::Gold).visible_slots(), 8);
    }

    #[test]
    fn test_slot_at_maps_rows_to_cards() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 120, 40), false);
        let inner = layout.column(Tier::Silver).zone_inner();

        let hit = layout.slot_at(inner.x + 1, inner.y + CARD_HEIGHT + 1, |_| 0);
        assert_eq!(hit, Some(CardLocation::new(Tier::Silver, 1)));

        let scrolled = layout.slot_at(inner.x + 1, inner.y, |_| 2);
        assert_eq!(scrolled, Some(CardLocation::new(Tier::Silver, 2)));

        let over_header = layout.slot_at(inner.x + 1, 0, |_| 0);
        assert_eq!(over_header, Some(CardLocation::new(Tier::Silver, 0)));
    }

    #[test]
    fn test_scroll_offset_keeps_focus_visible() {
        assert_eq!(scroll_offset(3, None), 0);
        assert_eq!(scroll_offset(3, Some(2)), 0);
        assert_eq!(scroll_offset(3, Some(4)), 2);
        assert_eq!(scroll_offset(0, Some(4)), 0);
    }

    #[test]
    fn test_zone_slots_show_placeholder_at_target() {
        let board = board();
        let mut session =
            DragSession::begin(&board, CardLocation::new(Tier::Silver, 2)).unwrap();
        session.set_target(&board, CardLocation::new(Tier::Bronze, 1));

        let silver = zone_slots(&board, Tier::Silver, Some(&session));
        assert_eq!(silver.len(), 2);

        let bronze = zone_slots(&board, Tier::Bronze, Some(&session));
        assert_eq!(bronze.len(), 3);
        assert!(matches!(bronze[1], Slot::Placeholder(card) if card.feature == "glasscoat"));
    }

    #[test]
    fn test_zone_slots_without_drag() {
        let board = board();
        let slots = zone_slots(&board, Tier::Gold, None);
        assert_eq!(slots.len(), 4);
        assert!(slots.iter().all(|s| matches!(s, Slot::Card(_))));
    }
}
