//! Phase section and category card rendering
//!
//! Visible phases are laid out as a vertical list of content rows: a
//! header row per phase followed by rows of category cards. Scrolling
//! moves whole content rows.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{truncate, wrap_text};
use crate::app::App;
use crate::models::{Category, Phase};
use crate::theme::{
    phase_color, phase_icon, BG_SECONDARY, BORDER_SUBTLE, CYAN_DIM, CYAN_PRIMARY, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};

/// Border + name line + counts line + border
pub const SECTION_HEADER_HEIGHT: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRow {
    /// Header of the visible phase at this index
    Header { phase: usize },
    /// Cards `start..end` of the visible phase at this index
    Cards { phase: usize, start: usize, end: usize },
}

impl ContentRow {
    pub fn height(&self, card_height: u16) -> u16 {
        match self {
            ContentRow::Header { .. } => SECTION_HEADER_HEIGHT,
            ContentRow::Cards { .. } => card_height,
        }
    }

    fn holds_card(&self, phase_index: usize, category_index: usize) -> bool {
        match *self {
            ContentRow::Cards { phase, start, end } => {
                phase == phase_index && (start..end).contains(&category_index)
            }
            ContentRow::Header { .. } => false,
        }
    }
}

/// Cards per row for the available width, capped by the configured count
pub fn card_columns(width: u16, configured: usize) -> usize {
    let fit = if width < 80 {
        1
    } else if width < 120 {
        2
    } else {
        usize::MAX
    };
    configured.min(fit).max(1)
}

pub fn content_rows(phases: &[&Phase], columns: usize) -> Vec<ContentRow> {
    let columns = columns.max(1);
    let mut rows = Vec::new();
    for (phase_index, phase) in phases.iter().enumerate() {
        rows.push(ContentRow::Header { phase: phase_index });
        let count = phase.category_count();
        let mut start = 0;
        while start < count {
            let end = (start + columns).min(count);
            rows.push(ContentRow::Cards {
                phase: phase_index,
                start,
                end,
            });
            start = end;
        }
    }
    rows
}

/// Adjust the first drawn row so that row `target` is fully visible,
/// keeping its section header on screen when it directly precedes it.
pub fn scroll_to_show(
    rows: &[ContentRow],
    target: usize,
    card_height: u16,
    viewport: u16,
    scroll: usize,
) -> usize {
    if rows.is_empty() {
        return 0;
    }
    let target = target.min(rows.len() - 1);
    let wanted_top = match target.checked_sub(1).map(|i| rows[i]) {
        Some(ContentRow::Header { .. }) => target - 1,
        _ => target,
    };

    let mut top = scroll.min(rows.len() - 1).min(wanted_top);
    while top < target {
        let needed: u32 = rows[top..=target]
            .iter()
            .map(|r| u32::from(r.height(card_height)))
            .sum();
        if needed <= u32::from(viewport) {
            break;
        }
        top += 1;
    }
    top
}

/// First row of the last page: the smallest top index whose remaining rows
/// all fit in the viewport. A last row taller than the viewport is its own
/// page.
pub fn last_page_top(rows: &[ContentRow], card_height: u16, viewport: u16) -> usize {
    let mut used: u32 = 0;
    let mut top = rows.len();
    while top > 0 {
        let height = u32::from(rows[top - 1].height(card_height));
        if used + height > u32::from(viewport) {
            break;
        }
        used += height;
        top -= 1;
    }
    top.min(rows.len().saturating_sub(1))
}

/// Bulleted, wrapped lines for a category's items
pub fn card_lines(category: &Category, width: usize) -> Vec<Line<'static>> {
    if category.items.is_empty() {
        return vec![Line::from(Span::styled(
            "No activities",
            Style::default().fg(TEXT_MUTED),
        ))];
    }

    let text_width = width.saturating_sub(2);
    let mut lines = Vec::new();
    for item in &category.items {
        for (i, text) in wrap_text(item, text_width).into_iter().enumerate() {
            let bullet = if i == 0 { "• " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(bullet, Style::default().fg(CYAN_PRIMARY)),
                Span::styled(text, Style::default().fg(TEXT_PRIMARY)),
            ]));
        }
    }
    lines
}

/// Render the visible phases into the content area
pub fn render_sections(area: Rect, app: &mut App, frame: &mut Frame) {
    let phases = app.visible_phases();

    if phases.is_empty() {
        let message = match app.selection.phase_name() {
            Some(name) => format!("No phase named \"{}\"", name),
            None => "No phases in this guide".to_string(),
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(TEXT_MUTED),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let columns = card_columns(area.width, app.columns);
    let rows = content_rows(&phases, columns);
    let focus = app.focused_card_location();
    let target = focus.and_then(|(p, c)| rows.iter().position(|row| row.holds_card(p, c)));
    let content_scroll = match target {
        Some(target) if app.follow_focus => scroll_to_show(
            &rows,
            target,
            app.card_height,
            area.height,
            app.content_scroll,
        ),
        _ => app
            .content_scroll
            .min(last_page_top(&rows, app.card_height, area.height)),
    };

    let mut card_scroll = 0;
    let bottom = area.y + area.height;
    let mut y = area.y;
    for row in rows.iter().skip(content_scroll) {
        if y >= bottom {
            break;
        }
        let height = row.height(app.card_height).min(bottom - y);
        let row_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };

        match *row {
            ContentRow::Header { phase } => render_section_header(row_area, phases[phase], frame),
            ContentRow::Cards { phase, start, end } => {
                let cells = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                    .split(row_area);
                for (cell, category_index) in (start..end).enumerate() {
                    let focused = focus == Some((phase, category_index));
                    let requested = if focused { app.card_scroll } else { 0 };
                    let used = render_category_card(
                        cells[cell],
                        &phases[phase].categories[category_index],
                        focused,
                        requested,
                        frame,
                    );
                    if focused {
                        card_scroll = used;
                    }
                }
            }
        }
        y += height;
    }

    app.content_scroll = content_scroll;
    app.card_scroll = card_scroll;
}

/// Render a phase header: icon, name, category and activity counts
fn render_section_header(area: Rect, phase: &Phase, frame: &mut Frame) {
    let accent = phase_color(&phase.name);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(BG_SECONDARY));

    let content = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", phase_icon(&phase.name)),
                Style::default().fg(accent),
            ),
            Span::styled(
                phase.name.clone(),
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("  {} categories", phase.category_count()),
                Style::default().fg(TEXT_SECONDARY),
            ),
            Span::styled(" │ ", Style::default().fg(BORDER_SUBTLE)),
            Span::styled(
                format!("{} activities", phase.total_activities()),
                Style::default().fg(TEXT_SECONDARY),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Render a category card and return the item scroll offset actually used
fn render_category_card(
    area: Rect,
    category: &Category,
    focused: bool,
    scroll: usize,
    frame: &mut Frame,
) -> usize {
    let border_color = if focused { CYAN_PRIMARY } else { BORDER_SUBTLE };
    let title_width = (area.width as usize).saturating_sub(10);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(BG_SECONDARY))
        .title(Line::from(Span::styled(
            format!(" {} ", truncate(&category.name, title_width)),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )))
        .title(
            Line::from(Span::styled(
                format!(" {} ", category.item_count()),
                Style::default().fg(TEXT_PRIMARY).bg(CYAN_DIM),
            ))
            .right_aligned(),
        );

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = card_lines(category, inner.width as usize);
    let visible = inner.height as usize;
    if visible == 0 {
        return 0;
    }

    let scroll = scroll.min(lines.len().saturating_sub(visible));
    let end = (scroll + visible).min(lines.len());
    let mut shown: Vec<Line<'static>> = lines[scroll..end].to_vec();
    if end < lines.len() {
        // The last visible line becomes the overflow marker
        shown.pop();
        let hidden = lines.len() - end + 1;
        shown.push(Line::from(Span::styled(
            format!("↓ {} more", hidden),
            Style::default().fg(TEXT_MUTED),
        )));
    }

    frame.render_widget(Paragraph::new(shown), inner);
    scroll
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dataset::fixtures;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_card_columns() {
        assert_eq!(card_columns(60, 3), 1);
        assert_eq!(card_columns(100, 3), 2);
        assert_eq!(card_columns(100, 1), 1);
        assert_eq!(card_columns(160, 3), 3);
        assert_eq!(card_columns(160, 0), 1);
    }

    #[test]
    fn test_content_rows() {
        let data = fixtures::three_phases();
        let phases: Vec<&Phase> = data.phases.iter().collect();

        let rows = content_rows(&phases, 1);
        assert_eq!(
            rows,
            vec![
                ContentRow::Header { phase: 0 },
                ContentRow::Cards { phase: 0, start: 0, end: 1 },
                ContentRow::Cards { phase: 0, start: 1, end: 2 },
                ContentRow::Header { phase: 1 },
                ContentRow::Cards { phase: 1, start: 0, end: 1 },
                ContentRow::Header { phase: 2 },
            ]
        );

        let rows = content_rows(&phases, 3);
        assert_eq!(rows[1], ContentRow::Cards { phase: 0, start: 0, end: 2 });
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn test_content_rows_empty() {
        assert!(content_rows(&[], 3).is_empty());
    }

    #[test]
    fn test_scroll_to_show_keeps_header() {
        let rows = vec![
            ContentRow::Header { phase: 0 },
            ContentRow::Cards { phase: 0, start: 0, end: 1 },
            ContentRow::Cards { phase: 0, start: 1, end: 2 },
            ContentRow::Header { phase: 1 },
            ContentRow::Cards { phase: 1, start: 0, end: 1 },
        ];
        // Everything fits: stay at the top
        assert_eq!(scroll_to_show(&rows, 4, 10, 100, 0), 0);
        // Header (4) + card (10) fit in 14 rows
        assert_eq!(scroll_to_show(&rows, 4, 10, 14, 0), 3);
        // Scrolled past the target: back up to its header
        assert_eq!(scroll_to_show(&rows, 1, 10, 14, 4), 0);
        // A middle card row has no header directly before it
        assert_eq!(scroll_to_show(&rows, 2, 10, 10, 0), 2);
    }

    #[test]
    fn test_last_page_top() {
        let data = fixtures::three_phases();
        let phases: Vec<&Phase> = data.phases.iter().collect();
        // Header, cards, header, cards, header: 4 + 10 + 4 + 10 + 4
        let rows = content_rows(&phases, 3);

        assert_eq!(last_page_top(&rows, 10, 100), 0);
        // Roof Covering row and the trailing empty section
        assert_eq!(last_page_top(&rows, 10, 14), 3);
        // Only the trailing header fits
        assert_eq!(last_page_top(&rows, 10, 5), 4);
        // Nothing fits: the last row is still reachable
        assert_eq!(last_page_top(&rows, 10, 2), 4);
        assert_eq!(last_page_top(&[], 10, 20), 0);
    }

    #[test]
    fn test_scroll_to_show_empty() {
        assert_eq!(scroll_to_show(&[], 0, 10, 20, 5), 0);
    }

    #[test]
    fn test_card_lines_keep_item_order() {
        let data = fixtures::site_prep();
        let lines = card_lines(&data.phases[0].categories[0], 40);
        let texts: Vec<_> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["• Clear vegetation", "• Grade site"]);
    }

    #[test]
    fn test_card_lines_wrap_long_items() {
        let category = Category {
            name: "Finishes".to_string(),
            items: vec!["Install doors, frames and ironmongery".to_string()],
        };
        let lines = card_lines(&category, 20);
        let texts: Vec<_> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["• Install doors,", "  frames and", "  ironmongery"]);
    }

    #[test]
    fn test_card_lines_empty_category() {
        let category = Category {
            name: "Empty".to_string(),
            items: Vec::new(),
        };
        let lines = card_lines(&category, 20);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "No activities");
    }
}
