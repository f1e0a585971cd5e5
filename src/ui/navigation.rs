//! Phase navigation tiles

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{short_label, truncate};
use crate::app::App;
use crate::models::{Phase, Selection};
use crate::theme::{
    phase_color, phase_icon, ALL_PHASES_ICON, BG_PRIMARY, BG_SECONDARY, BG_TERTIARY,
    BORDER_SUBTLE, CYAN_PRIMARY, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

/// Border + one content line + border
pub const TILE_HEIGHT: u16 = 3;

pub const ALL_PHASES_LABEL: &str = "All Phases";

/// One selectable entry of the navigation control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub icon: &'static str,
    pub label: String,
    pub full_name: String,
    /// Phase count for All Phases, activity count otherwise
    pub count: usize,
    pub selected: bool,
    /// `None` for the All Phases tile
    pub phase: Option<String>,
}

impl Tile {
    /// Text shown for the tile under the cursor
    pub fn hint(&self) -> String {
        match self.phase {
            Some(_) => format!("{} · {} activities", self.full_name, self.count),
            None => format!("{} · {} phases", self.full_name, self.count),
        }
    }

    fn accent(&self) -> Color {
        match self.phase {
            Some(ref name) => phase_color(name),
            None => CYAN_PRIMARY,
        }
    }
}

/// All Phases first, then one tile per phase in dataset order
pub fn build_tiles(phases: &[Phase], selection: &Selection) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(phases.len() + 1);
    tiles.push(Tile {
        icon: ALL_PHASES_ICON,
        label: ALL_PHASES_LABEL.to_string(),
        full_name: ALL_PHASES_LABEL.to_string(),
        count: phases.len(),
        selected: selection.is_all(),
        phase: None,
    });

    for phase in phases {
        tiles.push(Tile {
            icon: phase_icon(&phase.name),
            label: short_label(&phase.name),
            full_name: phase.name.clone(),
            count: phase.total_activities(),
            selected: selection.phase_name() == Some(phase.name.as_str()),
            phase: Some(phase.name.clone()),
        });
    }

    tiles
}

pub fn tiles_per_row(width: u16) -> usize {
    if width < 80 { 2 } else { 4 }
}

/// Borders, subtitle and hint around the tile grid
const NAVIGATION_CHROME: u16 = 4;

/// Rows needed to show the navigation block with every tile row
pub fn navigation_height(tile_count: usize, width: u16) -> u16 {
    let rows = u16::try_from(tile_count.div_ceil(tiles_per_row(width))).unwrap_or(u16::MAX);
    rows.saturating_mul(TILE_HEIGHT).saturating_add(NAVIGATION_CHROME)
}

/// Height given to the navigation block out of `available` rows. The grid
/// shrinks (and scrolls) to leave `reserved` rows for the content, but
/// always keeps one tile row.
pub fn capped_navigation_height(
    tile_count: usize,
    width: u16,
    available: u16,
    reserved: u16,
) -> u16 {
    let floor = NAVIGATION_CHROME + TILE_HEIGHT;
    let cap = available.saturating_sub(reserved).max(floor);
    navigation_height(tile_count, width).min(cap)
}

/// First tile row to draw so the cursor's row stays visible, moving as
/// little as possible from the previous `scroll`.
pub fn scroll_tile_rows(cursor_row: usize, scroll: usize, visible: usize, total: usize) -> usize {
    let visible = visible.max(1);
    let scroll = if cursor_row < scroll {
        cursor_row
    } else if cursor_row >= scroll + visible {
        cursor_row + 1 - visible
    } else {
        scroll
    };
    scroll.min(total.saturating_sub(visible))
}

/// Render the navigation block with its tile grid
pub fn render_navigation(area: Rect, app: &mut App, frame: &mut Frame) {
    let tiles = build_tiles(&app.data.phases, &app.selection);
    let per_row = tiles_per_row(area.width);
    let total_rows = tiles.len().div_ceil(per_row);

    // Grid rows that fit below the subtitle and hint
    let grid_height = area.height.saturating_sub(NAVIGATION_CHROME);
    let visible_rows = usize::from(grid_height / TILE_HEIGHT).max(1);
    let first_row = scroll_tile_rows(
        app.nav_cursor / per_row,
        app.nav_scroll,
        visible_rows,
        total_rows,
    );
    app.nav_scroll = first_row;

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_PRIMARY))
        .title(
            Line::from(Span::styled(
                format!(" {} Construction Phases Overview ", ALL_PHASES_ICON),
                Style::default()
                    .fg(CYAN_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
    if total_rows > visible_rows {
        let last_row = (first_row + visible_rows).min(total_rows);
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" rows {}-{} of {} ", first_row + 1, last_row, total_rows),
                Style::default().fg(TEXT_MUTED),
            ))
            .right_aligned(),
        );
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Subtitle
            Constraint::Length(1), // Cursor hint
            Constraint::Min(0),    // Tile grid
        ])
        .split(inner);

    let subtitle = Paragraph::new(Line::from(Span::styled(
        app.selection.subtitle(),
        Style::default().fg(TEXT_SECONDARY),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, layout[0]);

    if let Some(tile) = tiles.get(app.nav_cursor) {
        let hint = Paragraph::new(Line::from(Span::styled(
            format!("▸ {}", tile.hint()),
            Style::default().fg(TEXT_MUTED),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, layout[1]);
    }

    let grid = layout[2];
    let bottom = grid.y + grid.height;
    let mut y = grid.y;
    for (row_index, row) in tiles
        .chunks(per_row)
        .enumerate()
        .skip(first_row)
        .take(visible_rows)
    {
        if y >= bottom {
            break;
        }
        let row_area = Rect {
            x: grid.x,
            y,
            width: grid.width,
            height: TILE_HEIGHT.min(bottom - y),
        };
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, per_row as u32); per_row])
            .split(row_area);

        for (col_index, tile) in row.iter().enumerate() {
            let index = row_index * per_row + col_index;
            render_tile(columns[col_index], tile, index == app.nav_cursor, frame);
        }
        y += TILE_HEIGHT;
    }
}

/// Render a single tile: icon, short label and count badge
fn render_tile(area: Rect, tile: &Tile, cursor: bool, frame: &mut Frame) {
    let (border_color, bg_color) = if tile.selected {
        (CYAN_PRIMARY, BG_TERTIARY)
    } else if cursor {
        (TEXT_PRIMARY, BG_SECONDARY)
    } else {
        (BORDER_SUBTLE, BG_SECONDARY)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg_color));

    let marker = if cursor { "▸" } else { " " };
    let badge = format!(" {} ", tile.count);
    let inner_width = area.width.saturating_sub(2) as usize;
    // marker + icon + space before the label, one space before the badge
    let fixed = 3 + badge.chars().count() + 1;
    let label = truncate(&tile.label, inner_width.saturating_sub(fixed));
    let padding = inner_width.saturating_sub(fixed + label.chars().count()) + 1;

    let label_style = if tile.selected {
        Style::default()
            .fg(CYAN_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_PRIMARY)
    };

    let line = Line::from(vec![
        Span::styled(marker, Style::default().fg(CYAN_PRIMARY)),
        Span::styled(format!("{} ", tile.icon), Style::default().fg(tile.accent())),
        Span::styled(label, label_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(
            badge,
            Style::default().fg(TEXT_PRIMARY).bg(BORDER_SUBTLE),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
