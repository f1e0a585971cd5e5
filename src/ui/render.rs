//! Top-level frame layout

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use super::navigation::{capped_navigation_height, render_navigation};
use super::sections::{render_sections, SECTION_HEADER_HEIGHT};
use crate::app::App;
use crate::theme::{BG_PRIMARY, CYAN_PRIMARY, TEXT_MUTED, TEXT_PRIMARY};

pub const GUIDE_TITLE: &str = "Civil Construction Activity Guide";
pub const GUIDE_BADGE: &str = "Construction Activity Reference";

const KEY_HINTS: &str =
    " ←/→ Phase | Enter Select | ↑/↓ Card | PgUp/PgDn Scroll | Esc All | q Quit ";

/// Draw the whole browser: banner, navigation, sections and key hints
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    // Keep room below the tiles for a section header and one card row
    let body = area.height.saturating_sub(3);
    let content_min = SECTION_HEADER_HEIGHT.saturating_add(app.card_height);
    let navigation = capped_navigation_height(app.tile_count(), area.width, body, content_min);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Banner
            Constraint::Length(navigation),
            Constraint::Min(3),    // Sections
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_banner(main_layout[0], frame);
    render_navigation(main_layout[1], app, frame);
    render_sections(main_layout[2], app, frame);
    render_bottom_bar(main_layout[3], app, frame);
}

fn render_banner(area: Rect, frame: &mut Frame) {
    let content = vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(CYAN_PRIMARY)),
            Span::styled(GUIDE_BADGE, Style::default().fg(CYAN_PRIMARY)),
        ]),
        Line::from(Span::styled(
            GUIDE_TITLE,
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_bottom_bar(area: Rect, app: &App, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(area);

    let keybindings = Paragraph::new(KEY_HINTS)
        .style(Style::default().fg(Color::Black).bg(CYAN_PRIMARY));
    frame.render_widget(keybindings, layout[0]);

    let cards = app.visible_card_count();
    let position = if cards == 0 {
        "No cards ".to_string()
    } else {
        format!("Card {}/{} ", app.focused_card + 1, cards)
    };
    let position = Paragraph::new(position)
        .alignment(Alignment::Right)
        .style(Style::default().fg(TEXT_MUTED).bg(BG_PRIMARY));
    frame.render_widget(position, layout[1]);
}
