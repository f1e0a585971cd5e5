//! Application state and core logic for the activity guide.
//!
//! This module contains the `App` struct which holds the dataset, the
//! phase selection and the navigation/view state of the browser.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::models::{Action, ActivityData, Category, Phase, Selection};

/// Application state
pub struct App {
    pub data: ActivityData,
    pub selection: Selection,
    // Navigation tile under the cursor (0 = All Phases, n = phase n-1)
    pub nav_cursor: usize,
    // First tile row drawn when the grid is taller than its area
    pub nav_scroll: usize,
    // Focused card, counted across all visible phases
    pub focused_card: usize,
    // Item scroll offset inside the focused card, in wrapped lines
    pub card_scroll: usize,
    // First content row drawn (section headers and card rows)
    pub content_scroll: usize,
    // When false the content was scrolled past the cards and stays put
    pub follow_focus: bool,
    // Layout settings
    pub columns: usize,
    pub card_height: u16,
}

impl App {
    pub fn new(data: ActivityData, config: &Config) -> Self {
        Self {
            data,
            selection: Selection::AllPhases,
            nav_cursor: 0,
            nav_scroll: 0,
            focused_card: 0,
            card_scroll: 0,
            content_scroll: 0,
            follow_focus: true,
            columns: config.columns,
            card_height: config.card_height,
        }
    }

    /// Change the selection. `None` shows all phases; an unknown name is
    /// accepted and simply matches nothing.
    pub fn select_phase(&mut self, name: Option<&str>) {
        self.selection = Selection::from_name(name);
        if let Some(name) = name {
            if let Some(index) = self.data.phases.iter().position(|p| p.name == name) {
                self.nav_cursor = index + 1;
            }
        } else {
            self.nav_cursor = 0;
        }
        self.focused_card = 0;
        self.card_scroll = 0;
        self.content_scroll = 0;
        self.follow_focus = true;

        tracing::debug!(
            selection = self.selection.phase_name().unwrap_or("<all>"),
            visible = self.visible_phases().len(),
            "phase selection changed"
        );
    }

    /// Phases shown for the current selection, in dataset order
    pub fn visible_phases(&self) -> Vec<&Phase> {
        self.data
            .phases
            .iter()
            .filter(|p| self.selection.matches(p))
            .collect()
    }

    /// Navigation tiles: All Phases plus one per phase
    pub fn tile_count(&self) -> usize {
        self.data.phases.len() + 1
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.nav_cursor = self
            .nav_cursor
            .saturating_add_signed(delta)
            .min(self.tile_count() - 1);
    }

    /// Select whatever tile the cursor is on
    pub fn activate_cursor(&mut self) {
        match self.nav_cursor {
            0 => self.select_phase(None),
            tile => self.select_phase_tile(tile - 1),
        }
    }

    /// Select the phase at `index`, leaving the cursor on its own tile
    /// even when an earlier phase has the same name.
    fn select_phase_tile(&mut self, index: usize) {
        let Some(name) = self.data.phases.get(index).map(|p| p.name.clone()) else {
            return;
        };
        self.select_phase(Some(&name));
        self.nav_cursor = index + 1;
    }

    pub fn visible_card_count(&self) -> usize {
        self.visible_phases()
            .iter()
            .map(|p| p.category_count())
            .sum()
    }

    /// (visible phase index, category index) of the focused card
    pub fn focused_card_location(&self) -> Option<(usize, usize)> {
        let mut remaining = self.focused_card;
        for (phase_index, phase) in self.visible_phases().iter().enumerate() {
            if remaining < phase.category_count() {
                return Some((phase_index, remaining));
            }
            remaining -= phase.category_count();
        }
        None
    }

    pub fn focused_category(&self) -> Option<&Category> {
        let (phase_index, category_index) = self.focused_card_location()?;
        let phase = *self.visible_phases().get(phase_index)?;
        phase.categories.get(category_index)
    }

    /// Move card focus. Past the first or last card the content itself
    /// scrolls, so sections without cards can still be reached.
    pub fn move_focus(&mut self, delta: isize) {
        let count = self.visible_card_count();
        let next = match count {
            0 => self.focused_card,
            _ => self.focused_card.saturating_add_signed(delta).min(count - 1),
        };
        if next == self.focused_card {
            self.scroll_content(delta);
            return;
        }
        self.focused_card = next;
        self.card_scroll = 0;
        self.follow_focus = true;
    }

    /// Scroll content rows independently of the focused card. The
    /// renderer clamps the offset to the last full page.
    pub fn scroll_content(&mut self, delta: isize) {
        self.content_scroll = self.content_scroll.saturating_add_signed(delta);
        self.follow_focus = false;
    }

    /// Scroll the focused card's items. The renderer clamps the offset
    /// further once wrapped line counts are known.
    pub fn scroll_card(&mut self, delta: isize) {
        let max = self
            .focused_category()
            .map(|c| c.item_count().saturating_sub(1))
            .unwrap_or(0);
        self.card_scroll = self.card_scroll.saturating_add_signed(delta).min(max);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        match key.code {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Esc => {
                if self.selection.is_all() {
                    return Action::Quit;
                }
                self.select_phase(None);
            }
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_cursor(),
            KeyCode::Char('a') | KeyCode::Char('0') => self.select_phase(None),
            KeyCode::Char(c @ '1'..='9') => self.select_phase_tile(c as usize - '1' as usize),
            KeyCode::Down | KeyCode::Char('j') => self.move_focus(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_focus(-1),
            KeyCode::PageDown | KeyCode::Char('J') => self.scroll_card(1),
            KeyCode::PageUp | KeyCode::Char('K') => self.scroll_card(-1),
            _ => {}
        }

        Action::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dataset::fixtures;

    fn app(data: ActivityData) -> App {
        App::new(data, &Config::default())
    }

    fn press(app: &mut App, code: KeyCode) -> Action {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn visible_names(app: &App) -> Vec<String> {
        app.visible_phases().iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_initial_state_shows_all_phases() {
        let app = app(fixtures::three_phases());
        assert_eq!(app.selection, Selection::AllPhases);
        assert_eq!(
            visible_names(&app),
            vec!["Site Preparation & Foundation Phase", "Roofing Phase", "Unmapped Phase"]
        );
    }

    #[test]
    fn test_select_existing_phase_shows_exactly_that_phase() {
        let mut app = app(fixtures::three_phases());
        for name in ["Site Preparation & Foundation Phase", "Roofing Phase", "Unmapped Phase"] {
            app.select_phase(Some(name));
            assert_eq!(visible_names(&app), vec![name]);
        }
    }

    #[test]
    fn test_select_unknown_phase_is_empty() {
        let mut app = app(fixtures::site_prep());
        app.select_phase(Some("Nonexistent Phase"));
        assert!(app.visible_phases().is_empty());
        assert_eq!(app.visible_card_count(), 0);
        assert_eq!(app.focused_card_location(), None);
    }

    #[test]
    fn test_clear_selection_restores_full_list() {
        let mut app = app(fixtures::three_phases());
        app.select_phase(Some("Roofing Phase"));
        app.select_phase(None);
        assert_eq!(app.visible_phases().len(), 3);
        assert_eq!(app.nav_cursor, 0);
    }

    #[test]
    fn test_duplicate_phase_names_all_match() {
        let mut data = fixtures::three_phases();
        data.phases.push(data.phases[1].clone());
        let mut app = app(data);
        app.select_phase(Some("Roofing Phase"));
        assert_eq!(visible_names(&app), vec!["Roofing Phase", "Roofing Phase"]);
        assert_eq!(app.nav_cursor, 2);
    }

    #[test]
    fn test_activating_duplicate_tile_keeps_cursor() {
        let mut data = fixtures::three_phases();
        data.phases.push(data.phases[1].clone());
        let mut app = app(data);

        app.nav_cursor = 4;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.nav_cursor, 4);
        assert_eq!(visible_names(&app), vec!["Roofing Phase", "Roofing Phase"]);

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.nav_cursor, 4);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.nav_cursor, 2);
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        let mut app = app(fixtures::three_phases());
        press(&mut app, KeyCode::Left);
        assert_eq!(app.nav_cursor, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.nav_cursor, 3);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.nav_cursor, 2);
    }

    #[test]
    fn test_enter_activates_tile() {
        let mut app = app(fixtures::three_phases());
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selection, Selection::from_name(Some("Roofing Phase")));

        app.nav_cursor = 0;
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.selection, Selection::AllPhases);
    }

    #[test]
    fn test_number_keys_select_phase() {
        let mut app = app(fixtures::three_phases());
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(visible_names(&app), vec!["Roofing Phase"]);
        assert_eq!(app.nav_cursor, 2);

        // Out of range keeps the current selection
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(visible_names(&app), vec!["Roofing Phase"]);

        press(&mut app, KeyCode::Char('0'));
        assert!(app.selection.is_all());
    }

    #[test]
    fn test_escape_clears_then_quits() {
        let mut app = app(fixtures::three_phases());
        app.select_phase(Some("Roofing Phase"));
        assert_eq!(press(&mut app, KeyCode::Esc), Action::Continue);
        assert!(app.selection.is_all());
        assert_eq!(press(&mut app, KeyCode::Esc), Action::Quit);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app(fixtures::site_prep());
        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), Action::Quit);
        assert_eq!(press(&mut app, KeyCode::Char('c')), Action::Continue);
    }

    #[test]
    fn test_focus_walks_cards_across_phases() {
        let mut app = app(fixtures::three_phases());
        assert_eq!(app.visible_card_count(), 3);
        assert_eq!(app.focused_card_location(), Some((0, 0)));

        press(&mut app, KeyCode::Down);
        assert_eq!(app.focused_card_location(), Some((0, 1)));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.focused_card_location(), Some((1, 0)));
        assert_eq!(app.focused_category().unwrap().name, "Roof Covering");

        press(&mut app, KeyCode::Down);
        assert_eq!(app.focused_card, 2);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.focused_card_location(), Some((0, 1)));
    }

    #[test]
    fn test_focus_past_last_card_scrolls_content() {
        let mut app = app(fixtures::three_phases());
        app.focused_card = 2;
        app.content_scroll = 2;

        press(&mut app, KeyCode::Down);
        assert_eq!(app.focused_card, 2);
        assert_eq!(app.content_scroll, 3);
        assert!(!app.follow_focus);

        // Moving focus again hands scrolling back to the focused card
        press(&mut app, KeyCode::Up);
        assert_eq!(app.focused_card, 1);
        assert!(app.follow_focus);
    }

    #[test]
    fn test_focus_keys_scroll_content_without_cards() {
        let mut app = app(fixtures::three_phases());
        app.select_phase(Some("Unmapped Phase"));
        assert_eq!(app.visible_card_count(), 0);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.content_scroll, 2);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.content_scroll, 1);
        assert_eq!(app.focused_card, 0);
    }

    #[test]
    fn test_card_scroll_resets_on_focus_change() {
        let mut app = app(fixtures::three_phases());
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.card_scroll, 1);
        press(&mut app, KeyCode::Char('J'));
        assert_eq!(app.card_scroll, 1, "clamped to item count");
        press(&mut app, KeyCode::Char('K'));
        assert_eq!(app.card_scroll, 0);

        press(&mut app, KeyCode::PageDown);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.card_scroll, 0);
    }

    #[test]
    fn test_selection_resets_view_state() {
        let mut app = app(fixtures::three_phases());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::PageDown);
        app.scroll_content(2);

        app.select_phase(Some("Roofing Phase"));
        assert_eq!(app.focused_card, 0);
        assert_eq!(app.card_scroll, 0);
        assert_eq!(app.content_scroll, 0);
        assert!(app.follow_focus);
        assert_eq!(app.focused_category().unwrap().name, "Roof Covering");
    }
}
