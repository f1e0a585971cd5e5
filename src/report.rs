//! Non-interactive output: a plain-text rendering of the guide and a JSON
//! export of the visible phases.

use serde::Serialize;

use crate::app::App;
use crate::models::Phase;
use crate::ui::{build_tiles, GUIDE_TITLE};

#[derive(Serialize)]
struct Report<'a> {
    selection: Option<&'a str>,
    phases: Vec<&'a Phase>,
}

/// Visible phases in the same shape as the input document
pub fn render_json(app: &App) -> serde_json::Result<String> {
    let report = Report {
        selection: app.selection.phase_name(),
        phases: app.visible_phases(),
    };
    serde_json::to_string_pretty(&report)
}

/// Navigation list followed by every visible phase section
pub fn render_text(app: &App) -> String {
    let mut lines = vec![
        GUIDE_TITLE.to_string(),
        "Construction Phases Overview".to_string(),
        app.selection.subtitle(),
        String::new(),
    ];

    for tile in build_tiles(&app.data.phases, &app.selection) {
        let mark = if tile.selected { "x" } else { " " };
        lines.push(format!("[{}] {} ({})", mark, tile.label, tile.count));
    }

    let phases = app.visible_phases();
    if phases.is_empty() {
        if let Some(name) = app.selection.phase_name() {
            lines.push(String::new());
            lines.push(format!("No phase named \"{}\"", name));
        }
    }

    for phase in phases {
        lines.push(String::new());
        lines.push(format!("== {} ==", phase.name));
        lines.push(format!(
            "{} categories | {} activities",
            phase.category_count(),
            phase.total_activities()
        ));
        for category in &phase.categories {
            lines.push(String::new());
            lines.push(format!("  {} [{}]", category.name, category.item_count()));
            lines.extend(category.items.iter().map(|item| format!("    • {}", item)));
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
