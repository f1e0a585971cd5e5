//! Theme module for activity-guide
//!
//! This module provides a centralized color palette, the per-phase accent
//! colors and the per-phase icon glyphs.

use ratatui::style::Color;

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color (#0a0e14)
pub const BG_PRIMARY: Color = Color::Rgb(10, 14, 20);

/// Secondary background color, used for cards (#12161c)
pub const BG_SECONDARY: Color = Color::Rgb(18, 22, 28);

/// Tertiary background color, for the selected tile (#1a1f26)
pub const BG_TERTIARY: Color = Color::Rgb(26, 31, 38);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary accent color (#00d4aa)
pub const CYAN_PRIMARY: Color = Color::Rgb(0, 212, 170);

/// Dimmed accent for secondary elements (#0a8a6e)
pub const CYAN_DIM: Color = Color::Rgb(10, 138, 110);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color, for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

// ============================================================================
// Phase Lookups
// ============================================================================

/// Accent for phases without an explicit mapping (#6b7280)
pub const PHASE_COLOR_FALLBACK: Color = Color::Rgb(107, 114, 128);

/// Icon for phases without an explicit mapping
pub const PHASE_ICON_FALLBACK: &str = "▥";

/// Icon of the "All Phases" tile
pub const ALL_PHASES_ICON: &str = "∿";

pub fn phase_color(name: &str) -> Color {
    match name {
        "Site Preparation & Foundation Phase" => Color::Rgb(245, 158, 11),
        "Substructure Phase" => Color::Rgb(59, 130, 246),
        "Superstructure Phase" => Color::Rgb(34, 197, 94),
        "Roofing Phase" => Color::Rgb(168, 85, 247),
        "Masonry & Finishing Phase" => Color::Rgb(236, 72, 153),
        "MEP Services (Parallel Phases)" => Color::Rgb(234, 179, 8),
        "External Works & Landscaping" => Color::Rgb(20, 184, 166),
        "Quality, Safety & Handover" => Color::Rgb(239, 68, 68),
        _ => PHASE_COLOR_FALLBACK,
    }
}

pub fn phase_icon(name: &str) -> &'static str {
    match name {
        "Site Preparation & Foundation Phase" => "▥",
        "Substructure Phase" => "⚒",
        "Superstructure Phase" => "▲",
        "Roofing Phase" => "⌂",
        "Masonry & Finishing Phase" => "⚙",
        "MEP Services (Parallel Phases)" => "ϟ",
        "External Works & Landscaping" => "♣",
        "Quality, Safety & Handover" => "◈",
        _ => PHASE_ICON_FALLBACK,
    }
}
