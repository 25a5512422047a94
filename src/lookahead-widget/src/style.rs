//! Theme colors and border set shared by the terminal surface.

use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::border::Set as BorderSet;

// ============================================================
// PALETTE
// ============================================================

/// Accent used for the active candidate, cursor and focused border.
pub const ACCENT: Color = Color::Rgb(0, 255, 163); // #00FFA3

/// Base surface behind the input line.
pub const SURFACE_1: Color = Color::Rgb(27, 40, 56); // #1B2838

/// Raised surface behind the active candidate.
pub const SURFACE_2: Color = Color::Rgb(36, 59, 83); // #243B53

/// Primary text.
pub const TEXT: Color = Color::Rgb(255, 255, 255); // #FFFFFF

/// Secondary text (search button label).
pub const TEXT_DIM: Color = Color::Rgb(130, 154, 177); // #829AB1

/// Placeholder and scrollbar track.
pub const TEXT_MUTED: Color = Color::Rgb(72, 101, 129); // #486581

/// Unfocused border.
pub const BORDER: Color = Color::Rgb(27, 73, 101); // #1B4965

/// Rounded border used by the dropdown list.
pub const ROUNDED_BORDER: BorderSet = BorderSet {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    horizontal_top: "─",
    horizontal_bottom: "─",
    vertical_left: "│",
    vertical_right: "│",
};

// ============================================================
// STYLES
// ============================================================

/// Style of a candidate row.
pub fn candidate(active: bool) -> Style {
    if active {
        Style::default()
            .fg(ACCENT)
            .bg(SURFACE_2)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT)
    }
}

/// Style of the dropdown border.
pub fn border(focused: bool) -> Style {
    Style::default().fg(if focused { ACCENT } else { BORDER })
}

/// Style of the placeholder text.
pub fn placeholder() -> Style {
    Style::default().fg(TEXT_MUTED).bg(SURFACE_1)
}

/// Style of the typed term.
pub fn term() -> Style {
    Style::default().fg(TEXT).bg(SURFACE_1)
}
