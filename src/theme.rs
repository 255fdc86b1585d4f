//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and styles the form renderer uses,
//! so the components stay free of hardcoded styling.

#![allow(dead_code)]

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the wizard.
pub struct Colors;

impl Colors {
    /// Primary dark background
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled choices and gated toggles
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Accent for the selected row and active choice
    pub const ACCENT: Color = Color::Cyan;

    /// Group headings
    pub const HEADING: Color = Color::Yellow;

    /// Checked toggle marker
    pub const OK: Color = Color::Green;
}

/// Pre-built styles for the form renderer.
pub struct Styles;

impl Styles {
    /// Title bar style
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Group heading rows ("Extensions", "Features")
    pub fn heading() -> Style {
        Style::default()
            .fg(Colors::HEADING)
            .add_modifier(Modifier::BOLD)
    }

    /// Row label column
    pub fn label() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// The row the cursor is on
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// The active choice in a choice row
    pub fn choice_selected() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// A selectable but inactive choice
    pub fn choice() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// A choice or toggle whose enablement gate is closed
    pub fn disabled() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Key hints in the footer
    pub fn hint() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }
}
