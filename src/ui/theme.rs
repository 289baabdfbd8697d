//! Color theme constants for the shopdeck UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the title bar
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Active elements (current page number, active sort column)
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Error messages - red
pub const COLOR_ERROR: Color = Color::Red;

/// Background for even-banded table rows
pub const COLOR_ROW_EVEN: Color = Color::Rgb(26, 26, 34);

/// Background for odd-banded table rows (terminal default)
pub const COLOR_ROW_ODD: Color = Color::Reset;
