//! Theme system

use ratatui::prelude::*;

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border color for focused elements
    pub focus_border: Color,
    /// Border color for unfocused elements
    pub unfocus_border: Color,
    /// Body text color
    pub text: Color,
    /// Button and title accent color
    pub accent: Color,
    /// Status bar background
    pub status_bg: Color,
    /// Error message color
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            unfocus_border: Color::DarkGray,
            text: Color::Gray,
            accent: Color::Yellow,
            status_bg: Color::DarkGray,
            error: Color::Red,
        }
    }
}
