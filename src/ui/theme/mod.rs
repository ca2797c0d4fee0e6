//! Built-in color themes for the terminal interface.

mod light;
mod slate;

use ratatui::style::Style;

pub use light::LIGHT;
pub use slate::SLATE;

/// Styles for every surface the interface draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Pane titles and borders of the focused pane.
    pub focus: Style,
    /// Borders and titles of unfocused panes.
    pub border: Style,
    /// The highlighted row in a list pane.
    pub row_highlight: Style,
    /// Organization headings in the results pane.
    pub heading: Style,
    /// Field labels in the results pane.
    pub label: Style,
    /// Link values in the results pane.
    pub link: Style,
    /// Empty-state and hint text.
    pub empty: Style,
}

impl Default for Theme {
    fn default() -> Self {
        SLATE
    }
}

/// Names of the built-in themes, in presentation order.
#[must_use]
pub fn names() -> Vec<&'static str> {
    BUILT_INS.iter().map(|(name, _)| *name).collect()
}

/// Look up a built-in theme by name, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    let normalized = name.trim().to_ascii_lowercase();
    BUILT_INS
        .iter()
        .find(|(candidate, _)| *candidate == normalized)
        .map(|(_, theme)| *theme)
}

const BUILT_INS: &[(&str, Theme)] = &[("slate", SLATE), ("light", LIGHT)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(by_name(" Slate "), Some(SLATE));
        assert_eq!(by_name("LIGHT"), Some(LIGHT));
        assert_eq!(by_name("neon"), None);
    }

    #[test]
    fn default_theme_is_listed() {
        assert!(names().contains(&"slate"));
    }
}
