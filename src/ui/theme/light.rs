use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub const LIGHT: Theme = Theme {
    focus: Style::new()
        .fg(Color::Rgb(30, 64, 175))
        .add_modifier(Modifier::BOLD),
    border: Style::new().fg(Color::Rgb(148, 163, 184)),
    row_highlight: Style::new()
        .bg(Color::Rgb(219, 234, 254))
        .fg(Color::Rgb(30, 64, 175)),
    heading: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .add_modifier(Modifier::BOLD),
    label: Style::new().fg(Color::Rgb(71, 85, 105)),
    link: Style::new()
        .fg(Color::Blue)
        .add_modifier(Modifier::UNDERLINED),
    empty: Style::new().fg(Color::Gray),
};
