use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub const SLATE: Theme = Theme {
    focus: Style::new()
        .fg(Color::Rgb(250, 204, 21))
        .add_modifier(Modifier::BOLD),
    border: Style::new().fg(Color::Rgb(100, 116, 139)),
    row_highlight: Style::new()
        .bg(Color::Rgb(30, 41, 59))
        .fg(Color::Rgb(250, 204, 21)),
    heading: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .add_modifier(Modifier::BOLD),
    label: Style::new().fg(Color::Rgb(148, 163, 184)),
    link: Style::new()
        .fg(Color::LightCyan)
        .add_modifier(Modifier::UNDERLINED),
    empty: Style::new().fg(Color::DarkGray),
};
