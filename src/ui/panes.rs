use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::filter::FilterState;
use crate::render::LABEL_SEPARATOR;
use crate::ui::app::ResultLine;
use crate::ui::theme::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const ACTIVE_CATEGORY_MARKER: &str = "» ";
const CHECKED: &str = "[x] ";
const UNCHECKED: &str = "[ ] ";

pub(super) fn render_categories(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    categories: &[String],
    state: &mut ListState,
    selected_category: Option<&str>,
    focused: bool,
    theme: &Theme,
) {
    let items: Vec<ListItem> = categories
        .iter()
        .map(|category| {
            let active = selected_category == Some(category.as_str());
            let marker = if active { ACTIVE_CATEGORY_MARKER } else { "  " };
            let style = if active { theme.focus } else { Style::default() };
            ListItem::new(Span::styled(format!("{marker}{category}"), style))
        })
        .collect();

    let list = List::new(items)
        .block(pane_block(title, focused, theme))
        .highlight_style(theme.row_highlight)
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(list, area, state);
}

pub(super) fn render_types(
    frame: &mut Frame,
    area: Rect,
    types: &[String],
    filter: &FilterState,
    state: &mut ListState,
    focused: bool,
    theme: &Theme,
) {
    let items: Vec<ListItem> = types
        .iter()
        .map(|ty| {
            let marker = if filter.is_type_selected(ty) {
                CHECKED
            } else {
                UNCHECKED
            };
            ListItem::new(format!("{marker}{ty}"))
        })
        .collect();

    let list = List::new(items)
        .block(pane_block("Types of Assistance", focused, theme))
        .highlight_style(theme.row_highlight)
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(list, area, state);
}

pub(super) fn render_results(
    frame: &mut Frame,
    area: Rect,
    lines: &[ResultLine],
    state: &mut ListState,
    focused: bool,
    theme: &Theme,
) {
    // Account for the borders and the highlight symbol column.
    let content_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = lines
        .iter()
        .map(|line| ListItem::new(result_line(line, content_width, theme)))
        .collect();

    let list = List::new(items)
        .block(pane_block("Results", focused, theme))
        .highlight_style(theme.row_highlight)
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(list, area, state);
}

pub(super) fn render_hint(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let hint = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(theme.empty);
    let vertical_center = Rect {
        y: area.y + area.height / 2,
        height: 1.min(area.height),
        ..area
    };
    frame.render_widget(hint, vertical_center);
}

pub(super) fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let footer = Paragraph::new("↑/↓ move · tab pane · enter select/open · space toggle · q quit")
        .style(theme.empty);
    frame.render_widget(footer, area);
}

fn pane_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let style = if focused { theme.focus } else { theme.border };
    Block::bordered().title(title).border_style(style)
}

fn result_line<'a>(line: &'a ResultLine, width: usize, theme: &Theme) -> Line<'a> {
    match line {
        ResultLine::Heading(heading) => {
            Line::from(Span::styled(heading.as_str(), theme.heading)).alignment(Alignment::Center)
        }
        ResultLine::Field(field) => {
            let label = format!("{}{}", field.label, LABEL_SEPARATOR);
            let available = width.saturating_sub(label.width());
            let value_style = if field.is_link() {
                theme.link
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(label, theme.label),
                Span::styled(fit_to_width(&field.value, available), value_style),
            ])
        }
        ResultLine::Message(message) => Line::from(Span::styled(*message, theme.empty)),
        ResultLine::Blank => Line::default(),
    }
}

/// Truncate `text` to at most `max` display columns, ending with an ellipsis
/// when anything is cut.
fn fit_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let budget = max.saturating_sub(1);
    let mut used = 0;
    let mut output = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        output.push(ch);
    }
    output.push('…');
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_left_alone() {
        assert_eq!(fit_to_width("hello", 10), "hello");
        assert_eq!(fit_to_width("hello", 5), "hello");
    }

    #[test]
    fn long_text_is_cut_with_an_ellipsis() {
        assert_eq!(fit_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn wide_characters_count_by_display_width() {
        // Each ideograph is two columns wide.
        assert_eq!(fit_to_width("幸福食堂", 5), "幸福…");
    }
}
