use std::time::Duration;

use anyhow::Result;
use ratatui::Frame;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Margin};
use ratatui::widgets::ListState;

use crate::dataset::Dataset;
use crate::filter::FilterState;
use crate::render::build_blocks;
use crate::types::{FieldLine, SessionOutcome};
use crate::ui::panes;
use crate::ui::theme::Theme;

/// Text shown in the results pane when the selections match nothing.
pub(crate) const NO_RESULTS_MESSAGE: &str = "No organizations found.";

const LEFT_PANE_WIDTH: u16 = 34;

/// Launch the interface and block until the user quits.
pub fn run(dataset: Dataset, categories: Vec<String>) -> Result<SessionOutcome> {
    App::new(dataset, categories).run()
}

/// Which pane owns keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Categories,
    Types,
    Results,
}

/// One flattened line of the results pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ResultLine {
    Heading(String),
    Field(FieldLine),
    Message(&'static str),
    Blank,
}

pub struct App {
    dataset: Dataset,
    categories: Vec<String>,
    filter: FilterState,
    focus: Pane,
    title: String,
    theme: Theme,
    category_state: ListState,
    types: Vec<String>,
    type_state: ListState,
    result_lines: Vec<ResultLine>,
    result_state: ListState,
    results_visible: bool,
}

impl App {
    #[must_use]
    pub fn new(dataset: Dataset, categories: Vec<String>) -> Self {
        let mut category_state = ListState::default();
        if !categories.is_empty() {
            category_state.select(Some(0));
        }
        Self {
            dataset,
            categories,
            filter: FilterState::new(),
            focus: Pane::Categories,
            title: "aidfind".to_string(),
            theme: Theme::default(),
            category_state,
            types: Vec::new(),
            type_state: ListState::default(),
            result_lines: Vec::new(),
            result_state: ListState::default(),
            results_visible: false,
        }
    }

    /// Set the title shown above the category pane.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set the active theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Run the interactive session. Each key event is handled to completion
    /// before the next one is read.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let outcome = loop {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(outcome) = self.handle_key(key) {
                            break outcome;
                        }
                    }
                    _ => {}
                }
            }
        };

        ratatui::restore();
        Ok(outcome)
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(LEFT_PANE_WIDTH), Constraint::Min(1)])
            .split(rows[0]);

        self.draw_left_column(frame, columns[0]);

        if self.results_visible {
            panes::render_results(
                frame,
                columns[1],
                &self.result_lines,
                &mut self.result_state,
                self.focus == Pane::Results,
                &self.theme,
            );
        } else {
            panes::render_hint(
                frame,
                columns[1],
                "Select a category, then check a type of assistance.",
                &self.theme,
            );
        }

        panes::render_footer(frame, rows[1], &self.theme);
    }

    fn draw_left_column(&mut self, frame: &mut Frame, area: ratatui::layout::Rect) {
        if self.types.is_empty() {
            panes::render_categories(
                frame,
                area,
                &self.title,
                &self.categories,
                &mut self.category_state,
                self.filter.selected_category(),
                self.focus == Pane::Categories,
                &self.theme,
            );
            return;
        }

        let halves = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        panes::render_categories(
            frame,
            halves[0],
            &self.title,
            &self.categories,
            &mut self.category_state,
            self.filter.selected_category(),
            self.focus == Pane::Categories,
            &self.theme,
        );
        panes::render_types(
            frame,
            halves[1],
            &self.types,
            &self.filter,
            &mut self.type_state,
            self.focus == Pane::Types,
            &self.theme,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Some(self.outcome()),
            KeyCode::Tab | KeyCode::BackTab => self.cycle_focus(),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Enter => self.activate(),
            KeyCode::Char(' ') => {
                if self.focus == Pane::Types {
                    self.toggle_highlighted_type();
                }
            }
            _ => {}
        }
        None
    }

    fn outcome(&self) -> SessionOutcome {
        SessionOutcome {
            category: self.filter.selected_category().map(str::to_string),
            types: self.filter.selected_types().iter().cloned().collect(),
            matches: self.filter.filtered_indices(&self.dataset).len(),
        }
    }

    fn cycle_focus(&mut self) {
        let order = [Pane::Categories, Pane::Types, Pane::Results];
        let current = order.iter().position(|&pane| pane == self.focus).unwrap_or(0);
        for offset in 1..=order.len() {
            let candidate = order[(current + offset) % order.len()];
            if self.pane_visible(candidate) {
                self.focus = candidate;
                return;
            }
        }
    }

    fn pane_visible(&self, pane: Pane) -> bool {
        match pane {
            Pane::Categories => true,
            Pane::Types => !self.types.is_empty(),
            Pane::Results => self.results_visible,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let (state, len) = match self.focus {
            Pane::Categories => (&mut self.category_state, self.categories.len()),
            Pane::Types => (&mut self.type_state, self.types.len()),
            Pane::Results => (&mut self.result_state, self.result_lines.len()),
        };
        if len == 0 {
            state.select(None);
            return;
        }
        let current = state.selected().unwrap_or(0);
        let next = current
            .saturating_add_signed(delta)
            .min(len.saturating_sub(1));
        state.select(Some(next));
    }

    fn activate(&mut self) {
        match self.focus {
            Pane::Categories => self.select_highlighted_category(),
            Pane::Types => self.toggle_highlighted_type(),
            Pane::Results => self.open_highlighted_link(),
        }
    }

    /// Category change: reset the checked types, recompute the available
    /// type list, and collapse the results until a checkbox changes.
    fn select_highlighted_category(&mut self) {
        let Some(index) = self.category_state.selected() else {
            return;
        };
        let Some(category) = self.categories.get(index) else {
            return;
        };

        self.filter.select_category(category.clone());
        self.types = self.filter.available_types(&self.dataset);
        self.type_state
            .select(if self.types.is_empty() { None } else { Some(0) });
        self.result_lines.clear();
        self.result_state.select(None);
        self.results_visible = false;
    }

    fn toggle_highlighted_type(&mut self) {
        let Some(ty) = self
            .type_state
            .selected()
            .and_then(|index| self.types.get(index).cloned())
        else {
            return;
        };
        self.filter.toggle_type(&ty);
        self.refresh_results();
    }

    /// Recompute the flattened results pane from the current selections.
    fn refresh_results(&mut self) {
        let indices = self.filter.filtered_indices(&self.dataset);
        let blocks = build_blocks(&self.dataset, &indices);
        self.result_lines = flatten_blocks(&blocks);
        self.results_visible = true;
        self.result_state
            .select(if self.result_lines.is_empty() { None } else { Some(0) });
    }

    fn open_highlighted_link(&mut self) {
        let Some(index) = self.result_state.selected() else {
            return;
        };
        let Some(ResultLine::Field(line)) = self.result_lines.get(index) else {
            return;
        };
        let Some(href) = line.href.as_deref() else {
            return;
        };
        if let Err(err) = open::that_detached(href) {
            tracing::warn!(href, %err, "failed to open link");
        }
    }
}

/// Flatten result blocks into pane lines, one blank line between blocks.
pub(crate) fn flatten_blocks(blocks: &[crate::types::OrgBlock]) -> Vec<ResultLine> {
    if blocks.is_empty() {
        return vec![ResultLine::Message(NO_RESULTS_MESSAGE)];
    }

    let mut lines = Vec::new();
    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            lines.push(ResultLine::Blank);
        }
        lines.push(ResultLine::Heading(block.heading.clone()));
        lines.extend(block.lines.iter().cloned().map(ResultLine::Field));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrgBlock, OrgRecord};

    fn sample_app() -> App {
        let dataset = Dataset::new(vec![OrgRecord::from_pairs([
            ("Organization Name", "acme house"),
            ("Categories", "Housing Support"),
            ("Types of Assistance", "Rent, Utilities"),
        ])]);
        let categories = dataset.derive_categories();
        App::new(dataset, categories)
    }

    #[test]
    fn empty_blocks_flatten_to_the_no_results_message() {
        assert_eq!(
            flatten_blocks(&[]),
            vec![ResultLine::Message(NO_RESULTS_MESSAGE)]
        );
    }

    #[test]
    fn blocks_flatten_with_blank_separators() {
        let blocks = vec![
            OrgBlock {
                heading: "Acme House".into(),
                lines: vec![FieldLine::text("Notes", "open late")],
            },
            OrgBlock {
                heading: "Beta Org".into(),
                lines: Vec::new(),
            },
        ];
        let lines = flatten_blocks(&blocks);
        assert_eq!(lines[0], ResultLine::Heading("Acme House".into()));
        assert_eq!(lines[2], ResultLine::Blank);
        assert_eq!(lines[3], ResultLine::Heading("Beta Org".into()));
    }

    #[test]
    fn selecting_a_category_collapses_results_and_lists_types() {
        let mut app = sample_app();
        app.select_highlighted_category();
        assert!(!app.results_visible);
        assert_eq!(app.types, vec!["Rent", "Utilities"]);
        assert_eq!(app.type_state.selected(), Some(0));
    }

    #[test]
    fn toggling_a_type_shows_results() {
        let mut app = sample_app();
        app.select_highlighted_category();
        app.toggle_highlighted_type();
        assert!(app.results_visible);
        assert_eq!(
            app.result_lines[0],
            ResultLine::Heading("Acme House".into())
        );
    }

    #[test]
    fn unmatched_selection_shows_the_empty_message() {
        let mut app = sample_app();
        app.select_highlighted_category();
        app.filter.toggle_type("Food");
        app.refresh_results();
        assert_eq!(
            app.result_lines,
            vec![ResultLine::Message(NO_RESULTS_MESSAGE)]
        );
    }

    #[test]
    fn focus_skips_hidden_panes() {
        let mut app = sample_app();
        app.cycle_focus();
        // No types or results yet, so focus stays on categories.
        assert_eq!(app.focus, Pane::Categories);

        app.select_highlighted_category();
        app.cycle_focus();
        assert_eq!(app.focus, Pane::Types);
        app.cycle_focus();
        assert_eq!(app.focus, Pane::Categories);
    }

    #[test]
    fn outcome_reports_current_selections() {
        let mut app = sample_app();
        app.select_highlighted_category();
        app.toggle_highlighted_type();
        let outcome = app.outcome();
        assert_eq!(outcome.category.as_deref(), Some("Housing Support"));
        assert_eq!(outcome.types, vec!["Rent"]);
        assert_eq!(outcome.matches, 1);
    }
}
