//! Selection state and record filtering.
//!
//! `FilterState` owns the session's selections (one category, any number of
//! assistance types) and answers which records and assistance types the
//! current selections produce. Matching is case-insensitive substring
//! containment against the comma-separated free-text fields, exactly as
//! authored in the dataset.

use std::collections::BTreeSet;

use crate::dataset::Dataset;
use crate::types::{CATEGORIES, OrgRecord, TYPES_OF_ASSISTANCE};

/// The explicit session selection state.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    selected_category: Option<String>,
    selected_types: BTreeSet<String>,
}

impl FilterState {
    /// Start with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected category, if any.
    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// The currently checked assistance types.
    #[must_use]
    pub fn selected_types(&self) -> &BTreeSet<String> {
        &self.selected_types
    }

    /// Select `category` and clear any checked assistance types.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = Some(category.into());
        self.selected_types.clear();
    }

    /// Toggle `ty` in the checked set. Returns whether it is now checked.
    pub fn toggle_type(&mut self, ty: &str) -> bool {
        if self.selected_types.remove(ty) {
            false
        } else {
            self.selected_types.insert(ty.to_string());
            true
        }
    }

    #[must_use]
    pub fn is_type_selected(&self, ty: &str) -> bool {
        self.selected_types.contains(ty)
    }

    /// The distinct assistance types offered by records matching the selected
    /// category: comma-split, trimmed, deduplicated, sorted ascending
    /// case-insensitively. Empty when no category is selected.
    #[must_use]
    pub fn available_types(&self, dataset: &Dataset) -> Vec<String> {
        let Some(category) = self.selected_category.as_deref() else {
            return Vec::new();
        };

        let mut seen = BTreeSet::new();
        for record in dataset.records() {
            if !contains_ignore_case(record.field_or_empty(CATEGORIES), category) {
                continue;
            }
            for piece in record.field_or_empty(TYPES_OF_ASSISTANCE).split(',') {
                let trimmed = piece.trim();
                if !trimmed.is_empty() {
                    seen.insert(trimmed.to_string());
                }
            }
        }

        let mut types: Vec<String> = seen.into_iter().collect();
        sort_case_insensitive(&mut types);
        types
    }

    /// Whether `record` matches the current selections: its `Categories`
    /// value contains the selected category, and either no types are checked
    /// or at least one checked type is a substring of its
    /// `Types of Assistance` value.
    #[must_use]
    pub fn matches(&self, record: &OrgRecord) -> bool {
        let Some(category) = self.selected_category.as_deref() else {
            return false;
        };
        if !contains_ignore_case(record.field_or_empty(CATEGORIES), category) {
            return false;
        }
        if self.selected_types.is_empty() {
            return true;
        }

        let types = record.field_or_empty(TYPES_OF_ASSISTANCE);
        self.selected_types
            .iter()
            .any(|ty| contains_ignore_case(types, ty))
    }

    /// Indices of the matching records, in dataset order. Empty when no
    /// category is selected.
    #[must_use]
    pub fn filtered_indices(&self, dataset: &Dataset) -> Vec<usize> {
        if self.selected_category.is_none() {
            return Vec::new();
        }
        dataset
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Case-insensitive substring containment.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Sort ascending by lowercased key, falling back to byte order for ties.
pub(crate) fn sort_case_insensitive(values: &mut [String]) {
    values.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
}
