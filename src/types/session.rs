/// Summary of the browsing session reported when the interface exits.
#[derive(Debug, Clone, Default)]
pub struct SessionOutcome {
    /// The category selected when the session ended, if any.
    pub category: Option<String>,
    /// The assistance types checked when the session ended.
    pub types: Vec<String>,
    /// Number of organizations matching the final selections.
    pub matches: usize,
}
