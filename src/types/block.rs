/// One rendered line of a result block: a field label, its value, and the
/// activation target when the field is a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLine {
    pub label: &'static str,
    pub value: String,
    pub href: Option<String>,
}

impl FieldLine {
    /// Create a plain text line.
    #[must_use]
    pub fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            href: None,
        }
    }

    /// Create a line whose value activates `href`.
    #[must_use]
    pub fn link(label: &'static str, value: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            href: Some(href.into()),
        }
    }

    /// Whether this line can be activated.
    #[must_use]
    pub fn is_link(&self) -> bool {
        self.href.is_some()
    }
}

/// The view model for one matching organization: a title-cased heading
/// followed by the populated detail lines in their fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrgBlock {
    pub heading: String,
    pub lines: Vec<FieldLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_lines_report_their_target() {
        let line = FieldLine::link("Website", "http://example.org", "http://example.org");
        assert!(line.is_link());
        assert_eq!(line.href.as_deref(), Some("http://example.org"));

        let plain = FieldLine::text("Notes", "call ahead");
        assert!(!plain.is_link());
    }
}
