use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// A single organization entry, kept verbatim as a name/value map.
///
/// Fields are optional across the board: a missing key and a value that is
/// blank after trimming are both treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrgRecord {
    fields: BTreeMap<String, String>,
}

impl OrgRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a parsed JSON object, keeping only string values.
    #[must_use]
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let fields = object
            .iter()
            .filter_map(|(key, value)| match value {
                Value::String(text) => Some((key.clone(), text.clone())),
                _ => None,
            })
            .collect();
        Self { fields }
    }

    /// Build a record from name/value pairs.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self { fields }
    }

    /// Return the value for `name` as authored, or `None` when the field is
    /// missing or blank after trimming.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Return the value for `name`, falling back to the empty string.
    #[must_use]
    pub fn field_or_empty(&self, name: &str) -> &str {
        self.field(name).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_treated_as_absent() {
        let record = OrgRecord::from_pairs([("Website", "   "), ("Phone", "352-555-0100")]);
        assert_eq!(record.field("Website"), None);
        assert_eq!(record.field("Phone"), Some("352-555-0100"));
        assert_eq!(record.field("Email"), None);
    }

    #[test]
    fn values_are_returned_as_authored() {
        let record = OrgRecord::from_pairs([("Notes", "  walk-ins welcome  ")]);
        assert_eq!(record.field("Notes"), Some("  walk-ins welcome  "));
    }

    #[test]
    fn non_string_json_values_are_ignored() {
        let object: Map<String, Value> = serde_json::from_str(
            r#"{"Organization Name": "Acme", "Distance from 34470 (mi)": 4.2}"#,
        )
        .unwrap();
        let record = OrgRecord::from_object(&object);
        assert_eq!(record.field("Organization Name"), Some("Acme"));
        assert_eq!(record.field("Distance from 34470 (mi)"), None);
    }
}
