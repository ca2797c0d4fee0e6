/// Field holding the record's display name.
pub const ORGANIZATION_NAME: &str = "Organization Name";

/// Field holding the comma-separated category memberships.
pub const CATEGORIES: &str = "Categories";

/// Field holding the comma-separated assistance types.
pub const TYPES_OF_ASSISTANCE: &str = "Types of Assistance";

/// How a field's value should be activated when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// The value is itself a URL.
    Website,
    /// The value is an email address (`mailto:`).
    Email,
    /// The value is a phone number (`tel:`).
    Phone,
    /// The value is a street address, opened through a map search.
    Map,
}

/// A recognized detail field and how its value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub link: Option<LinkKind>,
}

impl FieldSpec {
    const fn text(name: &'static str) -> Self {
        Self { name, link: None }
    }

    const fn link(name: &'static str, kind: LinkKind) -> Self {
        Self {
            name,
            link: Some(kind),
        }
    }
}

/// The detail fields of a result block, in render order. `Organization Name`
/// becomes the heading and `Categories` is never shown, so neither appears
/// here.
pub const DETAIL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("Veteran Resources"),
    FieldSpec::text(TYPES_OF_ASSISTANCE),
    FieldSpec::link("Website", LinkKind::Website),
    FieldSpec::link("Email", LinkKind::Email),
    FieldSpec::link("Phone", LinkKind::Phone),
    FieldSpec::text("Contact Name"),
    FieldSpec::text("Contact Title"),
    FieldSpec::link("Contact Email", LinkKind::Email),
    FieldSpec::link("Contact Phone", LinkKind::Phone),
    FieldSpec::text("Eligibility Requirements"),
    FieldSpec::text("Application Process"),
    FieldSpec::text("Documents Required"),
    FieldSpec::text("Notes"),
    FieldSpec::text("Distance from 34470 (mi)"),
    FieldSpec::link("Address", LinkKind::Map),
    FieldSpec::text("Operating Hours"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_fields_exclude_name_and_categories() {
        assert!(
            DETAIL_FIELDS
                .iter()
                .all(|spec| spec.name != ORGANIZATION_NAME && spec.name != CATEGORIES)
        );
    }

    #[test]
    fn contact_fields_share_link_kinds_with_primary_fields() {
        let kind_of = |name: &str| {
            DETAIL_FIELDS
                .iter()
                .find(|spec| spec.name == name)
                .and_then(|spec| spec.link)
        };
        assert_eq!(kind_of("Email"), kind_of("Contact Email"));
        assert_eq!(kind_of("Phone"), kind_of("Contact Phone"));
        assert_eq!(kind_of("Address"), Some(LinkKind::Map));
    }
}
