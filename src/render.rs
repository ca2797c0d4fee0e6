//! View-model construction for matching records.
//!
//! The terminal adapter never formats record fields itself; it consumes the
//! ordered [`OrgBlock`] list produced here. Each block is the heading plus
//! one labeled line per populated detail field, with link fields carrying
//! their activation target.

use crate::dataset::Dataset;
use crate::types::{DETAIL_FIELDS, FieldLine, LinkKind, ORGANIZATION_NAME, OrgBlock, OrgRecord};

/// The en-dash separator between a field label and its value.
pub const LABEL_SEPARATOR: &str = " – ";

/// Build the view model for the records at `indices`, preserving their order.
#[must_use]
pub fn build_blocks(dataset: &Dataset, indices: &[usize]) -> Vec<OrgBlock> {
    indices
        .iter()
        .filter_map(|&index| dataset.records().get(index))
        .map(block_for)
        .collect()
}

/// Build the view model for a single record.
#[must_use]
pub fn block_for(record: &OrgRecord) -> OrgBlock {
    let heading = title_case(record.field_or_empty(ORGANIZATION_NAME));
    let lines = DETAIL_FIELDS
        .iter()
        .filter_map(|spec| {
            let value = record.field(spec.name)?;
            let line = match spec.link {
                Some(kind) => FieldLine::link(spec.name, value, href_for(kind, value)),
                None => FieldLine::text(spec.name, value),
            };
            Some(line)
        })
        .collect();
    OrgBlock { heading, lines }
}

/// The activation target for a link field's value.
#[must_use]
pub fn href_for(kind: LinkKind, value: &str) -> String {
    match kind {
        LinkKind::Website => value.to_string(),
        LinkKind::Email => format!("mailto:{value}"),
        LinkKind::Phone => format!("tel:{value}"),
        LinkKind::Map => format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            urlencoding::encode(value)
        ),
    }
}

/// Title-case `input`: tokens are maximal runs of non-whitespace starting
/// with an ASCII word character; the first character is uppercased and the
/// rest of the token lowercased. Text outside tokens passes through.
#[must_use]
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_token = false;
    for ch in input.chars() {
        if in_token {
            if ch.is_whitespace() {
                in_token = false;
                output.push(ch);
            } else {
                output.extend(ch.to_lowercase());
            }
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            in_token = true;
            output.extend(ch.to_uppercase());
        } else {
            output.push(ch);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_uppercases_each_word() {
        assert_eq!(title_case("acme house"), "Acme House");
        assert_eq!(title_case("OCALA FOOD BANK"), "Ocala Food Bank");
    }

    #[test]
    fn title_case_tokens_start_at_word_characters() {
        assert_eq!(title_case("(acme) house"), "(Acme) House");
        assert_eq!(title_case("o'brien's PANTRY"), "O'brien's Pantry");
        assert_eq!(title_case("  spaced   out "), "  Spaced   Out ");
    }

    #[test]
    fn blocks_keep_only_populated_fields_in_order() {
        let record = OrgRecord::from_pairs([
            ("Organization Name", "acme house"),
            ("Categories", "Housing"),
            ("Types of Assistance", "Rent"),
            ("Website", ""),
            ("Phone", "352-555-0100"),
            ("Notes", "walk-ins welcome"),
        ]);

        let block = block_for(&record);
        assert_eq!(block.heading, "Acme House");
        let labels: Vec<&str> = block.lines.iter().map(|line| line.label).collect();
        assert_eq!(labels, vec!["Types of Assistance", "Phone", "Notes"]);
    }

    #[test]
    fn categories_never_render_as_a_detail_line() {
        let record = OrgRecord::from_pairs([
            ("Organization Name", "acme"),
            ("Categories", "Housing"),
        ]);
        assert!(block_for(&record).lines.is_empty());
    }

    #[test]
    fn website_links_use_the_literal_value() {
        let record = OrgRecord::from_pairs([("Website", "http://example.org")]);
        let block = block_for(&record);
        assert_eq!(block.lines[0].value, "http://example.org");
        assert_eq!(block.lines[0].href.as_deref(), Some("http://example.org"));
    }

    #[test]
    fn email_and_phone_links_use_mailto_and_tel() {
        let record = OrgRecord::from_pairs([
            ("Email", "help@example.org"),
            ("Contact Phone", "352-555-0100"),
        ]);
        let block = block_for(&record);
        let href = |label: &str| {
            block
                .lines
                .iter()
                .find(|line| line.label == label)
                .and_then(|line| line.href.as_deref())
                .map(str::to_string)
        };
        assert_eq!(href("Email"), Some("mailto:help@example.org".into()));
        assert_eq!(href("Contact Phone"), Some("tel:352-555-0100".into()));
    }

    #[test]
    fn addresses_become_percent_encoded_map_searches() {
        assert_eq!(
            href_for(LinkKind::Map, "1 Main St, Town"),
            "https://www.google.com/maps/search/?api=1&query=1%20Main%20St%2C%20Town"
        );
    }

    #[test]
    fn build_blocks_preserves_index_order() {
        let dataset = Dataset::new(vec![
            OrgRecord::from_pairs([("Organization Name", "zed org")]),
            OrgRecord::from_pairs([("Organization Name", "able org")]),
        ]);
        let blocks = build_blocks(&dataset, &[0, 1]);
        assert_eq!(blocks[0].heading, "Zed Org");
        assert_eq!(blocks[1].heading, "Able Org");
    }
}
