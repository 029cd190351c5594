use strata_core::models::DateEntry;

use crate::text::kebab_case;
use crate::xml::ParsedElement;

/// A value containing `/` is a range; either side may be empty for open
/// ranges. A plain value is a start date with an empty end.
pub fn extract_dates(tree: &ParsedElement) -> Vec<DateEntry> {
    let Some(dates) = tree.child("dates") else {
        return Vec::new();
    };

    dates
        .children_named("date")
        .filter_map(|node| {
            let value = node.text_trim();
            let (start, end) = match value.split_once('/') {
                Some((start, end)) => (start.trim(), end.trim()),
                None => (value, ""),
            };
            if start.is_empty() && end.is_empty() {
                return None;
            }

            let date_type = node
                .attr("dateType")
                .map(kebab_case)
                .filter(|slug| !slug.is_empty())
                .unwrap_or_else(|| "other".to_string());

            Some(DateEntry {
                date_type,
                start: start.to_string(),
                end: end.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    #[test]
    fn single_value_is_a_start_date() {
        let xml = br#"<resource><dates>
            <date dateType="Issued">2024-03-01</date>
        </dates></resource>"#;
        let dates = extract_dates(&parse_document(xml).unwrap());
        assert_eq!(dates[0].date_type, "issued");
        assert_eq!(dates[0].start, "2024-03-01");
        assert_eq!(dates[0].end, "");
    }

    #[test]
    fn slash_splits_a_range() {
        let xml = br#"<resource><dates>
            <date dateType="Coverage">2020-01-01/2020-12-31</date>
        </dates></resource>"#;
        let dates = extract_dates(&parse_document(xml).unwrap());
        assert_eq!(dates[0].date_type, "coverage");
        assert_eq!(dates[0].start, "2020-01-01");
        assert_eq!(dates[0].end, "2020-12-31");
    }

    #[test]
    fn open_ranges_keep_the_empty_side() {
        let xml = br#"<resource><dates>
            <date dateType="Collected">/2021-06-30</date>
            <date dateType="Collected">2021-01-01/</date>
        </dates></resource>"#;
        let dates = extract_dates(&parse_document(xml).unwrap());
        assert_eq!((dates[0].start.as_str(), dates[0].end.as_str()), ("", "2021-06-30"));
        assert_eq!((dates[1].start.as_str(), dates[1].end.as_str()), ("2021-01-01", ""));
    }

    #[test]
    fn missing_type_defaults_to_other_and_camel_becomes_kebab() {
        let xml = br#"<resource><dates>
            <date>2024-01-01</date>
            <date dateType="ValidUntil">2030-01-01</date>
        </dates></resource>"#;
        let dates = extract_dates(&parse_document(xml).unwrap());
        assert_eq!(dates[0].date_type, "other");
        assert_eq!(dates[1].date_type, "valid-until");
    }

    #[test]
    fn empty_values_are_dropped() {
        let xml = br#"<resource><dates>
            <date dateType="Issued"> </date>
            <date dateType="Issued">/</date>
        </dates></resource>"#;
        assert!(extract_dates(&parse_document(xml).unwrap()).is_empty());
    }
}
