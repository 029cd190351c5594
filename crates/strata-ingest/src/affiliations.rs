//! Resolution of raw affiliation text and identifiers against the ROR
//! registry lookup.

use strata_core::models::Affiliation;

use crate::identifiers::RorId;
use crate::vocab::RorLookup;
use crate::xml::ParsedElement;

/// Resolve an identifier that may denote a ROR organization.
///
/// Returns `None` unless the identifier is recognizably a ROR: the scheme
/// equals `ror` case-insensitively, or the identifier itself goes through
/// `ror.org`. A ROR id the registry does not know is still valid output —
/// it keeps its canonical id and falls back to the supplied label.
pub fn resolve_ror_affiliation(
    lookup: &RorLookup,
    identifier: &str,
    scheme: Option<&str>,
    fallback_label: Option<&str>,
) -> Option<Affiliation> {
    let scheme_is_ror = scheme.is_some_and(|s| s.trim().eq_ignore_ascii_case("ror"));
    if !scheme_is_ror && !identifier.to_lowercase().contains("ror.org") {
        return None;
    }

    let ror = RorId::parse(identifier).ok()?;
    let value = match lookup.label(&ror.url) {
        Some(label) => label.to_string(),
        None => fallback_label
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(String::from)
            .unwrap_or_else(|| ror.url.clone()),
    };

    Some(Affiliation {
        value,
        ror_id: Some(ror.url),
    })
}

/// Collect the `affiliation` children of a creator or contributor node.
/// Entries that fail ROR resolution keep their text as a bare label;
/// empty entries are dropped.
pub fn extract_affiliations(lookup: &RorLookup, node: &ParsedElement) -> Vec<Affiliation> {
    let mut affiliations = Vec::new();

    for element in node.children_named("affiliation") {
        let label = element.text_trim();

        let resolved = element.attr("affiliationIdentifier").and_then(|identifier| {
            resolve_ror_affiliation(
                lookup,
                identifier,
                element.attr("affiliationIdentifierScheme"),
                (!label.is_empty()).then_some(label),
            )
        });

        match resolved {
            Some(affiliation) => affiliations.push(affiliation),
            None if !label.is_empty() => affiliations.push(Affiliation {
                value: label.to_string(),
                ror_id: None,
            }),
            None => {}
        }
    }

    affiliations
}

/// Merge `incoming` into `target`, matching entries by ROR id or normalized
/// label and backfilling whichever side is missing data.
pub fn merge_affiliations(target: &mut Vec<Affiliation>, incoming: &[Affiliation]) {
    for affiliation in incoming {
        match target.iter_mut().find(|existing| existing.same_entity(affiliation)) {
            Some(existing) => existing.absorb(affiliation),
            None => target.push(affiliation.clone()),
        }
    }
}
