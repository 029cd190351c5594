//! Name handling shared by the creator and contributor extractors.

use crate::identifiers::Orcid;
use crate::xml::ParsedElement;

/// Split a raw `Family, Given` name on the first comma. Without a comma the
/// whole text is the family name.
pub fn split_name(raw: &str) -> (String, String) {
    match raw.split_once(',') {
        Some((family, given)) => (family.trim().to_string(), given.trim().to_string()),
        None => (raw.trim().to_string(), String::new()),
    }
}

/// First `nameIdentifier` child with scheme `ORCID` that canonicalizes
/// successfully. At most one ORCID is kept per name.
pub fn extract_orcid(node: &ParsedElement) -> Option<String> {
    node.children_named("nameIdentifier")
        .filter(|id| {
            id.attr("nameIdentifierScheme")
                .is_some_and(|scheme| scheme.trim().eq_ignore_ascii_case("orcid"))
        })
        .find_map(|id| Orcid::parse(id.text_trim()).ok())
        .map(|orcid| orcid.id)
}

/// `nameType="Organizational"`, matched case-insensitively.
pub fn is_organizational(name_node: &ParsedElement) -> bool {
    name_node
        .attr("nameType")
        .is_some_and(|name_type| name_type.trim().eq_ignore_ascii_case("organizational"))
}
