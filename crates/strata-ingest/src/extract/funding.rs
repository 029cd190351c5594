use strata_core::models::FundingReference;
use tracing::debug;

use crate::xml::ParsedElement;

/// `funderName` is required by the DataCite schema; entries without one are
/// skipped so a partial import stays usable.
pub fn extract_funding_references(tree: &ParsedElement) -> Vec<FundingReference> {
    let Some(references) = tree.child("fundingReferences") else {
        return Vec::new();
    };

    references
        .children_named("fundingReference")
        .filter_map(funding_reference)
        .collect()
}

fn funding_reference(node: &ParsedElement) -> Option<FundingReference> {
    let funder_name = nonempty_text(node, "funderName");
    let Some(funder_name) = funder_name else {
        debug!("skipping funding reference without funderName");
        return None;
    };

    let funder_identifier_node = node.child("funderIdentifier");
    let funder_identifier = funder_identifier_node
        .map(|n| n.text_trim().to_string())
        .filter(|s| !s.is_empty());
    let funder_identifier_type = funder_identifier_node
        .and_then(|n| n.attr("funderIdentifierType"))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    let award_number_node = node.child("awardNumber");
    let award_number = award_number_node
        .map(|n| n.text_trim().to_string())
        .filter(|s| !s.is_empty());
    let award_uri = award_number_node
        .and_then(|n| n.attr("awardURI"))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    Some(FundingReference {
        funder_name,
        funder_identifier,
        funder_identifier_type,
        award_number,
        award_uri,
        award_title: nonempty_text(node, "awardTitle"),
    })
}

fn nonempty_text(node: &ParsedElement, name: &str) -> Option<String> {
    node.child(name)
        .map(|child| child.text_trim().to_string())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    #[test]
    fn complete_reference_is_extracted() {
        let xml = br#"<resource><fundingReferences>
            <fundingReference>
                <funderName>European Commission</funderName>
                <funderIdentifier funderIdentifierType="Crossref Funder ID">10.13039/501100000780</funderIdentifier>
                <awardNumber awardURI="https://cordis.europa.eu/project/id/101055096">101055096</awardNumber>
                <awardTitle>EPOS Multi-Scale Labs</awardTitle>
            </fundingReference>
        </fundingReferences></resource>"#;
        let references = extract_funding_references(&parse_document(xml).unwrap());

        assert_eq!(references.len(), 1);
        let reference = &references[0];
        assert_eq!(reference.funder_name, "European Commission");
        assert_eq!(reference.funder_identifier.as_deref(), Some("10.13039/501100000780"));
        assert_eq!(
            reference.funder_identifier_type.as_deref(),
            Some("Crossref Funder ID")
        );
        assert_eq!(reference.award_number.as_deref(), Some("101055096"));
        assert_eq!(
            reference.award_uri.as_deref(),
            Some("https://cordis.europa.eu/project/id/101055096")
        );
        assert_eq!(reference.award_title.as_deref(), Some("EPOS Multi-Scale Labs"));
    }

    #[test]
    fn missing_funder_name_skips_the_entry() {
        let xml = br#"<resource><fundingReferences>
            <fundingReference>
                <awardNumber>123</awardNumber>
            </fundingReference>
            <fundingReference>
                <funderName>  </funderName>
            </fundingReference>
            <fundingReference>
                <funderName>NWO</funderName>
            </fundingReference>
        </fundingReferences></resource>"#;
        let references = extract_funding_references(&parse_document(xml).unwrap());

        assert_eq!(references.len(), 1);
        assert_eq!(references[0].funder_name, "NWO");
        assert!(references.iter().all(|r| !r.funder_name.is_empty()));
    }

    #[test]
    fn optional_fields_stay_none_when_absent() {
        let xml = br#"<resource><fundingReferences>
            <fundingReference><funderName>NWO</funderName></fundingReference>
        </fundingReferences></resource>"#;
        let references = extract_funding_references(&parse_document(xml).unwrap());
        let reference = &references[0];
        assert_eq!(reference.funder_identifier, None);
        assert_eq!(reference.award_number, None);
        assert_eq!(reference.award_uri, None);
        assert_eq!(reference.award_title, None);
    }
}
