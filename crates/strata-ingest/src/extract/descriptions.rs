use strata_core::models::Description;

use crate::xml::ParsedElement;

pub fn extract_descriptions(tree: &ParsedElement) -> Vec<Description> {
    let Some(descriptions) = tree.child("descriptions") else {
        return Vec::new();
    };

    descriptions
        .children_named("description")
        .filter_map(|node| {
            let value = node.text_trim();
            if value.is_empty() {
                return None;
            }
            let description_type = node
                .attr("descriptionType")
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .unwrap_or("Other")
                .to_string();
            Some(Description {
                description_type,
                value: value.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    #[test]
    fn keeps_type_and_drops_empties() {
        let xml = br#"<resource><descriptions>
            <description descriptionType="Abstract">Friction experiments on gouge.</description>
            <description descriptionType="Methods">   </description>
            <description>Collected during cruise SO-278.</description>
        </descriptions></resource>"#;
        let descriptions = extract_descriptions(&parse_document(xml).unwrap());

        assert_eq!(descriptions.len(), 2);
        assert_eq!(descriptions[0].description_type, "Abstract");
        assert_eq!(descriptions[1].description_type, "Other");
        assert_eq!(descriptions[1].value, "Collected during cruise SO-278.");
    }

    #[test]
    fn no_descriptions_section_yields_nothing() {
        assert!(extract_descriptions(&parse_document(b"<resource/>").unwrap()).is_empty());
    }
}
