use strata_core::models::Title;

use crate::text::kebab_case;
use crate::xml::ParsedElement;

/// The default type for untyped titles. Downstream consumers assume the
/// first title of a record is the main title, so all `main-title` entries
/// are moved to the front; relative order within each group stays as in
/// the document.
pub const MAIN_TITLE: &str = "main-title";

pub fn extract_titles(tree: &ParsedElement) -> Vec<Title> {
    let Some(titles) = tree.child("titles") else {
        return Vec::new();
    };

    let mut main = Vec::new();
    let mut rest = Vec::new();
    for node in titles.children_named("title") {
        let value = node.text_trim();
        if value.is_empty() {
            continue;
        }

        let title_type = node
            .attr("titleType")
            .map(kebab_case)
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| MAIN_TITLE.to_string());

        let title = Title {
            value: value.to_string(),
            title_type,
        };
        if title.title_type == MAIN_TITLE {
            main.push(title);
        } else {
            rest.push(title);
        }
    }

    main.extend(rest);
    main
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    #[test]
    fn untyped_titles_default_to_main_title() {
        let xml = br#"<resource><titles>
            <title>Creep of simulated fault gouge</title>
        </titles></resource>"#;
        let titles = extract_titles(&parse_document(xml).unwrap());
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].title_type, "main-title");
    }

    #[test]
    fn title_types_become_kebab_slugs() {
        let xml = br#"<resource><titles>
            <title titleType="AlternativeTitle">Fault gouge creep</title>
            <title titleType="TranslatedTitle">Kruip van breukgesteente</title>
        </titles></resource>"#;
        let titles = extract_titles(&parse_document(xml).unwrap());
        assert_eq!(titles[0].title_type, "alternative-title");
        assert_eq!(titles[1].title_type, "translated-title");
    }

    #[test]
    fn main_titles_move_to_the_front_in_document_order() {
        let xml = br#"<resource><titles>
            <title titleType="Subtitle">B</title>
            <title>Main one</title>
            <title titleType="AlternativeTitle">C</title>
            <title>Main two</title>
        </titles></resource>"#;
        let titles = extract_titles(&parse_document(xml).unwrap());
        let order: Vec<(&str, &str)> = titles
            .iter()
            .map(|t| (t.title_type.as_str(), t.value.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("main-title", "Main one"),
                ("main-title", "Main two"),
                ("subtitle", "B"),
                ("alternative-title", "C"),
            ]
        );
    }

    #[test]
    fn blank_titles_are_dropped() {
        let xml = br#"<resource><titles><title titleType="Subtitle">  </title></titles></resource>"#;
        assert!(extract_titles(&parse_document(xml).unwrap()).is_empty());
    }
}
