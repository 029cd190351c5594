use strata_core::models::{Author, InstitutionAuthor, PersonAuthor};

use crate::affiliations::extract_affiliations;
use crate::extract::names::{extract_orcid, is_organizational, split_name};
use crate::vocab::RorLookup;
use crate::xml::ParsedElement;

/// One author per `creator` element, in document order. Authors are never
/// deduplicated — repeated creators stay separate entries.
pub fn extract_authors(lookup: &RorLookup, tree: &ParsedElement) -> Vec<Author> {
    let Some(creators) = tree.child("creators") else {
        return Vec::new();
    };

    creators
        .children_named("creator")
        .filter_map(|creator| extract_author(lookup, creator))
        .collect()
}

fn extract_author(lookup: &RorLookup, creator: &ParsedElement) -> Option<Author> {
    let name_node = creator.child("creatorName")?;
    let raw_name = name_node.text_trim();
    let affiliations = extract_affiliations(lookup, creator);

    if is_organizational(name_node) {
        if raw_name.is_empty() {
            return None;
        }
        return Some(Author::Institution(InstitutionAuthor {
            institution_name: raw_name.to_string(),
            affiliations,
        }));
    }

    let given = nonempty_child_text(creator, "givenName");
    let family = nonempty_child_text(creator, "familyName");
    let (last_name, first_name) = match (family, given) {
        (Some(family), Some(given)) => (family, given),
        _ => split_name(raw_name),
    };
    if last_name.is_empty() && first_name.is_empty() {
        return None;
    }

    Some(Author::Person(PersonAuthor {
        orcid: extract_orcid(creator),
        first_name,
        last_name,
        affiliations,
    }))
}

fn nonempty_child_text(node: &ParsedElement, name: &str) -> Option<String> {
    node.child(name)
        .map(|child| child.text_trim().to_string())
        .filter(|text| !text.is_empty())
}
