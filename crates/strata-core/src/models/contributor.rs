use serde::{Deserialize, Serialize};

/// An affiliation attached to a creator, contributor or laboratory.
///
/// `ror_id`, when present, is the canonical `https://ror.org/<id>` form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Affiliation {
    pub value: String,
    pub ror_id: Option<String>,
}

impl Affiliation {
    /// Two affiliations describe the same organization when their canonical
    /// ROR ids match, or — when either side lacks one — their normalized
    /// labels match.
    pub fn same_entity(&self, other: &Affiliation) -> bool {
        match (&self.ror_id, &other.ror_id) {
            (Some(a), Some(b)) => a == b,
            _ => {
                let label = normalized_label(&self.value);
                !label.is_empty() && label == normalized_label(&other.value)
            }
        }
    }

    /// Backfill missing fields from a matching affiliation.
    pub fn absorb(&mut self, other: &Affiliation) {
        if self.ror_id.is_none() {
            self.ror_id = other.ror_id.clone();
        }
        if self.value.trim().is_empty() && !other.value.trim().is_empty() {
            self.value = other.value.clone();
        }
    }
}

fn normalized_label(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonContributor {
    pub orcid: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub affiliations: Vec<Affiliation>,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionContributor {
    pub institution_name: String,
    pub affiliations: Vec<Affiliation>,
    pub roles: Vec<String>,
}

/// A contributor is either a person or an institution. The classification is
/// fixed at extraction time and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Contributor {
    Person(PersonContributor),
    Institution(InstitutionContributor),
}

impl Contributor {
    pub fn roles(&self) -> &[String] {
        match self {
            Contributor::Person(person) => &person.roles,
            Contributor::Institution(institution) => &institution.roles,
        }
    }

    pub fn affiliations(&self) -> &[Affiliation] {
        match self {
            Contributor::Person(person) => &person.affiliations,
            Contributor::Institution(institution) => &institution.affiliations,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonAuthor {
    pub orcid: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub affiliations: Vec<Affiliation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionAuthor {
    pub institution_name: String,
    pub affiliations: Vec<Affiliation>,
}

/// A creator of the resource. Authors are never deduplicated — the document
/// order of `creator` elements is preserved verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Author {
    Person(PersonAuthor),
    Institution(InstitutionAuthor),
}

/// A physical laboratory resolved from the MSL vocabulary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MslLaboratory {
    pub lab_id: String,
    pub name: String,
    pub affiliation_name: Option<String>,
    pub affiliation_ror: Option<String>,
}
