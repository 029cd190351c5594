//! Contributor deduplication.
//!
//! Records live in an arena; an alias index maps every aggregation key a
//! contributor has ever produced to its arena slot. A later contributor
//! matching on any alias merges into that slot, so two records that matched
//! through different keys still end up in the same entry. Matching is
//! best-effort deduplication, not an identity guarantee.

use std::collections::HashMap;

use strata_core::models::{Contributor, InstitutionContributor, PersonContributor};
use tracing::debug;

use crate::affiliations::merge_affiliations;
use crate::text::fold_key;

#[derive(Debug, Default)]
pub struct ContributorSet {
    entries: Vec<Contributor>,
    index: HashMap<String, usize>,
}

impl ContributorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contributor, merging it into an existing entry when any of its
    /// aggregation keys is already known. All of the candidate's keys are
    /// registered as aliases of the entry it lands in.
    pub fn push(&mut self, candidate: Contributor) {
        let keys = aggregation_keys(&candidate);
        let slot = keys.iter().find_map(|key| self.index.get(key).copied());

        let slot = match slot {
            Some(slot) => {
                debug!(keys = ?keys, "merging duplicate contributor");
                merge_into(&mut self.entries[slot], candidate);
                slot
            }
            None => {
                self.entries.push(candidate);
                self.entries.len() - 1
            }
        };

        for key in keys {
            self.index.entry(key).or_insert(slot);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<Contributor> {
        self.entries
    }
}

/// Keys are prefixed with the contributor type, so a person and an
/// institution can never collide even on identical name strings.
fn aggregation_keys(contributor: &Contributor) -> Vec<String> {
    let mut keys = Vec::new();
    match contributor {
        Contributor::Person(person) => {
            if let Some(orcid) = person.orcid.as_deref().map(str::trim).filter(|o| !o.is_empty()) {
                keys.push(format!("person:orcid:{}", fold_key(orcid)));
            }
            if !person.last_name.trim().is_empty() || !person.first_name.trim().is_empty() {
                keys.push(format!(
                    "person:name:{}:{}",
                    fold_key(&person.last_name),
                    fold_key(&person.first_name)
                ));
            }
        }
        Contributor::Institution(institution) => {
            for affiliation in &institution.affiliations {
                if let Some(ror_id) = &affiliation.ror_id {
                    keys.push(format!("institution:ror:{}", fold_key(ror_id)));
                }
            }
            if !institution.institution_name.trim().is_empty() {
                keys.push(format!(
                    "institution:name:{}",
                    fold_key(&institution.institution_name)
                ));
            }
        }
    }
    keys
}

fn merge_into(primary: &mut Contributor, incoming: Contributor) {
    match (primary, incoming) {
        (Contributor::Person(primary), Contributor::Person(incoming)) => {
            merge_person(primary, incoming);
        }
        (Contributor::Institution(primary), Contributor::Institution(incoming)) => {
            merge_institution(primary, incoming);
        }
        // Keys are type-prefixed; a cross-type hit cannot happen.
        _ => {}
    }
}

fn merge_person(primary: &mut PersonContributor, incoming: PersonContributor) {
    if primary.orcid.is_none() {
        primary.orcid = incoming.orcid;
    }
    if primary.first_name.is_empty() {
        primary.first_name = incoming.first_name;
    }
    if primary.last_name.is_empty() {
        primary.last_name = incoming.last_name;
    }
    merge_affiliations(&mut primary.affiliations, &incoming.affiliations);
    union_roles(&mut primary.roles, incoming.roles);
}

fn merge_institution(primary: &mut InstitutionContributor, incoming: InstitutionContributor) {
    if primary.institution_name.is_empty() {
        primary.institution_name = incoming.institution_name;
    }
    merge_affiliations(&mut primary.affiliations, &incoming.affiliations);
    union_roles(&mut primary.roles, incoming.roles);
}

fn union_roles(target: &mut Vec<String>, incoming: Vec<String>) {
    for role in incoming {
        if !target.contains(&role) {
            target.push(role);
        }
    }
}
