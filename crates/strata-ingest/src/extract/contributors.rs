use strata_core::models::{Contributor, InstitutionContributor, PersonContributor};

use crate::affiliations::extract_affiliations;
use crate::extract::names::{extract_orcid, split_name};
use crate::laboratories::LabReference;
use crate::text::title_case;
use crate::vocab::RorLookup;
use crate::xml::ParsedElement;

/// DataCite contributor types and their display labels.
const ROLE_LABELS: &[(&str, &str)] = &[
    ("ContactPerson", "Contact Person"),
    ("DataCollector", "Data Collector"),
    ("DataCurator", "Data Curator"),
    ("DataManager", "Data Manager"),
    ("Distributor", "Distributor"),
    ("Editor", "Editor"),
    ("HostingInstitution", "Hosting Institution"),
    ("Producer", "Producer"),
    ("ProjectLeader", "Project Leader"),
    ("ProjectManager", "Project Manager"),
    ("ProjectMember", "Project Member"),
    ("RegistrationAgency", "Registration Agency"),
    ("RegistrationAuthority", "Registration Authority"),
    ("RelatedPerson", "Related Person"),
    ("Researcher", "Researcher"),
    ("ResearchGroup", "Research Group"),
    ("RightsHolder", "Rights Holder"),
    ("Sponsor", "Sponsor"),
    ("Supervisor", "Supervisor"),
    ("WorkPackageLeader", "Work Package Leader"),
    ("Other", "Other"),
];

/// Roles only an institution can hold. A contributor without an explicit
/// `nameType` whose every role is in this set is an institution; any role
/// outside it forces person classification.
const INSTITUTION_ROLES: &[&str] = &[
    "Distributor",
    "HostingInstitution",
    "RegistrationAgency",
    "RegistrationAuthority",
    "ResearchGroup",
    "Sponsor",
];

#[derive(Debug, Default)]
pub struct ExtractedContributors {
    pub contributors: Vec<Contributor>,
    pub laboratories: Vec<LabReference>,
}

/// Split a raw `contributorType` on `;` and `,` into role tokens.
pub fn split_roles(raw: &str) -> Vec<String> {
    raw.split([';', ','])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Display label for a role token; unknown tokens are title-cased.
pub fn role_label(token: &str) -> String {
    ROLE_LABELS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(token))
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| title_case(token))
}

fn is_institution(name_type: Option<&str>, role_tokens: &[String]) -> bool {
    if let Some(name_type) = name_type.map(str::trim) {
        if name_type.eq_ignore_ascii_case("organizational") {
            return true;
        }
        if name_type.eq_ignore_ascii_case("personal") {
            return false;
        }
    }
    !role_tokens.is_empty()
        && role_tokens.iter().all(|token| {
            INSTITUTION_ROLES
                .iter()
                .any(|role| role.eq_ignore_ascii_case(token))
        })
}

fn lab_identifier(contributor: &ParsedElement) -> Option<String> {
    contributor
        .children_named("nameIdentifier")
        .find(|id| {
            id.attr("nameIdentifierScheme")
                .is_some_and(|scheme| scheme.trim().eq_ignore_ascii_case("labid"))
        })
        .map(|id| id.text_trim().to_string())
        .filter(|id| !id.is_empty())
}

/// One record per `contributor` element, in document order, before
/// aggregation. Hosting institutions carrying a `labid` identifier are
/// diverted to the laboratory list instead.
pub fn extract_contributors(lookup: &RorLookup, tree: &ParsedElement) -> ExtractedContributors {
    let mut extracted = ExtractedContributors::default();
    let Some(contributors) = tree.child("contributors") else {
        return extracted;
    };

    for contributor in contributors.children_named("contributor") {
        let Some(name_node) = contributor.child("contributorName") else {
            continue;
        };
        let raw_name = name_node.text_trim();
        let contributor_type = contributor.attr("contributorType").unwrap_or_default();

        if contributor_type.trim().eq_ignore_ascii_case("HostingInstitution")
            && let Some(lab_id) = lab_identifier(contributor)
        {
            extracted.laboratories.push(LabReference {
                lab_id,
                fallback_name: raw_name.to_string(),
            });
            continue;
        }

        let role_tokens = split_roles(contributor_type);
        let mut roles = Vec::new();
        for token in &role_tokens {
            let label = role_label(token);
            if !roles.contains(&label) {
                roles.push(label);
            }
        }
        let affiliations = extract_affiliations(lookup, contributor);

        if is_institution(name_node.attr("nameType"), &role_tokens) {
            if raw_name.is_empty() {
                continue;
            }
            extracted
                .contributors
                .push(Contributor::Institution(InstitutionContributor {
                    institution_name: raw_name.to_string(),
                    affiliations,
                    roles,
                }));
            continue;
        }

        let given = contributor
            .child("givenName")
            .map(|n| n.text_trim().to_string())
            .filter(|s| !s.is_empty());
        let family = contributor
            .child("familyName")
            .map(|n| n.text_trim().to_string())
            .filter(|s| !s.is_empty());
        let (last_name, first_name) = match (family, given) {
            (Some(family), Some(given)) => (family, given),
            _ => split_name(raw_name),
        };
        if last_name.is_empty() && first_name.is_empty() {
            continue;
        }

        extracted.contributors.push(Contributor::Person(PersonContributor {
            orcid: extract_orcid(contributor),
            first_name,
            last_name,
            affiliations,
            roles,
        }));
    }

    extracted
}
