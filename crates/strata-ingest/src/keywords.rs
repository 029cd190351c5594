//! GCMD controlled keywords and free-text keywords from `subject` elements.

use strata_core::models::GcmdKeyword;

use crate::text::collapse_ws;
use crate::xml::ParsedElement;

/// The GCMD schemes the platform understands, in canonical spelling.
const GCMD_SCHEMES: [&str; 3] = ["Science Keywords", "Platforms", "Instruments"];

const GCMD_CONCEPT_BASE: &str = "https://gcmd.earthdata.nasa.gov/kms/concept/";

/// Split a `>`-separated GCMD hierarchy, dropping the leading scheme label
/// if present: `"Science Keywords > EARTH SCIENCE > ATMOSPHERE"` →
/// `["EARTH SCIENCE", "ATMOSPHERE"]`.
pub fn parse_gcmd_path(text: &str) -> Vec<String> {
    let mut segments: Vec<String> = text
        .split('>')
        .map(collapse_ws)
        .filter(|segment| !segment.is_empty())
        .collect();

    if let Some(first) = segments.first()
        && GCMD_SCHEMES.iter().any(|scheme| scheme.eq_ignore_ascii_case(first))
    {
        segments.remove(0);
    }

    segments
}

fn canonical_scheme(subject_scheme: &str) -> Option<&'static str> {
    let folded = subject_scheme.to_lowercase();
    GCMD_SCHEMES
        .iter()
        .find(|scheme| folded.contains(&scheme.to_lowercase()))
        .copied()
}

/// Concept UUID from a `valueURI`: the last path segment. Entries whose URI
/// carries no usable segment are skipped by the caller.
fn uuid_from_value_uri(value_uri: &str) -> Option<String> {
    let trimmed = value_uri.trim().trim_end_matches('/');
    let candidate = trimmed.rsplit('/').next().unwrap_or_default().trim();
    if candidate.is_empty() || candidate.contains(':') {
        return None;
    }
    Some(candidate.to_lowercase())
}

/// Controlled keywords: `subject` elements whose `subjectScheme` matches one
/// of the GCMD schemes. Entries without a usable UUID are silently dropped.
pub fn extract_gcmd_keywords(tree: &ParsedElement) -> Vec<GcmdKeyword> {
    let Some(subjects) = tree.child("subjects") else {
        return Vec::new();
    };

    let mut keywords = Vec::new();
    for subject in subjects.children_named("subject") {
        let Some(scheme) = subject.attr("subjectScheme").and_then(canonical_scheme) else {
            continue;
        };
        let Some(uuid) = subject.attr("valueURI").and_then(uuid_from_value_uri) else {
            continue;
        };

        keywords.push(GcmdKeyword {
            concept_uri: format!("{GCMD_CONCEPT_BASE}{uuid}"),
            uuid,
            path: parse_gcmd_path(subject.text_trim()),
            scheme: scheme.to_string(),
        });
    }
    keywords
}

/// Free-text keywords: every `subject` not claimed by a GCMD scheme,
/// comma-split and de-duplicated case-insensitively in document order.
pub fn extract_free_keywords(tree: &ParsedElement) -> Vec<String> {
    let Some(subjects) = tree.child("subjects") else {
        return Vec::new();
    };

    let mut keywords = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for subject in subjects.children_named("subject") {
        if subject.attr("subjectScheme").and_then(canonical_scheme).is_some() {
            continue;
        }
        for part in subject.text_trim().split(',') {
            let keyword = collapse_ws(part);
            if keyword.is_empty() {
                continue;
            }
            if seen.insert(keyword.to_lowercase()) {
                keywords.push(keyword);
            }
        }
    }
    keywords
}
