//! Enrichment of `labid`-bearing hosting institutions against the MSL
//! laboratory vocabulary.

use strata_core::models::MslLaboratory;
use tracing::warn;

use crate::identifiers::RorId;
use crate::vocab::LabLookup;

/// A hosting institution diverted out of the contributor list because it
/// carries a `labid` name identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabReference {
    pub lab_id: String,
    /// The contributor name from the document, used when the vocabulary has
    /// no name for this laboratory.
    pub fallback_name: String,
}

/// Resolve laboratory references against the vocabulary. Repeated `labid`s
/// collapse to their first occurrence; a laboratory with no resolvable name
/// is dropped with a warning rather than surfaced as an error.
pub fn enrich_laboratories(lookup: &LabLookup, references: &[LabReference]) -> Vec<MslLaboratory> {
    let mut laboratories: Vec<MslLaboratory> = Vec::new();

    for reference in references {
        let lab_id = reference.lab_id.trim();
        if laboratories.iter().any(|lab| lab.lab_id == lab_id) {
            continue;
        }

        let entry = lookup.entry(lab_id);

        let name = entry
            .map(|e| e.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| reference.fallback_name.trim());
        if name.is_empty() {
            warn!(lab_id, "laboratory has no resolvable name, dropping");
            continue;
        }

        let affiliation_name = entry
            .and_then(|e| e.affiliation_name.as_deref())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(String::from);
        let affiliation_ror = entry
            .and_then(|e| e.affiliation_ror.as_deref())
            .and_then(|raw| RorId::parse(raw).ok())
            .map(|ror| ror.url);

        laboratories.push(MslLaboratory {
            lab_id: lab_id.to_string(),
            name: name.to_string(),
            affiliation_name,
            affiliation_ror,
        });
    }

    laboratories
}
