//! File-backed vocabulary lookups.
//!
//! Each lookup owns its source path and a map populated on first access,
//! then cached for the lifetime of the ingestor. A missing or corrupt file
//! degrades to an empty table — affected fields fall back to raw values,
//! the ingest itself never fails.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::identifiers::RorId;

#[derive(Debug, Error)]
enum VocabLoadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

// ─── ROR affiliations ──────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RorAffiliationEntry {
    #[serde(rename = "prefLabel")]
    pref_label: String,
    #[serde(rename = "rorId")]
    ror_id: String,
}

/// Canonical `https://ror.org/<id>` → preferred organization label.
#[derive(Debug, Default)]
pub struct RorLookup {
    path: Option<PathBuf>,
    cache: OnceCell<HashMap<String, String>>,
}

impl RorLookup {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            cache: OnceCell::new(),
        }
    }

    /// Authoritative label for a canonical ROR id, if the registry knows it.
    pub fn label(&self, canonical_ror: &str) -> Option<&str> {
        self.map().get(canonical_ror).map(String::as_str)
    }

    fn map(&self) -> &HashMap<String, String> {
        self.cache.get_or_init(|| match &self.path {
            Some(path) => load_ror_file(path).unwrap_or_else(|err| {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "ROR affiliation vocabulary unavailable, affiliations fall back to raw labels"
                );
                HashMap::new()
            }),
            None => HashMap::new(),
        })
    }
}

fn load_ror_file(path: &Path) -> std::result::Result<HashMap<String, String>, VocabLoadError> {
    let reader = BufReader::new(File::open(path)?);
    let entries: Vec<RorAffiliationEntry> = serde_json::from_reader(reader)?;

    let mut map = HashMap::with_capacity(entries.len());
    for entry in entries {
        if let Ok(ror) = RorId::parse(&entry.ror_id) {
            map.insert(ror.url, entry.pref_label);
        }
    }
    Ok(map)
}

// ─── MSL laboratories ──────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct LabVocabEntry {
    pub lab_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub affiliation_name: Option<String>,
    #[serde(default)]
    pub affiliation_ror: Option<String>,
}

/// Laboratory id → MSL vocabulary entry.
#[derive(Debug, Default)]
pub struct LabLookup {
    path: Option<PathBuf>,
    cache: OnceCell<HashMap<String, LabVocabEntry>>,
}

impl LabLookup {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            cache: OnceCell::new(),
        }
    }

    pub fn entry(&self, lab_id: &str) -> Option<&LabVocabEntry> {
        self.map().get(lab_id.trim())
    }

    fn map(&self) -> &HashMap<String, LabVocabEntry> {
        self.cache.get_or_init(|| match &self.path {
            Some(path) => load_lab_file(path).unwrap_or_else(|err| {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "MSL laboratory vocabulary unavailable, laboratory enrichment disabled"
                );
                HashMap::new()
            }),
            None => HashMap::new(),
        })
    }
}

fn load_lab_file(path: &Path) -> std::result::Result<HashMap<String, LabVocabEntry>, VocabLoadError> {
    let reader = BufReader::new(File::open(path)?);
    let entries: Vec<LabVocabEntry> = serde_json::from_reader(reader)?;

    Ok(entries
        .into_iter()
        .map(|entry| (entry.lab_id.trim().to_string(), entry))
        .collect())
}

// ─── Resource types ────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ResourceTypeEntry {
    id: u32,
    name: String,
}

/// Resource-type name → internal identifier, matched case-insensitively.
#[derive(Debug, Default)]
pub struct ResourceTypeLookup {
    path: Option<PathBuf>,
    cache: OnceCell<HashMap<String, u32>>,
}

impl ResourceTypeLookup {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path,
            cache: OnceCell::new(),
        }
    }

    pub fn id_for(&self, name: &str) -> Option<u32> {
        self.map().get(&name.trim().to_lowercase()).copied()
    }

    fn map(&self) -> &HashMap<String, u32> {
        self.cache.get_or_init(|| match &self.path {
            Some(path) => load_resource_type_file(path).unwrap_or_else(|err| {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "resource-type vocabulary unavailable, resource types resolve to null"
                );
                HashMap::new()
            }),
            None => HashMap::new(),
        })
    }
}

fn load_resource_type_file(path: &Path) -> std::result::Result<HashMap<String, u32>, VocabLoadError> {
    let reader = BufReader::new(File::open(path)?);
    let entries: Vec<ResourceTypeEntry> = serde_json::from_reader(reader)?;

    Ok(entries
        .into_iter()
        .map(|entry| (entry.name.trim().to_lowercase(), entry.id))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_json(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn ror_lookup_keys_by_canonical_url() {
        let file = write_json(
            r#"[
                {"prefLabel": "GFZ German Research Centre for Geosciences", "rorId": "04z8jg394"},
                {"prefLabel": "Utrecht University", "rorId": "https://ror.org/04pp8hn57"}
            ]"#,
        );
        let lookup = RorLookup::new(Some(file.path().to_path_buf()));
        assert_eq!(
            lookup.label("https://ror.org/04z8jg394"),
            Some("GFZ German Research Centre for Geosciences")
        );
        assert_eq!(
            lookup.label("https://ror.org/04pp8hn57"),
            Some("Utrecht University")
        );
        assert_eq!(lookup.label("https://ror.org/unknown1"), None);
    }

    #[test]
    fn missing_file_degrades_to_empty_lookup() {
        let lookup = RorLookup::new(Some(PathBuf::from("/nonexistent/ror.json")));
        assert_eq!(lookup.label("https://ror.org/04z8jg394"), None);
    }

    #[test]
    fn corrupt_file_degrades_to_empty_lookup() {
        let file = write_json("not json at all");
        let lookup = RorLookup::new(Some(file.path().to_path_buf()));
        assert_eq!(lookup.label("https://ror.org/04z8jg394"), None);
    }

    #[test]
    fn lab_lookup_trims_ids() {
        let file = write_json(
            r#"[
                {"lab_id": "lab-001", "name": "Rock Physics Lab",
                 "affiliation_name": "Utrecht University",
                 "affiliation_ror": "https://ror.org/04pp8hn57"}
            ]"#,
        );
        let lookup = LabLookup::new(Some(file.path().to_path_buf()));
        let entry = lookup.entry("  lab-001 ").unwrap();
        assert_eq!(entry.name, "Rock Physics Lab");
        assert_eq!(entry.affiliation_name.as_deref(), Some("Utrecht University"));
    }

    #[test]
    fn resource_type_match_is_case_insensitive_and_exact() {
        let file = write_json(r#"[{"id": 1, "name": "Dataset"}, {"id": 7, "name": "Physical Object"}]"#);
        let lookup = ResourceTypeLookup::new(Some(file.path().to_path_buf()));
        assert_eq!(lookup.id_for("dataset"), Some(1));
        assert_eq!(lookup.id_for(" PHYSICAL OBJECT "), Some(7));
        assert_eq!(lookup.id_for("Physical"), None);
    }

    #[test]
    fn absent_path_yields_empty_lookup() {
        let lookup = ResourceTypeLookup::new(None);
        assert_eq!(lookup.id_for("Dataset"), None);
    }
}
