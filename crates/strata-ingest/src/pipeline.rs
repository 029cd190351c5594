//! The ingestion orchestrator: one DataCite export in, one normalized
//! record out.

use std::path::PathBuf;

use strata_core::config::AppConfig;
use strata_core::models::NormalizedRecord;

use crate::aggregate::ContributorSet;
use crate::error::Result;
use crate::extract::{
    extract_authors, extract_contributors, extract_coverages, extract_dates,
    extract_descriptions, extract_funding_references, extract_titles,
};
use crate::keywords::{extract_free_keywords, extract_gcmd_keywords};
use crate::laboratories::enrich_laboratories;
use crate::vocab::{LabLookup, ResourceTypeLookup, RorLookup};
use crate::xml::{ParsedElement, parse_document};

/// Holds the lazily loaded vocabulary caches. The caches are read-only
/// after their first use, so one ingestor can serve concurrent callers.
pub struct Ingestor {
    ror: RorLookup,
    laboratories: LabLookup,
    resource_types: ResourceTypeLookup,
}

impl Ingestor {
    pub fn new(
        ror_file: Option<PathBuf>,
        laboratories_file: Option<PathBuf>,
        resource_types_file: Option<PathBuf>,
    ) -> Self {
        Self {
            ror: RorLookup::new(ror_file),
            laboratories: LabLookup::new(laboratories_file),
            resource_types: ResourceTypeLookup::new(resource_types_file),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Some(PathBuf::from(&config.vocab.ror_affiliations_file)),
            Some(PathBuf::from(&config.vocab.msl_laboratories_file)),
            Some(PathBuf::from(&config.vocab.resource_types_file)),
        )
    }

    /// Normalize one DataCite export. The only hard failure is a byte
    /// stream that is not well-formed XML; every per-element defect is
    /// handled by omitting the entry.
    pub fn ingest(&self, xml: &[u8]) -> Result<NormalizedRecord> {
        let tree = parse_document(xml)?;

        let dates = extract_dates(&tree);
        let coverages = extract_coverages(&tree, &dates);

        let extracted = extract_contributors(&self.ror, &tree);
        let mut contributors = ContributorSet::new();
        for contributor in extracted.contributors {
            contributors.push(contributor);
        }
        let msl_laboratories = enrich_laboratories(&self.laboratories, &extracted.laboratories);

        Ok(NormalizedRecord {
            doi: extract_doi(&tree),
            year: extract_year(&tree),
            version: element_text(&tree, "version"),
            language: element_text(&tree, "language"),
            resource_type: self.resolve_resource_type(&tree),
            titles: extract_titles(&tree),
            licenses: extract_licenses(&tree),
            authors: extract_authors(&self.ror, &tree),
            contributors: contributors.into_vec(),
            msl_laboratories,
            descriptions: extract_descriptions(&tree),
            dates,
            coverages,
            gcmd_keywords: extract_gcmd_keywords(&tree),
            free_keywords: extract_free_keywords(&tree),
            funding_references: extract_funding_references(&tree),
        })
    }

    fn resolve_resource_type(&self, tree: &ParsedElement) -> Option<u32> {
        let name = tree.child("resourceType")?.text_trim();
        if name.is_empty() {
            return None;
        }
        self.resource_types.id_for(name)
    }
}

fn extract_doi(tree: &ParsedElement) -> Option<String> {
    tree.children_named("identifier")
        .find(|id| {
            id.attr("identifierType")
                .is_some_and(|t| t.trim().eq_ignore_ascii_case("doi"))
        })
        .map(|id| id.text_trim().to_string())
        .filter(|doi| !doi.is_empty())
}

fn extract_year(tree: &ParsedElement) -> Option<i32> {
    tree.child("publicationYear")?.text_trim().parse().ok()
}

fn element_text(tree: &ParsedElement, name: &str) -> Option<String> {
    tree.child(name)
        .map(|node| node.text_trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Rights identifiers from `rightsList`, de-duplicated case-insensitively
/// in document order. Rights entries without an identifier have no slot in
/// the record and are skipped.
fn extract_licenses(tree: &ParsedElement) -> Vec<String> {
    let Some(rights_list) = tree.child("rightsList") else {
        return Vec::new();
    };

    let mut licenses = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for rights in rights_list.children_named("rights") {
        let Some(identifier) = rights
            .attr("rightsIdentifier")
            .map(str::trim)
            .filter(|id| !id.is_empty())
        else {
            continue;
        };
        if seen.insert(identifier.to_lowercase()) {
            licenses.push(identifier.to_string());
        }
    }
    licenses
}
