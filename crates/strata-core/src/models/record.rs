use serde::{Deserialize, Serialize};

use super::contributor::{Author, Contributor, MslLaboratory};

/// The normalized output of one DataCite ingestion pass. Handed to the
/// surrounding application for persistence and display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub doi: Option<String>,
    pub year: Option<i32>,
    pub version: Option<String>,
    pub language: Option<String>,
    pub resource_type: Option<u32>,
    pub titles: Vec<Title>,
    pub licenses: Vec<String>,
    pub authors: Vec<Author>,
    pub contributors: Vec<Contributor>,
    pub msl_laboratories: Vec<MslLaboratory>,
    pub descriptions: Vec<Description>,
    pub dates: Vec<DateEntry>,
    pub coverages: Vec<CoverageEntry>,
    pub gcmd_keywords: Vec<GcmdKeyword>,
    pub free_keywords: Vec<String>,
    pub funding_references: Vec<FundingReference>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub value: String,
    /// Kebab-case slug, e.g. `main-title`, `alternative-title`.
    pub title_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Description {
    pub description_type: String,
    pub value: String,
}

/// A date or date range. Open ranges leave one side empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DateEntry {
    pub date_type: String,
    pub start: String,
    pub end: String,
}

/// Spatial and/or temporal extent. Coordinates are pre-formatted strings
/// with exactly six decimal places.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CoverageEntry {
    pub lat_min: Option<String>,
    pub lat_max: Option<String>,
    pub lon_min: Option<String>,
    pub lon_max: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub timezone: String,
    pub description: String,
}

/// A GCMD controlled keyword. `path` is the hierarchy below the scheme's
/// root label.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GcmdKeyword {
    pub uuid: String,
    pub concept_uri: String,
    pub path: Vec<String>,
    pub scheme: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FundingReference {
    pub funder_name: String,
    pub funder_identifier: Option<String>,
    pub funder_identifier_type: Option<String>,
    pub award_number: Option<String>,
    pub award_uri: Option<String>,
    pub award_title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_camel_case_field_names() {
        let record = NormalizedRecord {
            doi: Some("10.5880/test.2024.001".to_string()),
            resource_type: Some(3),
            gcmd_keywords: vec![GcmdKeyword::default()],
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["doi"], "10.5880/test.2024.001");
        assert_eq!(json["resourceType"], 3);
        assert!(json["gcmdKeywords"].is_array());
        assert!(json["freeKeywords"].is_array());
        assert!(json["mslLaboratories"].is_array());
        assert!(json["fundingReferences"].is_array());
    }

    #[test]
    fn coverage_round_trips_through_json() {
        let entry = CoverageEntry {
            lat_min: Some("52.100000".to_string()),
            lon_min: Some("13.400000".to_string()),
            start_date: "2020-01-01".to_string(),
            end_date: "2020-12-31".to_string(),
            timezone: "UTC".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: CoverageEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
