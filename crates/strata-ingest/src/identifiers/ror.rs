use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

static ROR_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)ror\.org/(.+)$").expect("valid regex"));

/// A canonicalized ROR id. `url` is the `https://ror.org/<id>` form with a
/// lowercased id — the key used by the affiliation lookup table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RorId {
    pub raw: String,
    pub id: String,
    pub url: String,
}

impl RorId {
    /// Accepts a bare ROR id or any URL whose path goes through `ror.org`,
    /// regardless of scheme, host casing or trailing slashes.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        let segment = if trimmed.to_lowercase().contains("ror.org") {
            ROR_PATH_RE
                .captures(trimmed)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
                .unwrap_or_default()
        } else {
            trimmed
        };

        let id = segment
            .trim_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        if id.is_empty() {
            return Err(IngestError::InvalidRor(input.to_string()));
        }

        let url = format!("https://ror.org/{id}");
        Ok(Self {
            raw: input.to_string(),
            id,
            url,
        })
    }
}
