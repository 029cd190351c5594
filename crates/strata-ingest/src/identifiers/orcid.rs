use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

static ORCID_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://(?:www\.)?orcid\.org/(.+)$").expect("valid regex"));

/// A canonicalized ORCID. The canonical form is the bare identifier with no
/// URL prefix, uppercased — the same form is used for storage and for
/// aggregation keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Orcid {
    pub raw: String,
    pub id: String,
}

impl Orcid {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        let lower = trimmed.to_lowercase();
        let segment = if lower.starts_with("http") && lower.contains("orcid.org") {
            ORCID_URL_RE
                .captures(trimmed)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
                .unwrap_or_default()
        } else {
            trimmed
        };

        let id = segment.trim_matches('/').trim();
        if id.is_empty() {
            return Err(IngestError::InvalidOrcid(input.to_string()));
        }

        Ok(Self {
            raw: input.to_string(),
            id: id.to_uppercase(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_id() {
        let orcid = Orcid::parse("0000-0002-1825-0097").unwrap();
        assert_eq!(orcid.id, "0000-0002-1825-0097");
    }

    #[test]
    fn url_form_is_stripped() {
        let orcid = Orcid::parse("https://orcid.org/0000-0002-1825-0097").unwrap();
        assert_eq!(orcid.id, "0000-0002-1825-0097");
    }

    #[test]
    fn http_and_host_case_accepted() {
        let orcid = Orcid::parse("http://ORCID.org/0000-0002-1825-0097/").unwrap();
        assert_eq!(orcid.id, "0000-0002-1825-0097");
    }

    #[test]
    fn checksum_letter_is_uppercased() {
        let orcid = Orcid::parse("0000-0002-1694-233x").unwrap();
        assert_eq!(orcid.id, "0000-0002-1694-233X");
    }

    #[test]
    fn surrounding_slashes_are_trimmed() {
        let orcid = Orcid::parse("/0000-0002-1825-0097/").unwrap();
        assert_eq!(orcid.id, "0000-0002-1825-0097");
    }

    #[test]
    fn canonicalization_is_idempotent() {
        let inputs = [
            "0000-0002-1825-0097",
            "https://orcid.org/0000-0002-1825-0097",
            "  0000-0002-1694-233x ",
        ];
        for input in inputs {
            let once = Orcid::parse(input).unwrap();
            let twice = Orcid::parse(&once.id).unwrap();
            assert_eq!(once.id, twice.id);
        }
    }

    #[test]
    fn reject_empty() {
        assert!(Orcid::parse("").is_err());
        assert!(Orcid::parse("  / ").is_err());
        assert!(Orcid::parse("https://orcid.org/").is_err());
    }
}
