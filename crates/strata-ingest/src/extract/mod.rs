//! Per-element-family extractors. Each walks one fixed location in the
//! document tree and collects the entries it can make sense of, dropping
//! defective ones — a per-entry defect never fails the ingest.

pub mod authors;
pub mod contributors;
pub mod coverages;
pub mod dates;
pub mod descriptions;
pub mod funding;
pub mod names;
pub mod titles;

pub use authors::extract_authors;
pub use contributors::{ExtractedContributors, extract_contributors};
pub use coverages::extract_coverages;
pub use dates::extract_dates;
pub use descriptions::extract_descriptions;
pub use funding::extract_funding_references;
pub use titles::extract_titles;
