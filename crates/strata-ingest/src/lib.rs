//! Strata ingest — DataCite XML parsing, identifier canonicalization,
//! contributor deduplication and metadata normalization.

pub mod affiliations;
pub mod aggregate;
pub mod error;
pub mod extract;
pub mod identifiers;
pub mod keywords;
pub mod laboratories;
pub mod pipeline;
pub mod text;
pub mod vocab;
pub mod xml;

pub use error::{IngestError, Result};
pub use pipeline::Ingestor;
