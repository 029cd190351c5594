use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// The only fatal pipeline failure: the byte stream is not well-formed
    /// XML. Everything below the document level is recoverable.
    #[error("malformed XML: {0}")]
    MalformedXml(String),

    #[error("invalid ORCID: {0}")]
    InvalidOrcid(String),

    #[error("invalid ROR id: {0}")]
    InvalidRor(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;
