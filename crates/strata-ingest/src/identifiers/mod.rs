pub mod orcid;
pub mod ror;

pub use orcid::Orcid;
pub use ror::RorId;
