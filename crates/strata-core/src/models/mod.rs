pub mod contributor;
pub mod record;

pub use contributor::{
    Affiliation, Author, Contributor, InstitutionAuthor, InstitutionContributor, MslLaboratory,
    PersonAuthor, PersonContributor,
};
pub use record::{
    CoverageEntry, DateEntry, Description, FundingReference, GcmdKeyword, NormalizedRecord, Title,
};
