pub mod config;
pub mod error;
pub mod models;

pub use config::{AppConfig, VocabularyConfig};
pub use error::{Result, StrataError};
pub use models::*;
