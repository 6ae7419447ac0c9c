pub mod config;
pub mod error;
pub mod fetcher;
pub mod stats;
pub mod text;
pub mod types;

pub use config::{Endpoints, ResearchConfig};
pub use error::Error;
pub use fetcher::{SourceFetcher, SourceResult};
pub use types::*;

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use super::fetcher::{SourceFetcher, SourceResult};
    pub use super::types::{EnhancedResearchData, JinaResearchData, ResearchQuery, SerpData};
    pub use super::{Error, Result};
}
