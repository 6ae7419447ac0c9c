pub mod client;
pub mod insights;
pub mod service;

pub use client::JinaClient;
pub use service::JinaResearchService;

/// Most seed URLs handed to the reader endpoint per run
pub const MAX_SEED_URLS: usize = 5;

pub mod prelude {
    pub use super::client::JinaClient;
    pub use super::service::JinaResearchService;
    pub use seo_core::{FactualValidation, JinaContent, JinaResearchData, Result, Error};
}
