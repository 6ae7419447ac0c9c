pub mod analysis;
pub mod cli;
pub mod logging;
pub mod manager;
pub mod sources;

pub use manager::ResearchAggregator;

pub use cli::{handle_command, ResearchArgs, ResearchCommands};
pub use sources::{PubMedFetcher, RedditFetcher, SerpFetcher, WikipediaFetcher};

pub mod prelude {
    pub use super::manager::ResearchAggregator;
    pub use seo_core::{EnhancedResearchData, Error, ResearchConfig, Result, SourceFetcher};
}
