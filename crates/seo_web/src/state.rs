use seo_sources::ResearchAggregator;
use seo_writer::{GapFiller, SemanticKeywordGenerator};

pub struct AppState {
    pub aggregator: ResearchAggregator,
    pub keywords: SemanticKeywordGenerator,
    pub gap_filler: GapFiller,
}

impl AppState {
    pub fn new(aggregator: ResearchAggregator) -> Self {
        Self {
            aggregator,
            keywords: SemanticKeywordGenerator::new(),
            gap_filler: GapFiller::new(),
        }
    }
}
