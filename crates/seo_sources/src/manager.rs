use std::sync::Arc;

use seo_core::{EnhancedResearchData, ResearchConfig, ResearchQuery, Result, SerpData, SourceFetcher};
use seo_jina::JinaResearchService;
use tracing::{error, info};

use crate::analysis;
use crate::sources::{PubMedFetcher, RedditFetcher, SerpFetcher, WikipediaFetcher};

type ListFetcher = Arc<dyn SourceFetcher<Output = Vec<String>>>;
type SerpSource = Arc<dyn SourceFetcher<Output = SerpData>>;

/// Fans a keyword out to every research source and merges what comes back.
#[derive(Clone)]
pub struct ResearchAggregator {
    serp: SerpSource,
    wikipedia: ListFetcher,
    reddit: ListFetcher,
    pubmed: ListFetcher,
    jina: JinaResearchService,
}

impl ResearchAggregator {
    pub fn new(config: &ResearchConfig) -> Result<Self> {
        let client = config.http_client()?;
        let endpoints = &config.endpoints;
        Ok(Self {
            serp: Arc::new(SerpFetcher::with_client(client.clone(), &endpoints.serp)),
            wikipedia: Arc::new(WikipediaFetcher::with_client(client.clone(), &endpoints.wikipedia)),
            reddit: Arc::new(RedditFetcher::with_client(client.clone(), &endpoints.reddit)),
            pubmed: Arc::new(PubMedFetcher::with_client(client.clone(), &endpoints.pubmed)),
            jina: JinaResearchService::with_client(seo_jina::JinaClient::with_client(client, endpoints)),
        })
    }

    pub fn with_serp(mut self, serp: SerpSource) -> Self {
        self.serp = serp;
        self
    }

    pub fn with_wikipedia(mut self, wikipedia: ListFetcher) -> Self {
        self.wikipedia = wikipedia;
        self
    }

    pub fn with_reddit(mut self, reddit: ListFetcher) -> Self {
        self.reddit = reddit;
        self
    }

    pub fn with_pubmed(mut self, pubmed: ListFetcher) -> Self {
        self.pubmed = pubmed;
        self
    }

    pub fn with_jina(mut self, jina: JinaResearchService) -> Self {
        self.jina = jina;
        self
    }

    /// Researches `keyword` across every source. Always resolves.
    ///
    /// The pipeline runs on its own task; if it panics the caller gets a
    /// record synthesised from the keyword alone.
    pub async fn perform_enhanced_research(&self, keyword: &str, credential: Option<&str>) -> EnhancedResearchData {
        let query = ResearchQuery::new(keyword).with_credential(credential.map(str::to_string));
        let aggregator = self.clone();

        match tokio::spawn(async move { aggregator.research(&query).await }).await {
            Ok(data) => data,
            Err(e) => {
                error!("💥 Research pipeline for '{}' aborted: {}", keyword, e);
                analysis::fallback(keyword)
            }
        }
    }

    pub async fn research(&self, query: &ResearchQuery) -> EnhancedResearchData {
        let keyword = query.keyword.as_str();
        info!("🔍 Researching '{}'", keyword);

        // SERP runs once; its URLs seed the Jina extraction.
        let serp_then_jina = async {
            let serp_data = self.serp.fetch(keyword).await;
            let jina_data = self
                .jina
                .perform_comprehensive_research(keyword, &serp_data.urls(), query.credential())
                .await;
            (serp_data, jina_data)
        };

        let ((serp_data, jina_research_data), wikipedia_data, reddit_insights, recent_studies) = tokio::join!(
            serp_then_jina,
            self.wikipedia.fetch(keyword),
            self.reddit.fetch(keyword),
            self.pubmed.fetch(keyword),
        );

        let merged = EnhancedResearchData {
            serp_data,
            wikipedia_data,
            reddit_insights,
            recent_studies,
            jina_research_data,
            ..EnhancedResearchData::empty(keyword)
        };
        let data = analysis::derive(merged);

        info!(
            "✨ Research for '{}' complete: {} of 5 sources returned data, {} gaps, {} questions, {} statistics",
            keyword,
            data.source_count(),
            data.competitor_gaps.len(),
            data.trending_questions.len(),
            data.statistical_data.len()
        );
        data
    }
}
