use futures_util::future::join_all;
use seo_core::{FactualValidation, JinaContent, JinaResearchData, ResearchConfig, Result};
use tracing::{debug, info, warn};

use crate::client::JinaClient;
use crate::{insights, MAX_SEED_URLS};

/// Composite research over reader, search and grounding.
#[derive(Debug, Clone)]
pub struct JinaResearchService {
    client: JinaClient,
}

impl JinaResearchService {
    pub fn new(config: &ResearchConfig) -> Result<Self> {
        Ok(Self {
            client: JinaClient::new(config)?,
        })
    }

    pub fn with_client(client: JinaClient) -> Self {
        Self { client }
    }

    /// Runs extraction, search and grounding concurrently and merges them.
    ///
    /// Each sub-call settles on its own: a failure empties its slot and
    /// leaves the others untouched. Without a credential no request is made.
    pub async fn perform_comprehensive_research(
        &self,
        keyword: &str,
        seed_urls: &[String],
        credential: Option<&str>,
    ) -> JinaResearchData {
        let Some(credential) = credential.map(str::trim).filter(|c| !c.is_empty()) else {
            info!("🔑 No Jina API key configured, skipping enhanced research for '{}'", keyword);
            return insights::unavailable();
        };

        info!("🔬 Jina research for '{}' with {} seed URLs", keyword, seed_urls.len().min(MAX_SEED_URLS));
        let (extracted_content, semantic_results, factual_validation) = tokio::join!(
            self.extract_content(seed_urls, credential),
            self.semantic_search(keyword, credential),
            self.validate_facts(keyword, seed_urls, credential),
        );
        info!(
            "✨ Jina research for '{}': {} pages extracted, {} semantic results, factuality {:.2}",
            keyword,
            extracted_content.len(),
            semantic_results.len(),
            factual_validation.score
        );

        let content_gaps = insights::content_gaps(keyword, &extracted_content, &semantic_results);
        let structured_insights =
            insights::structured_insights(&extracted_content, &semantic_results, &factual_validation);

        JinaResearchData {
            extracted_content,
            semantic_results,
            factual_validation,
            content_gaps,
            structured_insights,
        }
    }

    async fn extract_content(&self, seed_urls: &[String], credential: &str) -> Vec<JinaContent> {
        let reads = seed_urls
            .iter()
            .take(MAX_SEED_URLS)
            .map(|url| async move { (url, self.client.read_url(url, credential).await) });

        join_all(reads)
            .await
            .into_iter()
            .filter_map(|(url, result)| match result {
                Ok(content) => {
                    debug!("📄 Extracted {} characters from {}", content.content.len(), url);
                    Some(content)
                }
                Err(e) => {
                    warn!("⚠️ Jina reader failed for {}: {}", url, e);
                    None
                }
            })
            .collect()
    }

    async fn semantic_search(&self, keyword: &str, credential: &str) -> Vec<JinaContent> {
        match self.client.search(keyword, credential).await {
            Ok(mut results) => {
                results.truncate(10);
                results
            }
            Err(e) => {
                warn!("⚠️ Jina search failed for '{}': {}", keyword, e);
                Vec::new()
            }
        }
    }

    async fn validate_facts(&self, keyword: &str, seed_urls: &[String], credential: &str) -> FactualValidation {
        let statement = grounding_statement(keyword);
        let sources: Vec<String> = seed_urls.iter().take(MAX_SEED_URLS).cloned().collect();
        match self.client.ground(&statement, &sources, credential).await {
            Ok(validation) => validation,
            Err(e) => {
                warn!("⚠️ Jina grounding failed for '{}': {}", keyword, e);
                FactualValidation::default()
            }
        }
    }
}

pub fn grounding_statement(keyword: &str) -> String {
    format!("{} is supported by current scientific research and expert consensus", keyword)
}
