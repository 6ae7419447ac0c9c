use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use seo_core::text::{capitalize, sentences};
use seo_core::{Error, ResearchConfig, Result, SourceFetcher};

use super::utils;
use crate::logging::Logger;

const MAX_ENTRIES: usize = 3;

#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    extract: String,
}

/// Page summary from the Wikipedia REST API, falling back to OpenSearch.
#[derive(Debug, Clone)]
pub struct WikipediaFetcher {
    client: Client,
    base_url: String,
    logger: Logger,
}

impl WikipediaFetcher {
    pub fn new(config: &ResearchConfig) -> Result<Self> {
        Ok(Self::with_client(config.http_client()?, &config.endpoints.wikipedia))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            logger: Logger::new().with_prefix("📚 wikipedia"),
        }
    }

    fn summary_url(&self, keyword: &str) -> Result<url::Url> {
        let title = capitalize(keyword.trim()).replace(' ', "_");
        let mut url = utils::parse_url(&format!("{}/api/rest_v1/page/summary/", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(&title);
        Ok(url)
    }

    async fn search_descriptions(&self, keyword: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .get(format!("{}/w/api.php", self.base_url))
            .query(&[
                ("action", "opensearch"),
                ("search", keyword),
                ("limit", "3"),
                ("namespace", "0"),
                ("format", "json"),
            ])
            .send()
            .await?;
        let body: serde_json::Value = utils::ensure_success("wikipedia opensearch", response)?
            .json()
            .await?;
        Ok(parse_opensearch(&body))
    }
}

#[async_trait]
impl SourceFetcher for WikipediaFetcher {
    type Output = Vec<String>;

    fn name(&self) -> &str {
        "wikipedia"
    }

    async fn try_fetch(&self, keyword: &str) -> Result<Vec<String>> {
        let response = self.client.get(self.summary_url(keyword)?).send().await?;

        if !response.status().is_success() {
            self.logger.info(&format!(
                "no summary page for '{}' (HTTP {}), trying opensearch",
                keyword,
                response.status().as_u16()
            ));
            return self.search_descriptions(keyword).await;
        }

        let summary: PageSummary = response.json().await?;
        let entries = summary_entries(summary);
        self.logger.info(&format!("{} summary entries for '{}'", entries.len(), keyword));
        Ok(entries)
    }
}

fn summary_entries(summary: PageSummary) -> Vec<String> {
    summary
        .description
        .filter(|d| !d.trim().is_empty())
        .into_iter()
        .chain(sentences(&summary.extract))
        .take(MAX_ENTRIES)
        .collect()
}

/// OpenSearch answers `[query, [titles], [descriptions], [urls]]`.
fn parse_opensearch(body: &serde_json::Value) -> Vec<String> {
    let strings_at = |index: usize| -> Vec<String> {
        body.get(index)
            .and_then(|v| v.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str())
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .take(MAX_ENTRIES)
                    .collect()
            })
            .unwrap_or_default()
    };

    let descriptions = strings_at(2);
    if !descriptions.is_empty() {
        return descriptions;
    }
    strings_at(1)
        .into_iter()
        .map(|title| format!("Wikipedia article: {}", title))
        .collect()
}
