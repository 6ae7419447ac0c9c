use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use seo_core::{ResearchConfig, Result, SourceFetcher};

use super::utils;
use crate::logging::Logger;

const MAX_STUDIES: usize = 5;

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    esearchresult: SearchResult,
}

#[derive(Debug, Default, Deserialize)]
struct SearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

/// Most recent matching studies from the PubMed ESearch API.
#[derive(Debug, Clone)]
pub struct PubMedFetcher {
    client: Client,
    base_url: String,
    logger: Logger,
}

impl PubMedFetcher {
    pub fn new(config: &ResearchConfig) -> Result<Self> {
        Ok(Self::with_client(config.http_client()?, &config.endpoints.pubmed))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            logger: Logger::new().with_prefix("🧪 pubmed"),
        }
    }
}

#[async_trait]
impl SourceFetcher for PubMedFetcher {
    type Output = Vec<String>;

    fn name(&self) -> &str {
        "pubmed"
    }

    async fn try_fetch(&self, keyword: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .get(format!("{}/entrez/eutils/esearch.fcgi", self.base_url))
            .query(&[
                ("db", "pubmed"),
                ("term", keyword),
                ("retmode", "json"),
                ("retmax", "5"),
                ("sort", "date"),
            ])
            .send()
            .await?;
        let body: SearchResponse = utils::ensure_success("pubmed", response)?.json().await?;

        let studies: Vec<String> = body
            .esearchresult
            .idlist
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()))
            .take(MAX_STUDIES)
            .map(study_reference)
            .collect();
        self.logger.info(&format!("{} recent studies for '{}'", studies.len(), keyword));
        Ok(studies)
    }
}

fn study_reference(pmid: &str) -> String {
    format!("PubMed study PMID {}: https://pubmed.ncbi.nlm.nih.gov/{}/", pmid, pmid)
}
