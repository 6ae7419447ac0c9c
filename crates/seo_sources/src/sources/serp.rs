use async_trait::async_trait;
use reqwest::Client;
use scraper::Html;
use seo_core::stats::take_statistics;
use seo_core::{ResearchConfig, Result, SerpData, SerpResult, SourceFetcher};

use super::utils;
use crate::logging::Logger;

const MAX_RESULTS: usize = 5;
const MAX_STATISTICS: usize = 3;

/// Organic results from the DuckDuckGo HTML endpoint.
#[derive(Debug, Clone)]
pub struct SerpFetcher {
    client: Client,
    base_url: String,
    logger: Logger,
}

impl SerpFetcher {
    pub fn new(config: &ResearchConfig) -> Result<Self> {
        Ok(Self::with_client(config.http_client()?, &config.endpoints.serp))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            logger: Logger::new().with_prefix("🔎 serp"),
        }
    }
}

#[async_trait]
impl SourceFetcher for SerpFetcher {
    type Output = SerpData;

    fn name(&self) -> &str {
        "serp"
    }

    async fn try_fetch(&self, keyword: &str) -> Result<SerpData> {
        self.logger.debug(&format!("searching '{}'", keyword));
        let response = self
            .client
            .get(format!("{}/html/", self.base_url))
            .query(&[("q", keyword)])
            .send()
            .await?;
        let html = utils::ensure_success("serp", response)?.text().await?;

        let results = parse_results(&html)?;
        let statistics = results
            .iter()
            .flat_map(|r| take_statistics(&r.snippet, MAX_STATISTICS))
            .take(MAX_STATISTICS)
            .collect();
        self.logger.info(&format!("{} results for '{}'", results.len(), keyword));

        Ok(SerpData { results, statistics })
    }
}

pub(crate) fn parse_results(html: &str) -> Result<Vec<SerpResult>> {
    let document = Html::parse_document(html);
    let result_selector = utils::selector(".result")?;
    let link_selector = utils::selector("a.result__a")?;
    let snippet_selector = utils::selector(".result__snippet")?;

    let mut results = Vec::new();
    for element in document.select(&result_selector) {
        if element.value().classes().any(|c| c == "result--ad") {
            continue;
        }
        let Some(link) = element.select(&link_selector).next() else {
            continue;
        };
        let Some(url) = link.value().attr("href").and_then(resolve_link) else {
            continue;
        };
        let title = utils::collapse_whitespace(&link.text().collect::<String>());
        if title.is_empty() {
            continue;
        }
        let snippet = utils::extract_text(&element, &snippet_selector).unwrap_or_default();

        results.push(SerpResult { title, url, snippet });
        if results.len() == MAX_RESULTS {
            break;
        }
    }
    Ok(results)
}

/// Unwraps DuckDuckGo's `/l/?uddg=` redirect links to the target URL.
fn resolve_link(href: &str) -> Option<String> {
    let absolute = if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href.to_string()
    };
    let url = utils::parse_url(&absolute).ok()?;

    let is_redirect = url.host_str().map_or(false, |h| h.ends_with("duckduckgo.com")) && url.path().starts_with("/l/");
    if is_redirect {
        return url
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, target)| target.into_owned());
    }
    Some(url.to_string())
}
