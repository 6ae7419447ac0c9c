use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use seo_core::text::excerpt;
use seo_core::{ResearchConfig, Result, SourceFetcher};

use super::utils;
use crate::logging::Logger;

/// Posts with less self text than this carry no usable insight.
pub const MIN_SELFTEXT_CHARS: usize = 50;
const MAX_INSIGHTS: usize = 5;
const EXCERPT_CHARS: usize = 200;

#[derive(Debug, Default, Deserialize)]
struct Listing {
    #[serde(default)]
    data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    #[serde(default)]
    data: Post,
}

#[derive(Debug, Default, Deserialize)]
struct Post {
    #[serde(default)]
    title: String,
    #[serde(default)]
    selftext: String,
    #[serde(default)]
    subreddit: String,
}

/// Discussion snippets from Reddit's public search listing.
#[derive(Debug, Clone)]
pub struct RedditFetcher {
    client: Client,
    base_url: String,
    logger: Logger,
}

impl RedditFetcher {
    pub fn new(config: &ResearchConfig) -> Result<Self> {
        Ok(Self::with_client(config.http_client()?, &config.endpoints.reddit))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            logger: Logger::new().with_prefix("💬 reddit"),
        }
    }
}

#[async_trait]
impl SourceFetcher for RedditFetcher {
    type Output = Vec<String>;

    fn name(&self) -> &str {
        "reddit"
    }

    async fn try_fetch(&self, keyword: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .get(format!("{}/search.json", self.base_url))
            .query(&[("q", keyword), ("sort", "relevance"), ("limit", "10")])
            .send()
            .await?;
        let listing: Listing = utils::ensure_success("reddit", response)?.json().await?;

        let insights = insights_from(listing);
        self.logger.info(&format!("{} discussion insights for '{}'", insights.len(), keyword));
        Ok(insights)
    }
}

fn insights_from(listing: Listing) -> Vec<String> {
    listing
        .data
        .children
        .into_iter()
        .map(|child| child.data)
        .filter(|post| post.selftext.trim().chars().count() >= MIN_SELFTEXT_CHARS)
        .take(MAX_INSIGHTS)
        .map(|post| {
            let body = excerpt(&utils::collapse_whitespace(&post.selftext), EXCERPT_CHARS);
            if post.subreddit.is_empty() {
                format!("{}: {}", post.title.trim(), body)
            } else {
                format!("{}: {} (r/{})", post.title.trim(), body, post.subreddit)
            }
        })
        .collect()
}
