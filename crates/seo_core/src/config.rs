use std::time::Duration;

use reqwest::Client;

use crate::Result;

pub const DEFAULT_USER_AGENT: &str = "seo-research/0.1 (+https://github.com/seo-research/seo-research)";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Base URLs of every upstream service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub serp: String,
    pub wikipedia: String,
    pub reddit: String,
    pub pubmed: String,
    pub jina_reader: String,
    pub jina_search: String,
    pub jina_grounding: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            serp: "https://html.duckduckgo.com".to_string(),
            wikipedia: "https://en.wikipedia.org".to_string(),
            reddit: "https://www.reddit.com".to_string(),
            pubmed: "https://eutils.ncbi.nlm.nih.gov".to_string(),
            jina_reader: "https://r.jina.ai".to_string(),
            jina_search: "https://s.jina.ai".to_string(),
            jina_grounding: "https://g.jina.ai".to_string(),
        }
    }
}

impl Endpoints {
    /// Points every service at the same host, e.g. a local mock server.
    pub fn all(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        Self {
            serp: base.clone(),
            wikipedia: base.clone(),
            reddit: base.clone(),
            pubmed: base.clone(),
            jina_reader: format!("{}/reader", base),
            jina_search: format!("{}/search", base),
            jina_grounding: format!("{}/grounding", base),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResearchConfig {
    pub endpoints: Endpoints,
    pub user_agent: String,
    /// Applied to every outbound request
    pub timeout: Duration,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ResearchConfig {
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn http_client(&self) -> Result<Client> {
        Ok(Client::builder()
            .user_agent(self.user_agent.clone())
            .timeout(self.timeout)
            .build()?)
    }
}
