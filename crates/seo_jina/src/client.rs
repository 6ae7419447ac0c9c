use std::fmt;

use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use seo_core::{Endpoints, Error, FactualValidation, JinaContent, ResearchConfig, Result};
use url::Url;

#[derive(Deserialize)]
struct ReaderResponse {
    #[serde(default)]
    data: Option<JinaContent>,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<JinaContent>,
}

#[derive(Serialize)]
struct GroundingRequest<'a> {
    statement: &'a str,
    sources: &'a [String],
}

#[derive(Deserialize)]
struct GroundingResponse {
    #[serde(default)]
    data: Option<GroundingData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingData {
    #[serde(default)]
    factuality: f64,
    #[serde(default)]
    result: bool,
    #[serde(default)]
    references: Vec<GroundingReference>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingReference {
    #[serde(default)]
    url: String,
}

/// Thin client over the reader, search and grounding endpoints.
#[derive(Clone)]
pub struct JinaClient {
    client: Client,
    reader_url: String,
    search_url: String,
    grounding_url: String,
}

impl fmt::Debug for JinaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JinaClient")
            .field("client", &"<reqwest::Client>")
            .field("reader_url", &self.reader_url)
            .field("search_url", &self.search_url)
            .field("grounding_url", &self.grounding_url)
            .finish()
    }
}

impl JinaClient {
    pub fn new(config: &ResearchConfig) -> Result<Self> {
        Ok(Self::with_client(config.http_client()?, &config.endpoints))
    }

    pub fn with_client(client: Client, endpoints: &Endpoints) -> Self {
        Self {
            client,
            reader_url: endpoints.jina_reader.trim_end_matches('/').to_string(),
            search_url: endpoints.jina_search.trim_end_matches('/').to_string(),
            grounding_url: endpoints.jina_grounding.trim_end_matches('/').to_string(),
        }
    }

    fn authorized(&self, request: RequestBuilder, credential: &str) -> RequestBuilder {
        request
            .bearer_auth(credential)
            .header("Accept", "application/json")
            .header("X-Return-Format", "markdown")
    }

    async fn checked(service: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                service: service.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    /// Extracts the readable content of one page.
    pub async fn read_url(&self, page: &str, credential: &str) -> Result<JinaContent> {
        let page = Url::parse(page)?;
        let request = self
            .client
            .get(format!("{}/{}", self.reader_url, page));
        let response = self.authorized(request, credential).send().await?;
        let body: ReaderResponse = Self::checked("jina reader", response).await?.json().await?;

        let mut content = body
            .data
            .ok_or_else(|| Error::Parse("reader response has no data".to_string()))?;
        if content.url.is_empty() {
            content.url = page.to_string();
        }
        Ok(content)
    }

    /// Runs a semantic web search for `query`.
    pub async fn search(&self, query: &str, credential: &str) -> Result<Vec<JinaContent>> {
        let request = self
            .client
            .get(format!("{}/", self.search_url))
            .query(&[("q", query)]);
        let response = self.authorized(request, credential).send().await?;
        let body: SearchResponse = Self::checked("jina search", response).await?.json().await?;
        Ok(body.data)
    }

    /// Scores how well `statement` is supported by web evidence.
    pub async fn ground(
        &self,
        statement: &str,
        sources: &[String],
        credential: &str,
    ) -> Result<FactualValidation> {
        let request = self
            .client
            .post(format!("{}/", self.grounding_url))
            .json(&GroundingRequest { statement, sources });
        let response = self.authorized(request, credential).send().await?;
        let body: GroundingResponse = Self::checked("jina grounding", response).await?.json().await?;

        let data = body
            .data
            .ok_or_else(|| Error::Parse("grounding response has no data".to_string()))?;
        Ok(FactualValidation {
            score: data.factuality.clamp(0.0, 1.0),
            verdict: data.result,
            references: data
                .references
                .into_iter()
                .map(|r| r.url)
                .filter(|u| !u.is_empty())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> JinaClient {
        let config = ResearchConfig::default().with_endpoints(Endpoints::all(&server.uri()));
        JinaClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_read_url_sends_credential() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reader/https://example.com/zinc"))
            .and(header("Authorization", "Bearer secret"))
            .and(header("X-Return-Format", "markdown"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 200,
                "data": { "title": "Zinc", "content": "Zinc matters.", "description": "About zinc" }
            })))
            .mount(&server)
            .await;

        let content = client_for(&server)
            .read_url("https://example.com/zinc", "secret")
            .await
            .unwrap();
        assert_eq!(content.title, "Zinc");
        assert_eq!(content.url, "https://example.com/zinc");
    }

    #[tokio::test]
    async fn test_read_url_rejects_invalid_url() {
        let server = MockServer::start().await;
        let result = client_for(&server).read_url("not a url", "secret").await;
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_search_parses_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/"))
            .and(query_param("q", "zinc absorption"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    { "title": "Zinc absorption basics", "url": "https://a.example", "content": "..." },
                    { "title": "Phytates", "url": "https://b.example" }
                ]
            })))
            .mount(&server)
            .await;

        let results = client_for(&server).search("zinc absorption", "secret").await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].content, "");
    }

    #[tokio::test]
    async fn test_search_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let result = client_for(&server).search("zinc", "bad").await;
        assert!(matches!(result, Err(Error::Status { status: 401, .. })));
    }

    #[tokio::test]
    async fn test_ground_posts_statement() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/grounding/"))
            .and(body_partial_json(serde_json::json!({ "statement": "zinc is useful" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {
                    "factuality": 0.82,
                    "result": true,
                    "references": [
                        { "url": "https://www.nih.gov/zinc", "keyQuote": "zinc", "isSupportive": true },
                        { "keyQuote": "no url" }
                    ]
                }
            })))
            .mount(&server)
            .await;

        let validation = client_for(&server)
            .ground("zinc is useful", &["https://a.example".to_string()], "secret")
            .await
            .unwrap();
        assert!(validation.verdict);
        assert!((validation.score - 0.82).abs() < f64::EPSILON);
        assert_eq!(validation.references, vec!["https://www.nih.gov/zinc".to_string()]);
    }
}
