pub mod pubmed;
pub mod reddit;
pub mod serp;
pub mod wikipedia;

pub use pubmed::PubMedFetcher;
pub use reddit::RedditFetcher;
pub use serp::SerpFetcher;
pub use wikipedia::WikipediaFetcher;

/// Common utilities for fetchers
pub(crate) mod utils {
    use reqwest::Response;
    use scraper::{ElementRef, Selector};
    use seo_core::{Error, Result};
    use url::Url;

    pub fn parse_url(url: &str) -> Result<Url> {
        Url::parse(url).map_err(|e| Error::InvalidUrl(format!("Failed to parse URL {}: {}", url, e)))
    }

    pub fn selector(css: &str) -> Result<Selector> {
        Selector::parse(css).map_err(|e| Error::Scraping(format!("Invalid selector {}: {:?}", css, e)))
    }

    /// Collapsed text of the first match of `selector` under `element`.
    pub fn extract_text(element: &ElementRef, selector: &Selector) -> Option<String> {
        element
            .select(selector)
            .next()
            .map(|el| collapse_whitespace(&el.text().collect::<String>()))
            .filter(|text| !text.is_empty())
    }

    pub fn collapse_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Turns a non-2xx response into `Error::Status`.
    pub fn ensure_success(service: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(Error::Status {
                service: service.to_string(),
                status: status.as_u16(),
            })
        }
    }
}
