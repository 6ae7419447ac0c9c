use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Outcome of one source fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SourceResult<T> {
    Success(T),
    Failed(String),
}

impl<T: Default> SourceResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, SourceResult::Success(_))
    }

    /// The payload, or an empty default when the fetch failed.
    pub fn into_payload(self) -> T {
        match self {
            SourceResult::Success(payload) => payload,
            SourceResult::Failed(_) => T::default(),
        }
    }
}

impl<T> From<Result<T>> for SourceResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(payload) => SourceResult::Success(payload),
            Err(e) => SourceResult::Failed(e.to_string()),
        }
    }
}

#[async_trait]
pub trait SourceFetcher: Send + Sync {
    type Output: Default + Send;

    /// Short name used in log lines
    fn name(&self) -> &str;

    /// Performs the request and parses the response.
    async fn try_fetch(&self, keyword: &str) -> Result<Self::Output>;

    /// Fetches and tags the outcome; never returns an error.
    async fn settle(&self, keyword: &str) -> SourceResult<Self::Output> {
        match self.try_fetch(keyword).await {
            Ok(payload) => SourceResult::Success(payload),
            Err(e) => {
                tracing::warn!("⚠️ {} fetch failed for '{}': {}", self.name(), keyword, e);
                SourceResult::Failed(e.to_string())
            }
        }
    }

    /// Fetches and degrades any failure to an empty payload.
    async fn fetch(&self, keyword: &str) -> Self::Output {
        self.settle(keyword).await.into_payload()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct Broken;

    #[async_trait]
    impl SourceFetcher for Broken {
        type Output = Vec<String>;

        fn name(&self) -> &str {
            "broken"
        }

        async fn try_fetch(&self, _keyword: &str) -> Result<Vec<String>> {
            Err(Error::Status { service: "broken".to_string(), status: 500 })
        }
    }

    struct Working;

    #[async_trait]
    impl SourceFetcher for Working {
        type Output = Vec<String>;

        fn name(&self) -> &str {
            "working"
        }

        async fn try_fetch(&self, keyword: &str) -> Result<Vec<String>> {
            Ok(vec![format!("about {}", keyword)])
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_degrades_to_default() {
        let fetcher = Broken;
        let outcome = fetcher.settle("zinc").await;
        assert!(!outcome.is_success());
        assert!(fetcher.fetch("zinc").await.is_empty());
    }

    #[tokio::test]
    async fn test_successful_fetch_keeps_payload() {
        let fetcher = Working;
        assert_eq!(fetcher.fetch("zinc").await, vec!["about zinc".to_string()]);
    }

    #[test]
    fn test_from_result() {
        let ok: SourceResult<Vec<String>> = Ok(vec!["a".to_string()]).into();
        assert!(ok.is_success());
        let failed: SourceResult<Vec<String>> = Err(Error::MissingCredential).into();
        assert_eq!(failed, SourceResult::Failed("API key is required".to_string()));
    }
}
