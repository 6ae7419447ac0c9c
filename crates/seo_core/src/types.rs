use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input to one research run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchQuery {
    pub keyword: String,
    #[serde(default, alias = "jinaApiKey")]
    pub credential: Option<String>,
}

impl ResearchQuery {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            credential: None,
        }
    }

    pub fn with_credential(mut self, credential: Option<String>) -> Self {
        self.credential = credential;
        self
    }

    /// The credential, ignoring blank values.
    pub fn credential(&self) -> Option<&str> {
        self.credential
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SerpResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SerpData {
    pub results: Vec<SerpResult>,
    /// Statistic fragments spotted in the result snippets
    pub statistics: Vec<String>,
}

impl SerpData {
    pub fn urls(&self) -> Vec<String> {
        self.results
            .iter()
            .map(|r| r.url.clone())
            .filter(|u| !u.is_empty())
            .collect()
    }
}

/// A page pulled through the reader or search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JinaContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactualValidation {
    /// Support score in `[0, 1]`
    pub score: f64,
    pub verdict: bool,
    pub references: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JinaResearchData {
    pub extracted_content: Vec<JinaContent>,
    pub semantic_results: Vec<JinaContent>,
    pub factual_validation: FactualValidation,
    pub content_gaps: Vec<String>,
    pub structured_insights: Vec<String>,
}

/// Everything gathered for one keyword, plus the passes derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedResearchData {
    pub keyword: String,
    pub serp_data: SerpData,
    pub wikipedia_data: Vec<String>,
    pub reddit_insights: Vec<String>,
    pub recent_studies: Vec<String>,
    pub jina_research_data: JinaResearchData,
    pub competitor_gaps: Vec<String>,
    pub trending_questions: Vec<String>,
    pub statistical_data: Vec<String>,
    pub researched_at: DateTime<Utc>,
}

impl EnhancedResearchData {
    /// An aggregate with every source slot present but empty.
    pub fn empty(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            serp_data: SerpData::default(),
            wikipedia_data: Vec::new(),
            reddit_insights: Vec::new(),
            recent_studies: Vec::new(),
            jina_research_data: JinaResearchData::default(),
            competitor_gaps: Vec::new(),
            trending_questions: Vec::new(),
            statistical_data: Vec::new(),
            researched_at: Utc::now(),
        }
    }

    pub fn source_count(&self) -> usize {
        [
            !self.serp_data.results.is_empty(),
            !self.wikipedia_data.is_empty(),
            !self.reddit_insights.is_empty(),
            !self.recent_studies.is_empty(),
            !self.jina_research_data.extracted_content.is_empty()
                || !self.jina_research_data.semantic_results.is_empty(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}
