use serde::Serialize;
use seo_core::text::dedup;

use crate::Topic;

/// Keyword variants grouped by intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSet {
    pub semantic: Vec<String>,
    pub long_tail: Vec<String>,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticKeywordGenerator;

impl SemanticKeywordGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Splits a comma separated keyword list, dropping blanks and repeats.
    pub fn parse_keywords(input: &str) -> Vec<String> {
        dedup(
            input
                .split(',')
                .map(|k| k.split_whitespace().collect::<Vec<_>>().join(" "))
                .filter(|k| !k.is_empty())
                .collect(),
        )
    }

    pub fn generate(&self, keyword: &str) -> KeywordSet {
        KeywordSet {
            semantic: self.semantic_keywords(keyword),
            long_tail: self.long_tail_keywords(keyword),
            questions: self.question_keywords(keyword),
        }
    }

    pub fn semantic_keywords(&self, keyword: &str) -> Vec<String> {
        let keyword = keyword.trim();
        let canned: Vec<&str> = match Topic::classify(keyword) {
            Topic::VitaminD => vec![
                "cholecalciferol",
                "vitamin D3",
                "sunlight exposure",
                "calcium absorption",
                "bone health",
                "vitamin D deficiency",
                "25-hydroxyvitamin D",
            ],
            Topic::Zinc => vec![
                "zinc supplements",
                "zinc deficiency",
                "immune function",
                "zinc picolinate",
                "zinc gluconate",
                "trace minerals",
                "zinc-rich foods",
            ],
            Topic::MakeMoney => vec![
                "passive income",
                "side hustle",
                "online income",
                "freelancing",
                "earn money from home",
                "income streams",
            ],
            Topic::Business => vec![
                "business strategy",
                "small business",
                "entrepreneurship",
                "business plan",
                "market research",
                "business growth",
            ],
            Topic::General => Vec::new(),
        };

        let mut keywords: Vec<String> = canned.into_iter().map(str::to_string).collect();
        keywords.extend([
            format!("{} guide", keyword),
            format!("{} benefits", keyword),
            format!("{} tips", keyword),
            format!("best {}", keyword),
            format!("{} explained", keyword),
        ]);
        dedup(keywords)
    }

    pub fn long_tail_keywords(&self, keyword: &str) -> Vec<String> {
        let keyword = keyword.trim();
        let mut keywords = match Topic::classify(keyword) {
            Topic::VitaminD => vec![
                "how much vitamin D should I take daily".to_string(),
                "best time of day to take vitamin D".to_string(),
                "vitamin D deficiency symptoms in adults".to_string(),
            ],
            Topic::Zinc => vec![
                "how much zinc per day for adults".to_string(),
                "best form of zinc for absorption".to_string(),
                "zinc supplements side effects".to_string(),
            ],
            Topic::MakeMoney => vec![
                "ways to make money online for beginners".to_string(),
                "how to make money from home without investment".to_string(),
            ],
            Topic::Business => vec![
                "how to start a small business with little money".to_string(),
                "business ideas for beginners".to_string(),
            ],
            Topic::General => Vec::new(),
        };
        keywords.extend([
            format!("{} for beginners", keyword),
            format!("how to get started with {}", keyword),
            format!("{} step by step guide", keyword),
            format!("common {} mistakes to avoid", keyword),
        ]);
        dedup(keywords)
    }

    pub fn question_keywords(&self, keyword: &str) -> Vec<String> {
        let keyword = keyword.trim();
        dedup(vec![
            format!("what is {}", keyword),
            format!("how does {} work", keyword),
            format!("why is {} important", keyword),
            format!("is {} worth it", keyword),
            format!("when should you use {}", keyword),
        ])
    }
}
