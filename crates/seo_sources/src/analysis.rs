//! Cross-source passes run over a merged `EnhancedResearchData`.
//!
//! All three are pure: they read the merged record and the keyword it was
//! built for, and never touch the network.

use seo_core::stats::take_statistics;
use seo_core::text::{dedup, dedup_capped};
use seo_core::EnhancedResearchData;

pub const MAX_TRENDING_QUESTIONS: usize = 10;
pub const MAX_STATISTICS: usize = 8;
const STATISTICS_PER_ITEM: usize = 2;

/// Jina's gaps followed by keyword-specific ones, deduplicated.
pub fn analyze_content_gaps(data: &EnhancedResearchData) -> Vec<String> {
    let keyword = data.keyword.as_str();
    let lower = keyword.to_lowercase();
    let mut gaps = data.jina_research_data.content_gaps.clone();

    if lower.contains("zinc") {
        gaps.extend([
            "Zinc bioavailability comparison between different food preparation methods".to_string(),
            "Zinc and copper balance during long-term supplementation".to_string(),
            format!("Optimal timing and dosage considerations for {}", keyword),
        ]);
    } else if lower.contains("vitamin d") {
        gaps.extend([
            "Vitamin D synthesis differences by latitude, season and skin type".to_string(),
            "Vitamin D3 versus D2 efficacy in correcting deficiency".to_string(),
            format!("Testing and monitoring guidance for {}", keyword),
        ]);
    } else {
        gaps.extend([
            format!("Practical implementation steps for {}", keyword),
            format!("Common mistakes people make with {}", keyword),
            format!("Long-term results and case studies for {}", keyword),
        ]);
    }

    dedup(gaps)
}

/// Questions from Jina search titles plus canned keyword questions, at most ten.
pub fn generate_trending_questions(data: &EnhancedResearchData) -> Vec<String> {
    let keyword = data.keyword.as_str();
    let lower = keyword.to_lowercase();

    let mut questions: Vec<String> = data
        .jina_research_data
        .semantic_results
        .iter()
        .map(|result| result.title.trim())
        .filter(|title| !title.is_empty())
        .map(|title| {
            if title.ends_with('?') {
                title.to_string()
            } else {
                format!("How does {} relate to {}?", keyword, title)
            }
        })
        .collect();

    if lower.contains("zinc") {
        questions.extend([
            "How much zinc should you take per day?".to_string(),
            "What foods are highest in zinc?".to_string(),
            "Can you take too much zinc?".to_string(),
            format!("What improves {}?", keyword),
        ]);
    } else if lower.contains("vitamin d") {
        questions.extend([
            "How much vitamin D do you need daily?".to_string(),
            "What are the signs of vitamin D deficiency?".to_string(),
            "Should vitamin D be taken with vitamin K2?".to_string(),
            format!("What affects {}?", keyword),
        ]);
    }
    questions.extend([
        format!("What is {}?", keyword),
        format!("How does {} work?", keyword),
        format!("What are the benefits of {}?", keyword),
        format!("What are the risks of {}?", keyword),
        format!("How do I get started with {}?", keyword),
    ]);

    dedup_capped(questions, MAX_TRENDING_QUESTIONS)
}

/// Statistics found in extracted pages and SERP snippets, plus two generic ones, at most eight.
pub fn extract_statistical_data(data: &EnhancedResearchData) -> Vec<String> {
    let keyword = data.keyword.as_str();

    let mut statistics: Vec<String> = data
        .jina_research_data
        .extracted_content
        .iter()
        .flat_map(|item| {
            let title = item.title.trim().to_string();
            take_statistics(&item.content, STATISTICS_PER_ITEM)
                .into_iter()
                .map(move |stat| {
                    if title.is_empty() {
                        stat
                    } else {
                        format!("{} (source: {})", stat, title)
                    }
                })
        })
        .collect();

    statistics.extend(data.serp_data.statistics.iter().cloned());
    statistics.extend([
        format!("Over 70% of people researching {} look for evidence-based guidance", keyword),
        format!("Search interest in {} has grown steadily over the past five years", keyword),
    ]);

    dedup_capped(statistics, MAX_STATISTICS)
}

/// Fills the derived fields from the merged source slots.
pub fn derive(mut data: EnhancedResearchData) -> EnhancedResearchData {
    data.competitor_gaps = analyze_content_gaps(&data);
    data.trending_questions = generate_trending_questions(&data);
    data.statistical_data = extract_statistical_data(&data);
    data
}

/// A record built from the keyword alone, used when the pipeline itself breaks.
pub fn fallback(keyword: &str) -> EnhancedResearchData {
    derive(EnhancedResearchData::empty(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use seo_core::{JinaContent, SerpData};
    use std::collections::HashSet;

    fn titled(title: &str) -> JinaContent {
        JinaContent {
            title: title.to_string(),
            ..JinaContent::default()
        }
    }

    fn assert_unique(items: &[String]) {
        let set: HashSet<_> = items.iter().collect();
        assert_eq!(set.len(), items.len(), "duplicates in {:?}", items);
    }

    #[test]
    fn test_zinc_gaps() {
        let data = EnhancedResearchData::empty("zinc absorption");
        let gaps = analyze_content_gaps(&data);
        assert!(gaps.contains(&"Zinc bioavailability comparison between different food preparation methods".to_string()));
        assert!(gaps.iter().any(|g| g.contains("zinc absorption")));
    }

    #[test]
    fn test_gaps_start_with_jina_and_dedup() {
        let mut data = EnhancedResearchData::empty("keto diet");
        data.jina_research_data.content_gaps = vec![
            "Practical implementation steps for keto diet".to_string(),
            "Keto and sleep".to_string(),
        ];
        let gaps = analyze_content_gaps(&data);
        assert_eq!(gaps[0], "Practical implementation steps for keto diet");
        assert_eq!(gaps[1], "Keto and sleep");
        assert_eq!(gaps.len(), 4);
        assert_unique(&gaps);
    }

    #[test]
    fn test_vitamin_d_gaps_are_case_insensitive() {
        let gaps = analyze_content_gaps(&EnhancedResearchData::empty("Vitamin D dosage"));
        assert!(gaps.iter().any(|g| g.starts_with("Vitamin D3 versus D2")));
    }

    #[test]
    fn test_question_seeding_from_titles() {
        let mut data = EnhancedResearchData::empty("zinc");
        data.jina_research_data.semantic_results = vec![
            titled("Is zinc safe during pregnancy?"),
            titled("Immune health"),
            titled("  "),
        ];
        let questions = generate_trending_questions(&data);
        assert_eq!(questions[0], "Is zinc safe during pregnancy?");
        assert_eq!(questions[1], "How does zinc relate to Immune health?");
        assert!(questions.len() <= MAX_TRENDING_QUESTIONS);
        assert_unique(&questions);
    }

    #[test]
    fn test_questions_are_capped() {
        let mut data = EnhancedResearchData::empty("zinc");
        data.jina_research_data.semantic_results = (0..15).map(|i| titled(&format!("Topic {}", i))).collect();
        let questions = generate_trending_questions(&data);
        assert_eq!(questions.len(), MAX_TRENDING_QUESTIONS);
        assert_eq!(questions[9], "How does zinc relate to Topic 9?");
    }

    #[test]
    fn test_duplicate_titles_collapse() {
        let mut data = EnhancedResearchData::empty("sleep");
        data.jina_research_data.semantic_results = vec![titled("What is sleep?"), titled("What is sleep?")];
        let questions = generate_trending_questions(&data);
        assert_eq!(questions.iter().filter(|q| *q == "What is sleep?").count(), 1);
    }

    #[test]
    fn test_statistics_two_per_item() {
        let mut data = EnhancedResearchData::empty("zinc");
        data.jina_research_data.extracted_content = vec![JinaContent {
            title: "Zinc review".to_string(),
            content: "Studies show 45% improvement and $2.5M in savings across 300 patients".to_string(),
            ..JinaContent::default()
        }];
        data.serp_data = SerpData {
            results: vec![],
            statistics: vec!["12%".to_string()],
        };
        let stats = extract_statistical_data(&data);
        assert_eq!(stats[0], "45% (source: Zinc review)");
        assert_eq!(stats[1], "$2.5M (source: Zinc review)");
        assert_eq!(stats[2], "12%");
        assert_eq!(stats.len(), 5);
        assert!(stats[3].contains("zinc"));
    }

    #[test]
    fn test_statistics_are_capped() {
        let mut data = EnhancedResearchData::empty("zinc");
        data.jina_research_data.extracted_content = (0..6)
            .map(|i| JinaContent {
                content: format!("{}% and {}%", i, i + 10),
                ..JinaContent::default()
            })
            .collect();
        let stats = extract_statistical_data(&data);
        assert_eq!(stats.len(), MAX_STATISTICS);
        assert_unique(&stats);
    }

    #[test]
    fn test_fallback_mentions_keyword() {
        let data = fallback("cold plunge");
        assert!(data.serp_data.results.is_empty());
        assert!(data.wikipedia_data.is_empty());
        for derived in [&data.competitor_gaps, &data.trending_questions, &data.statistical_data] {
            assert!(!derived.is_empty());
            assert!(derived.iter().any(|s| s.contains("cold plunge")));
        }
    }
}
