//! Gap and insight synthesis over merged reader / search / grounding output.

use seo_core::text::dedup;
use seo_core::{FactualValidation, JinaContent, JinaResearchData};

/// Below this many characters of extracted content the topic is treated as thin.
pub const THIN_CONTENT_CHARS: usize = 5000;
/// Below this many semantic results the topic lacks outside perspectives.
pub const MIN_SEMANTIC_RESULTS: usize = 3;

pub const AUTHORITY_DOMAINS: &[&str] = &["mayo", "harvard", "nih", "webmd", "healthline"];

pub const MISSING_KEY_GAP: &str = "Jina AI API key required for comprehensive content gap analysis";

/// The record returned when no credential is configured.
pub fn unavailable() -> JinaResearchData {
    JinaResearchData {
        extracted_content: Vec::new(),
        semantic_results: Vec::new(),
        factual_validation: FactualValidation::default(),
        content_gaps: vec![MISSING_KEY_GAP.to_string()],
        structured_insights: vec![
            "Enhanced research unavailable: configure a Jina AI API key to enable content extraction, semantic search and fact grounding".to_string(),
        ],
    }
}

pub fn content_gaps(keyword: &str, extracted: &[JinaContent], semantic: &[JinaContent]) -> Vec<String> {
    let lower = keyword.to_lowercase();
    let mut gaps: Vec<String> = if lower.contains("zinc") {
        vec![
            "Zinc absorption inhibitors and enhancers in common diets".to_string(),
            "Zinc form comparison: gluconate, picolinate, citrate and bisglycinate".to_string(),
            format!("Population groups most at risk when researching {}", keyword),
        ]
    } else if lower.contains("vitamin d") {
        vec![
            "Vitamin D dosing by baseline blood level".to_string(),
            "Vitamin D cofactors: magnesium and vitamin K2".to_string(),
            format!("Seasonal and geographic factors affecting {}", keyword),
        ]
    } else {
        vec![
            format!("Step-by-step implementation guide for {}", keyword),
            format!("Expert opinions and case studies on {}", keyword),
            format!("Common misconceptions about {}", keyword),
        ]
    };

    let total_chars: usize = extracted.iter().map(|c| c.content.chars().count()).sum();
    if total_chars < THIN_CONTENT_CHARS {
        gaps.push(format!(
            "Existing coverage of {} needs more implementation detail and practical examples",
            keyword
        ));
    }
    if semantic.len() < MIN_SEMANTIC_RESULTS {
        gaps.push(format!(
            "Existing coverage of {} needs more expert perspectives and authoritative sources",
            keyword
        ));
    }

    dedup(gaps)
}

pub fn structured_insights(
    extracted: &[JinaContent],
    semantic: &[JinaContent],
    validation: &FactualValidation,
) -> Vec<String> {
    let mut insights = Vec::new();

    if !extracted.is_empty() {
        let total: usize = extracted.iter().map(|c| c.content.chars().count()).sum();
        insights.push(format!(
            "Average source content length: {} characters across {} pages",
            total / extracted.len(),
            extracted.len()
        ));
    }

    if validation.score > 0.7 {
        insights.push(format!(
            "High factual confidence ({:.2}): claims are well supported by web evidence",
            validation.score
        ));
    } else if validation.score > 0.5 {
        insights.push(format!(
            "Moderate factual confidence ({:.2}): cite sources for key claims",
            validation.score
        ));
    }

    if semantic.len() > 5 {
        insights.push(format!(
            "Rich semantic landscape: {} related sources found",
            semantic.len()
        ));
    } else {
        insights.push(format!(
            "Limited semantic coverage: {} related sources found, an opportunity for in-depth content",
            semantic.len()
        ));
    }

    let authorities = authority_domains(extracted.iter().chain(semantic.iter()));
    if !authorities.is_empty() {
        insights.push(format!(
            "Authoritative sources present: {}",
            authorities.join(", ")
        ));
    }

    insights
}

/// Authority markers found in any of the given result URLs, in list order.
pub fn authority_domains<'a>(items: impl Iterator<Item = &'a JinaContent>) -> Vec<&'static str> {
    let urls: Vec<String> = items.map(|c| c.url.to_lowercase()).collect();
    AUTHORITY_DOMAINS
        .iter()
        .copied()
        .filter(|domain| urls.iter().any(|u| u.contains(domain)))
        .collect()
}
