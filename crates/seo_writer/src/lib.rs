//! Keyword-driven prose helpers consumed by the article templates.

pub mod gap_filler;
pub mod natural_language;
pub mod selector;
pub mod semantic_keywords;

pub use gap_filler::{GapFiller, GapSection};
pub use natural_language::NaturalLanguageGenerator;
pub use selector::{PhraseSelector, RoundRobinSelector, SeededSelector};
pub use semantic_keywords::{KeywordSet, SemanticKeywordGenerator};

/// Which canned-content family a keyword falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    VitaminD,
    Zinc,
    MakeMoney,
    Business,
    General,
}

impl Topic {
    pub fn classify(keyword: &str) -> Self {
        let lower = keyword.to_lowercase();
        if lower.contains("vitamin d") {
            Topic::VitaminD
        } else if lower.contains("zinc") {
            Topic::Zinc
        } else if lower.contains("make money") {
            Topic::MakeMoney
        } else if lower.contains("business") {
            Topic::Business
        } else {
            Topic::General
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Topic::classify("Vitamin D for kids"), Topic::VitaminD);
        assert_eq!(Topic::classify("zinc absorption"), Topic::Zinc);
        assert_eq!(Topic::classify("how to make money online"), Topic::MakeMoney);
        assert_eq!(Topic::classify("small business loans"), Topic::Business);
        assert_eq!(Topic::classify("sourdough"), Topic::General);
    }
}
