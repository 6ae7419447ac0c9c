use serde::Serialize;
use seo_core::text::capitalize;
use tracing::debug;

use crate::Topic;

/// A filler section addressing one content gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapSection {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GapFiller;

impl GapFiller {
    pub fn new() -> Self {
        Self
    }

    /// One section per distinct, non-blank gap, in the order given.
    pub fn fill_gaps(&self, keyword: &str, gaps: &[String]) -> Vec<GapSection> {
        let mut seen = std::collections::HashSet::new();
        let sections: Vec<GapSection> = gaps
            .iter()
            .map(|gap| gap.trim())
            .filter(|gap| !gap.is_empty() && seen.insert(gap.to_string()))
            .map(|gap| GapSection {
                heading: capitalize(gap),
                body: self.gap_body(keyword, gap),
            })
            .collect();
        debug!("Filled {} of {} gaps for '{}'", sections.len(), gaps.len(), keyword);
        sections
    }

    /// Markdown rendering of `fill_gaps`.
    pub fn render(&self, keyword: &str, gaps: &[String]) -> String {
        self.fill_gaps(keyword, gaps)
            .into_iter()
            .map(|section| format!("## {}\n\n{}", section.heading, section.body))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn gap_body(&self, keyword: &str, gap: &str) -> String {
        let focus = gap.trim_end_matches(|c: char| c == '.' || c == '?').to_lowercase();
        match Topic::classify(keyword) {
            Topic::VitaminD => format!(
                "When it comes to {}, individual needs vary with sun exposure, skin tone, body weight and baseline blood levels. \
                 A 25-hydroxyvitamin D test is the most reliable starting point, and most guidelines suggest retesting after \
                 8 to 12 weeks of any change. Pairing vitamin D with adequate magnesium and vitamin K2 supports how the body uses it.",
                focus
            ),
            Topic::Zinc => format!(
                "When it comes to {}, absorption is the deciding factor. Phytates in whole grains and legumes bind zinc, \
                 while animal protein and fermentation improve uptake. Taking supplements away from iron and calcium, \
                 and staying within the tolerable upper intake of 40 mg per day for adults, avoids most problems.",
                focus
            ),
            Topic::MakeMoney => format!(
                "When it comes to {}, the methods that last share three traits: low start-up cost, a skill you can improve, \
                 and income that compounds over time. Track hours against earnings from the first week so you can drop \
                 what does not pay and double down on what does.",
                focus
            ),
            Topic::Business => format!(
                "When it comes to {}, clarity on the customer comes before everything else. Validate demand with a small \
                 offer, keep fixed costs low until revenue is predictable, and review cash flow monthly rather than quarterly.",
                focus
            ),
            Topic::General => format!(
                "When it comes to {}, most existing guides on {} stay at the surface. Start with the fundamentals, \
                 test one change at a time, and keep notes on what works so your approach improves with experience.",
                focus, keyword
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_gaps_dedups_and_skips_blank() {
        let gaps = vec![
            "optimal timing for supplements".to_string(),
            "  ".to_string(),
            "optimal timing for supplements".to_string(),
            "Food sources?".to_string(),
        ];
        let sections = GapFiller::new().fill_gaps("zinc absorption", &gaps);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading, "Optimal timing for supplements");
        assert!(sections[0].body.contains("Phytates"));
        assert!(sections[1].body.starts_with("When it comes to food sources,"));
    }

    #[test]
    fn test_general_branch_names_keyword() {
        let sections = GapFiller::new().fill_gaps("cold plunge", &["Safety".to_string()]);
        assert!(sections[0].body.contains("guides on cold plunge"));
    }

    #[test]
    fn test_render_markdown() {
        let rendered = GapFiller::new().render("small business", &["Hiring first employee".to_string()]);
        assert!(rendered.starts_with("## Hiring first employee\n\n"));
        assert!(rendered.contains("cash flow"));
    }

    #[test]
    fn test_section_serializes() {
        let sections = GapFiller::new().fill_gaps("vitamin d", &["Testing".to_string()]);
        let json = serde_json::to_value(&sections).unwrap();
        assert_eq!(json[0]["heading"], "Testing");
        assert!(json[0]["body"].as_str().unwrap().contains("25-hydroxyvitamin D"));
    }
}
