use std::sync::Arc;

use seo_core::text::capitalize;

use crate::selector::{PhraseSelector, SeededSelector};
use crate::Topic;

const TRANSITIONS: &[&str] = &[
    "Building on that,",
    "With that in mind,",
    "Just as important,",
    "Beyond the basics,",
    "Looking closer,",
    "On a practical level,",
];

/// Writes connective prose around a keyword.
#[derive(Clone)]
pub struct NaturalLanguageGenerator {
    selector: Arc<dyn PhraseSelector>,
}

impl Default for NaturalLanguageGenerator {
    fn default() -> Self {
        Self::new(Arc::new(SeededSelector::from_entropy()))
    }
}

impl NaturalLanguageGenerator {
    pub fn new(selector: Arc<dyn PhraseSelector>) -> Self {
        Self { selector }
    }

    pub fn introduction(&self, keyword: &str) -> String {
        match Topic::classify(keyword) {
            Topic::VitaminD => format!(
                "Vitamin D does far more than support strong bones. This guide to {} walks through what the research says, how much you actually need, and how to get it safely.",
                keyword
            ),
            Topic::Zinc => format!(
                "Zinc is a small mineral with a big job list, from immunity to wound healing. Here is what you should know about {} and how to make it work for you.",
                keyword
            ),
            Topic::MakeMoney => format!(
                "There is no shortage of advice on how to {}, but most of it skips the details that matter. This guide focuses on methods that hold up in practice.",
                keyword.to_lowercase()
            ),
            Topic::Business => format!(
                "Whether you are just starting out or scaling up, {} decisions shape everything that follows. Here is a clear path through the options.",
                keyword
            ),
            Topic::General => format!(
                "{} comes up more and more, yet clear answers are hard to find. This guide brings together the essentials so you can act with confidence.",
                capitalize(keyword)
            ),
        }
    }

    /// Opening phrase for the paragraph at `index`; cycles through a fixed list.
    pub fn transition(&self, index: usize) -> &'static str {
        TRANSITIONS[index % TRANSITIONS.len()]
    }

    pub fn conclusion(&self, keyword: &str) -> String {
        format!(
            "{} rewards a steady, informed approach. Start with the fundamentals covered here, track what works for you, and revisit the evidence as it evolves.",
            capitalize(keyword)
        )
    }

    /// Weaves `keyword` into a sentence about `context`, picking the phrasing via the selector.
    pub fn generate_contextual_keyword_usage(&self, keyword: &str, context: &str) -> String {
        let phrasings = [
            format!("When it comes to {}, {}", keyword, context),
            format!("Understanding {} means recognizing that {}", keyword, context),
            format!("A key aspect of {} is that {}", keyword, context),
            format!("For anyone exploring {}, it helps to know that {}", keyword, context),
            format!("Research on {} consistently shows that {}", keyword, context),
        ];
        let index = self.selector.pick(phrasings.len());
        phrasings[index].clone()
    }

    /// Joins paragraphs, prefixing all but the first with a transition.
    pub fn connect_paragraphs(&self, paragraphs: &[String]) -> String {
        paragraphs
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if i == 0 {
                    p.clone()
                } else {
                    format!("{} {}", self.transition(i - 1), lowercase_first(p))
                }
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
