use std::fmt::Write as _;

use clap::{Args, Subcommand};
use seo_core::{EnhancedResearchData, Result};

use crate::manager::ResearchAggregator;

#[derive(Args, Debug, Clone)]
pub struct ResearchArgs {
    #[command(subcommand)]
    pub command: ResearchCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ResearchCommands {
    /// Research a keyword across every source
    Run {
        /// The topic to research, e.g. "zinc absorption"
        keyword: String,
        /// Jina AI API key for content extraction, search and grounding
        #[arg(long, env = "JINA_API_KEY", hide_env_values = true)]
        jina_api_key: Option<String>,
        /// Print the full record as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the research sources
    Sources,
}

pub const SOURCES: &[(&str, &str)] = &[
    ("serp", "DuckDuckGo organic results"),
    ("wikipedia", "Wikipedia page summary with OpenSearch fallback"),
    ("reddit", "Reddit discussion search"),
    ("pubmed", "PubMed most recent studies"),
    ("jina", "Jina AI reader, search and grounding (API key required)"),
];

pub async fn handle_command(args: ResearchArgs, aggregator: &ResearchAggregator) -> Result<()> {
    match args.command {
        ResearchCommands::Run { keyword, jina_api_key, json } => {
            let data = aggregator
                .perform_enhanced_research(&keyword, jina_api_key.as_deref())
                .await;
            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print!("{}", render_summary(&data));
            }
        }
        ResearchCommands::Sources => {
            println!("Available sources:");
            for (name, description) in SOURCES {
                println!("  {:<10} {}", name, description);
            }
        }
    }
    Ok(())
}

/// Human readable digest of a research run.
pub fn render_summary(data: &EnhancedResearchData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🔍 Research for \"{}\" ({} of 5 sources)", data.keyword, data.source_count());

    let sections: [(&str, Vec<String>); 7] = [
        ("🔎 Search results", data.serp_data.results.iter().map(|r| format!("{} - {}", r.title, r.url)).collect()),
        ("📚 Wikipedia", data.wikipedia_data.clone()),
        ("💬 Reddit", data.reddit_insights.clone()),
        ("🧪 Recent studies", data.recent_studies.clone()),
        ("🕳️ Content gaps", data.competitor_gaps.clone()),
        ("❓ Trending questions", data.trending_questions.clone()),
        ("📊 Statistics", data.statistical_data.clone()),
    ];
    for (heading, items) in sections.iter() {
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{}", heading);
        for item in items {
            let _ = writeln!(out, "  - {}", item);
        }
    }

    let insights = &data.jina_research_data.structured_insights;
    if !insights.is_empty() {
        let _ = writeln!(out, "\n🔬 Insights");
        for insight in insights {
            let _ = writeln!(out, "  - {}", insight);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis;

    #[test]
    fn test_render_summary_skips_empty_sections() {
        let data = analysis::fallback("zinc");
        let summary = render_summary(&data);
        assert!(summary.starts_with("🔍 Research for \"zinc\" (0 of 5 sources)"));
        assert!(summary.contains("❓ Trending questions"));
        assert!(!summary.contains("📚 Wikipedia"));
    }

    #[test]
    fn test_sources_listed() {
        assert_eq!(SOURCES.len(), 5);
    }
}
