use anyhow::Context;
use clap::Parser;
use seo_core::config::DEFAULT_TIMEOUT;
use seo_core::ResearchConfig;
use seo_sources::logging::init_logging;
use seo_sources::{handle_command, ResearchAggregator, ResearchArgs, ResearchCommands};
use seo_web::{create_app, AppState};
use seo_writer::{GapFiller, NaturalLanguageGenerator, SeededSelector, SemanticKeywordGenerator};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut digits = String::new();
        let mut seen_number = false;

        for c in s.trim().chars() {
            if c.is_ascii_digit() {
                digits.push(c);
                continue;
            }
            let num: u64 = digits
                .parse()
                .map_err(|_| format!("Expected a number before '{}'", c))?;
            total_seconds += match c {
                's' => num,
                'm' => num * 60,
                _ => return Err(format!("Invalid duration unit: {}", c)),
            };
            digits.clear();
            seen_number = true;
        }

        // Bare numbers are seconds
        if !digits.is_empty() {
            total_seconds += digits.parse::<u64>().map_err(|e| e.to_string())?;
            seen_number = true;
        }

        if !seen_number || total_seconds == 0 {
            return Err("Timeout must be a positive duration, e.g. 15 or 1m30s".to_string());
        }
        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(name = "seo", author, version, about = "Keyword research and SEO content helpers", long_about = None)]
struct Cli {
    /// Per-request timeout for outbound calls (e.g. 15, 30s, 1m)
    #[arg(long, global = true)]
    timeout: Option<HumanDuration>,
    /// User-Agent sent to every source
    #[arg(long, global = true)]
    user_agent: Option<String>,
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Research a keyword across every source
    Research {
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
    /// Suggest semantic, long-tail and question keywords
    Keywords {
        /// One keyword or a comma separated list
        keywords: String,
        #[arg(long)]
        json: bool,
    },
    /// Draft markdown sections that cover content gaps
    Fill {
        keyword: String,
        #[arg(required = true)]
        gaps: Vec<String>,
        /// Seed for phrasing choices; the same seed gives the same draft
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

impl Cli {
    fn research_config(&self) -> ResearchConfig {
        let mut config = ResearchConfig::default()
            .with_timeout(self.timeout.as_ref().map(|t| t.0).unwrap_or(DEFAULT_TIMEOUT));
        if let Some(user_agent) = &self.user_agent {
            config = config.with_user_agent(user_agent.clone());
        }
        config
    }
}

fn draft(keyword: &str, gaps: &[String], seed: Option<u64>) -> String {
    let writer = match seed {
        Some(seed) => NaturalLanguageGenerator::new(Arc::new(SeededSelector::new(seed))),
        None => NaturalLanguageGenerator::default(),
    };
    let sections = GapFiller::new().fill_gaps(keyword, gaps);

    let mut out = format!("# {}\n\n{}\n\n", keyword, writer.introduction(keyword));
    for section in &sections {
        let lead = writer.generate_contextual_keyword_usage(
            keyword,
            &format!("{} deserves a closer look.", section.heading.to_lowercase()),
        );
        let body = writer.connect_paragraphs(&[lead, section.body.clone()]);
        out.push_str(&format!("## {}\n\n{}\n\n", section.heading, body));
    }
    out.push_str(&format!("## Conclusion\n\n{}\n", writer.conclusion(keyword)));
    out
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.research_config();

    match cli.command {
        Commands::Research { keyword, jina_api_key, json } => {
            let aggregator = ResearchAggregator::new(&config)?;
            let args = ResearchArgs {
                command: ResearchCommands::Run { keyword, jina_api_key, json },
            };
            handle_command(args, &aggregator).await?;
        }
        Commands::Sources => {
            let aggregator = ResearchAggregator::new(&config)?;
            let args = ResearchArgs {
                command: ResearchCommands::Sources,
            };
            handle_command(args, &aggregator).await?;
        }
        Commands::Keywords { keywords, json } => {
            let generator = SemanticKeywordGenerator::new();
            let parsed = SemanticKeywordGenerator::parse_keywords(&keywords);
            if parsed.is_empty() {
                anyhow::bail!("No keywords given");
            }
            for keyword in parsed {
                let set = generator.generate(&keyword);
                if json {
                    println!("{}", serde_json::to_string_pretty(&set)?);
                    continue;
                }
                println!("🔑 {}", keyword);
                for (label, items) in [("Semantic", &set.semantic), ("Long tail", &set.long_tail), ("Questions", &set.questions)] {
                    println!("  {}:", label);
                    for item in items {
                        println!("    - {}", item);
                    }
                }
            }
        }
        Commands::Fill { keyword, gaps, seed } => {
            print!("{}", draft(keyword.trim(), &gaps, seed));
        }
        Commands::Serve { addr } => {
            let aggregator = ResearchAggregator::new(&config)?;
            let app = create_app(AppState::new(aggregator));
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
            info!("🌐 Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
