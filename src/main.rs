//! Command-line entry point for the glossary harvester.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use termharvest::io::{read_texts, write_glossary};
use termharvest::pipeline::{HarvestPipeline, StageTimingObserver};
use termharvest::review::{HttpChatTransport, ReviewEndpoint, TermReviewer};
use termharvest::types::HarvestConfig;
use termharvest::HarvestError;

const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Extract, normalize and review glossary terms from a localization CSV
#[derive(Debug, Parser)]
#[command(name = "termharvest", version, about)]
struct Cli {
    /// Input CSV with a source-text column ('text_en' or any 'text' header)
    input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "glossary.csv")]
    output: PathBuf,

    /// Maximum n-gram length
    #[arg(long, default_value_t = 4)]
    ngram_max: usize,

    /// Minimum term frequency
    #[arg(long, default_value_t = 2)]
    min_freq: u32,

    /// Keep terms without any uppercase letter
    #[arg(long)]
    no_capital: bool,

    /// Maximum context segments sampled per term
    #[arg(long, default_value_t = 30)]
    context_lines: usize,

    /// Character budget for each term's joined context
    #[arg(long, default_value_t = 1200)]
    context_chars: usize,

    /// Terms per review request
    #[arg(long, default_value_t = 20)]
    review_batch: usize,

    /// Skip the collaborator review rounds
    #[arg(long)]
    skip_review: bool,
}

impl Cli {
    fn config(&self) -> HarvestConfig {
        HarvestConfig::default()
            .with_ngram_max(self.ngram_max)
            .with_min_freq(self.min_freq)
            .with_capital_required(!self.no_capital)
            .with_context_bounds(self.context_lines, self.context_chars)
            .with_review_batch(self.review_batch)
    }
}

/// Build the review endpoint from `BASE_URL` / `API_KEY` / `MODEL`.
fn endpoint_from_env() -> Result<ReviewEndpoint, HarvestError> {
    let base_url = env::var("BASE_URL")
        .map_err(|_| HarvestError::Configuration("BASE_URL is not set".to_string()))?;
    let api_key = env::var("API_KEY")
        .map_err(|_| HarvestError::Configuration("API_KEY is not set".to_string()))?;
    let model = env::var("MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    Ok(ReviewEndpoint::new(base_url, api_key, model))
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    let texts = read_texts(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    let pipeline = HarvestPipeline::with_config(config.clone());
    let mut observer = StageTimingObserver::new();
    let output = pipeline.run(&texts, &mut observer);
    for (stage, report) in observer.reports() {
        info!(stage, elapsed = ?report.elapsed(), items = report.items(), "stage timing");
    }

    let rows = if cli.skip_review {
        warn!("review skipped, writing unreviewed candidates");
        output.rows
    } else {
        let endpoint = endpoint_from_env()?;
        let transport = HttpChatTransport::new(endpoint)?;
        let reviewer = TermReviewer::new(transport, config.review_batch);
        reviewer.review(output.rows)
    };

    write_glossary(&cli.output, &rows)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    info!(terms = rows.len(), output = %cli.output.display(), "done");
    Ok(())
}
