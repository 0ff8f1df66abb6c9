use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::time::{sleep, Duration};
use tracing::{error, info};

use newsbrief::article::load_records;
use newsbrief::clustering::DEFAULT_SIMILARITY_THRESHOLD;
use newsbrief::environment;
use newsbrief::logging;
use newsbrief::newsdata::{
    CachedFetcher, Category, FetchRequest, NewsDataClient, DEFAULT_LANGUAGE, MAX_CALLS,
};
use newsbrief::render;
use newsbrief::summary::parse_threshold;
use newsbrief::{ArticleRecord, Lexicons, Summarizer, SummaryParams};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

/// Pull the latest headlines and summarize the dominant storylines
#[derive(Parser, Debug)]
#[command(version, long_version = LONG_VERSION, long_about = None)]
struct Args {
    /// Headlines to pull and summarize
    #[arg(
        short = 'n',
        long,
        default_value_t = 100,
        value_parser = clap::value_parser!(u16).range(20..=100)
    )]
    count: u16,

    /// Restrict the feed to one category
    #[arg(short, long, value_enum, default_value_t = Category::All)]
    category: Category,

    /// Feed language code
    #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Summarize records from a JSON file instead of fetching
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON file replacing the built-in word lists
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Minimum title similarity (0.0-1.0) for joining a storyline
    #[arg(long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD, value_parser = parse_threshold)]
    threshold: f64,

    /// Articles to list under the summary
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Rebuild the briefing every N seconds; fetches repeated within 15 minutes come from cache
    #[arg(long)]
    interval: Option<u64>,

    /// Print JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

fn emit(summarizer: &Summarizer, records: &[ArticleRecord], args: &Args) -> Result<()> {
    let briefing = summarizer.briefing(records);
    if args.json {
        let value = render::briefing_json(&briefing, records, args.top);
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        render::print_briefing(&briefing, records, args.top);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::configure_logging();

    let args = Args::parse();
    info!(
        "Starting newsbrief {} ({})",
        env!("CARGO_PKG_VERSION"),
        option_env!("GIT_HASH").unwrap_or("unknown revision")
    );

    let lexicons = Lexicons::load(args.lexicon.as_deref())?;
    let params = SummaryParams::default().with_similarity_threshold(args.threshold);
    let summarizer = Summarizer::new(params, &lexicons);

    if let Some(path) = args.input.as_deref() {
        let records = load_records(path)?;
        info!("Loaded {} records from {}", records.len(), path.display());
        return emit(&summarizer, &records, &args);
    }

    let client = NewsDataClient::with_base_url(environment::api_key()?, environment::base_url()?)?;
    let mut fetcher = CachedFetcher::new(client);
    let request = FetchRequest {
        count: usize::from(args.count),
        language: args.language.clone(),
        category: args.category.as_filter(),
        max_calls: MAX_CALLS,
    };

    loop {
        match fetcher.fetch(&request).await {
            Ok(records) => emit(&summarizer, &records, &args)?,
            Err(err) => {
                if args.interval.is_none() {
                    return Err(anyhow!("Could not fetch news.\n{:#}", err));
                }
                error!("Could not fetch news: {:#}", err);
            }
        }

        match args.interval {
            Some(seconds) => {
                info!("Sleeping for {} seconds before the next briefing", seconds);
                sleep(Duration::from_secs(seconds)).await;
            }
            None => break,
        }
    }

    Ok(())
}
