use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use prettytable::{Cell, Row as PrettyRow, Table};
use std::path::PathBuf;

use newsbrief::article::load_records;
use newsbrief::clustering::DEFAULT_SIMILARITY_THRESHOLD;
use newsbrief::logging;
use newsbrief::render::display_title;
use newsbrief::signal::SignalFilter;
use newsbrief::summary::parse_threshold;
use newsbrief::text::Tokenizer;
use newsbrief::{Lexicons, Summarizer, SummaryParams};

#[derive(Parser)]
#[clap(name = "cluster-report", about = "Show how a batch of articles clusters into storylines")]
struct Cli {
    /// JSON file with article records
    #[clap(required = true)]
    input: PathBuf,

    /// JSON file replacing the built-in word lists
    #[clap(long)]
    lexicon: Option<PathBuf>,

    /// Minimum title similarity for joining a storyline
    #[clap(short, long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD, value_parser = parse_threshold)]
    threshold: f64,

    /// Number of storylines to show
    #[clap(short, long, default_value = "20")]
    limit: usize,

    /// List member titles under each storyline
    #[clap(short, long)]
    members: bool,

    /// List the articles classified as low-signal
    #[clap(long)]
    noise: bool,
}

fn main() -> Result<()> {
    logging::configure_logging();

    let args = Cli::parse();
    let records = load_records(&args.input)?;
    let lexicons = Lexicons::load(args.lexicon.as_deref())?;
    let summarizer = Summarizer::new(
        SummaryParams::default().with_similarity_threshold(args.threshold),
        &lexicons,
    );

    let corpus = summarizer.select_corpus(&records);
    let storylines = summarizer.storylines(corpus.records.iter().copied());

    println!(
        "{} records, corpus of {} ({}), {} storylines",
        records.len(),
        corpus.records.len(),
        if corpus.filtered { "filtered" } else { "unfiltered" },
        storylines.len()
    );

    let mut table = Table::new();
    table.add_row(PrettyRow::new(vec![
        Cell::new("#"),
        Cell::new("Topic"),
        Cell::new("Articles"),
        Cell::new("Top tokens"),
        Cell::new("Headline"),
    ]));

    for (index, storyline) in storylines.iter().take(args.limit).enumerate() {
        let top_tokens = storyline
            .cluster
            .frequency()
            .most_common(5)
            .into_iter()
            .map(|(token, count)| format!("{}×{}", token, count))
            .collect::<Vec<_>>()
            .join(" ");

        table.add_row(PrettyRow::new(vec![
            Cell::new(&(index + 1).to_string()),
            Cell::new(&storyline.topic),
            Cell::new(&storyline.cluster.len().to_string()),
            Cell::new(&top_tokens),
            Cell::new(summarizer.headline(storyline)),
        ]));
    }
    table.printstd();

    if args.members {
        for (index, storyline) in storylines.iter().take(args.limit).enumerate() {
            println!(
                "\n{} {}",
                format!("#{}", index + 1).bright_blue(),
                storyline.topic.bright_yellow()
            );
            for member in storyline.cluster.members() {
                println!("  {}", display_title(member));
            }
        }
    }

    if args.noise {
        let filter = SignalFilter::from_lexicons(Tokenizer::new(&lexicons.stop_words), &lexicons);
        println!("\n{}", "Low-signal articles".bright_blue());
        for record in &records {
            if let Some(kind) = filter.classify(record.title(), record.description()) {
                println!("  [{}] {}", kind.to_string().dimmed(), display_title(record));
            }
        }
    }

    Ok(())
}
