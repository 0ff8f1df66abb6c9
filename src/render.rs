//! Terminal and JSON presentation of a briefing.

use chrono::NaiveDateTime;
use colored::Colorize;
use serde_json::{json, Value};

use crate::article::ArticleRecord;
use crate::summary::Briefing;

/// Format NewsData uses for `pubDate`.
const PUB_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn print_briefing(briefing: &Briefing, records: &[ArticleRecord], top: usize) {
    println!("\n{}", "═".repeat(80).bright_blue());
    println!("{}", "SUMMARY".bright_blue());
    println!("{}", "═".repeat(80).bright_blue());
    println!("{}", briefing.paragraph);

    if !briefing.storylines.is_empty() {
        println!();
        for line in &briefing.storylines {
            println!(
                "  {} {} {}",
                "•".bright_blue(),
                line.topic.bright_yellow(),
                format!("({} articles)", line.articles).dimmed()
            );
        }
    }

    println!("\n{}", "═".repeat(80).bright_blue());
    println!("{}", format!("TOP {} ARTICLES", top.min(records.len())).bright_blue());
    println!("{}", "═".repeat(80).bright_blue());
    for record in records.iter().take(top) {
        println!("{}", display_title(record).bold());
        println!("{}", article_caption(record).dimmed());
        if let Some(link) = record.link.as_deref().filter(|l| !l.is_empty()) {
            println!("{}", link.underline());
        }
        println!("{}", "─".repeat(80).dimmed());
    }
}

pub fn briefing_json(briefing: &Briefing, records: &[ArticleRecord], top: usize) -> Value {
    json!({
        "summary": briefing.paragraph,
        "corpus_size": briefing.corpus_size,
        "filtered": briefing.filtered,
        "storylines": briefing.storylines,
        "articles": records.iter().take(top).collect::<Vec<_>>(),
    })
}

pub fn display_title(record: &ArticleRecord) -> &str {
    match record.title.as_deref() {
        Some(title) if !title.trim().is_empty() => title,
        _ => "Untitled",
    }
}

/// `"<published> | <source>"`, with the date tidied when it parses.
pub fn article_caption(record: &ArticleRecord) -> String {
    let published = record
        .pub_date
        .as_deref()
        .map(|raw| {
            NaiveDateTime::parse_from_str(raw, PUB_DATE_FORMAT)
                .map(|dt| dt.format("%b %d, %Y %H:%M").to_string())
                .unwrap_or_else(|_| raw.to_string())
        })
        .unwrap_or_default();
    let source = record.source_id.as_deref().unwrap_or("");
    format!("{} | {}", published, source)
}
