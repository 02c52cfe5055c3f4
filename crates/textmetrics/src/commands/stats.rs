//! Stats command: word counter.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textmetrics_core::{markdown, stats};

use super::{is_markdown, read_input_file};

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File to count (`-` for stdin).
    pub file: Utf8PathBuf,
}

/// Print character, word, sentence, and paragraph counts with reading time.
#[instrument(name = "cmd_stats", skip_all, fields(file = %args.file))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing stats command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let copy = if is_markdown(&args.file) {
        markdown::extract_copy(&content)
    } else {
        content
    };

    let report = stats::text_statistics(&copy);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    let rows = [
        ("Characters", report.characters),
        ("Characters (no spaces)", report.characters_no_spaces),
        ("Words", report.words),
        ("Sentences", report.sentences),
        ("Paragraphs", report.paragraphs),
        ("Avg words/sentence", report.average_words_per_sentence),
    ];
    for (label, value) in rows {
        println!("  {:<24} {value}", format!("{label}:").dimmed());
    }
    println!(
        "  {:<24} {} min",
        "Reading time:".dimmed(),
        report.reading_time_minutes
    );
    println!(
        "  {:<24} {} min",
        "Speaking time:".dimmed(),
        report.speaking_time_minutes
    );

    Ok(())
}
