//! Analyze command: keyword density, phrases, readability, recommendations.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textmetrics_core::{AnalysisResult, Analyzer, DensityStatus, KeywordEntry, markdown};

use super::{is_markdown, read_input_file};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Target keyword or phrase to measure.
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Rows to show per table in text output.
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

/// Run the full analysis on a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    analyzer: &Analyzer,
    config_keyword: Option<&str>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let keyword = args.keyword.as_deref().or(config_keyword);
    debug!(file = %args.file, keyword = ?keyword, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let copy = if is_markdown(&args.file) {
        markdown::extract_copy(&content)
    } else {
        content
    };

    let result = analyzer.analyze(&copy, keyword);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_summary(&args.file, &result);
    print_table("Keywords", &result.keywords, args.top);
    print_table("Phrases", &result.phrases, args.top);

    if result.recommendations.is_empty() {
        println!("\n  {} none", "Recommendations:".cyan());
    } else {
        println!("\n  {}", "Recommendations:".cyan());
        for rec in &result.recommendations {
            println!("    - {rec}");
        }
    }

    Ok(())
}

fn print_summary(file: &Utf8Path, result: &AnalysisResult) {
    println!("{}", file.bold());
    println!(
        "\n  {} {} total, {} unique, {} stop words, {} characters",
        "Words:".cyan(),
        result.total_words,
        result.unique_words,
        result.stop_word_count,
        result.total_characters,
    );
    println!(
        "  {} {:.1} ({}), {} sentences",
        "Readability:".cyan(),
        result.readability_score,
        result.reading_level,
        result.sentence_count,
    );
    if let Some(ref target) = result.target_keyword {
        println!(
            "  {} \"{}\" x{} ({:.2}%)",
            "Target:".cyan(),
            target.keyword,
            target.occurrences,
            target.density,
        );
    }
}

fn print_table(title: &str, entries: &[KeywordEntry], top: usize) {
    if entries.is_empty() {
        return;
    }
    println!("\n  {}", format!("{title}:").cyan());
    let width = entries
        .iter()
        .take(top)
        .map(|e| e.term.chars().count())
        .max()
        .unwrap_or(0);
    for entry in entries.iter().take(top) {
        println!(
            "    {:<width$}  {:>4}  {:>6.2}%  {}",
            entry.term,
            entry.count,
            entry.density,
            status_label(entry.status),
        );
    }
}

fn status_label(status: DensityStatus) -> String {
    match status {
        DensityStatus::Optimal => status.as_str().green().to_string(),
        DensityStatus::Low => status.as_str().dimmed().to_string(),
        DensityStatus::High => status.as_str().yellow().to_string(),
        DensityStatus::KeywordStuffing => status.as_str().red().bold().to_string(),
    }
}
