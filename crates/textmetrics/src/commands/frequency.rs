//! Frequency command: every word with its count.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textmetrics_core::{Analyzer, markdown};

use super::{is_markdown, read_input_file};

/// Arguments for the `frequency` subcommand.
#[derive(Args, Debug)]
pub struct FrequencyArgs {
    /// File to count (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Show only the N most frequent words.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print CSV (`Word,Frequency`) instead of a table. `--json` takes precedence.
    #[arg(long)]
    pub csv: bool,
}

/// Print the word frequency table.
#[instrument(name = "cmd_frequency", skip_all, fields(file = %args.file))]
pub fn cmd_frequency(
    args: FrequencyArgs,
    global_json: bool,
    analyzer: &Analyzer,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, limit = ?args.limit, csv = args.csv, "executing frequency command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let copy = if is_markdown(&args.file) {
        markdown::extract_copy(&content)
    } else {
        content
    };

    let mut report = analyzer.word_frequency(&copy);
    if let Some(limit) = args.limit {
        report.entries.truncate(limit);
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.csv {
        print!("{}", report.to_csv());
    } else {
        println!(
            "{} {} words, {} unique",
            args.file.bold(),
            report.total_words,
            report.unique_words
        );
        let width = report
            .entries
            .iter()
            .map(|e| e.word.chars().count())
            .max()
            .unwrap_or(0);
        for entry in &report.entries {
            println!("  {:<width$}  {}", entry.word, entry.count.cyan());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn frequency_outputs_succeed() {
        let tmp = TempDir::new().unwrap();
        let file = Utf8PathBuf::try_from(tmp.path().join("words.txt")).unwrap();
        std::fs::write(&file, "the cat and the hat").unwrap();

        for (json, csv) in [(false, false), (false, true), (true, false)] {
            let args = FrequencyArgs {
                file: file.clone(),
                limit: Some(2),
                csv,
            };
            assert!(cmd_frequency(args, json, &Analyzer::default(), None).is_ok());
        }
    }
}
