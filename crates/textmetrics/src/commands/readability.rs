//! Readability command: Flesch Reading Ease scoring.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textmetrics_core::Analyzer;

use super::{is_markdown, read_input_file};

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Minimum acceptable reading-ease score (0-100).
    #[arg(long)]
    pub min_score: Option<f64>,
}

/// Score readability of a file; fail when it is below the minimum.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    analyzer: &Analyzer,
    config_min_score: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing readability command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let strip_md = is_markdown(&args.file);
    let min_score = args.min_score.or(config_min_score);

    let report = analyzer.readability(&content, strip_md, min_score);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.below_min {
        let min = report.min_score.unwrap_or(0.0);
        bail!(
            "{} scores {:.1} (min: {:.0}). Use shorter sentences and simpler words.",
            args.file,
            report.score,
            min,
        );
    } else if let Some(min) = report.min_score {
        println!(
            "{} {} scores {:.1} (min: {:.0})",
            "PASS:".green(),
            args.file,
            report.score,
            min,
        );
    } else {
        println!("{:.1} ({})", report.score, report.level);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const EASY: &str = "The cat sat on the mat. The dog ran fast.";
    const HARD: &str = "Institutionalization necessitates comprehensive organizational \
                        reconsideration regarding interdepartmental communication.";

    fn file_with(content: &str) -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("copy.txt")).unwrap();
        std::fs::write(&path, content).unwrap();
        (tmp, path)
    }

    #[test]
    fn passes_without_minimum() {
        let (_tmp, file) = file_with(EASY);
        let args = ReadabilityArgs {
            file,
            min_score: None,
        };
        assert!(cmd_readability(args, false, &Analyzer::default(), None, None).is_ok());
    }

    #[test]
    fn fails_below_minimum() {
        let (_tmp, file) = file_with(HARD);
        let args = ReadabilityArgs {
            file,
            min_score: Some(60.0),
        };
        let err = cmd_readability(args, false, &Analyzer::default(), None, None).unwrap_err();
        assert!(err.to_string().contains("min: 60"));
    }

    #[test]
    fn config_minimum_applies_when_flag_absent() {
        let (_tmp, file) = file_with(HARD);
        let args = ReadabilityArgs {
            file,
            min_score: None,
        };
        assert!(cmd_readability(args, false, &Analyzer::default(), Some(60.0), None).is_err());
    }

    #[test]
    fn json_output_never_fails_the_gate() {
        let (_tmp, file) = file_with(HARD);
        let args = ReadabilityArgs {
            file,
            min_score: Some(60.0),
        };
        assert!(cmd_readability(args, true, &Analyzer::default(), None, None).is_ok());
    }
}
