//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod frequency;
pub mod info;
pub mod readability;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod stats;

/// Path that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read a file (or stdin for `-`) and validate its size against the
/// configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        return read_stdin(max_bytes);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    let mut stdin = std::io::stdin().lock();
    let read = match max_bytes {
        // One byte past the limit is enough to know it was exceeded.
        Some(max) => stdin
            .by_ref()
            .take((max as u64).saturating_add(1))
            .read_to_end(&mut bytes),
        None => stdin.read_to_end(&mut bytes),
    };
    read.context("failed to read standard input")?;

    if let Some(max) = max_bytes
        && bytes.len() > max
    {
        anyhow::bail!("input too large: standard input exceeds {max} bytes");
    }
    String::from_utf8(bytes).context("standard input is not valid UTF-8")
}

/// Whether `path` should be treated as markdown.
pub fn is_markdown(path: &Utf8Path) -> bool {
    matches!(path.extension(), Some("md" | "markdown"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn reads_file_within_limit() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("page.txt")).unwrap();
        std::fs::write(&path, "Fast hosting.").unwrap();

        assert_eq!(read_input_file(&path, Some(100)).unwrap(), "Fast hosting.");
        assert_eq!(read_input_file(&path, None).unwrap(), "Fast hosting.");
    }

    #[test]
    fn rejects_file_over_limit() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("page.txt")).unwrap();
        std::fs::write(&path, "x".repeat(64)).unwrap();

        let err = read_input_file(&path, Some(10)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn missing_file_names_path() {
        let err = read_input_file(Utf8Path::new("/nonexistent/page.md"), None).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/page.md"));
    }

    #[test]
    fn markdown_detection() {
        assert!(is_markdown(Utf8Path::new("post.md")));
        assert!(is_markdown(Utf8Path::new("post.markdown")));
        assert!(!is_markdown(Utf8Path::new("post.txt")));
        assert!(!is_markdown(Utf8Path::new("-")));
    }
}
