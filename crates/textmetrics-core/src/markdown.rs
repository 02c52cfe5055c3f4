//! Markdown to plain text.
//!
//! Web copy is often drafted in markdown. Before counting keywords the
//! markup has to go: code, HTML, and frontmatter are dropped and only the
//! visible text survives. Parsing uses pulldown-cmark so nested structures
//! and reference links come out right.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// What to keep when flattening markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProseOptions {
    /// Keep heading text. Headings carry keywords but are not sentences.
    pub headings: bool,
}

/// Flatten markdown into readable prose, headings removed.
///
/// This is the input for readability scoring: a heading has no terminal
/// punctuation and would otherwise merge into the following sentence.
pub fn strip_to_prose(text: &str) -> String {
    flatten(text, ProseOptions { headings: false })
}

/// Flatten markdown into the visible copy, headings included.
///
/// This is the input for keyword analysis.
pub fn extract_copy(text: &str) -> String {
    flatten(text, ProseOptions { headings: true })
}

/// Flatten markdown with explicit options.
///
/// Always removes frontmatter, fenced and indented code, inline code, raw
/// HTML, and image alt text. Keeps paragraph, list, quote, table cell, link,
/// and emphasis text. Block boundaries become blank lines.
#[tracing::instrument(skip(text), fields(input_len = text.len()))]
pub fn flatten(text: &str, options: ProseOptions) -> String {
    let body = without_frontmatter(text);
    let parser = Parser::new_ext(
        body,
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES,
    );

    let mut out = String::with_capacity(body.len());
    let mut hidden: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Image { .. }) => hidden += 1,
            Event::End(TagEnd::CodeBlock | TagEnd::Image) => hidden = hidden.saturating_sub(1),
            Event::Start(Tag::Heading { .. }) if !options.headings => hidden += 1,
            Event::End(TagEnd::Heading(_)) if !options.headings => {
                hidden = hidden.saturating_sub(1);
            }

            Event::Text(t) if hidden == 0 => out.push_str(&t),
            Event::SoftBreak | Event::HardBreak if hidden == 0 => out.push(' '),
            Event::End(TagEnd::TableCell) if hidden == 0 => out.push(' '),
            Event::End(
                TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::TableRow,
            ) if hidden == 0 => push_block_break(&mut out),

            // Inline code, raw HTML, footnote markers and rules carry no copy.
            _ => {}
        }
    }

    out.trim_end().to_string()
}

fn push_block_break(out: &mut String) {
    let trimmed = out.trim_end_matches([' ', '\n']).len();
    if trimmed == 0 {
        out.clear();
        return;
    }
    out.truncate(trimmed);
    out.push_str("\n\n");
}

/// Slice off a leading `---` YAML block, if present and closed.
fn without_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_open) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close) = after_open.find("\n---") else {
        return text;
    };
    let rest = &after_open[close + 4..];
    rest.strip_prefix('\n').unwrap_or(rest)
}
