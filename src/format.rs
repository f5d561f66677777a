//! Source formatting: URL deduplication and bounded-length rendering.
//!
//! Turns a list of [`SearchResult`] records into a single text report
//! suitable for LLM consumption. Duplicate URLs are dropped (first
//! occurrence wins) and raw page text is truncated to an approximate
//! token budget.

use std::collections::HashSet;

use crate::types::SearchResult;

/// Marker appended to raw content that was cut at the character limit.
const TRUNCATION_MARKER: &str = "... [truncated]";

/// Characters per token used for the raw-content budget. A rough
/// approximation, not tokenizer-exact.
const CHARS_PER_TOKEN: usize = 4;

/// Format search results into a deduplicated, bounded-length report.
///
/// Results are deduplicated by exact URL: when a URL repeats, the first
/// occurrence wins and later ones are dropped entirely. Retained records
/// render in first-seen order as a titled block with URL and snippet.
/// When `include_raw_content` is set, each block also carries the raw
/// page text limited to `max_tokens_per_source * 4` characters, with
/// `... [truncated]` appended when the limit cut anything. A record whose
/// raw content is absent or empty renders an empty body and logs a
/// warning naming its URL; processing continues.
///
/// Pure and deterministic: identical input order yields identical output.
pub fn format_sources(
    results: &[SearchResult],
    max_tokens_per_source: usize,
    include_raw_content: bool,
) -> String {
    // Deduplicate by URL, first write wins, insertion order preserved.
    let mut seen = HashSet::new();
    let unique: Vec<&SearchResult> = results
        .iter()
        .filter(|source| seen.insert(source.url.as_str()))
        .collect();

    let mut formatted = String::from("Sources:\n\n");
    for source in unique {
        formatted.push_str(&format!("Source {}:\n===\n", source.title));
        formatted.push_str(&format!("URL: {}\n===\n", source.url));
        formatted.push_str(&format!(
            "Most relevant content from source: {}\n===\n",
            source.content
        ));
        if include_raw_content {
            let raw = match source.raw_content.as_deref() {
                Some(text) if !text.is_empty() => text,
                _ => {
                    tracing::warn!(url = %source.url, "no raw content for source");
                    ""
                }
            };
            let body = truncate_chars(raw, max_tokens_per_source * CHARS_PER_TOKEN);
            formatted.push_str(&format!(
                "Full source content limited to {max_tokens_per_source} tokens: {body}\n\n"
            ));
        }
    }

    formatted.trim_end().to_owned()
}

/// Format results as a bullet list, one `* title : url` line per record.
///
/// No deduplication, no truncation; output order is input order.
pub fn bullet_sources(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|source| format!("* {} : {}", source.title, source.url))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Truncate `text` to at most `limit` characters, appending the
/// truncation marker when anything was cut. Counts chars, not bytes, so
/// multi-byte text is never split mid-character.
fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => format!("{}{TRUNCATION_MARKER}", &text[..byte_index]),
        None => text.to_owned(),
    }
}
