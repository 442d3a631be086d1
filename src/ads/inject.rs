//! Ad fragment injection at paragraph boundaries.
//!
//! Upstream article bodies are trusted HTML rendered as-is; injection is a
//! textual scan for closing paragraph tags, not a DOM walk. Content with
//! fewer boundaries than expected simply receives fewer fragments.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `</p>` in any casing.
static PARAGRAPH_CLOSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</p>").expect("Invalid regex pattern"));

/// Inserts body fragments into article HTML after the 2nd and 4th
/// paragraph.
///
/// Boundary offsets are collected from the original input in document
/// order; the second insertion position is shifted by the length of the
/// first insertion. Fewer than two boundaries returns the input unchanged,
/// and an empty fragment leaves its slot untouched.
///
/// The input is never mutated; callers can re-render from the cached
/// original at any time.
pub fn inject_content_ads(html: &str, after_paragraph2: &str, after_paragraph4: &str) -> String {
    let boundaries: Vec<usize> = PARAGRAPH_CLOSE_REGEX
        .find_iter(html)
        .map(|m| m.end())
        .collect();

    if boundaries.len() < 2 {
        return html.to_string();
    }

    let mut result = html.to_string();
    let mut offset = 0;

    if !after_paragraph2.is_empty() {
        result.insert_str(boundaries[1], after_paragraph2);
        offset += after_paragraph2.len();
    }

    if boundaries.len() >= 4 && !after_paragraph4.is_empty() {
        result.insert_str(boundaries[3] + offset, after_paragraph4);
    }

    result
}
