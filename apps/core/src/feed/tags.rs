//! Hashtag extraction.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum number of tags kept on a post.
pub const MAX_TAGS: usize = 6;

// NOTE: expect() is acceptable here: the pattern is a literal.
// Word characters are ASCII only: `#Automatización` yields `#Automatizaci`.
static HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9A-Za-z_]+").expect("Invalid regex: hashtag pattern"));

/// Takes the first [`MAX_TAGS`] `#word` tokens, then drops repeats keeping
/// first appearance. Repeated tokens count toward the cap.
pub fn extract_tags(text: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for m in HASHTAG.find_iter(text).take(MAX_TAGS) {
        if !tags.iter().any(|t| t == m.as_str()) {
            tags.push(m.as_str().to_string());
        }
    }
    tags
}
