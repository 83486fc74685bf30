//! Hashtags drawn from the brief, the audience and the goal.

use std::collections::HashSet;

use crate::composer::brief::salient_keywords;
use crate::composer::goal::goal_profile;
use crate::composer::options::Goal;

pub const MAX_HASHTAGS: usize = 5;

/// Longest single tag, `#` included.
pub const MAX_HASHTAG_CHARS: usize = 30;

/// Worst case for the block plus the blank line that separates it from the body.
pub const MAX_HASHTAG_BLOCK_CHARS: usize =
    2 + MAX_HASHTAGS * MAX_HASHTAG_CHARS + (MAX_HASHTAGS - 1);

const BRIEF_TAGS: usize = 3;
const AUDIENCE_TAGS: usize = 1;

/// Derives up to [`MAX_HASHTAGS`] tags, deduplicated case-insensitively.
pub fn derive_hashtags(brief: &str, audience: &str, goal: Goal) -> Vec<String> {
    let candidates = salient_keywords(brief)
        .into_iter()
        .take(BRIEF_TAGS)
        .chain(salient_keywords(audience).into_iter().take(AUDIENCE_TAGS))
        .chain(std::iter::once(goal_profile(goal).hashtag.to_string()));

    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for word in candidates {
        let Some(tag) = to_hashtag(&word) else {
            continue;
        };
        if seen.insert(tag.to_lowercase()) {
            tags.push(tag);
        }
        if tags.len() == MAX_HASHTAGS {
            break;
        }
    }
    tags
}

/// Tags joined by single spaces.
pub fn hashtag_block(brief: &str, audience: &str, goal: Goal) -> String {
    derive_hashtags(brief, audience, goal).join(" ")
}

/// `#` + the word's letters and digits with the first letter upper-cased.
fn to_hashtag(word: &str) -> Option<String> {
    let mut chars = word.chars().filter(|c| c.is_alphanumeric());
    let first = chars.next()?;
    let body: String = first
        .to_uppercase()
        .chain(chars)
        .take(MAX_HASHTAG_CHARS - 1)
        .collect();

    (body.chars().count() >= 2).then(|| format!("#{body}"))
}
