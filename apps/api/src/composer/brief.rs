//! Splits raw brief notes into points and finds salient keywords.
//!
//! No phrasing happens here; the tables in `tone`, `goal` and `format` wrap
//! whatever points this module extracts.

use std::cmp::Reverse;
use std::collections::HashMap;

pub const ELLIPSIS: char = '…';

/// Words that never become hashtags.
const STOP_WORDS: &[&str] = &[
    "about", "across", "after", "again", "also", "always", "because", "been", "before", "being",
    "between", "both", "built", "could", "does", "doing", "done", "during", "each", "even", "every",
    "from", "have", "having", "helped", "here", "into", "just", "launched", "like", "made", "make", "many", "more",
    "most", "much", "must", "only", "other", "ours", "over", "really", "same", "shipped", "should", "some",
    "still", "such", "than", "that", "their", "them", "then", "there", "these", "they", "this",
    "those", "through", "using", "very", "want", "were", "what", "when", "where", "which", "while",
    "will", "with", "without", "worked", "would", "your", "yours",
];

/// Splits a brief into points.
///
/// Multi-line briefs yield one point per non-empty line with list markers
/// (`-`, `*`, `•`, `1.`, `2)`) removed. Single-line briefs yield one point per
/// sentence. Whitespace inside a point is collapsed; points are never clipped
/// here, the length budget decides what survives.
pub fn extract_points(brief: &str) -> Vec<String> {
    let brief = brief.trim();

    let raw: Vec<String> = if brief.contains('\n') {
        brief
            .lines()
            .map(|line| strip_list_marker(line.trim()).trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    } else {
        split_sentences(brief)
    };

    let points: Vec<String> = raw.iter().map(|p| collapse_whitespace(p)).collect();

    if points.is_empty() && !brief.is_empty() {
        return vec![collapse_whitespace(brief)];
    }
    points
}

/// Salient words of `text`, most frequent first, ties broken by first appearance.
///
/// A word qualifies when it starts with a letter, has at least four characters
/// and is not a stop word. The first-seen spelling is returned so that
/// `LinkedIn` keeps its casing.
pub fn salient_keywords(text: &str) -> Vec<String> {
    // lowercase word -> (first position, count, original spelling)
    let mut seen: HashMap<String, (usize, usize, String)> = HashMap::new();

    let words = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() >= 4)
        .filter(|w| w.chars().next().is_some_and(char::is_alphabetic));

    for (position, word) in words.enumerate() {
        let lower = word.to_lowercase();
        if STOP_WORDS.contains(&lower.as_str()) {
            continue;
        }
        seen.entry(lower)
            .and_modify(|(_, count, _)| *count += 1)
            .or_insert((position, 1, word.to_string()));
    }

    let mut ranked: Vec<(usize, usize, String)> = seen.into_values().collect();
    ranked.sort_by_key(|(first, count, _)| (Reverse(*count), *first));
    ranked.into_iter().map(|(_, _, word)| word).collect()
}

/// Clips `text` to at most `max_chars` characters, cutting at the last word
/// boundary and appending `…`.
///
/// Returns `None` when not even the first word fits; words are never split.
pub fn clip_at_word(text: &str, max_chars: usize) -> Option<String> {
    if text.chars().count() <= max_chars {
        return Some(text.to_string());
    }

    let keep = max_chars.saturating_sub(1);
    let cut = text
        .char_indices()
        .nth(keep)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let prefix = &text[..cut];

    let head = if text[cut..].starts_with(char::is_whitespace) {
        prefix
    } else {
        &prefix[..prefix.rfind(char::is_whitespace)?]
    };

    let head = trim_dangling(head);
    if head.is_empty() {
        return None;
    }
    Some(format!("{head}{ELLIPSIS}"))
}

/// Keeps the first `max_words` words of `text`, appending `…` when anything
/// was dropped.
pub fn clip_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.to_string();
    }
    let head = words[..max_words].join(" ");
    format!("{}{ELLIPSIS}", trim_dangling(&head))
}

/// Collapses every whitespace run (including line breaks) to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn trim_dangling(text: &str) -> &str {
    text.trim_end()
        .trim_end_matches(&[',', ';', ':', '-', '–', '—'][..])
        .trim_end()
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        if let Some(&(_, next)) = chars.peek() {
            if next.is_whitespace() {
                let end = i + c.len_utf8();
                push_trimmed(&mut sentences, &text[start..end]);
                start = end;
            }
        }
    }
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}

/// Removes a leading list marker. Numbered markers are at most two digits so
/// that a year opening a sentence ("2024. What a year") survives.
fn strip_list_marker(line: &str) -> &str {
    let mut chars = line.char_indices();
    match chars.next() {
        Some((_, '-' | '*' | '•' | '–' | '—' | '>')) => match chars.next() {
            Some((i, c)) if c.is_whitespace() => &line[i..],
            _ => line,
        },
        Some((_, c)) if c.is_ascii_digit() => {
            let digits_end = line
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(line.len());
            if digits_end > 2 {
                return line;
            }
            let rest = &line[digits_end..];
            let mut tail = rest.chars();
            match (tail.next(), tail.next()) {
                (Some('.' | ')'), Some(ws)) if ws.is_whitespace() => &rest[1..],
                _ => line,
            }
        }
        _ => line,
    }
}
