//! Final text assembly.

/// One rendered line. `emoji` marks a decoration slot; when emojis are
/// enabled it is written as a `"{emoji} "` prefix and nothing else changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub emoji: Option<&'static str>,
    pub text: String,
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            emoji: None,
            text: text.into(),
        }
    }

    pub fn decorated(emoji: &'static str, text: impl Into<String>) -> Self {
        Self {
            emoji: Some(emoji),
            text: text.into(),
        }
    }

    fn render(&self, with_emojis: bool) -> String {
        match self.emoji {
            Some(emoji) if with_emojis => format!("{emoji} {}", self.text),
            _ => self.text.clone(),
        }
    }
}

/// Lines rendered together; sections are separated by one blank line.
pub type Section = Vec<Line>;

/// Renders sections and normalises the result.
pub fn render_sections<'a>(sections: impl IntoIterator<Item = &'a Section>, with_emojis: bool) -> String {
    let blocks: Vec<String> = sections
        .into_iter()
        .map(|section| {
            section
                .iter()
                .map(|line| line.render(with_emojis))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect();
    normalize(&blocks.join("\n\n"))
}

/// Trims trailing whitespace on every line, collapses runs of blank lines to
/// one, and trims the whole text.
pub fn normalize(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut previous_blank = true;

    for line in text.lines().map(str::trim_end) {
        let blank = line.is_empty();
        if blank && previous_blank {
            continue;
        }
        out.push(line);
        previous_blank = blank;
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}

/// Character count in Unicode scalar values, the unit the platform limit uses.
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// Words are whitespace-separated tokens carrying at least one letter or digit,
/// so list markers such as `•` do not count.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .count()
}
