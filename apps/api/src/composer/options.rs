//! Post options: the closed variant sets, the validated input the composer
//! accepts, and the single error kind it can return.
//!
//! Defaults are applied here (at the boundary), never inside composition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Audience used when the caller supplies none.
pub const DEFAULT_AUDIENCE: &str = "professionals on LinkedIn";

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

/// Why an input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputReason {
    #[error("brief must not be empty")]
    EmptyBrief,

    #[error("unrecognized {field} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("call to action must be at most {max} characters")]
    CallToActionTooLong { max: usize },
}

/// Composer error. `InvalidInput` is the only kind: composition is pure, so
/// every failure is caused by the request and is recoverable by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputReason),
}

// ────────────────────────────────────────────────────────────────────────────
// Variant sets
// ────────────────────────────────────────────────────────────────────────────

/// Stylistic register applied to phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    #[serde(rename = "Thought Leadership")]
    ThoughtLeadership,
    Storytelling,
    Analytical,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Friendly,
        Tone::ThoughtLeadership,
        Tone::Storytelling,
        Tone::Analytical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Friendly => "Friendly",
            Tone::ThoughtLeadership => "Thought Leadership",
            Tone::Storytelling => "Storytelling",
            Tone::Analytical => "Analytical",
        }
    }
}

/// Intended effect of the post. Shapes the closing and the default call to action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Goal {
    Engage,
    #[default]
    Educate,
    Promote,
    Recruit,
    Celebrate,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::Engage,
        Goal::Educate,
        Goal::Promote,
        Goal::Recruit,
        Goal::Celebrate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Goal::Engage => "Engage",
            Goal::Educate => "Educate",
            Goal::Promote => "Promote",
            Goal::Recruit => "Recruit",
            Goal::Celebrate => "Celebrate",
        }
    }
}

/// Structural shape of the rendered post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Format {
    #[default]
    List,
    Tips,
    Story,
    #[serde(rename = "Case Study")]
    CaseStudy,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::List, Format::Tips, Format::Story, Format::CaseStudy];

    pub fn label(self) -> &'static str {
        match self {
            Format::List => "List",
            Format::Tips => "Tips",
            Format::Story => "Story",
            Format::CaseStudy => "Case Study",
        }
    }
}

/// Target size of the post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    pub const ALL: [Length; 3] = [Length::Short, Length::Medium, Length::Long];

    pub fn label(self) -> &'static str {
        match self {
            Length::Short => "Short",
            Length::Medium => "Medium",
            Length::Long => "Long",
        }
    }
}

/// Matches `value` against the canonical labels of `all`, ignoring ASCII case
/// and surrounding whitespace.
fn parse_variant<T: Copy>(
    field: &'static str,
    value: &str,
    all: &[T],
    label: fn(T) -> &'static str,
) -> Result<T, ComposeError> {
    let wanted = value.trim();
    all.iter()
        .copied()
        .find(|&v| label(v).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| {
            InvalidInputReason::UnknownVariant {
                field,
                value: value.to_string(),
                expected: all.iter().map(|&v| label(v)).collect::<Vec<_>>().join(", "),
            }
            .into()
        })
}

impl FromStr for Tone {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("tone", s, &Tone::ALL, Tone::label)
    }
}

impl FromStr for Goal {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("goal", s, &Goal::ALL, Goal::label)
    }
}

impl FromStr for Format {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("format", s, &Format::ALL, Format::label)
    }
}

impl FromStr for Length {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("length", s, &Length::ALL, Length::label)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Input / output
// ────────────────────────────────────────────────────────────────────────────

/// Fully populated composer input. Immutable per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub brief: String,
    pub audience: String,
    pub tone: Tone,
    pub goal: Goal,
    pub format: Format,
    pub length: Length,
    pub include_hashtags: bool,
    pub include_emojis: bool,
    pub call_to_action: Option<String>,
}

impl GenerateOptions {
    /// Options for `brief` with every other field at its default.
    pub fn new(brief: impl Into<String>) -> Self {
        Self {
            brief: brief.into(),
            audience: DEFAULT_AUDIENCE.to_string(),
            tone: Tone::default(),
            goal: Goal::default(),
            format: Format::default(),
            length: Length::default(),
            include_hashtags: false,
            include_emojis: false,
            call_to_action: None,
        }
    }
}

/// Rendered post. `characters` is the Unicode scalar count of `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResult {
    pub content: String,
    pub characters: usize,
}
