//! Length and character budgets.
//!
//! # Limits
//! - soft warning: 2400 characters (the form turns the counter amber)
//! - hard ceiling: 2900 characters (red); composed posts never exceed it
//! - platform limit: 3000 characters
//!
//! # Truncation
//! The body is budgeted as if emojis were on and the largest possible hashtag
//! block were attached, so the flags never change which points survive.
//! Whole points are dropped from the end first; a lone oversized point is
//! clipped at a word boundary.

use serde::Serialize;

use crate::composer::hashtags::MAX_HASHTAG_BLOCK_CHARS;
use crate::composer::options::Length;

pub const SOFT_WARNING_CHARS: usize = 2400;
pub const HARD_CEILING_CHARS: usize = 2900;
pub const PLATFORM_LIMIT_CHARS: usize = 3000;

/// Longest audience phrase injected into the hook.
pub const MAX_AUDIENCE_CHARS: usize = 80;

/// Characters available to everything except the hashtag block.
pub const BODY_CHAR_LIMIT: usize = HARD_CEILING_CHARS - MAX_HASHTAG_BLOCK_CHARS;

/// Points kept when the word ceiling cannot be met any other way.
pub const MIN_POINT_WORDS: usize = 5;

/// Upper bound on everything a post carries besides its points and call to
/// action: hook with the longest audience, section headings, insight,
/// reflection, closing, emoji prefixes and section breaks. Checked against
/// every tone, goal and format combination in the engine tests.
pub const MAX_FIXED_PHRASING_CHARS: usize = 800;

/// Room always left for at least one point next to a maximal call to action.
pub const MIN_POINT_CHARS: usize = 120;

/// Longest call to action accepted verbatim (1824). Anything up to this still
/// leaves a point of [`MIN_POINT_CHARS`] inside [`BODY_CHAR_LIMIT`].
pub const MAX_CALL_TO_ACTION_CHARS: usize =
    BODY_CHAR_LIMIT - MAX_FIXED_PHRASING_CHARS - MIN_POINT_CHARS;

/// How much a post may elaborate on its brief.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBudget {
    pub max_points: usize,
    /// Upper bound on words, excluding a caller-supplied call to action and hashtags.
    pub word_ceiling: usize,
    pub insight: bool,
    pub reflection: bool,
}

impl LengthBudget {
    pub const fn for_length(length: Length) -> Self {
        match length {
            Length::Short => Self {
                max_points: 3,
                word_ceiling: 120,
                insight: false,
                reflection: false,
            },
            Length::Medium => Self {
                max_points: 5,
                word_ceiling: 220,
                insight: true,
                reflection: false,
            },
            Length::Long => Self {
                max_points: 8,
                word_ceiling: 350,
                insight: true,
                reflection: true,
            },
        }
    }
}

/// Counter band shown next to the character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterBand {
    Comfortable,
    NearLimit,
    OverLimit,
}

impl CharacterBand {
    pub fn classify(characters: usize) -> Self {
        if characters > HARD_CEILING_CHARS {
            CharacterBand::OverLimit
        } else if characters > SOFT_WARNING_CHARS {
            CharacterBand::NearLimit
        } else {
            CharacterBand::Comfortable
        }
    }
}

/// Limits advertised to clients.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CharacterLimits {
    pub soft: usize,
    pub hard: usize,
    pub platform: usize,
}

pub const CHARACTER_LIMITS: CharacterLimits = CharacterLimits {
    soft: SOFT_WARNING_CHARS,
    hard: HARD_CEILING_CHARS,
    platform: PLATFORM_LIMIT_CHARS,
};
