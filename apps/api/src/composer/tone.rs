//! Maps each tone to its opening hook and elaboration phrasing.
//!
//! Storytelling opens with a narrative hook, Analytical with a claim framed by
//! data. `{audience}` in a hook is replaced with the normalised audience.

use crate::composer::options::Tone;

/// Phrasing calibrated to a single tone.
#[derive(Debug, Clone, Copy)]
pub struct ToneProfile {
    pub hook: &'static str,
    /// Added for Medium and Long posts.
    pub insight: &'static str,
    /// Added for Long posts only.
    pub reflection: &'static str,
    pub hook_emoji: &'static str,
    pub insight_emoji: &'static str,
}

impl ToneProfile {
    pub fn hook_for(&self, audience: &str) -> String {
        self.hook.replace("{audience}", audience)
    }
}

const PROFESSIONAL: ToneProfile = ToneProfile {
    hook: "A quick update worth sharing with {audience}.",
    insight: "Why it matters: deliberate improvements compound into results that teams and customers actually notice.",
    reflection: "The lesson for me is simple. Clear goals and honest measurement do most of the heavy lifting, and follow-through does the rest.",
    hook_emoji: "💼",
    insight_emoji: "📌",
};

const FRIENDLY: ToneProfile = ToneProfile {
    hook: "Hey {audience}, I have something good to share today!",
    insight: "Why I'm excited: this is the kind of progress that makes the day-to-day work feel lighter for everyone.",
    reflection: "Honestly, none of this happened in isolation. It came from people who cared enough to try something new and kept going when it got messy.",
    hook_emoji: "👋",
    insight_emoji: "✨",
};

const THOUGHT_LEADERSHIP: ToneProfile = ToneProfile {
    hook: "A perspective for {audience} on where this work is heading.",
    insight: "The bigger picture: the teams that win next will treat moments like this as signals, not one-off events.",
    reflection: "My view is that the coming years will reward people who question defaults early. The cost of waiting is usually higher than the cost of trying.",
    hook_emoji: "💡",
    insight_emoji: "🔭",
};

const STORYTELLING: ToneProfile = ToneProfile {
    hook: "A while ago I would not have believed how this turned out. Here is the story, and why {audience} might recognise it.",
    insight: "What stayed with me: the turning point was not one big decision but a series of small ones made under uncertainty.",
    reflection: "Looking back, the hardest part was the beginning, when nothing was proven yet. If you are in that phase right now, keep going.",
    hook_emoji: "📖",
    insight_emoji: "🧭",
};

const ANALYTICAL: ToneProfile = ToneProfile {
    hook: "The numbers first. Here is what the data shows, and what {audience} can take from it.",
    insight: "Why it matters: a change is only real once it shows up in the metrics you already track.",
    reflection: "A note on method: establish a baseline before changing anything, measure the same way afterwards, and be explicit about what else moved in the meantime.",
    hook_emoji: "📊",
    insight_emoji: "🔍",
};

/// Returns the phrasing profile for `tone`.
pub fn tone_profile(tone: Tone) -> &'static ToneProfile {
    match tone {
        Tone::Professional => &PROFESSIONAL,
        Tone::Friendly => &FRIENDLY,
        Tone::ThoughtLeadership => &THOUGHT_LEADERSHIP,
        Tone::Storytelling => &STORYTELLING,
        Tone::Analytical => &ANALYTICAL,
    }
}
