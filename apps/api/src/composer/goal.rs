//! Goal table: closing intent, synthesized call to action and goal hashtag.

use crate::composer::options::Goal;

/// Prefix slot for the call-to-action line.
pub const CALL_TO_ACTION_EMOJI: &str = "👉";

#[derive(Debug, Clone, Copy)]
pub struct GoalProfile {
    pub closing: &'static str,
    /// Used when the caller supplies no call to action.
    pub call_to_action: &'static str,
    /// Hashtag body, without `#`.
    pub hashtag: &'static str,
    pub closing_emoji: &'static str,
}

const ENGAGE: GoalProfile = GoalProfile {
    closing: "I'd love to hear how this lands with you. What would you add?",
    call_to_action: "Share your take in the comments below.",
    hashtag: "Community",
    closing_emoji: "💬",
};

const EDUCATE: GoalProfile = GoalProfile {
    closing: "If this helped clarify things, save it for later and pass it on to someone who could use it.",
    call_to_action: "Follow for more practical breakdowns like this one.",
    hashtag: "Learning",
    closing_emoji: "🎓",
};

// Soft pitch: an offer, never a hard sell.
const PROMOTE: GoalProfile = GoalProfile {
    closing: "If this sounds like something your team could use, we would be glad to show you how it works.",
    call_to_action: "Send me a message to see it in action.",
    hashtag: "Innovation",
    closing_emoji: "🚀",
};

const RECRUIT: GoalProfile = GoalProfile {
    closing: "We are growing the team behind this work and looking for people who want to build what comes next.",
    call_to_action: "Apply through the link in the comments or message me directly.",
    hashtag: "Hiring",
    closing_emoji: "🤝",
};

const CELEBRATE: GoalProfile = GoalProfile {
    closing: "Huge thanks to everyone who made this happen. Moments like this belong to the whole team.",
    call_to_action: "Join me in congratulating the team in the comments!",
    hashtag: "Milestone",
    closing_emoji: "🎉",
};

pub fn goal_profile(goal: Goal) -> &'static GoalProfile {
    match goal {
        Goal::Engage => &ENGAGE,
        Goal::Educate => &EDUCATE,
        Goal::Promote => &PROMOTE,
        Goal::Recruit => &RECRUIT,
        Goal::Celebrate => &CELEBRATE,
    }
}
