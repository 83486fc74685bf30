//! Post composition: the pure transformation from options to rendered post.
//!
//! Flow: normalise → extract points → select skeleton (format) → phrase
//! (tone, goal) → fit budgets → decorate (emojis, hashtags) → count.
//!
//! Stateless and deterministic: identical options always yield identical output.

use tracing::{debug, warn};

use crate::composer::brief::{
    clip_at_word, clip_words, collapse_whitespace, extract_points, ELLIPSIS,
};
use crate::composer::budget::{
    CharacterBand, LengthBudget, BODY_CHAR_LIMIT, MAX_AUDIENCE_CHARS, MAX_CALL_TO_ACTION_CHARS,
    MIN_POINT_WORDS,
};
use crate::composer::format::body_sections;
use crate::composer::goal::{goal_profile, CALL_TO_ACTION_EMOJI};
use crate::composer::hashtags::hashtag_block;
use crate::composer::options::{
    ComposeError, GenerateOptions, GenerateResult, InvalidInputReason, DEFAULT_AUDIENCE,
};
use crate::composer::render::{count_characters, count_words, render_sections, Line, Section};
use crate::composer::tone::tone_profile;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Turns options into a post. Implement this to swap the wording without
/// touching the handler or its callers.
///
/// Carried in `AppState` as `Arc<dyn PostComposer>`.
pub trait PostComposer: Send + Sync {
    fn compose(&self, options: &GenerateOptions) -> Result<GenerateResult, ComposeError>;
}

/// Default composer backed by the static tone, goal and format tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateComposer;

impl PostComposer for TemplateComposer {
    fn compose(&self, options: &GenerateOptions) -> Result<GenerateResult, ComposeError> {
        compose_post(options)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Composition
// ────────────────────────────────────────────────────────────────────────────

/// Composes a post from `options`.
///
/// Fails only with `InvalidInput`: a blank brief or an over-long call to action.
pub fn compose_post(options: &GenerateOptions) -> Result<GenerateResult, ComposeError> {
    let normalized = Normalized::from_options(options)?;
    let draft = fit_to_budget(options, &normalized);

    let mut content = draft.render(options.include_emojis);
    if options.include_hashtags {
        let block = hashtag_block(normalized.brief, &normalized.audience, options.goal);
        if !block.is_empty() {
            content.push_str("\n\n");
            content.push_str(&block);
        }
    }

    let characters = count_characters(&content);
    debug!(
        tone = %options.tone,
        goal = %options.goal,
        format = %options.format,
        length = %options.length,
        characters,
        "Composed post"
    );
    if CharacterBand::classify(characters) != CharacterBand::Comfortable {
        warn!(characters, "Composed post is close to the platform limit");
    }

    Ok(GenerateResult {
        content,
        characters,
    })
}

/// Options after trimming and fallback to defaults.
struct Normalized<'a> {
    brief: &'a str,
    audience: String,
    call_to_action: Option<String>,
}

impl<'a> Normalized<'a> {
    fn from_options(options: &'a GenerateOptions) -> Result<Self, ComposeError> {
        let brief = options.brief.trim();
        if brief.is_empty() {
            return Err(InvalidInputReason::EmptyBrief.into());
        }

        let audience = collapse_whitespace(&options.audience);
        let audience = clip_at_word(&audience, MAX_AUDIENCE_CHARS)
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_AUDIENCE.to_string());

        let call_to_action = options
            .call_to_action
            .as_deref()
            .map(single_line)
            .filter(|cta| !cta.is_empty());
        if let Some(cta) = &call_to_action {
            if count_characters(cta) > MAX_CALL_TO_ACTION_CHARS {
                return Err(InvalidInputReason::CallToActionTooLong {
                    max: MAX_CALL_TO_ACTION_CHARS,
                }
                .into());
            }
        }

        Ok(Self {
            brief,
            audience,
            call_to_action,
        })
    }
}

/// Trims a call to action and joins its lines with single spaces. Spacing
/// within a line is kept as written.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A post before decoration. The call to action is always the last section.
struct Draft {
    sections: Vec<Section>,
    user_call_to_action: bool,
}

impl Draft {
    fn assemble(options: &GenerateOptions, normalized: &Normalized<'_>, points: &[String]) -> Self {
        let tone = tone_profile(options.tone);
        let goal = goal_profile(options.goal);
        let budget = LengthBudget::for_length(options.length);

        let mut sections = vec![vec![Line::decorated(
            tone.hook_emoji,
            tone.hook_for(&normalized.audience),
        )]];
        sections.extend(body_sections(options.format, points));
        if budget.insight {
            sections.push(vec![Line::decorated(tone.insight_emoji, tone.insight)]);
        }
        if budget.reflection {
            sections.push(vec![Line::plain(tone.reflection)]);
        }
        sections.push(vec![Line::decorated(goal.closing_emoji, goal.closing)]);

        let call_to_action = normalized
            .call_to_action
            .clone()
            .unwrap_or_else(|| goal.call_to_action.to_string());
        sections.push(vec![Line::decorated(CALL_TO_ACTION_EMOJI, call_to_action)]);

        Self {
            sections,
            user_call_to_action: normalized.call_to_action.is_some(),
        }
    }

    fn render(&self, with_emojis: bool) -> String {
        render_sections(&self.sections, with_emojis)
    }

    /// Words counted against the length budget. A caller-supplied call to
    /// action is kept verbatim and does not count.
    fn budget_words(&self) -> usize {
        let counted = if self.user_call_to_action {
            &self.sections[..self.sections.len() - 1]
        } else {
            &self.sections[..]
        };
        count_words(&render_sections(counted, false))
    }

    /// Characters counted against the body limit, always with emojis.
    fn budget_characters(&self) -> usize {
        count_characters(&self.render(true))
    }
}

/// Drops trailing points, then clips a lone point, until the draft fits both
/// the word ceiling and the character limit.
fn fit_to_budget(options: &GenerateOptions, normalized: &Normalized<'_>) -> Draft {
    let budget = LengthBudget::for_length(options.length);
    let mut points: Vec<String> = extract_points(normalized.brief)
        .into_iter()
        .take(budget.max_points)
        .collect();

    loop {
        let draft = Draft::assemble(options, normalized, &points);
        let over_words = draft.budget_words().saturating_sub(budget.word_ceiling);
        let over_chars = draft.budget_characters().saturating_sub(BODY_CHAR_LIMIT);
        if over_words == 0 && over_chars == 0 {
            return draft;
        }

        if points.len() > 1 {
            points.pop();
            continue;
        }

        let Some(point) = points.first() else {
            return draft;
        };
        let keep_words = point
            .split_whitespace()
            .count()
            .saturating_sub(over_words)
            .max(MIN_POINT_WORDS);
        let clipped = clip_words(point, keep_words);
        let keep_chars = count_characters(&clipped).saturating_sub(over_chars).max(1);
        // A point whose first word alone overflows is elided rather than split.
        let clipped =
            clip_at_word(&clipped, keep_chars).unwrap_or_else(|| ELLIPSIS.to_string());

        // Nothing left to give: the fixed phrasing alone exceeds the budget.
        if clipped == *point {
            return draft;
        }
        points = vec![clipped];
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::composer::budget::{HARD_CEILING_CHARS, MAX_FIXED_PHRASING_CHARS};
    use crate::composer::options::{Format, Goal, Length, Tone};

    const BRIEF: &str = "We shipped a new caching layer that cut latency by 40%.";

    fn options() -> GenerateOptions {
        GenerateOptions::new(BRIEF)
    }

    fn all_combinations() -> Vec<GenerateOptions> {
        let mut out = Vec::new();
        for tone in Tone::ALL {
            for goal in Goal::ALL {
                for format in Format::ALL {
                    for length in Length::ALL {
                        out.push(GenerateOptions {
                            tone,
                            goal,
                            format,
                            length,
                            ..options()
                        });
                    }
                }
            }
        }
        out
    }

    /// Removes `"{emoji} "` line prefixes. Test briefs are ASCII, so any
    /// leading symbol above U+2600 is a decoration slot.
    fn strip_emoji_prefixes(text: &str) -> String {
        text.lines()
            .map(|line| {
                let mut chars = line.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), Some(' ')) if c as u32 >= 0x2600 => chars.as_str().to_string(),
                    _ => line.to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn words_before_hashtags(content: &str) -> usize {
        let body: Vec<&str> = content
            .lines()
            .filter(|l| !l.starts_with('#'))
            .collect();
        count_words(&body.join("\n"))
    }

    #[test]
    fn test_deterministic() {
        for opts in all_combinations() {
            let a = compose_post(&opts).unwrap();
            let b = compose_post(&opts).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_all_300_combinations_compose() {
        let combos = all_combinations();
        assert_eq!(combos.len(), 300);
        for opts in combos {
            let result = compose_post(&opts)
                .unwrap_or_else(|e| panic!("{opts:?} failed: {e}"));
            assert!(!result.content.is_empty());
            assert_eq!(result.characters, result.content.chars().count());
        }
    }

    #[test]
    fn test_character_count_matches_content_with_emojis() {
        for opts in all_combinations() {
            let opts = GenerateOptions {
                include_emojis: true,
                include_hashtags: true,
                ..opts
            };
            let result = compose_post(&opts).unwrap();
            assert_eq!(result.characters, result.content.chars().count());
            assert!(result.content.len() > result.characters, "emojis are multi-byte");
        }
    }

    #[test]
    fn test_hashtags_only_append_a_block() {
        for base in all_combinations() {
            for include_emojis in [false, true] {
                let without = compose_post(&GenerateOptions {
                    include_emojis,
                    ..base.clone()
                })
                .unwrap();
                let with = compose_post(&GenerateOptions {
                    include_emojis,
                    include_hashtags: true,
                    ..base.clone()
                })
                .unwrap();

                let block = with
                    .content
                    .strip_prefix(&without.content)
                    .and_then(|rest| rest.strip_prefix("\n\n"))
                    .expect("hashtag block must be appended after a blank line");
                assert!(!block.is_empty());
                assert!(!block.contains('\n'));
                assert!(block.split(' ').all(|tag| tag.starts_with('#')));
            }
        }
    }

    #[test]
    fn test_emojis_only_add_prefixes() {
        for base in all_combinations() {
            let plain = compose_post(&base).unwrap();
            let decorated = compose_post(&GenerateOptions {
                include_emojis: true,
                ..base.clone()
            })
            .unwrap();

            assert_ne!(plain.content, decorated.content);
            assert_eq!(strip_emoji_prefixes(&decorated.content), plain.content);
        }
    }

    #[test]
    fn test_call_to_action_appears_verbatim_once() {
        let cta = "Want the checklist? Comment 'checklist'";
        for base in all_combinations() {
            let result = compose_post(&GenerateOptions {
                call_to_action: Some(cta.to_string()),
                include_emojis: true,
                include_hashtags: true,
                ..base
            })
            .unwrap();
            assert_eq!(result.content.matches(cta).count(), 1);
        }
    }

    #[test]
    fn test_missing_call_to_action_is_synthesized_from_goal() {
        for goal in Goal::ALL {
            let result = compose_post(&GenerateOptions { goal, ..options() }).unwrap();
            assert!(result.content.contains(goal_profile(goal).call_to_action));
            assert!(result.content.contains(goal_profile(goal).closing));
        }
    }

    #[test]
    fn test_blank_call_to_action_treated_as_absent() {
        let blank = compose_post(&GenerateOptions {
            call_to_action: Some("   ".to_string()),
            ..options()
        })
        .unwrap();
        assert_eq!(blank, compose_post(&options()).unwrap());
    }

    #[test]
    fn test_audience_is_injected() {
        let result = compose_post(&GenerateOptions {
            audience: "startup founders".to_string(),
            ..options()
        })
        .unwrap();
        assert!(result.content.lines().next().unwrap().contains("startup founders"));
    }

    #[test]
    fn test_blank_audience_falls_back_to_default() {
        let result = compose_post(&GenerateOptions {
            audience: "  ".to_string(),
            ..options()
        })
        .unwrap();
        assert!(result.content.contains(DEFAULT_AUDIENCE));
    }

    #[test]
    fn test_unsplittable_audience_falls_back_to_default() {
        let result = compose_post(&GenerateOptions {
            audience: "a".repeat(MAX_AUDIENCE_CHARS + 1),
            ..options()
        })
        .unwrap();
        assert!(result.content.contains(DEFAULT_AUDIENCE));
        assert!(!result.content.contains("aaaa"));
    }

    #[test]
    fn test_empty_brief_rejected() {
        for brief in ["", "   ", "\n\t "] {
            let err = compose_post(&GenerateOptions::new(brief)).unwrap_err();
            assert_eq!(err, ComposeError::InvalidInput(InvalidInputReason::EmptyBrief));
        }
    }

    #[test]
    fn test_oversized_call_to_action_rejected() {
        let err = compose_post(&GenerateOptions {
            call_to_action: Some("x ".repeat(1000)),
            ..options()
        })
        .unwrap_err();
        assert_eq!(
            err,
            ComposeError::InvalidInput(InvalidInputReason::CallToActionTooLong {
                max: MAX_CALL_TO_ACTION_CHARS
            })
        );
    }

    #[test]
    fn test_call_to_action_spacing_is_kept() {
        let cta = "Reply  YES  and I'll send the deck";
        let result = compose_post(&GenerateOptions {
            call_to_action: Some(format!("  {cta}\n")),
            ..options()
        })
        .unwrap();
        assert_eq!(result.content.matches(cta).count(), 1);
    }

    #[test]
    fn test_multi_line_call_to_action_joined_into_one_line() {
        let result = compose_post(&GenerateOptions {
            call_to_action: Some("Comment below\n\n  and tag a friend".to_string()),
            ..options()
        })
        .unwrap();
        assert!(result.content.ends_with("Comment below and tag a friend"));
    }

    #[test]
    fn test_long_call_to_action_within_limit_is_accepted() {
        let cta = "Book a demo. ".repeat(22);
        let cta = cta.trim();
        let result = compose_post(&GenerateOptions {
            call_to_action: Some(cta.to_string()),
            ..options()
        })
        .unwrap();
        assert_eq!(result.content.matches(cta).count(), 1);

        let widest = "d".repeat(MAX_CALL_TO_ACTION_CHARS);
        assert!(compose_post(&GenerateOptions {
            call_to_action: Some(widest),
            ..options()
        })
        .is_ok());
    }

    #[test]
    fn test_fixed_phrasing_fits_its_reserve() {
        let normalized = Normalized {
            brief: BRIEF,
            audience: "w".repeat(MAX_AUDIENCE_CHARS),
            call_to_action: Some(String::new()),
        };
        for opts in all_combinations() {
            let draft = Draft::assemble(&opts, &normalized, &["x".to_string()]);
            assert!(
                draft.budget_characters() <= MAX_FIXED_PHRASING_CHARS,
                "{:?}/{:?}/{:?}",
                opts.tone,
                opts.goal,
                opts.format
            );
        }
    }

    #[test]
    fn test_long_sentence_survives_when_budget_allows() {
        let sentence = format!(
            "Over the last quarter we {}and the migration finished without a single customer-facing incident.",
            "moved another service onto the shared platform, ".repeat(7)
        );
        assert!(sentence.chars().count() > 400);
        for format in Format::ALL {
            let result = compose_post(&GenerateOptions {
                format,
                length: Length::Long,
                ..GenerateOptions::new(sentence.clone())
            })
            .unwrap();
            assert!(result.content.contains(&sentence), "{format}");
            assert!(!result.content.contains('…'), "{format}");
        }
    }

    #[test]
    fn test_oversized_token_is_dropped_not_split() {
        let url = format!("https://example.com/{}", "x".repeat(3000));
        let result = compose_post(&GenerateOptions::new(format!("See {url}"))).unwrap();
        assert!(result.content.contains("• See…"));
        assert!(!result.content.contains("https://"));
        assert!(result.characters <= HARD_CEILING_CHARS);

        let result = compose_post(&GenerateOptions::new(url)).unwrap();
        assert!(result.content.lines().any(|l| l == "• …"));
        assert!(result.characters <= HARD_CEILING_CHARS);
    }

    #[test]
    fn test_example_short_analytical_list() {
        let result = compose_post(&GenerateOptions {
            tone: Tone::Analytical,
            goal: Goal::Educate,
            format: Format::List,
            length: Length::Short,
            include_hashtags: true,
            include_emojis: false,
            ..options()
        })
        .unwrap();

        let lines: Vec<&str> = result.content.lines().collect();
        assert!(lines[0].starts_with("The numbers first."));
        assert!(lines.contains(&"• We shipped a new caching layer that cut latency by 40%."));
        let last = lines.last().unwrap();
        assert!(last.starts_with('#') && last.contains("#Caching"));
        assert_eq!(result.characters, result.content.chars().count());
        assert!(words_before_hashtags(&result.content) <= 120);
    }

    #[test]
    fn test_point_count_follows_length() {
        let brief = (1..=10)
            .map(|i| format!("Point number {i} matters."))
            .collect::<Vec<_>>()
            .join(" ");
        for (length, max) in [(Length::Short, 3), (Length::Medium, 5), (Length::Long, 8)] {
            let result = compose_post(&GenerateOptions {
                length,
                ..GenerateOptions::new(brief.clone())
            })
            .unwrap();
            let bullets = result.content.lines().filter(|l| l.starts_with("• ")).count();
            assert_eq!(bullets, max, "{length}");
        }
    }

    #[test]
    fn test_word_ceiling_respected_for_every_length() {
        let brief = (1..=40)
            .map(|i| format!("Sentence {i} carries a fairly detailed observation about the rollout and its effect on the team."))
            .collect::<Vec<_>>()
            .join("\n");
        for opts in all_combinations() {
            let opts = GenerateOptions {
                brief: brief.clone(),
                ..opts
            };
            let ceiling = LengthBudget::for_length(opts.length).word_ceiling;
            let result = compose_post(&opts).unwrap();
            assert!(
                words_before_hashtags(&result.content) <= ceiling,
                "{:?}/{:?} exceeded {ceiling} words",
                opts.format,
                opts.length
            );
        }
    }

    #[test]
    fn test_lone_oversized_point_clipped_at_word_boundary() {
        // 300 one-letter words in one sentence; Short allows 120 in total.
        let brief = "a ".repeat(300);
        let result = compose_post(&GenerateOptions {
            length: Length::Short,
            ..GenerateOptions::new(brief)
        })
        .unwrap();
        assert!(words_before_hashtags(&result.content) <= 120);
        let bullet = result
            .content
            .lines()
            .find(|l| l.starts_with("• "))
            .unwrap();
        assert!(bullet.ends_with(" a…"));
        assert!(count_words(bullet) < 140);
    }

    #[test]
    fn test_long_everything_stays_under_hard_ceiling() {
        let brief = (1..=60)
            .map(|i| format!("Observation{i} {}", "extraordinarilylongtechnicalterm ".repeat(12)))
            .collect::<Vec<_>>()
            .join("\n");
        let audience = "chief technology officers and principal engineers ".repeat(6);
        let cta = "c".repeat(MAX_CALL_TO_ACTION_CHARS);

        for base in all_combinations() {
            let opts = GenerateOptions {
                brief: brief.clone(),
                audience: audience.clone(),
                length: Length::Long,
                include_hashtags: true,
                include_emojis: true,
                call_to_action: Some(cta.clone()),
                ..base
            };
            let a = compose_post(&opts).unwrap();
            assert!(
                a.characters <= HARD_CEILING_CHARS,
                "{} chars for {:?}/{:?}",
                a.characters,
                opts.tone,
                opts.format
            );
            assert_eq!(a, compose_post(&opts).unwrap());
            assert_eq!(a.content.matches(&cta).count(), 1);
        }
    }

    #[test]
    fn test_output_has_no_trailing_whitespace_or_blank_runs() {
        let brief = "First line   \n\n\n\n- second line\t\n\n";
        for opts in all_combinations() {
            let result = compose_post(&GenerateOptions {
                brief: brief.to_string(),
                include_hashtags: true,
                ..opts
            })
            .unwrap();
            assert!(!result.content.contains("\n\n\n"));
            assert!(result.content.lines().all(|l| l == l.trim_end()));
            assert_eq!(result.content, result.content.trim());
        }
    }

    #[test]
    fn test_template_composer_behind_trait_object() {
        let composer: Arc<dyn PostComposer> = Arc::new(TemplateComposer);
        assert_eq!(
            composer.compose(&options()).unwrap(),
            compose_post(&options()).unwrap()
        );
    }
}
