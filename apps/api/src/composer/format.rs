//! Format skeletons. Shapes the extracted points into the post body.

use crate::composer::options::Format;
use crate::composer::render::{Line, Section};

/// How points are laid out inside the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointStyle {
    /// `• point`, one per line.
    Bullets,
    /// `1. point`, one per line.
    Numbered,
    /// One paragraph per point.
    Paragraphs,
    /// Challenge, approach and result sections.
    CaseStudy,
}

#[derive(Debug, Clone, Copy)]
pub struct FormatProfile {
    pub heading: Option<&'static str>,
    pub style: PointStyle,
}

const LIST: FormatProfile = FormatProfile {
    heading: Some("Key points:"),
    style: PointStyle::Bullets,
};

const TIPS: FormatProfile = FormatProfile {
    heading: Some("Tips worth keeping:"),
    style: PointStyle::Numbered,
};

const STORY: FormatProfile = FormatProfile {
    heading: None,
    style: PointStyle::Paragraphs,
};

const CASE_STUDY: FormatProfile = FormatProfile {
    heading: None,
    style: PointStyle::CaseStudy,
};

pub fn format_profile(format: Format) -> &'static FormatProfile {
    match format {
        Format::List => &LIST,
        Format::Tips => &TIPS,
        Format::Story => &STORY,
        Format::CaseStudy => &CASE_STUDY,
    }
}

const CHALLENGE: (&str, &str) = ("🧩", "The challenge:");
const APPROACH: (&str, &str) = ("🔧", "What we did:");
const RESULT: (&str, &str) = ("📈", "The result:");

/// Stands in for the result when the brief has a single point.
const PENDING_RESULT: &str = "The full results are still coming in, and the early signals look promising.";

/// Builds the body sections for `points`. `points` must not be empty.
pub fn body_sections(format: Format, points: &[String]) -> Vec<Section> {
    let profile = format_profile(format);
    let heading = profile.heading.map(Line::plain);

    match profile.style {
        PointStyle::Bullets => {
            let lines = points.iter().map(|p| Line::plain(format!("• {p}")));
            vec![heading.into_iter().chain(lines).collect()]
        }
        PointStyle::Numbered => {
            let lines = points
                .iter()
                .enumerate()
                .map(|(i, p)| Line::plain(format!("{}. {p}", i + 1)));
            vec![heading.into_iter().chain(lines).collect()]
        }
        PointStyle::Paragraphs => points.iter().map(|p| vec![Line::plain(p.clone())]).collect(),
        PointStyle::CaseStudy => case_study_sections(points),
    }
}

fn case_study_sections(points: &[String]) -> Vec<Section> {
    let header = |(emoji, label): (&'static str, &'static str)| Line::decorated(emoji, label);

    let Some((challenge, rest)) = points.split_first() else {
        return Vec::new();
    };

    let mut sections = vec![vec![header(CHALLENGE), Line::plain(challenge.clone())]];

    match rest.split_last() {
        None => sections.push(vec![header(RESULT), Line::plain(PENDING_RESULT)]),
        Some((result, approach)) => {
            if !approach.is_empty() {
                let mut section = vec![header(APPROACH)];
                section.extend(approach.iter().map(|p| Line::plain(format!("• {p}"))));
                sections.push(section);
            }
            sections.push(vec![header(RESULT), Line::plain(result.clone())]);
        }
    }
    sections
}
