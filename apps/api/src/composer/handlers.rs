//! Axum route handlers for the Post Composer API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::{info, info_span};
use uuid::Uuid;

use crate::composer::budget::{CharacterLimits, CHARACTER_LIMITS};
use crate::composer::options::{Format, GenerateResult, Goal, Length, Tone, DEFAULT_AUDIENCE};
use crate::composer::request::GenerateRequest;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDefaults {
    pub audience: &'static str,
    pub tone: Tone,
    pub goal: Goal,
    pub format: Format,
    pub length: Length,
    pub include_hashtags: bool,
    pub include_emojis: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub tones: &'static [Tone],
    pub goals: &'static [Goal],
    pub formats: &'static [Format],
    pub lengths: &'static [Length],
    pub defaults: OptionDefaults,
    pub limits: CharacterLimits,
    pub min_brief_chars: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate
///
/// Pre-validates the brief, applies defaults, and composes the post.
/// Returns `{ content, characters }`.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResult>, AppError> {
    let Json(request) =
        payload.map_err(|e| AppError::Validation(format!("Invalid payload: {}", e.body_text())))?;

    let brief_chars = request.brief.trim().chars().count();
    if brief_chars == 0 {
        return Err(AppError::Validation("brief cannot be empty".to_string()));
    }
    if brief_chars < state.config.min_brief_chars {
        return Err(AppError::Validation(format!(
            "brief must be at least {} characters",
            state.config.min_brief_chars
        )));
    }

    let request_id = Uuid::new_v4();
    let span = info_span!("generate", %request_id);
    let result = span.in_scope(|| {
        let options = request.into_options()?;
        let result = state.composer.compose(&options)?;
        info!(
            tone = %options.tone,
            format = %options.format,
            length = %options.length,
            characters = result.characters,
            "Generated post"
        );
        Ok::<_, AppError>(result)
    })?;

    Ok(Json(result))
}

/// GET /api/options
///
/// The choices the generator form offers, their defaults, and the counter limits.
pub async fn handle_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(OptionsResponse {
        tones: &Tone::ALL,
        goals: &Goal::ALL,
        formats: &Format::ALL,
        lengths: &Length::ALL,
        defaults: OptionDefaults {
            audience: DEFAULT_AUDIENCE,
            tone: Tone::default(),
            goal: Goal::default(),
            format: Format::default(),
            length: Length::default(),
            include_hashtags: false,
            include_emojis: false,
        },
        limits: CHARACTER_LIMITS,
        min_brief_chars: state.config.min_brief_chars,
    })
}
