//! Wire request for post generation and the defaulting boundary.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::composer::options::{ComposeError, GenerateOptions, InvalidInputReason};

/// JSON body of `POST /api/generate`. Every field except `brief` is optional;
/// blank strings count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateRequest {
    pub brief: String,
    pub audience: Option<String>,
    pub tone: Option<String>,
    pub goal: Option<String>,
    pub format: Option<String>,
    pub length: Option<String>,
    #[serde(deserialize_with = "deserialize_flag")]
    pub include_hashtags: Option<bool>,
    #[serde(deserialize_with = "deserialize_flag")]
    pub include_emojis: Option<bool>,
    pub call_to_action: Option<String>,
}

impl GenerateRequest {
    /// Applies the documented defaults and parses every variant label.
    pub fn into_options(self) -> Result<GenerateOptions, ComposeError> {
        if self.brief.trim().is_empty() {
            return Err(InvalidInputReason::EmptyBrief.into());
        }

        let defaults = GenerateOptions::new(self.brief);
        Ok(GenerateOptions {
            audience: non_blank(self.audience).unwrap_or(defaults.audience.clone()),
            tone: parse_or_default(self.tone)?,
            goal: parse_or_default(self.goal)?,
            format: parse_or_default(self.format)?,
            length: parse_or_default(self.length)?,
            include_hashtags: self.include_hashtags.unwrap_or(defaults.include_hashtags),
            include_emojis: self.include_emojis.unwrap_or(defaults.include_emojis),
            call_to_action: non_blank(self.call_to_action),
            ..defaults
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reads a form flag. Besides JSON booleans it takes numbers (non-zero is on)
/// and the strings `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`. `null`
/// and the empty string leave the default in place.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b)),
        Value::Number(n) => Ok(Some(n.as_f64().is_some_and(|v| v != 0.0))),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            other => Err(D::Error::custom(format!("invalid flag value '{other}'"))),
        },
        _ => Err(D::Error::custom("flag must be a boolean, number or string")),
    }
}

fn parse_or_default<T>(value: Option<String>) -> Result<T, ComposeError>
where
    T: FromStr<Err = ComposeError> + Default,
{
    match non_blank(value) {
        Some(label) => label.parse(),
        None => Ok(T::default()),
    }
}
