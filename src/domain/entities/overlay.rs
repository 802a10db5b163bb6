//! Overlay entity
//!
//! The loading-screen payload produced by the generation collaborator. The
//! bundler treats the three strings as opaque.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GenerationError;

/// Generated loading-screen markup, styles and script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayData {
    pub html: String,
    pub css: String,
    pub js: String,
    #[serde(
        rename = "themeDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub theme_description: Option<String>,
}

impl OverlayData {
    pub fn new(html: impl Into<String>, css: impl Into<String>, js: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            css: css.into(),
            js: js.into(),
            theme_description: None,
        }
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme_description = Some(theme.into());
        self
    }

    /// Validate a raw JSON reply against the required field set.
    ///
    /// `html`, `css` and `js` must be present strings; no defaults are guessed.
    pub fn from_json(raw: &str) -> Result<Self, GenerationError> {
        if raw.trim().is_empty() {
            return Err(GenerationError::EmptyReply);
        }

        let value: Value =
            serde_json::from_str(raw).map_err(|e| GenerationError::InvalidJson(e.to_string()))?;

        let html = required_str(&value, "html")?;
        let css = required_str(&value, "css")?;
        let js = required_str(&value, "js")?;
        let theme_description = value
            .get("themeDescription")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            html,
            css,
            js,
            theme_description,
        })
    }

    /// Serialize with the wire field names, as read back by [`OverlayData::from_json`]
    pub fn to_json_pretty(&self) -> Result<String, GenerationError> {
        serde_json::to_string_pretty(self).map_err(|e| GenerationError::InvalidJson(e.to_string()))
    }
}

fn required_str(value: &Value, field: &'static str) -> Result<String, GenerationError> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(GenerationError::MissingField { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_accepts_full_payload() {
        let raw = r##"{
            "themeDescription": "retro arcade",
            "html": "<div id=\"ai-loading-screen\">Loading</div>",
            "css": "#ai-loading-screen{position:fixed}",
            "js": "window.startLoadingExit=function(){}"
        }"##;

        let overlay = OverlayData::from_json(raw).unwrap();
        assert_eq!(overlay.theme_description.as_deref(), Some("retro arcade"));
        assert_eq!(overlay.css, "#ai-loading-screen{position:fixed}");
    }

    #[test]
    fn from_json_theme_is_optional() {
        let overlay = OverlayData::from_json(r#"{"html":"","css":"","js":""}"#).unwrap();
        assert!(overlay.theme_description.is_none());
    }

    #[test]
    fn from_json_rejects_missing_field() {
        let err = OverlayData::from_json(r#"{"html":"<div></div>","js":""}"#).unwrap_err();
        assert!(matches!(err, GenerationError::MissingField { field: "css" }));
    }

    #[test]
    fn from_json_rejects_non_string_field() {
        let err = OverlayData::from_json(r#"{"html":"","css":"","js":42}"#).unwrap_err();
        assert!(matches!(err, GenerationError::MissingField { field: "js" }));
    }

    #[test]
    fn from_json_rejects_garbage() {
        let err = OverlayData::from_json("Sure! Here is your loading screen:").unwrap_err();
        assert!(matches!(err, GenerationError::InvalidJson(_)));
    }

    #[test]
    fn from_json_rejects_empty_reply() {
        assert!(matches!(
            OverlayData::from_json("  \n").unwrap_err(),
            GenerationError::EmptyReply
        ));
    }

    #[test]
    fn pretty_json_uses_wire_field_names() {
        let overlay = OverlayData::new("<div></div>", "", "").with_theme("cozy");
        let json = overlay.to_json_pretty().unwrap();
        assert!(json.contains("\"themeDescription\": \"cozy\""));

        let back = OverlayData::from_json(&json).unwrap();
        assert_eq!(back, overlay);
    }
}
