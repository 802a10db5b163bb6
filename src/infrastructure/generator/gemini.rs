//! Gemini overlay generator
//!
//! Blocking client for the `generateContent` endpoint, asking for a JSON reply
//! constrained by a response schema.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use super::prompt::build_prompt;
use crate::config::GeneratorConfig;
use crate::domain::entities::OverlayData;
use crate::domain::ports::OverlayGenerator;
use crate::error::GenerationError;

/// Remote overlay generator backed by a Gemini model
pub struct GeminiGenerator {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiGenerator {
    /// Build from config, reading the API key from `config.api_key_env`
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenerationError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GenerationError::MissingApiKey {
                env_var: config.api_key_env.clone(),
            })?;
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(
        config: &GeneratorConfig,
        api_key: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("splashpack/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.into(),
        })
    }

    /// POST {endpoint}/models/{model}:generateContent
    pub fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl OverlayGenerator for GeminiGenerator {
    fn generate(&self, context: &str) -> Result<OverlayData, GenerationError> {
        let response = self
            .client
            .post(self.request_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(&build_prompt(context)))
            .send()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        OverlayData::from_json(&extract_reply_text(&body)?)
    }

    fn describe(&self) -> String {
        format!("model {}", self.model)
    }
}

fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "themeDescription": { "type": "STRING" },
                    "html": { "type": "STRING" },
                    "css": { "type": "STRING" },
                    "js": { "type": "STRING" }
                },
                "required": ["html", "css", "js", "themeDescription"]
            }
        }
    })
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

/// Pull `candidates[0].content.parts[0].text` out of a response body
pub fn extract_reply_text(body: &str) -> Result<String, GenerationError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::InvalidJson(e.to_string()))?;

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or(GenerationError::EmptyReply)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GeneratorConfig {
        GeneratorConfig {
            endpoint: "https://example.test/v1beta/".to_string(),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn request_url_joins_endpoint_and_model() {
        let generator = GeminiGenerator::with_api_key(&config(), "k").unwrap();
        assert_eq!(
            generator.request_url(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn missing_api_key_is_reported_by_name() {
        let config = GeneratorConfig {
            api_key_env: "SPLASHPACK_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..GeneratorConfig::default()
        };
        let err = GeminiGenerator::from_config(&config).err().unwrap();
        assert!(matches!(
            err,
            GenerationError::MissingApiKey { env_var } if env_var == "SPLASHPACK_TEST_KEY_THAT_IS_NEVER_SET"
        ));
    }

    #[test]
    fn request_body_requires_all_fields() {
        let body = request_body("make it spooky");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "make it spooky");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        let required = body["generationConfig"]["responseSchema"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 4);
    }

    #[test]
    fn extracts_first_candidate_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"{\"html\":\"\"}"}]}}]}"#;
        assert_eq!(extract_reply_text(body).unwrap(), r#"{"html":""}"#);
    }

    #[test]
    fn no_candidates_is_empty_reply() {
        assert!(matches!(
            extract_reply_text(r#"{"candidates":[]}"#),
            Err(GenerationError::EmptyReply)
        ));
        assert!(matches!(
            extract_reply_text(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#),
            Err(GenerationError::EmptyReply)
        ));
    }

    #[test]
    fn non_json_body_is_invalid_json() {
        assert!(matches!(
            extract_reply_text("<html>502</html>"),
            Err(GenerationError::InvalidJson(_))
        ));
    }
}
