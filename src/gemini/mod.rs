pub mod dto;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

use crate::config::GeminiConfig;
use crate::error::AppError;
use crate::prompts::{Prompt, PromptSegment};

/// The single outbound call of a request: prompt in, raw model text out.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn generate(&self, prompt: &Prompt) -> Result<String, AppError>;
}

pub struct GeminiHttpClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiHttpClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base, self.config.model
        )
    }

    fn request_body(prompt: &Prompt) -> dto::GenerateContentRequest {
        let parts = prompt
            .segments
            .iter()
            .map(|segment| match segment {
                PromptSegment::Text(text) => dto::Part::Text(text.clone()),
                PromptSegment::Document(doc) => dto::Part::InlineData(dto::InlineData {
                    mime_type: doc.mime_type.clone(),
                    data: STANDARD.encode(&doc.data),
                }),
            })
            .collect();

        dto::GenerateContentRequest {
            contents: vec![dto::Content {
                role: "user".to_string(),
                parts,
            }],
            generation_config: dto::GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_json_schema: Some(prompt.schema.clone()),
            },
        }
    }
}

#[async_trait]
impl ModelGateway for GeminiHttpClient {
    async fn generate(&self, prompt: &Prompt) -> Result<String, AppError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Gateway("GEMINI_API_KEY is not set".to_string()))?;

        debug!(
            "calling {} with {} prompt segments",
            self.config.model,
            prompt.segments.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&Self::request_body(prompt))
            .send()
            .await
            .map_err(|e| {
                error!("Gemini request could not be sent: {}", e);
                AppError::Gateway(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            error!("Gemini API error {}: {}", status, body);
            return Err(AppError::Gateway(upstream_error(status, body)));
        }

        let parsed: dto::GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse Gemini response envelope: {}", e);
            AppError::Gateway(format!("unexpected response envelope: {}", e))
        })?;

        if let Some(text) = parsed.text() {
            return Ok(text);
        }

        let reason = parsed
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .map(|reason| format!("prompt blocked: {}", reason))
            .or_else(|| {
                parsed
                    .candidates
                    .first()
                    .and_then(|c| c.finish_reason.clone())
                    .map(|reason| format!("no text returned (finish reason {})", reason))
            })
            .unwrap_or_else(|| "no candidates returned".to_string());
        Err(AppError::Gateway(reason))
    }
}

/// Error text for a non-2xx answer, preferring Gemini's own error envelope.
fn upstream_error(status: StatusCode, body: String) -> String {
    match serde_json::from_str::<dto::ErrorEnvelope>(&body) {
        Ok(dto::ErrorEnvelope {
            error: dto::ErrorBody {
                message,
                status: Some(reason),
            },
        }) => format!("{} {} ({})", status, message, reason),
        Ok(envelope) => format!("{} {}", status, envelope.error.message),
        Err(_) => format!("{} {}", status, body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Document;
    use serde_json::json;

    fn config(api_key: Option<&str>) -> GeminiConfig {
        GeminiConfig {
            api_key: api_key.map(str::to_string),
            model: "gemini-2.5-flash".to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
        }
    }

    #[test]
    fn endpoint_includes_model() {
        let client = GeminiHttpClient::new(&config(Some("k"))).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://127.0.0.1:9/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn documents_are_sent_as_base64_inline_data() {
        let prompt = Prompt {
            segments: vec![
                PromptSegment::Text("extract".to_string()),
                PromptSegment::Document(Document {
                    mime_type: "application/pdf".to_string(),
                    data: b"%PDF-".to_vec(),
                }),
            ],
            schema: json!({ "type": "object" }),
        };

        let body = serde_json::to_value(GeminiHttpClient::request_body(&prompt)).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "extract");
        assert_eq!(body["contents"][0]["parts"][1]["inlineData"]["data"], "JVBERi0=");
        assert_eq!(body["generationConfig"]["responseJsonSchema"], json!({ "type": "object" }));
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_calling_out() {
        let client = GeminiHttpClient::new(&config(None)).unwrap();
        let prompt = Prompt {
            segments: vec![PromptSegment::Text("hi".to_string())],
            schema: json!({}),
        };
        let err = client.generate(&prompt).await.unwrap_err();
        assert!(matches!(err, AppError::Gateway(msg) if msg.contains("GEMINI_API_KEY")));
    }

    #[test]
    fn upstream_errors_carry_gemini_status() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(
            upstream_error(StatusCode::TOO_MANY_REQUESTS, body.to_string()),
            "429 Too Many Requests Quota exceeded (RESOURCE_EXHAUSTED)"
        );

        let body = r#"{"error":{"message":"API key not valid"}}"#;
        assert_eq!(
            upstream_error(StatusCode::BAD_REQUEST, body.to_string()),
            "400 Bad Request API key not valid"
        );
    }

    #[test]
    fn non_json_upstream_errors_keep_the_body() {
        assert_eq!(
            upstream_error(StatusCode::BAD_GATEWAY, "upstream connect error".to_string()),
            "502 Bad Gateway upstream connect error"
        );
    }
}
