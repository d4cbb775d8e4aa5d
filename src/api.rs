//! Minimal OpenAI-compatible chat-completion client.

use serde::{Deserialize, Serialize};

use crate::error::{CommitGenError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
   pub role:    String,
   pub content: String,
}

impl Message {
   pub fn system(content: impl Into<String>) -> Self {
      Self { role: "system".to_string(), content: content.into() }
   }

   pub fn user(content: impl Into<String>) -> Self {
      Self { role: "user".to_string(), content: content.into() }
   }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
   model:       &'a str,
   temperature: f32,
   messages:    &'a [Message],
}

#[derive(Debug, Deserialize)]
struct Choice {
   message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
   #[serde(default)]
   content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
   #[serde(default)]
   choices: Vec<Choice>,
}

/// One model behind one `/chat/completions` endpoint.
pub struct ChatClient {
   client:      reqwest::Client,
   base_url:    String,
   api_key:     String,
   model:       String,
   temperature: f32,
}

impl std::fmt::Debug for ChatClient {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      f.debug_struct("ChatClient")
         .field("base_url", &self.base_url)
         .field("model", &self.model)
         .field("temperature", &self.temperature)
         .finish_non_exhaustive()
   }
}

impl ChatClient {
   pub fn new(
      base_url: &str,
      api_key: &str,
      model: &str,
      temperature: f32,
   ) -> Result<Self> {
      let client = reqwest::Client::builder()
         .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
         .build()?;
      Ok(Self {
         client,
         base_url: base_url.trim_end_matches('/').to_string(),
         api_key: api_key.to_string(),
         model: model.to_string(),
         temperature,
      })
   }

   pub fn model(&self) -> &str {
      &self.model
   }

   pub fn endpoint(&self) -> String {
      format!("{}/chat/completions", self.base_url)
   }

   /// Send one request and return the first choice's text as-is.
   pub async fn complete(&self, messages: &[Message]) -> Result<String> {
      let request =
         ApiRequest { model: &self.model, temperature: self.temperature, messages };
      let url = self.endpoint();

      tracing::debug!(%url, model = %self.model, messages = messages.len(), "sending chat completion");

      let response = self
         .client
         .post(&url)
         .bearer_auth(&self.api_key)
         .json(&request)
         .send()
         .await?;

      let status = response.status();
      tracing::debug!(%status, "chat completion responded");

      if !status.is_success() {
         let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
         return Err(CommitGenError::ApiError { status: status.as_u16(), body });
      }

      let body = response.text().await?;
      let api_response: ApiResponse = serde_json::from_str(&body)?;

      api_response
         .choices
         .into_iter()
         .next()
         .and_then(|choice| choice.message.content)
         .ok_or(CommitGenError::EmptyResponse)
   }
}
