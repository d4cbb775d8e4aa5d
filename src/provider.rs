//! Commit message generators and the factory that picks one.

use async_trait::async_trait;

use crate::{
   api::ChatClient,
   config::{Config, ProviderKind},
   error::Result,
   prompt::{TEMPERATURE, build_messages},
};

pub const GROQ_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";
pub const QWEN_MODEL: &str = "qwen/qwen3-235b-a22b";

/// Turns a staged diff into a proposed commit message.
#[async_trait]
pub trait CommitMessageGenerator: Send + Sync {
   /// Short label for status output.
   fn name(&self) -> &str;

   async fn generate_commit_message(&self, diff: &str) -> Result<String>;
}

/// Llama model hosted on Groq.
#[derive(Debug)]
pub struct GroqGenerator {
   client: ChatClient,
}

impl GroqGenerator {
   pub fn new(api_key: &str, base_url: &str) -> Result<Self> {
      Ok(Self { client: ChatClient::new(base_url, api_key, GROQ_MODEL, TEMPERATURE)? })
   }
}

#[async_trait]
impl CommitMessageGenerator for GroqGenerator {
   fn name(&self) -> &str {
      self.client.model()
   }

   async fn generate_commit_message(&self, diff: &str) -> Result<String> {
      self.client.complete(&build_messages(diff)).await
   }
}

/// Qwen model reached through the OpenRouter router.
#[derive(Debug)]
pub struct QwenGenerator {
   client: ChatClient,
}

impl QwenGenerator {
   pub fn new(api_key: &str, base_url: &str) -> Result<Self> {
      Ok(Self { client: ChatClient::new(base_url, api_key, QWEN_MODEL, TEMPERATURE)? })
   }
}

#[async_trait]
impl CommitMessageGenerator for QwenGenerator {
   fn name(&self) -> &str {
      self.client.model()
   }

   async fn generate_commit_message(&self, diff: &str) -> Result<String> {
      self.client.complete(&build_messages(diff)).await
   }
}

/// Instantiate the generator selected by `config`.
///
/// Fails with the missing variable's name before any client exists when the
/// selected provider has no key.
pub fn create_generator(config: &Config) -> Result<Box<dyn CommitMessageGenerator>> {
   let api_key = config.api_key()?;
   let base_url = config.api_url();
   tracing::debug!(provider = %config.provider, %base_url, "creating generator");

   Ok(match config.provider {
      ProviderKind::Groq => Box::new(GroqGenerator::new(api_key, base_url)?),
      ProviderKind::Qwen => Box::new(QwenGenerator::new(api_key, base_url)?),
   })
}
