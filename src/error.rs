use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommitGenError {
   #[error("Unsupported MODEL_PROVIDER: {0}")]
   UnsupportedProvider(String),

   #[error("{var} is not set in your environment variables")]
   MissingApiKey { var: &'static str },

   #[error("Git command failed: {0}")]
   GitError(String),

   #[error("No staged changes found")]
   NoChanges,

   #[error("API request failed (HTTP {status}): {body}")]
   ApiError { status: u16, body: String },

   #[error("API returned no completion content")]
   EmptyResponse,

   #[error("IO error: {0}")]
   IoError(#[from] std::io::Error),

   #[error("JSON error: {0}")]
   JsonError(#[from] serde_json::Error),

   #[error("HTTP error: {0}")]
   HttpError(#[from] reqwest::Error),
}

impl CommitGenError {
   /// Whether the rendered error text looks like a rejected credential.
   ///
   /// Matches on wording rather than status codes, so it only recognizes
   /// upstreams that say "unauthorized" or "invalid api key" somewhere.
   pub fn is_auth_failure(&self) -> bool {
      let text = self.to_string().to_lowercase();
      text.contains("unauthorized") || text.contains("invalid api key")
   }
}

pub type Result<T> = std::result::Result<T, CommitGenError>;
