//! Conventional commit message generator for staged git changes.
//!
//! Reads `git diff --cached`, sends it to a hosted LLM (Llama on Groq or Qwen
//! via OpenRouter) and prints the drafted message.
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod git;
pub mod prompt;
pub mod provider;
pub mod style;

// Re-export commonly used types
pub use config::{Config, ProviderKind};
pub use error::{CommitGenError, Result};
pub use git::{DiffSource, GitDiffSource};
pub use provider::{CommitMessageGenerator, create_generator};
