use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{CommitGenError, Result};

/// Source of the staged-changes diff.
#[async_trait]
pub trait DiffSource: Send + Sync {
   async fn staged_diff(&self) -> Result<String>;
}

/// Runs `git diff --cached` in a working tree.
#[derive(Debug, Clone)]
pub struct GitDiffSource {
   dir: PathBuf,
}

impl GitDiffSource {
   pub fn new(dir: impl Into<PathBuf>) -> Self {
      Self { dir: dir.into() }
   }
}

impl Default for GitDiffSource {
   fn default() -> Self {
      Self::new(".")
   }
}

#[async_trait]
impl DiffSource for GitDiffSource {
   /// Exactly what `git diff --cached` prints; empty when nothing is staged.
   async fn staged_diff(&self) -> Result<String> {
      tracing::debug!(dir = %self.dir.display(), "running git diff --cached");

      let output = Command::new("git")
         .args(["diff", "--cached"])
         .current_dir(&self.dir)
         .output()
         .await
         .map_err(|e| CommitGenError::GitError(format!("Failed to run git diff --cached: {e}")))?;

      if !output.status.success() {
         let stderr = String::from_utf8_lossy(&output.stderr);
         return Err(CommitGenError::GitError(stderr.trim().to_string()));
      }

      Ok(String::from_utf8_lossy(&output.stdout).into_owned())
   }
}
