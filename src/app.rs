//! Single-shot pipeline: staged diff in, commit message out.

use std::io::Write;

use crate::{
   error::{CommitGenError, Result},
   git::DiffSource,
   provider::CommitMessageGenerator,
   style::{self, Spinner},
};

pub const NO_CHANGES_HINT: &str =
   "No staged changes found. Please stage your changes before running.";
pub const AUTH_HINT: &str = "Invalid or expired API key detected. Please check your credentials.";

/// Lines shown when generation fails: the raw error, then a credential hint
/// when the error text looks like an authorization failure.
pub fn failure_lines(err: &CommitGenError) -> Vec<String> {
   let mut lines = vec![format!("Failed to generate commit message: {err}")];
   if err.is_auth_failure() {
      lines.push(AUTH_HINT.to_string());
   }
   lines
}

/// Fetch the staged diff, ask `generator` for a message and write it to `out`.
///
/// Progress and diagnostics go to stderr. The returned error has already been
/// reported; callers only need to pick an exit status.
pub async fn run<D, G, W>(diff_source: &D, generator: &G, out: &mut W) -> Result<String>
where
   D: DiffSource + ?Sized,
   G: CommitMessageGenerator + ?Sized,
   W: Write + ?Sized,
{
   let spinner = Spinner::start("Retrieving staged git diff...");
   let diff = match diff_source.staged_diff().await {
      Ok(diff) => {
         spinner.succeed("Staged git diff retrieved!").await;
         diff
      },
      Err(e) => {
         spinner
            .fail(&format!("Failed to retrieve git diff: {e}"))
            .await;
         return Err(e);
      },
   };

   if diff.trim().is_empty() {
      style::print_warning(NO_CHANGES_HINT);
      return Err(CommitGenError::NoChanges);
   }

   tracing::debug!(generator = generator.name(), bytes = diff.len(), "requesting commit message");

   let spinner = Spinner::start("Generating commit message using AI...");
   let message = match generator.generate_commit_message(&diff).await {
      Ok(message) => {
         spinner
            .succeed("Commit message generated successfully!\n")
            .await;
         message
      },
      Err(e) => {
         let lines = failure_lines(&e);
         spinner.fail(&lines[0]).await;
         for line in &lines[1..] {
            style::print_error(line);
         }
         return Err(e);
      },
   };

   writeln!(out, "{message}")?;
   out.flush()?;
   Ok(message)
}
