use std::{io, process::ExitCode};

use clap::Parser;
use llm_commit::{Config, GitDiffSource, app, create_generator, style};
use tracing_subscriber::EnvFilter;

/// Generate a conventional commit message for the staged changes.
///
/// Provider is chosen with `MODEL_PROVIDER` (`groq` or `qwen`); the matching
/// `GROQ_API_KEY` or `QWEN_API_KEY` must be set. A `.env` file in the current
/// directory is read first.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

/// Exit status for a rejected command line: `--help`/`--version` succeed,
/// usage errors fail like every other error.
fn usage_exit_status(err: &clap::Error) -> u8 {
   u8::from(err.use_stderr())
}

fn init_tracing() {
   let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
   tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_writer(io::stderr)
      .with_target(false)
      .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
   if let Err(err) = Args::try_parse() {
      err.print().ok();
      return ExitCode::from(usage_exit_status(&err));
   }
   // Missing .env is normal
   dotenvy::dotenv().ok();
   init_tracing();

   let generator = match Config::from_env().and_then(|config| create_generator(&config)) {
      Ok(generator) => generator,
      Err(e) => {
         style::print_error(&format!("Error initializing model: {e}"));
         return ExitCode::FAILURE;
      },
   };

   let diff_source = GitDiffSource::default();
   let mut stdout = io::stdout().lock();
   match app::run(&diff_source, generator.as_ref(), &mut stdout).await {
      Ok(_) => ExitCode::SUCCESS,
      Err(e) => {
         tracing::debug!(error = %e, "run failed");
         ExitCode::FAILURE
      },
   }
}
