//! Terminal styling and progress output.
//!
//! Everything here writes to stderr so stdout carries only the generated
//! message. Respects `NO_COLOR` and falls back to plain status lines when
//! stderr is not a terminal.

use std::{
   io::{self, Write},
   sync::OnceLock,
   time::Duration,
};

use owo_colors::OwoColorize;
use tokio::{sync::oneshot, task::JoinHandle};

/// Whether color output is enabled (cached on first call).
static COLOR_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if colors and animation should be used on stderr.
pub fn colors_enabled() -> bool {
   *COLOR_ENABLED.get_or_init(|| {
      // NO_COLOR takes precedence (https://no-color.org/)
      if std::env::var_os("NO_COLOR").is_some() {
         return false;
      }
      supports_color::on(supports_color::Stream::Stderr).is_some_and(|level| level.has_basic)
   })
}

/// Error: failures, hard errors (red + bold).
pub fn error(s: &str) -> String {
   if colors_enabled() {
      s.red().bold().to_string()
   } else {
      s.to_string()
   }
}

/// Warning: guidance that is not a technical failure (yellow).
pub fn warning(s: &str) -> String {
   if colors_enabled() {
      s.yellow().to_string()
   } else {
      s.to_string()
   }
}

pub mod icons {
   pub const SUCCESS: &str = "\u{2714}";
   pub const ERROR: &str = "\u{2716}";
   pub const WARNING: &str = "\u{26A0}";
}

/// Print an error line to stderr.
pub fn print_error(msg: &str) {
   eprintln!("{} {}", error(icons::ERROR), error(msg));
}

/// Print a warning line to stderr.
pub fn print_warning(msg: &str) {
   eprintln!("{} {}", warning(icons::WARNING), warning(msg));
}

// === Spinner ===

const SPINNER_FRAMES: &[char] = &[
   '\u{287F}', '\u{28FF}', '\u{28F7}', '\u{28EF}', '\u{28DF}', '\u{287F}', '\u{28FF}', '\u{28FE}',
   '\u{28FD}', '\u{28FB}', '\u{28BF}', '\u{287F}',
];

const SPINNER_INTERVAL: Duration = Duration::from_millis(120);

/// Animated progress line on stderr, replaced by a status line when finished.
///
/// Must be started inside a tokio runtime. Dropping it without calling
/// [`Spinner::succeed`] or [`Spinner::fail`] stops the animation silently.
pub struct Spinner {
   stop: Option<oneshot::Sender<()>>,
   task: Option<JoinHandle<()>>,
}

impl Spinner {
   pub fn start(message: &str) -> Self {
      if !colors_enabled() {
         return Self { stop: None, task: None };
      }

      let (tx, mut rx) = oneshot::channel::<()>();
      let msg = message.to_string();

      let task = tokio::spawn(async move {
         let mut ticker = tokio::time::interval(SPINNER_INTERVAL);
         let mut idx = 0;
         loop {
            tokio::select! {
               _ = &mut rx => break,
               _ = ticker.tick() => {
                  draw_frame(SPINNER_FRAMES[idx], &msg);
                  idx = (idx + 1) % SPINNER_FRAMES.len();
               },
            }
         }
      });

      Self { stop: Some(tx), task: Some(task) }
   }

   pub async fn succeed(self, message: &str) {
      self.finish(true, message).await;
   }

   pub async fn fail(self, message: &str) {
      self.finish(false, message).await;
   }

   async fn finish(mut self, ok: bool, message: &str) {
      if let Some(tx) = self.stop.take() {
         tx.send(()).ok();
      }
      if let Some(task) = self.task.take() {
         task.await.ok();
      }
      let line = status_line(ok, message, colors_enabled());
      let mut stderr = io::stderr().lock();
      if colors_enabled() {
         write!(stderr, "\r\x1b[K").ok();
      }
      writeln!(stderr, "{line}").ok();
      stderr.flush().ok();
   }
}

fn draw_frame(frame: char, msg: &str) {
   let mut stderr = io::stderr().lock();
   write!(stderr, "\r{} {msg}", frame.cyan()).ok();
   stderr.flush().ok();
}

/// Final line for a finished step: icon and message, colored when asked.
pub fn status_line(ok: bool, message: &str, colored: bool) -> String {
   match (ok, colored) {
      (true, true) => format!("{} {message}", icons::SUCCESS.green()),
      (false, true) => format!("{} {}", icons::ERROR.red(), message.red()),
      (true, false) => format!("{} {message}", icons::SUCCESS),
      (false, false) => format!("{} {message}", icons::ERROR),
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_status_line_plain() {
      assert_eq!(status_line(true, "done", false), "\u{2714} done");
      assert_eq!(status_line(false, "broke", false), "\u{2716} broke");
   }

   #[test]
   fn test_status_line_colored_keeps_message() {
      let line = status_line(false, "broke", true);
      assert!(line.contains("broke"));
      assert!(line.contains('\x1b'));
   }

   #[test]
   fn test_spinner_frames_are_braille() {
      assert_eq!(SPINNER_FRAMES.len(), 12);
      assert!(
         SPINNER_FRAMES
            .iter()
            .all(|c| ('\u{2800}'..='\u{28FF}').contains(c))
      );
   }

   #[tokio::test]
   async fn test_spinner_finishes_cleanly() {
      let spinner = Spinner::start("working");
      tokio::time::sleep(Duration::from_millis(10)).await;
      spinner.succeed("worked").await;

      let spinner = Spinner::start("working");
      spinner.fail("failed").await;
   }
}
