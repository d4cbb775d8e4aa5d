//! Prompt shared by every provider.

use crate::api::Message;

pub const SYSTEM_PROMPT: &str = "You are an expert AI assistant specialized in generating clear, \
                                 concise, and conventional git commit messages.
Follow the conventional commits specification (feat, fix, docs, chore, refactor, etc.).
Summarize the important changes from the provided git diff.
Use bullet points if multiple points are relevant.
The commit message should be understandable by developers looking at the project history.";

pub const TEMPERATURE: f32 = 0.7;

/// User turn: the label followed by the untouched diff.
pub fn user_prompt(diff: &str) -> String {
   format!("Git diff:\n{diff}")
}

/// System + user messages for one completion request.
pub fn build_messages(diff: &str) -> Vec<Message> {
   vec![Message::system(SYSTEM_PROMPT), Message::user(user_prompt(diff))]
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_user_prompt_keeps_diff_verbatim() {
      let diff = "diff --git a/x b/x\n+foo\n  \n";
      assert_eq!(user_prompt(diff), "Git diff:\ndiff --git a/x b/x\n+foo\n  \n");
   }

   #[test]
   fn test_build_messages_order() {
      let messages = build_messages("+foo");
      assert_eq!(messages.len(), 2);
      assert_eq!(messages[0].role, "system");
      assert_eq!(messages[0].content, SYSTEM_PROMPT);
      assert_eq!(messages[1].role, "user");
      assert_eq!(messages[1].content, "Git diff:\n+foo");
   }

   #[test]
   fn test_temperature_is_moderate() {
      assert_eq!(TEMPERATURE, 0.7);
   }

   #[test]
   fn test_system_prompt_mentions_conventional_types() {
      for kind in ["feat", "fix", "docs", "chore", "refactor"] {
         assert!(SYSTEM_PROMPT.contains(kind), "missing {kind}");
      }
      assert!(SYSTEM_PROMPT.contains("bullet points"));
   }
}
