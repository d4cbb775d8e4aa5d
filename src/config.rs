use std::{fmt, str::FromStr};

use crate::error::{CommitGenError, Result};

pub const PROVIDER_ENV: &str = "MODEL_PROVIDER";
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";
pub const QWEN_API_KEY_ENV: &str = "QWEN_API_KEY";
pub const GROQ_API_URL_ENV: &str = "GROQ_API_URL";
pub const QWEN_API_URL_ENV: &str = "QWEN_API_URL";

pub const GROQ_DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1";
pub const QWEN_DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1";

/// Remote model backend used to draft the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
   /// Llama hosted on Groq.
   #[default]
   Groq,
   /// Qwen served through the OpenRouter OpenAI-compatible router.
   Qwen,
}

impl ProviderKind {
   pub const fn as_str(self) -> &'static str {
      match self {
         Self::Groq => "groq",
         Self::Qwen => "qwen",
      }
   }

   /// Environment variable holding this provider's API key.
   pub const fn api_key_env(self) -> &'static str {
      match self {
         Self::Groq => GROQ_API_KEY_ENV,
         Self::Qwen => QWEN_API_KEY_ENV,
      }
   }

   const fn default_api_url(self) -> &'static str {
      match self {
         Self::Groq => GROQ_DEFAULT_API_URL,
         Self::Qwen => QWEN_DEFAULT_API_URL,
      }
   }
}

impl fmt::Display for ProviderKind {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(self.as_str())
   }
}

impl FromStr for ProviderKind {
   type Err = CommitGenError;

   fn from_str(s: &str) -> Result<Self> {
      match s.trim().to_lowercase().as_str() {
         "groq" => Ok(Self::Groq),
         "qwen" => Ok(Self::Qwen),
         _ => Err(CommitGenError::UnsupportedProvider(s.to_string())),
      }
   }
}

/// Settings read once at startup and handed to the generator factory.
#[derive(Clone, Default)]
pub struct Config {
   pub provider:     ProviderKind,
   pub groq_api_key: Option<String>,
   pub qwen_api_key: Option<String>,
   pub groq_api_url: Option<String>,
   pub qwen_api_url: Option<String>,
}

impl fmt::Debug for Config {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("Config")
         .field("provider", &self.provider)
         .field("groq_api_key", &self.groq_api_key.as_ref().map(|_| "<redacted>"))
         .field("qwen_api_key", &self.qwen_api_key.as_ref().map(|_| "<redacted>"))
         .field("groq_api_url", &self.groq_api_url)
         .field("qwen_api_url", &self.qwen_api_url)
         .finish()
   }
}

impl Config {
   /// Build config from the process environment.
   pub fn from_env() -> Result<Self> {
      Self::from_vars(|name| std::env::var(name).ok())
   }

   /// Build config from an arbitrary variable lookup. Blank values count as
   /// unset.
   pub fn from_vars<F>(lookup: F) -> Result<Self>
   where
      F: Fn(&str) -> Option<String>,
   {
      let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

      let provider = match get(PROVIDER_ENV) {
         Some(name) => name.parse()?,
         None => ProviderKind::default(),
      };

      let config = Self {
         provider,
         groq_api_key: get(GROQ_API_KEY_ENV),
         qwen_api_key: get(QWEN_API_KEY_ENV),
         groq_api_url: get(GROQ_API_URL_ENV),
         qwen_api_url: get(QWEN_API_URL_ENV),
      };
      tracing::debug!(?config, "loaded configuration");
      Ok(config)
   }

   /// API key for the selected provider, or the error naming its variable.
   pub fn api_key(&self) -> Result<&str> {
      let key = match self.provider {
         ProviderKind::Groq => self.groq_api_key.as_deref(),
         ProviderKind::Qwen => self.qwen_api_key.as_deref(),
      };
      key.ok_or(CommitGenError::MissingApiKey { var: self.provider.api_key_env() })
   }

   /// Base URL for the selected provider, honoring `*_API_URL` overrides.
   pub fn api_url(&self) -> &str {
      let custom = match self.provider {
         ProviderKind::Groq => self.groq_api_url.as_deref(),
         ProviderKind::Qwen => self.qwen_api_url.as_deref(),
      };
      custom.unwrap_or_else(|| self.provider.default_api_url())
   }
}

#[cfg(test)]
mod tests {
   use std::collections::HashMap;

   use super::*;

   fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
      let vars: HashMap<String, String> = pairs
         .iter()
         .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
         .collect();
      Config::from_vars(|name| vars.get(name).cloned())
   }

   #[test]
   fn test_provider_defaults_to_groq() {
      let config = config_from(&[]).unwrap();
      assert_eq!(config.provider, ProviderKind::Groq);
   }

   #[test]
   fn test_provider_parse_is_case_insensitive() {
      assert_eq!("QWEN".parse::<ProviderKind>().unwrap(), ProviderKind::Qwen);
      assert_eq!("Groq".parse::<ProviderKind>().unwrap(), ProviderKind::Groq);
      assert_eq!(" qwen \n".parse::<ProviderKind>().unwrap(), ProviderKind::Qwen);
   }

   #[test]
   fn test_unsupported_provider_is_rejected() {
      let err = config_from(&[(PROVIDER_ENV, "mistral")]).unwrap_err();
      assert!(matches!(err, CommitGenError::UnsupportedProvider(ref v) if v == "mistral"));
   }

   #[test]
   fn test_blank_provider_falls_back_to_default() {
      let config = config_from(&[(PROVIDER_ENV, "  ")]).unwrap();
      assert_eq!(config.provider, ProviderKind::Groq);
   }

   #[test]
   fn test_api_key_for_selected_provider() {
      let config = config_from(&[
         (PROVIDER_ENV, "qwen"),
         (GROQ_API_KEY_ENV, "gsk-1"),
         (QWEN_API_KEY_ENV, "or-2"),
      ])
      .unwrap();
      assert_eq!(config.api_key().unwrap(), "or-2");
   }

   #[test]
   fn test_missing_api_key_names_variable() {
      let config = config_from(&[(PROVIDER_ENV, "qwen"), (GROQ_API_KEY_ENV, "gsk-1")]).unwrap();
      let err = config.api_key().unwrap_err();
      assert!(matches!(err, CommitGenError::MissingApiKey { var: QWEN_API_KEY_ENV }));
   }

   #[test]
   fn test_empty_api_key_counts_as_missing() {
      let config = config_from(&[(GROQ_API_KEY_ENV, "")]).unwrap();
      assert!(config.api_key().is_err());
   }

   #[test]
   fn test_api_url_defaults_and_overrides() {
      let config = config_from(&[]).unwrap();
      assert_eq!(config.api_url(), GROQ_DEFAULT_API_URL);

      let config =
         config_from(&[(PROVIDER_ENV, "qwen"), (QWEN_API_URL_ENV, "http://localhost:9000")])
            .unwrap();
      assert_eq!(config.api_url(), "http://localhost:9000");
   }

   #[test]
   fn test_debug_redacts_keys() {
      let config = config_from(&[(GROQ_API_KEY_ENV, "gsk-secret")]).unwrap();
      let rendered = format!("{config:?}");
      assert!(!rendered.contains("gsk-secret"));
      assert!(rendered.contains("<redacted>"));
   }

   #[test]
   fn test_from_env_reads_process_environment() {
      temp_env::with_vars(
         [
            (PROVIDER_ENV, Some("QWEN")),
            (QWEN_API_KEY_ENV, Some("or-env")),
            (QWEN_API_URL_ENV, None),
         ],
         || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.provider, ProviderKind::Qwen);
            assert_eq!(config.api_key().unwrap(), "or-env");
            assert_eq!(config.api_url(), QWEN_DEFAULT_API_URL);
         },
      );
   }
}
