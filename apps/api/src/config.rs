use std::fmt;

use anyhow::{bail, Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::planner::macros::{MacroTargets, DEFAULT_TARGET_CALORIES, DEFAULT_TARGET_PROTEIN};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub targets: MacroTargets,
    pub port: u16,
    pub rust_log: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &"<redacted>")
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_model", &self.openai_model)
            .field("targets", &self.targets)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .context("Required environment variable 'OPENAI_API_KEY' is not set")?;

        let targets = MacroTargets {
            calories: parse_or(&lookup, "TARGET_CALORIES", DEFAULT_TARGET_CALORIES)?,
            protein_grams: parse_or(&lookup, "TARGET_PROTEIN", DEFAULT_TARGET_PROTEIN)?,
        };
        if targets.calories == 0 || targets.protein_grams == 0 {
            bail!("TARGET_CALORIES and TARGET_PROTEIN must be greater than zero");
        }

        Ok(Config {
            openai_api_key,
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            openai_model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            targets,
            port: parse_or(&lookup, "PORT", 8080u16)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid non-negative integer, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_only_api_key() {
        let config = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-abc")])).unwrap();
        assert_eq!(config.openai_api_key, "sk-abc");
        assert_eq!(config.openai_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.openai_model, DEFAULT_MODEL);
        assert_eq!(config.targets, MacroTargets::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_api_key_fails() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_fails() {
        assert!(Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn test_targets_can_be_customized() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "k"),
            ("TARGET_CALORIES", "2200"),
            ("TARGET_PROTEIN", " 150 "),
        ]))
        .unwrap();
        assert_eq!(config.targets.calories, 2200);
        assert_eq!(config.targets.protein_grams, 150);
    }

    #[test]
    fn test_zero_target_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "k"),
            ("TARGET_PROTEIN", "0"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "k"), ("PORT", "http")]))
            .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-secret")])).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
