use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_FALLBACK_TEXT: &str = "Sorry, I didn't catch that.";

/// Engine settings. Every field has a default so partial JSON documents load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed for template selection. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub realizer_timeout_ms: u64,
    pub retry_backoff_ms: u64,
    /// Returned by `Generator::respond` once the realizer is given up on.
    pub fallback_text: String,
    /// Base URL of an out-of-process realizer. `None` uses the built-in rules.
    pub realizer_url: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            realizer_timeout_ms: 2_000, // Matches the speech service hard timeout
            retry_backoff_ms: 100,
            fallback_text: DEFAULT_FALLBACK_TEXT.to_string(),
            realizer_url: None,
        }
    }
}

impl GeneratorConfig {
    /// Defaults overlaid with `NLG_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup` instead of the process env.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("NLG_SEED") {
            match raw.trim().parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(e) => warn!("Ignoring NLG_SEED={:?}: {}", raw, e),
            }
        }
        if let Some(raw) = lookup("NLG_REALIZER_TIMEOUT_MS") {
            match raw.trim().parse() {
                Ok(ms) => config.realizer_timeout_ms = ms,
                Err(e) => warn!("Ignoring NLG_REALIZER_TIMEOUT_MS={:?}: {}", raw, e),
            }
        }
        if let Some(raw) = lookup("NLG_RETRY_BACKOFF_MS") {
            match raw.trim().parse() {
                Ok(ms) => config.retry_backoff_ms = ms,
                Err(e) => warn!("Ignoring NLG_RETRY_BACKOFF_MS={:?}: {}", raw, e),
            }
        }
        if let Some(text) = lookup("NLG_FALLBACK_TEXT") {
            if !text.trim().is_empty() {
                config.fallback_text = text;
            }
        }
        if let Some(url) = lookup("NLG_REALIZER_URL") {
            if !url.trim().is_empty() {
                config.realizer_url = Some(url.trim().trim_end_matches('/').to_string());
            }
        }

        config
    }

    pub fn realizer_timeout(&self) -> Duration {
        Duration::from_millis(self.realizer_timeout_ms)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}
