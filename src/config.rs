use anyhow::{bail, Context as _, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Published spreadsheet of the reference data set, exposed as CSV.
const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vR5WIjTfzebRRz4aH6e36tqi9h4aV3hys9OJgTxRPbOnEC05e6SjZXc65jOvz-CxOP4Rxdgu6AhzZHj/pub?gid=0&single=true&output=csv";
const DEFAULT_ADVICE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";
const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub sheet_url: String,
    pub advice: AdviceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdviceConfig {
    pub url: String,
    pub api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_url: DEFAULT_SHEET_URL.to_string(),
            advice: AdviceConfig::default(),
        }
    }
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ADVICE_URL.to_string(),
            api_key: String::new(),
        }
    }
}

impl Config {
    /// Load the YAML config file, or fall back to the defaults when the file
    /// does not exist. An API key in the `GEMINI_API_KEY` environment
    /// variable wins over one in the file.
    pub fn load(path: &Path) -> Result<Config> {
        Self::load_with_env_key(path, std::env::var(API_KEY_ENV_VAR).ok())
    }

    fn load_with_env_key(path: &Path, env_api_key: Option<String>) -> Result<Config> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        } else {
            Config::default()
        };
        if let Some(key) = env_api_key {
            if !key.is_empty() {
                config.advice.api_key = key;
            }
        }
        Ok(config)
    }
}

impl AdviceConfig {
    pub fn require_api_key(&self) -> Result<()> {
        if self.api_key.is_empty() {
            bail!(
                "No advice API key configured. Set 'advice.api_key' in the config file \
                 or the {API_KEY_ENV_VAR} environment variable."
            );
        }
        Ok(())
    }
}
