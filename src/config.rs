use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::util::SecretString;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub brand: BrandConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provider {
    #[serde(rename = "openai")]
    OpenAI,
    #[serde(rename = "openai-compatible")]
    OpenAICompatible,
    Anthropic,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::OpenAI => "openai",
            Provider::OpenAICompatible => "openai-compatible",
            Provider::Anthropic => "anthropic",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_provider")]
    pub provider: Provider,
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key. "none" means the endpoint
    /// needs no key (e.g. a local openai-compatible server).
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>, // For OpenAI-compatible APIs

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Upper bound for a single generation call; the template fallback takes
    /// over once it elapses.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            api_key_env: Some("OPENAI_API_KEY".to_string()),
            base_url: None,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LlmConfig {
    /// Resolve the API key from the configured environment variable.
    ///
    /// Returns `None` when no credential is available, which disables
    /// external generation without being an error.
    pub fn api_key(&self) -> Option<SecretString> {
        let env_var = self.api_key_env.as_deref()?;

        // Special case: "none" means no API key needed (e.g., Ollama)
        if env_var.eq_ignore_ascii_case("none") {
            return Some(SecretString::default());
        }

        match env::var(env_var) {
            Ok(value) if !value.trim().is_empty() => Some(value.into()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Fixed brand facts woven into prompts, scripts and hashtags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandConfig {
    #[serde(default = "default_assistant")]
    pub assistant: String,
    #[serde(default = "default_company")]
    pub company: String,
    #[serde(default = "default_product")]
    pub product: String,
    #[serde(default = "default_brand_hashtags")]
    pub hashtags: Vec<String>,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            assistant: default_assistant(),
            company: default_company(),
            product: default_product(),
            hashtags: default_brand_hashtags(),
        }
    }
}

fn default_provider() -> Provider {
    Provider::OpenAI
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_temperature() -> f32 {
    0.8
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_assistant() -> String {
    "E-Volve.ai".to_string()
}

fn default_company() -> String {
    "LVX Labs".to_string()
}

fn default_product() -> String {
    "Metafyzical Smart Energy".to_string()
}

fn default_brand_hashtags() -> Vec<String> {
    [
        "#LVXLabs",
        "#MetafyzicalEnergy",
        "#EVolveAI",
        "#SmartEnergy",
        "#LVXGaming",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Config {
    /// Load config from the working directory or user config directory
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        // If explicit path provided, use it
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(&config_path)
                .with_context(|| format!("failed to load config from {}", config_path));
        }

        if let Ok(config) = Self::load_from_path("evolve.toml") {
            debug!("Loaded config from ./evolve.toml");
            return Ok(config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("evolve").join("config.toml");
            if let Ok(config) = Self::load_from_path(&config_path) {
                debug!("Loaded config from {:?}", config_path);
                return Ok(config);
            }
        }

        debug!("Using default config");
        Ok(Self::default())
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
