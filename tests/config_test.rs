//! Configuration loading and defaults

use anyhow::Result;
use evolve::config::{Config, Provider};
use evolve::llm::factory;
use serial_test::serial;
use std::env;
use std::io::Write;

#[test]
fn test_config_has_defaults() -> Result<()> {
    let config = Config::default();

    assert!(!config.llm.model.is_empty());
    assert!(config.llm.timeout_secs > 0);
    assert!(config.server.port > 0);
    assert!(!config.brand.hashtags.is_empty());

    Ok(())
}

#[test]
fn test_load_explicit_path() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(
        file,
        r##"
[llm]
provider = "anthropic"
model = "claude-3-haiku"
api_key_env = "ANTHROPIC_API_KEY"
timeout_secs = 10

[server]
host = "0.0.0.0"
port = 8080

[brand]
company = "Acme"
product = "Acme Fuel"
hashtags = ["#Acme"]
"##
    )?;

    let config = Config::load_with_path(Some(file.path().to_string_lossy().to_string()))?;

    assert_eq!(config.llm.provider, Provider::Anthropic);
    assert_eq!(config.llm.timeout_secs, 10);
    assert_eq!(config.llm.max_tokens, 2000);
    assert_eq!(config.server.bind_addr(), "0.0.0.0:8080");
    assert_eq!(config.brand.company, "Acme");
    assert_eq!(config.brand.assistant, "E-Volve.ai");
    assert_eq!(config.brand.hashtags, vec!["#Acme".to_string()]);

    Ok(())
}

#[test]
fn test_load_explicit_missing_path_fails() {
    let result = Config::load_with_path(Some("/nonexistent/evolve.toml".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_load_malformed_toml_fails() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "[server\nport = ")?;
    let result = Config::load_with_path(Some(file.path().to_string_lossy().to_string()));
    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_config_load_returns_valid_config() -> Result<()> {
    // Should load config or return defaults without crashing
    let config = Config::load()?;
    assert!(!config.llm.model.is_empty());
    Ok(())
}

#[test]
#[serial]
fn test_absent_key_does_not_block_startup() -> Result<()> {
    let saved = env::var("OPENAI_API_KEY").ok();
    env::remove_var("OPENAI_API_KEY");

    let client = factory::create_client(&Config::default().llm, false)?;
    assert!(client.is_none());

    if let Some(value) = saved {
        env::set_var("OPENAI_API_KEY", value);
    }
    Ok(())
}

#[test]
#[serial]
fn test_blank_key_counts_as_absent() {
    env::set_var("EVOLVE_TEST_BLANK_KEY", "   ");
    let mut config = Config::default();
    config.llm.api_key_env = Some("EVOLVE_TEST_BLANK_KEY".to_string());
    assert!(config.llm.api_key().is_none());
    env::remove_var("EVOLVE_TEST_BLANK_KEY");
}
