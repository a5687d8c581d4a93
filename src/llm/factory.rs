use anyhow::Result;
use tracing::info;

use super::client::LlmClient;
use super::client::MockLlmClient;
use super::client_impl::{AnthropicClient, OpenAIClient, Sampling};
use crate::config::{LlmConfig, Provider};

/// Create the external generation client, if one can be used.
///
/// Returns `Ok(None)` when no credential is configured: the service then
/// runs on the template synthesizer alone. `dry_run` uses the mock client.
pub fn create_client(llm_config: &LlmConfig, dry_run: bool) -> Result<Option<Box<dyn LlmClient>>> {
    if dry_run {
        return Ok(Some(Box::new(MockLlmClient::new())));
    }

    let Some(api_key) = llm_config.api_key() else {
        info!(
            "No API key in {}; external generation disabled",
            llm_config.api_key_env.as_deref().unwrap_or("(unset)")
        );
        return Ok(None);
    };

    let sampling = Sampling {
        max_tokens: llm_config.max_tokens,
        temperature: llm_config.temperature,
        timeout_secs: llm_config.timeout_secs,
    };
    let model = llm_config.model.clone();

    let client: Box<dyn LlmClient> = match llm_config.provider {
        Provider::OpenAI => match llm_config.base_url.clone() {
            Some(base_url) => Box::new(OpenAIClient::with_base_url(
                api_key, model, base_url, sampling,
            )?),
            None => Box::new(OpenAIClient::new(api_key, model, sampling)?),
        },

        Provider::OpenAICompatible => {
            let base_url = llm_config
                .base_url
                .clone()
                .unwrap_or_else(|| "http://localhost:11434/v1".to_string());
            Box::new(OpenAIClient::with_base_url(
                api_key, model, base_url, sampling,
            )?)
        }

        Provider::Anthropic => match llm_config.base_url.clone() {
            Some(base_url) => Box::new(AnthropicClient::with_base_url(
                api_key, model, base_url, sampling,
            )?),
            None => Box::new(AnthropicClient::new(api_key, model, sampling)?),
        },
    };

    info!("External generation enabled via {}", client.describe());
    Ok(Some(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_dry_run_uses_mock_client() {
        let client = create_client(&LlmConfig::default(), true).unwrap().unwrap();
        assert_eq!(client.describe(), "mock");
    }

    #[test]
    fn test_missing_key_disables_external_generation() {
        let config = LlmConfig {
            api_key_env: Some("EVOLVE_TEST_NONEXISTENT_KEY_FACTORY_99999".to_string()),
            ..LlmConfig::default()
        };
        assert!(create_client(&config, false).unwrap().is_none());
    }

    #[test]
    #[serial]
    fn test_create_openai_client() {
        env::set_var("EVOLVE_TEST_FACTORY_KEY", "test_key");
        let config = LlmConfig {
            api_key_env: Some("EVOLVE_TEST_FACTORY_KEY".to_string()),
            ..LlmConfig::default()
        };
        let client = create_client(&config, false).unwrap().unwrap();
        assert_eq!(client.describe(), "openai/gpt-3.5-turbo");
        env::remove_var("EVOLVE_TEST_FACTORY_KEY");
    }

    #[test]
    #[serial]
    fn test_create_anthropic_client() {
        env::set_var("EVOLVE_TEST_FACTORY_KEY", "test_key");
        let config = LlmConfig {
            provider: Provider::Anthropic,
            model: "claude-3-haiku".to_string(),
            api_key_env: Some("EVOLVE_TEST_FACTORY_KEY".to_string()),
            ..LlmConfig::default()
        };
        let client = create_client(&config, false).unwrap().unwrap();
        assert_eq!(client.describe(), "anthropic/claude-3-haiku");
        env::remove_var("EVOLVE_TEST_FACTORY_KEY");
    }

    #[test]
    fn test_create_keyless_openai_compatible_client() {
        let config = LlmConfig {
            provider: Provider::OpenAICompatible,
            model: "llama3".to_string(),
            api_key_env: Some("none".to_string()),
            ..LlmConfig::default()
        };
        let client = create_client(&config, false).unwrap().unwrap();
        assert_eq!(client.describe(), "openai/llama3");
    }
}
