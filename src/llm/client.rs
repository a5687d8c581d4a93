use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one system + user exchange and return the assistant's text.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String>;

    /// Short identifier for logs, e.g. `openai/gpt-3.5-turbo`.
    fn describe(&self) -> String;
}

/// Offline client that answers with a fixed strategy built from the prompt.
pub struct MockLlmClient;

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _system: &str, prompt: &str) -> Result<String> {
        let request_line = prompt
            .lines()
            .map(str::trim)
            .find(|line| line.starts_with("USER REQUEST:"))
            .unwrap_or("USER REQUEST: (unknown)");

        Ok(format!(
            "MOCK STRATEGY\n{}\n\n1. VIRAL HOOK: Stop scrolling!\n2. SCRIPT: 0-3s hook, 3-15s problem, 15-45s value, 45-60s CTA\n3. HASHTAGS: #fyp #viral",
            request_line
        ))
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_echoes_request_line() {
        let client = MockLlmClient::new();
        let prompt = "intro\n    USER REQUEST: ranked tips\n    CATEGORY: gaming";
        let text = client.complete("system", prompt).await.unwrap();
        assert!(text.starts_with("MOCK STRATEGY"));
        assert!(text.contains("USER REQUEST: ranked tips"));
        assert_eq!(client.describe(), "mock");
    }
}
