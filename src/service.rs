//! Strategy generation with the external-first, template-fallback contract.

use chrono::{Local, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::BrandConfig;
use crate::llm::client::LlmClient;
use crate::llm::prompts;
use crate::strategy::{DocumentSource, StrategyDocument, StrategyRequest, Synthesizer};

/// Built once at startup and shared read-only by every request.
pub struct StrategyService {
    client: Option<Box<dyn LlmClient>>,
    brand: BrandConfig,
}

impl StrategyService {
    pub fn new(client: Option<Box<dyn LlmClient>>, brand: BrandConfig) -> Self {
        Self { client, brand }
    }

    /// Template-only service, no external generation.
    pub fn offline(brand: BrandConfig) -> Self {
        Self::new(None, brand)
    }

    pub fn external_enabled(&self) -> bool {
        self.client.is_some()
    }

    pub fn brand(&self) -> &BrandConfig {
        &self.brand
    }

    /// Always returns a complete document. External failures are logged and
    /// answered by the synthesizer at the current local hour.
    pub async fn generate(&self, request: &StrategyRequest) -> StrategyDocument {
        // ThreadRng is !Send; seed an owned generator before awaiting.
        let mut rng = StdRng::from_rng(&mut rand::rng());
        self.generate_with(request, Local::now().hour(), &mut rng).await
    }

    /// Same as [`generate`](Self::generate) with the fallback clock and RNG
    /// supplied by the caller.
    pub async fn generate_with<R: Rng + ?Sized>(
        &self,
        request: &StrategyRequest,
        hour: u32,
        rng: &mut R,
    ) -> StrategyDocument {
        if let Some(text) = self.try_external(request).await {
            return StrategyDocument {
                text,
                source: DocumentSource::External,
                session: rng.random_range(1000..10000),
            };
        }
        Synthesizer::new(&self.brand).synthesize(request, hour, rng)
    }

    async fn try_external(&self, request: &StrategyRequest) -> Option<String> {
        let client = self.client.as_ref()?;
        let system = prompts::system_prompt(&self.brand);
        let prompt = prompts::strategy_prompt(request, &self.brand);

        debug!("Requesting external strategy from {}", client.describe());
        match client.complete(&system, &prompt).await {
            Ok(text) if !text.trim().is_empty() => {
                info!("External strategy generated by {}", client.describe());
                Some(text)
            }
            Ok(_) => {
                warn!(
                    "{} returned an empty strategy; using template fallback",
                    client.describe()
                );
                None
            }
            Err(e) => {
                warn!(
                    "External generation via {} failed: {:#}; using template fallback",
                    client.describe(),
                    e
                );
                None
            }
        }
    }

}
