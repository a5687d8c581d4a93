use anyhow::{bail, Result};
use chrono::{Local, Timelike};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::Config;
use crate::llm::factory;
use crate::service::StrategyService;
use crate::strategy::StrategyRequest;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    intent: String,
    category: String,
    industry: Option<String>,
    audience: String,
    config_path: Option<String>,
    seed: Option<u64>,
    hour: Option<u32>,
    offline: bool,
) -> Result<()> {
    if let Some(h) = hour {
        if h > 23 {
            bail!("--hour must be between 0 and 23, got {}", h);
        }
    }

    let config = Config::load_with_path(config_path)?;
    // Without --offline the real provider is tried; a missing key just means
    // the template path.
    let client = if offline {
        None
    } else {
        factory::create_client(&config.llm, false)?
    };
    let service = StrategyService::new(client, config.brand.clone());

    let request = StrategyRequest::new(&intent, &category, industry.as_deref().unwrap_or(""), &audience);
    let hour = hour.unwrap_or_else(|| Local::now().hour());

    let mut rng = match seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let document = service.generate_with(&request, hour, &mut rng).await;
    info!(
        "Generated {} strategy (session #{})",
        document.source.as_str(),
        document.session
    );

    println!("{}", document.text);
    Ok(())
}
