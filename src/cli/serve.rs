use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::llm::factory;
use crate::service::StrategyService;
use crate::web;

pub async fn run(
    config_path: Option<String>,
    host_override: Option<String>,
    port_override: Option<u16>,
    model_override: Option<String>,
    offline: bool,
    dry_run: bool,
) -> Result<()> {
    let mut config = Config::load_with_path(config_path)?;

    if let Some(host) = host_override {
        info!("CLI override: host = {}", host);
        config.server.host = host;
    }
    if let Some(port) = port_override {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }
    if let Some(model) = model_override {
        info!("CLI override: model = {}", model);
        config.llm.model = model;
    }

    let client = if offline {
        None
    } else {
        factory::create_client(&config.llm, dry_run)?
    };
    if client.is_none() {
        info!("Serving template strategies only");
    }

    let service = Arc::new(StrategyService::new(client, config.brand.clone()));
    web::serve(service, &config.server.bind_addr()).await
}
