use anyhow::Result;
use std::env;

use crate::config::{Config, LlmConfig, Provider};

struct CheckResult {
    passed: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl CheckResult {
    fn new() -> Self {
        Self {
            passed: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn pass(&mut self, msg: impl Into<String>) {
        self.passed.push(msg.into());
    }

    fn warn(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }
}

pub fn run(config_path: Option<String>) -> Result<()> {
    let mut results = CheckResult::new();

    let config = match Config::load_with_path(config_path.clone()) {
        Ok(config) => {
            let source = config_path.as_deref().unwrap_or("default search path");
            results.pass(format!("Config loaded from {}", source));
            config
        }
        Err(e) => {
            // Reported through print_results, not propagated, so it prints once.
            results.error(format!("Failed to load config: {:#}", e));
            print_results(&results);
            return Ok(());
        }
    };

    check_config(&config, &mut results);
    print_results(&results);

    if !results.errors.is_empty() {
        anyhow::bail!("{} config error(s) found", results.errors.len());
    }

    Ok(())
}

fn check_config(config: &Config, results: &mut CheckResult) {
    results.pass(format!(
        "LLM provider: {} (model: {})",
        config.llm.provider, config.llm.model
    ));

    check_api_key(&config.llm, results);

    if config.llm.provider == Provider::OpenAICompatible && config.llm.base_url.is_none() {
        results.warn(
            "openai-compatible provider without base_url, will use http://localhost:11434/v1",
        );
    }

    if config.llm.timeout_secs == 0 {
        results.error("llm.timeout_secs must be greater than 0");
    } else if config.llm.timeout_secs > 120 {
        results.warn(format!(
            "llm.timeout_secs = {}s; slow providers delay the template fallback that long",
            config.llm.timeout_secs
        ));
    }

    if !(0.0..=2.0).contains(&config.llm.temperature) {
        results.warn(format!(
            "llm.temperature = {} is outside the usual 0.0-2.0 range",
            config.llm.temperature
        ));
    }

    if config.server.port == 0 {
        results.warn("server.port = 0, an ephemeral port will be chosen");
    }
    results.pass(format!("Bind address: {}", config.server.bind_addr()));

    if config.brand.hashtags.is_empty() {
        results.warn("brand.hashtags is empty, documents will carry no branded hashtags");
    } else if let Some(bad) = config.brand.hashtags.iter().find(|t| !t.starts_with('#')) {
        results.warn(format!("brand hashtag {:?} does not start with '#'", bad));
    } else {
        results.pass(format!(
            "Brand: {} / {} ({} hashtags)",
            config.brand.company,
            config.brand.product,
            config.brand.hashtags.len()
        ));
    }
}

fn check_api_key(llm: &LlmConfig, results: &mut CheckResult) {
    match llm.api_key_env.as_deref() {
        Some(env_var) if env_var.eq_ignore_ascii_case("none") => {
            results.pass("No API key needed, external generation enabled");
        }
        Some(env_var) => match env::var(env_var) {
            Ok(v) if !v.trim().is_empty() => {
                results.pass(format!("{} is set, external generation enabled", env_var));
            }
            _ => {
                results.warn(format!(
                    "{} is not set, serving template strategies only",
                    env_var
                ));
            }
        },
        None => {
            results.warn("llm.api_key_env not configured, serving template strategies only");
        }
    }
}

fn print_results(results: &CheckResult) {
    println!();
    for msg in &results.passed {
        println!("  \u{2713} {}", msg);
    }
    for msg in &results.warnings {
        println!("  ! {}", msg);
    }
    for msg in &results.errors {
        println!("  \u{2717} {}", msg);
    }
    println!();
    println!(
        "{} passed, {} warnings, {} errors",
        results.passed.len(),
        results.warnings.len(),
        results.errors.len()
    );
}
