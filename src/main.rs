use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use evolve::cli;

#[derive(Parser)]
#[command(name = "evolve", version)]
#[command(about = "TikTok strategy generator with an LLM path and template fallback", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server
    Serve {
        /// Path to config file (defaults to ./evolve.toml or ~/.config/evolve/config.toml)
        #[arg(long)]
        config: Option<String>,

        /// Override bind host
        #[arg(long)]
        host: Option<String>,

        /// Override bind port
        #[arg(short = 'p', long)]
        port: Option<u16>,

        /// Override LLM model (e.g., "gpt-4o-mini")
        #[arg(long)]
        model: Option<String>,

        /// Never call the LLM provider; serve template strategies only
        #[arg(long)]
        offline: bool,

        /// Use mock LLM client for testing
        #[arg(long, conflicts_with = "offline")]
        dry_run: bool,
    },

    /// Generate one strategy and print it to stdout
    Generate {
        /// What content to create (free text)
        #[arg(long)]
        intent: String,

        /// gaming, fitness, lifestyle, business or product
        #[arg(long)]
        category: String,

        /// Game or industry label
        #[arg(long)]
        industry: Option<String>,

        /// gamers, fitness, entrepreneurs, students or general
        #[arg(long)]
        audience: String,

        /// Path to config file
        #[arg(long)]
        config: Option<String>,

        /// Seed for the template synthesizer
        #[arg(long)]
        seed: Option<u64>,

        /// Hour of day (0-23) for the template synthesizer; defaults to now
        #[arg(long)]
        hour: Option<u32>,

        /// Skip the LLM provider and use the template synthesizer
        #[arg(long)]
        offline: bool,
    },

    /// Validate configuration and report whether external generation is available
    ConfigCheck {
        /// Path to config file
        #[arg(long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the key may come from the real environment
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            model,
            offline,
            dry_run,
        } => {
            cli::serve::run(config, host, port, model, offline, dry_run).await?;
        }
        Commands::Generate {
            intent,
            category,
            industry,
            audience,
            config,
            seed,
            hour,
            offline,
        } => {
            cli::generate::run(
                intent, category, industry, audience, config, seed, hour, offline,
            )
            .await?;
        }
        Commands::ConfigCheck { config } => {
            cli::config_check::run(config)?;
        }
    }

    Ok(())
}
