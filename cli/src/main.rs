//! FarmSight - command-line front end
//!
//! Simulated crop success prediction and plant identification for Indian
//! growing seasons, with an optional live weather panel.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use farmsight::commands::{apply_overrides, execute, Cli};
use farmsight::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farmsight=info,reqwest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = apply_overrides(&cli, Config::load()?);

    tracing::debug!("Environment: {}", config.environment);

    match execute(&cli, &config).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", e);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&e.to_response())?);
            } else {
                eprintln!("{}", e.user_message());
            }
            std::process::exit(1);
        }
    }
}
