use clap::Parser;
use snitrend::cli::{Cli, Commands};
use snitrend::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    let _telemetry = snitrend::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Detect(args) => {
            tracing::debug!("Starting batch detection");
            args.execute(&config).await?;
        }
        Commands::Watch(args) => {
            tracing::debug!("Starting stream detection");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
