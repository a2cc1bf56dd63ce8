use clap::Parser;
use intraday_rth::cli::{Cli, Commands};
use intraday_rth::config::Config;

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
    intraday_rth::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Fetch(args) => {
            tracing::info!(symbols = args.symbols.len(), "Fetching intraday bars");
            args.execute(&config.provider).await?;
        }
        Commands::Window(args) => {
            args.execute().await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Provider: ua={:?}, timeout={}s",
                config.provider.user_agent, config.provider.timeout_secs
            );
            println!(
                "  Retry: attempts={}, backoff={}ms",
                config.provider.max_attempts, config.provider.backoff_ms
            );
            println!(
                "  Telemetry: level={}, format={:?}, metrics_port={:?}",
                config.telemetry.log_level,
                config.telemetry.log_format,
                config.telemetry.metrics_port
            );
        }
    }

    Ok(())
}
