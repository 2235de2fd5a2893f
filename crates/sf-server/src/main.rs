use anyhow::Context;
use clap::Parser;
use sf_config::StorefrontConfig;
use sf_server::cli::{Cli, Commands};
use sf_server::{AppState, backend_from_config};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("storefront error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = StorefrontConfig::load_with_dotenv().context("failed to load configuration")?;

    match cli.command {
        Commands::Serve(args) => {
            args.apply(&mut config);
            let backend = backend_from_config(&config).context("failed to create backend client")?;
            sf_server::serve(AppState::new(config, backend)).await
        }
        Commands::Config => {
            let rendered = serde_json::to_string_pretty(&config.redacted())
                .context("failed to render configuration")?;
            println!("{rendered}");
            Ok(())
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("STOREFRONT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
