//! Converter CLI
//!
//! Command-line front end for the currency converter widget.

mod config;
mod logging;
mod session;
mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};

use converter_types::RateProvider;
use converter_widget::ConverterWidget;
use exchange_rate_client::ExchangeRateClient;
use exchange_rates::StaticRateProvider;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "converter")]
#[command(author, version, about = "Currency converter backed by ExchangeRate-API", long_about = None)]
struct Cli {
    /// Base URL of ExchangeRate-API, without the key
    #[arg(long)]
    api_url: Option<String>,

    /// API key, sent as a URL path segment
    #[arg(long)]
    api_key: Option<String>,

    /// Use built-in rates instead of the network
    #[arg(long)]
    offline: bool,

    /// Source currency selected on start
    #[arg(long)]
    from: Option<String>,

    /// Target currency selected on start
    #[arg(long)]
    to: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported currencies
    Codes {
        /// Only show codes or names containing this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Convert an amount of the source currency
    Convert {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Convert an amount of the target currency back to the source
    Reverse {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Start an interactive converter session
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_json);

    let mut config = Config::from_env()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(key) = cli.api_key {
        config.api_key = Some(key);
    }
    if let Some(from) = cli.from {
        config.default_from = config::parse_code("--from", &from)?;
    }
    if let Some(to) = cli.to {
        config.default_to = config::parse_code("--to", &to)?;
    }
    config.offline |= cli.offline;

    if config.offline {
        tracing::info!("using built-in rates");
        return run(StaticRateProvider::new(), &config, cli.command).await;
    }

    let mut client = ExchangeRateClient::new(&config.api_url);
    match &config.api_key {
        Some(key) => client = client.with_api_key(key),
        None => tracing::warn!("EXCHANGE_RATE_API_KEY is not set; requests will likely be rejected"),
    }
    run(client, &config, cli.command).await
}

async fn run<P: RateProvider>(provider: P, config: &Config, command: Commands) -> Result<()> {
    let mut widget =
        ConverterWidget::new(provider, config.widget_config()).with_bounds(view::BOUNDS);

    match command {
        Commands::Codes { search } => {
            let catalog = widget.provider().list_currencies().await?;
            for currency in catalog.filter(search.as_deref().unwrap_or_default()) {
                println!("{}", currency.label());
            }
        }

        Commands::Convert { amount } => {
            widget.initialize().await;
            ensure_ok(&widget)?;
            widget.set_amount_from(amount).await;
            println!("{}", serde_json::to_string_pretty(widget.state())?);
            ensure_ok(&widget)?;
        }

        Commands::Reverse { amount } => {
            widget.initialize().await;
            ensure_ok(&widget)?;
            widget.set_amount_to(Some(amount)).await;
            println!("{}", serde_json::to_string_pretty(widget.state())?);
            ensure_ok(&widget)?;
        }

        Commands::Interactive => session::run(&mut widget).await?,
    }

    Ok(())
}

fn ensure_ok<P: RateProvider>(widget: &ConverterWidget<P>) -> Result<()> {
    match &widget.state().error {
        Some(message) => anyhow::bail!("{}", message),
        None => Ok(()),
    }
}
