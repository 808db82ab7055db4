mod crawl;
mod lookup;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "nsi-cli")]
#[command(about = "Catalogue crawler for the retailer's offer portlets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Crawl contract conditions, offers and devices for one or more segmentations
    Crawl {
        /// Segmentation code to crawl; repeatable. Defaults to every configured one.
        #[arg(long = "segmentation", value_name = "CODE")]
        segmentations: Vec<String>,
    },
    /// Check whether a stock code can be ordered
    Availability {
        /// Device stock code (SKU)
        stock_code: String,
    },
    /// Fetch the price records of a stock code under one offer
    Prices {
        /// Device stock code (SKU)
        stock_code: String,

        #[arg(long, value_name = "CODE")]
        offer: String,

        #[arg(long, value_name = "CODE")]
        tariff: String,

        #[arg(long = "contract-condition", value_name = "CODE")]
        contract_condition: String,
    },
    /// Resolve the main photo URL of a product page
    Photo {
        /// Absolute product page URL
        product_page_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = nsi_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = nsi_scraper::NsiClient::from_config(&config)
        .map_err(|e| anyhow::anyhow!("failed to build catalogue client: {e}"))?;

    match cli.command {
        Commands::Crawl { segmentations } => {
            crawl::run_crawl(&client, &config, &segmentations).await?;
        }
        Commands::Availability { stock_code } => {
            lookup::run_availability(&client, &config, &stock_code).await?;
        }
        Commands::Prices {
            stock_code,
            offer,
            tariff,
            contract_condition,
        } => {
            lookup::run_prices(
                &client,
                &config,
                &lookup::PriceQuery {
                    stock_code: &stock_code,
                    offer: &offer,
                    tariff: &tariff,
                    contract_condition: &contract_condition,
                },
            )
            .await?;
        }
        Commands::Photo { product_page_url } => {
            lookup::run_photo(&client, &product_page_url).await?;
        }
    }

    Ok(())
}

/// Writes `value` to stdout as pretty-printed JSON.
fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests;
