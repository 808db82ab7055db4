//! Single-SKU lookup command handlers.

use nsi_core::AppConfig;
use nsi_scraper::NsiClient;
use serde::Serialize;

/// Arguments of the `prices` command.
pub(crate) struct PriceQuery<'a> {
    pub stock_code: &'a str,
    pub offer: &'a str,
    pub tariff: &'a str,
    pub contract_condition: &'a str,
}

#[derive(Debug, Serialize)]
struct Availability<'a> {
    sku: &'a str,
    available: bool,
}

#[derive(Debug, Serialize)]
struct MainPhoto<'a> {
    product_page_url: &'a str,
    photo_url: String,
}

pub(crate) async fn run_availability(
    client: &NsiClient,
    config: &AppConfig,
    stock_code: &str,
) -> anyhow::Result<()> {
    let file = nsi_core::load_endpoints(&config.endpoints_path)?;
    let available = client
        .check_availability(&file.endpoints.availability_url, stock_code)
        .await?;
    crate::print_json(&Availability {
        sku: stock_code,
        available,
    })
}

pub(crate) async fn run_prices(
    client: &NsiClient,
    config: &AppConfig,
    query: &PriceQuery<'_>,
) -> anyhow::Result<()> {
    let file = nsi_core::load_endpoints(&config.endpoints_path)?;
    let prices = client
        .check_product_prices(
            &file.endpoints.prices_url,
            query.stock_code,
            query.offer,
            query.tariff,
            query.contract_condition,
        )
        .await?;
    crate::print_json(&prices)
}

pub(crate) async fn run_photo(client: &NsiClient, product_page_url: &str) -> anyhow::Result<()> {
    let photo_url = client.find_main_photo_for_sku(product_page_url).await?;
    crate::print_json(&MainPhoto {
        product_page_url,
        photo_url,
    })
}
