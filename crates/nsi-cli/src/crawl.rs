//! `crawl` command handler.
//!
//! Segmentations are crawled one after another. The first failing
//! segmentation aborts the run; catalogues already printed stay printed.

use nsi_core::{AppConfig, Segmentation};
use nsi_scraper::NsiClient;

/// Picks the segmentations to crawl: the ones given on the command line, or
/// every segmentation listed in the endpoints file.
///
/// # Errors
///
/// Returns an error if neither source names a segmentation.
pub(crate) fn select_segmentations(
    requested: &[String],
    configured: &[Segmentation],
) -> anyhow::Result<Vec<Segmentation>> {
    if !requested.is_empty() {
        return Ok(requested.iter().map(Segmentation::new).collect());
    }
    if configured.is_empty() {
        anyhow::bail!(
            "no segmentation to crawl; pass --segmentation or list segmentations in the endpoints file"
        );
    }
    Ok(configured.to_vec())
}

/// Crawls each selected segmentation and prints its catalogue as JSON.
///
/// # Errors
///
/// Returns an error if the endpoints file cannot be loaded, no segmentation
/// is selected, or any crawl fails.
pub(crate) async fn run_crawl(
    client: &NsiClient,
    config: &AppConfig,
    requested: &[String],
) -> anyhow::Result<()> {
    let file = nsi_core::load_endpoints(&config.endpoints_path)?;
    let segmentations = select_segmentations(requested, &file.segmentations)?;

    tracing::info!(
        count = segmentations.len(),
        root = client.retailer_root(),
        "starting catalogue crawl"
    );

    for segmentation in &segmentations {
        let catalog = client
            .crawl_segmentation(&file.endpoints, segmentation)
            .await
            .map_err(|e| anyhow::anyhow!("crawl of {segmentation} failed: {e}"))?;
        crate::print_json(&catalog)?;
    }

    Ok(())
}
