//! Full catalogue crawl for one segmentation.

use nsi_core::{OfferCatalog, PortletEndpoints, Segmentation, SegmentationCatalog};

use crate::error::ScraperError;

use super::NsiClient;

impl NsiClient {
    /// Crawls the whole catalogue of `segmentation`: contract conditions,
    /// then offers, then for each offer its page count and devices.
    ///
    /// Requests are made one at a time. The first failure aborts the crawl.
    ///
    /// # Errors
    ///
    /// Propagates any error from the individual operations.
    pub async fn crawl_segmentation(
        &self,
        endpoints: &PortletEndpoints,
        segmentation: &Segmentation,
    ) -> Result<SegmentationCatalog, ScraperError> {
        let contract_conditions = self
            .available_contract_conditions(&endpoints.contract_conditions_url, segmentation)
            .await?;

        let offers = self
            .offer_list(&endpoints.offers_url, segmentation, &contract_conditions)
            .await?;

        let mut catalogs = Vec::with_capacity(offers.len());
        for offer in offers {
            let page_count = self
                .pages(&endpoints.pages_url, segmentation, &offer)
                .await?;
            let devices = self
                .devices_in_offer(
                    &endpoints.devices_url,
                    segmentation,
                    &offer,
                    page_count,
                    &endpoints.prices_url,
                )
                .await?;
            catalogs.push(OfferCatalog { offer, devices });
        }

        let catalog = SegmentationCatalog {
            segmentation: segmentation.clone(),
            contract_conditions,
            offers: catalogs,
        };
        tracing::info!(
            segmentation = %segmentation,
            offers = catalog.offers.len(),
            devices = catalog.device_count(),
            "crawled segmentation"
        );
        Ok(catalog)
    }
}
