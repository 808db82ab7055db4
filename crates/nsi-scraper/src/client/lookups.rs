//! Single-SKU lookups: availability, prices and the main product photo.

use nsi_core::DevicePrices;

use crate::error::ScraperError;
use crate::html::{absolutize_photo_url, extract_main_photo_src};
use crate::types::{AvailabilityResponse, PricesResponse};

use super::NsiClient;

impl NsiClient {
    /// Returns whether `stock_code` is available to order.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::NoAvailability`] if the portlet returns no entry for
    ///   the stock code.
    /// - Transport or [`ScraperError::Deserialize`] errors.
    pub async fn check_availability(
        &self,
        url: &str,
        stock_code: &str,
    ) -> Result<bool, ScraperError> {
        let response: AvailabilityResponse = self
            .post_form(
                url,
                &[("deviceStockCode", stock_code)],
                &format!("availability of {stock_code}"),
            )
            .await?;

        response
            .device_availables
            .first()
            .map(|entry| entry.available)
            .ok_or_else(|| ScraperError::NoAvailability {
                stock_code: stock_code.to_owned(),
            })
    }

    /// Returns the price records of `stock_code` under one offer, verbatim.
    /// The list may be empty.
    ///
    /// # Errors
    ///
    /// Transport errors, or [`ScraperError::Deserialize`] if the body lacks
    /// `devicesPrices`.
    pub async fn check_product_prices(
        &self,
        url: &str,
        stock_code: &str,
        offer_code: &str,
        tariff_code: &str,
        contract_condition_code: &str,
    ) -> Result<Vec<DevicePrices>, ScraperError> {
        let response: PricesResponse = self
            .post_form(
                url,
                &[
                    ("deviceStockCode", stock_code),
                    ("offerNSICode", offer_code),
                    ("tariffPlanCode", tariff_code),
                    ("contractConditionCode", contract_condition_code),
                ],
                &format!("prices of {stock_code} in offer {offer_code}"),
            )
            .await?;
        Ok(response.devices_prices)
    }

    /// Returns the absolute URL of the main photo on a product page.
    ///
    /// The page must carry a `#phone-carousel` gallery; its first image is
    /// the main photo. Relative sources are resolved against the retailer
    /// root.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::MissingElement`] if the carousel or its image is absent.
    /// - Transport errors from fetching the page.
    pub async fn find_main_photo_for_sku(
        &self,
        product_page_url: &str,
    ) -> Result<String, ScraperError> {
        let html = self.get_html(product_page_url).await?;
        let src = extract_main_photo_src(&html).map_err(|missing| ScraperError::MissingElement {
            url: product_page_url.to_owned(),
            selector: missing.selector().to_owned(),
        })?;
        Ok(absolutize_photo_url(&self.retailer_root, &src))
    }
}
