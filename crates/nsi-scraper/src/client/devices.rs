//! Device aggregation for one offer.

use nsi_core::{Device, Offer, Segmentation};

use crate::error::ScraperError;
use crate::html::extract_device_skus;
use crate::normalize::{device_from_listing, old_price, with_old_price, with_variants};
use crate::pagination::page_numbers;
use crate::product_page::{product_page_url, ProductPageParams};
use crate::types::{DeviceListing, DevicesPageResponse};

use super::catalog::offer_form;
use super::NsiClient;

impl NsiClient {
    /// Fetches every device listed under `offer` and enriches each one with
    /// its product page URL, its sibling stock codes and its old price.
    ///
    /// Pages `1..=page_count` are requested in order; devices keep page order,
    /// then response order. A `page_count` of zero or less yields no devices
    /// and sends no requests.
    ///
    /// **All-or-nothing semantics**: any failure on any page, product page or
    /// price lookup discards everything collected so far and returns the
    /// error.
    ///
    /// # Errors
    ///
    /// Any error from the listing, product page or price requests.
    pub async fn devices_in_offer(
        &self,
        url: &str,
        segmentation: &Segmentation,
        offer: &Offer,
        page_count: i64,
        price_url: &str,
    ) -> Result<Vec<Device>, ScraperError> {
        let mut all_devices: Vec<Device> = Vec::new();

        for page in page_numbers(page_count, &offer.offer_nsi_code) {
            let page_param = page.to_string();
            let mut form = offer_form(segmentation, offer).to_vec();
            form.push(("page", &page_param));

            let response: DevicesPageResponse = self
                .post_form(
                    url,
                    &form,
                    &format!("devices page {page} of offer {}", offer.offer_nsi_code),
                )
                .await?;

            tracing::debug!(
                offer = %offer.offer_nsi_code,
                page,
                count = response.devices.len(),
                "fetched device listing page"
            );

            for listing in response.devices {
                let device = self
                    .enrich_device(segmentation, offer, listing, price_url)
                    .await?;
                all_devices.push(device);
            }
        }

        tracing::info!(
            offer = %offer.offer_nsi_code,
            pages = page_count,
            count = all_devices.len(),
            "aggregated devices for offer"
        );
        Ok(all_devices)
    }

    /// URL, then variants, then old price; each step returns a new record.
    async fn enrich_device(
        &self,
        segmentation: &Segmentation,
        offer: &Offer,
        listing: DeviceListing,
        price_url: &str,
    ) -> Result<Device, ScraperError> {
        let page_url = product_page_url(
            &self.retailer_root,
            &ProductPageParams {
                segmentation,
                offer,
                device_type_code: &listing.product_type,
                stock_code: &listing.sku,
            },
        )?;
        let device = device_from_listing(listing, page_url);

        let variants = self
            .find_all_skus(&device.product_page_url, &device.sku)
            .await?;
        let device = with_variants(device, variants);

        let prices = self
            .check_product_prices(
                price_url,
                &device.sku,
                &offer.offer_nsi_code,
                &offer.tariff_plan_code,
                &offer.contract_condition_code,
            )
            .await?;
        Ok(with_old_price(device, old_price(&prices)))
    }

    /// Scrapes the variant stock codes from a product page. An empty result
    /// means the device is its own only variant.
    async fn find_all_skus(
        &self,
        product_page_url: &str,
        stock_code: &str,
    ) -> Result<Vec<String>, ScraperError> {
        let html = self.get_html(product_page_url).await?;
        let skus = extract_device_skus(&html);
        if skus.is_empty() {
            tracing::debug!(
                sku = stock_code,
                "no variant inputs on product page; device is its own variant"
            );
        }
        Ok(skus)
    }
}
