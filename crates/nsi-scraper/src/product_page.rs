//! Storefront product page URLs.
//!
//! A product page is addressed by its catalogue path plus the full offer
//! context as query parameters:
//!
//! ```text
//! http://plus.pl/[dla-firm/]{telefon|tablet-laptop|modem-router}?processSegmentationCode=..
//!     &offerNSICode=..&tariffPlanCode=..&contractConditionCode=..
//!     &deviceTypeCode=..&deviceStockCode=..&marketTypeCode=..
//! ```
//!
//! Parameters are always emitted in that order.

use nsi_core::{DeviceType, Offer, Segmentation};

use crate::error::ScraperError;

/// Path prefix of the business (small office / home office) storefront.
const BUSINESS_SECTION: &str = "dla-firm/";

/// Everything that identifies one device's product page.
#[derive(Debug, Clone, Copy)]
pub struct ProductPageParams<'a> {
    pub segmentation: &'a Segmentation,
    pub offer: &'a Offer,
    /// Raw `productType` of the device, e.g. `"TAB"`.
    pub device_type_code: &'a str,
    pub stock_code: &'a str,
}

impl<'a> ProductPageParams<'a> {
    /// Query parameters in the order they appear in the URL.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, &'a str); 7] {
        [
            ("processSegmentationCode", self.segmentation.as_str()),
            ("offerNSICode", self.offer.offer_nsi_code.as_str()),
            ("tariffPlanCode", self.offer.tariff_plan_code.as_str()),
            ("contractConditionCode", self.offer.contract_condition_code.as_str()),
            ("deviceTypeCode", self.device_type_code),
            ("deviceStockCode", self.stock_code),
            ("marketTypeCode", self.segmentation.market_type()),
        ]
    }

    /// Path below the retailer root, e.g. `"dla-firm/tablet-laptop"`.
    #[must_use]
    pub fn path(&self) -> String {
        let section = if self.segmentation.is_business() {
            BUSINESS_SECTION
        } else {
            ""
        };
        let catalog = DeviceType::from_code(self.device_type_code).catalog_path();
        format!("{section}{catalog}")
    }
}

/// Builds the product page URL under `retailer_root` (e.g. `"http://plus.pl"`).
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if `retailer_root` does not form a
/// valid URL.
pub fn product_page_url(
    retailer_root: &str,
    params: &ProductPageParams<'_>,
) -> Result<String, ScraperError> {
    let base = format!("{}/{}", retailer_root.trim_end_matches('/'), params.path());
    let mut url = reqwest::Url::parse(&base).map_err(|e| ScraperError::InvalidUrl {
        url: base.clone(),
        reason: e.to_string(),
    })?;

    url.query_pairs_mut().extend_pairs(params.query_pairs());

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, Value};

    use super::*;

    fn offer() -> Offer {
        Offer {
            offer_nsi_code: "OFF1".to_owned(),
            tariff_plan_code: "TP40".to_owned(),
            contract_condition_code: "24A".to_owned(),
            monthly_fee_gross: Value::from("40"),
            extra: Map::new(),
        }
    }

    fn build(segmentation: &str, device_type: &str) -> String {
        let segmentation = Segmentation::new(segmentation);
        let offer = offer();
        let params = ProductPageParams {
            segmentation: &segmentation,
            offer: &offer,
            device_type_code: device_type,
            stock_code: "SKU1",
        };
        product_page_url("http://plus.pl", &params).unwrap()
    }

    #[test]
    fn tablet_under_consumer_segment() {
        let url = build("IND.NEW.POSTPAID.ACQ", "TAB");
        assert!(url.starts_with("http://plus.pl/tablet-laptop?"), "{url}");
        assert!(!url.contains("dla-firm"));
    }

    #[test]
    fn tablet_under_business_segment() {
        let url = build("SOHO.NEW.POSTPAID.ACQ", "TAB");
        assert!(url.starts_with("http://plus.pl/dla-firm/tablet-laptop?"), "{url}");
    }

    #[test]
    fn modem_path() {
        let url = build("IND.NEW.POSTPAID.ACQ", "MODEM");
        assert!(url.starts_with("http://plus.pl/modem-router?"), "{url}");
    }

    #[test]
    fn unknown_device_type_defaults_to_phone() {
        let url = build("IND.NEW.POSTPAID.ACQ", "WATCH");
        assert!(url.starts_with("http://plus.pl/telefon?"), "{url}");
    }

    #[test]
    fn query_carries_parameters_in_fixed_order() {
        let url = build("IND.NEW.MIX.ACQ", "PHONE");
        assert_eq!(
            url,
            "http://plus.pl/telefon?processSegmentationCode=IND.NEW.MIX.ACQ\
             &offerNSICode=OFF1&tariffPlanCode=TP40&contractConditionCode=24A\
             &deviceTypeCode=PHONE&deviceStockCode=SKU1&marketTypeCode=IND"
        );
    }

    #[test]
    fn root_trailing_slash_is_tolerated() {
        let segmentation = Segmentation::new("IND");
        let offer = offer();
        let params = ProductPageParams {
            segmentation: &segmentation,
            offer: &offer,
            device_type_code: "PHONE",
            stock_code: "SKU1",
        };
        let url = product_page_url("http://plus.pl/", &params).unwrap();
        assert!(url.starts_with("http://plus.pl/telefon?"), "{url}");
    }

    #[test]
    fn invalid_root_is_rejected() {
        let segmentation = Segmentation::new("IND");
        let offer = offer();
        let params = ProductPageParams {
            segmentation: &segmentation,
            offer: &offer,
            device_type_code: "PHONE",
            stock_code: "SKU1",
        };
        let err = product_page_url("not a url", &params).unwrap_err();
        assert!(matches!(err, ScraperError::InvalidUrl { .. }));
    }
}
