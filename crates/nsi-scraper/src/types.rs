//! Response shapes of the catalogue portlets.
//!
//! ## Observed shapes
//!
//! ### Contract conditions
//! `pageInfo.availableContractConditions` is a list of `{"value": "24 miesiące", ...}`
//! objects. Only the first whitespace-delimited token of `value` is meaningful.
//!
//! ### Offers
//! The offers portlet answers in one of two shapes depending on the segment:
//! - regular segments fill `rotator` with entries that already carry
//!   `offerNSICode`, `tariffPlanCode`, `contractConditionCode` and
//!   `monthlyFeeGross`;
//! - mixed segments return an empty `rotator` and put the offers under
//!   `sliderPositions["0"]`, keyed `offerCode` / `tariffPlanCode`, with the
//!   monthly fee encoded as the last two characters of the tariff plan code.
//!
//! `monthlyFeeGross` has been seen both as a string and as a bare number, and
//! is occasionally missing from rotator entries.
//!
//! ### Devices
//! `devices` entries carry at least `sku` and `productType`; everything else
//! (names, images, instalments) is passed through untouched.

use nsi_core::DevicePrices;
use serde::Deserialize;
use serde_json::{Map, Value};

/// `processSegmentationCode` → available contract conditions.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractConditionsResponse {
    pub page_info: ContractConditionsPageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractConditionsPageInfo {
    pub available_contract_conditions: Vec<RawContractCondition>,
}

#[derive(Debug, Deserialize)]
pub struct RawContractCondition {
    pub value: String,
}

/// Offers for one contract condition, in either payload shape.
///
/// Slider positions are kept undecoded: only position `"0"` is ever read,
/// and only when the rotator is empty. Other positions carry banners and
/// other entries of no fixed shape.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffersResponse {
    /// Absent and `null` are treated like an empty list.
    #[serde(default)]
    pub rotator: Option<Vec<RotatorOffer>>,
    #[serde(default)]
    pub slider_positions: Map<String, Value>,
}

/// The offer list after deciding which payload shape the portlet used.
#[derive(Debug)]
pub enum OfferPayload {
    Rotator(Vec<RotatorOffer>),
    Slider(Vec<SliderOffer>),
}

impl OffersResponse {
    /// Slider position whose offers stand in for an empty rotator.
    pub const SLIDER_FALLBACK_POSITION: &'static str = "0";

    /// Picks the rotator when it has entries, otherwise slider position `"0"`.
    ///
    /// Returns `Ok(None)` when the rotator is empty and the slider position is
    /// missing too.
    ///
    /// # Errors
    ///
    /// Returns the decode error if slider position `"0"` is consulted and its
    /// entries lack the offer keys.
    pub fn into_payload(mut self) -> Result<Option<OfferPayload>, serde_json::Error> {
        match self.rotator {
            Some(rotator) if !rotator.is_empty() => Ok(Some(OfferPayload::Rotator(rotator))),
            _ => self
                .slider_positions
                .remove(Self::SLIDER_FALLBACK_POSITION)
                .map(|position| serde_json::from_value(position).map(OfferPayload::Slider))
                .transpose(),
        }
    }
}

/// Offer entry from `rotator`, already using canonical key names.
#[derive(Debug, Deserialize)]
pub struct RotatorOffer {
    #[serde(rename = "offerNSICode")]
    pub offer_nsi_code: String,
    #[serde(rename = "tariffPlanCode")]
    pub tariff_plan_code: String,
    #[serde(rename = "contractConditionCode")]
    pub contract_condition_code: String,
    /// String or number; some rotator entries omit it.
    #[serde(rename = "monthlyFeeGross", default)]
    pub monthly_fee_gross: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Offer entry from `sliderPositions["0"]`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderOffer {
    pub offer_code: String,
    pub tariff_plan_code: String,
    /// Usually present; when it is not, the requested condition applies.
    #[serde(default)]
    pub contract_condition_code: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCountResponse {
    pub page_info: PageCountInfo,
}

#[derive(Debug, Deserialize)]
pub struct PageCountInfo {
    pub pages: i64,
}

/// One page of device listings for an offer.
#[derive(Debug, Deserialize)]
pub struct DevicesPageResponse {
    pub devices: Vec<DeviceListing>,
}

/// A device as listed by the devices portlet, before enrichment.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceListing {
    pub sku: String,
    #[serde(rename = "productType")]
    pub product_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricesResponse {
    pub devices_prices: Vec<DevicePrices>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub device_availables: Vec<DeviceAvailable>,
}

#[derive(Debug, Deserialize)]
pub struct DeviceAvailable {
    pub available: bool,
}
