//! Canonical catalogue records handed to callers after a crawl.
//!
//! Portlet payloads arrive in more than one shape; `nsi-scraper` decodes them
//! into its own wire types and converts them into the records below. Fields
//! the crawler does not interpret are kept in `extra` so that nothing the
//! portlet returned is lost on the way to the caller.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Customer segment token, e.g. `"IND.NEW.POSTPAID.ACQ"` or `"SOHO.NEW.MIX.ACQ"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Segmentation(String);

impl Segmentation {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Mixed (voice + data bundle) segments carry `MIX` anywhere in the token.
    #[must_use]
    pub fn is_mixed(&self) -> bool {
        self.0.contains("MIX")
    }

    /// Small-office/home-office segments are served from the business section.
    #[must_use]
    pub fn is_business(&self) -> bool {
        self.0.contains("SOHO")
    }

    /// Market type is the segment token up to its first `.`.
    #[must_use]
    pub fn market_type(&self) -> &str {
        self.0.split('.').next().unwrap_or_default()
    }

    /// Suffix appended to every contract-condition code for this segment.
    #[must_use]
    pub fn contract_condition_suffix(&self) -> char {
        if self.is_mixed() {
            'V'
        } else {
            'A'
        }
    }
}

impl std::fmt::Display for Segmentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Segmentation {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Segmentation {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// Contract-condition code as the offer portlets expect it, e.g. `"24A"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractCondition(String);

impl ContractCondition {
    /// Derives the code from a raw portlet value such as `"24 miesiące"`:
    /// the first whitespace-delimited token plus the segment suffix.
    ///
    /// Returns `None` when the raw value has no token at all.
    #[must_use]
    pub fn from_raw(raw: &str, segmentation: &Segmentation) -> Option<Self> {
        let token = raw.split_whitespace().next()?;
        let mut code = String::with_capacity(token.len() + 1);
        code.push_str(token);
        code.push(segmentation.contract_condition_suffix());
        Some(Self(code))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContractCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContractCondition {
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}

/// Device class, selecting which storefront catalogue a product lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    /// `"TAB"`: tablets and laptops.
    Tab,
    /// `"MODEM"`: modems and routers.
    Modem,
    /// Every other product type.
    Phone,
}

impl DeviceType {
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "TAB" => DeviceType::Tab,
            "MODEM" => DeviceType::Modem,
            _ => DeviceType::Phone,
        }
    }

    /// Storefront path segment for this device class.
    #[must_use]
    pub fn catalog_path(self) -> &'static str {
        match self {
            DeviceType::Tab => "tablet-laptop",
            DeviceType::Modem => "modem-router",
            DeviceType::Phone => "telefon",
        }
    }
}

/// A tariff offer, identical in shape whichever payload it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(rename = "offerNSICode")]
    pub offer_nsi_code: String,
    #[serde(rename = "tariffPlanCode")]
    pub tariff_plan_code: String,
    #[serde(rename = "contractConditionCode")]
    pub contract_condition_code: String,
    /// Gross monthly fee as the portlet renders it (string or number). For
    /// slider offers this is the last two characters of the tariff plan code;
    /// `null` when a rotator entry carries no fee.
    #[serde(rename = "monthlyFeeGross")]
    pub monthly_fee_gross: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A device listed under an offer, enriched with storefront data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Stock code of the listed variant.
    pub sku: String,
    /// Raw device class code, e.g. `"TAB"`, `"MODEM"`, `"PHONE"`.
    #[serde(rename = "productType")]
    pub product_type: String,
    pub product_page_url: String,
    /// Every sibling stock code offered on the product page (colours etc.).
    pub skus: Vec<String>,
    /// Pre-promotion gross price exactly as the price portlet sent it,
    /// present only when the portlet has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Device {
    #[must_use]
    pub fn device_type(&self) -> DeviceType {
        DeviceType::from_code(&self.product_type)
    }
}

/// One `devicesPrices` entry from the price portlet, kept as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevicePrices {
    #[serde(
        rename = "pricesTransport",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub prices_transport: Option<Vec<PriceEntry>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DevicePrices {
    /// Price lines, empty when the record has none.
    #[must_use]
    pub fn lines(&self) -> &[PriceEntry] {
        self.prices_transport.as_deref().unwrap_or_default()
    }
}

/// A single price line, e.g. `{"code": "OLD", "grossPrice": 15}`.
///
/// Values are not interpreted on decode: a line with an unexpected
/// `grossPrice` round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceEntry(pub Map<String, Value>);

impl PriceEntry {
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.0.get("code").and_then(Value::as_str)
    }

    #[must_use]
    pub fn gross_price(&self) -> Option<&Value> {
        self.0.get("grossPrice")
    }
}

/// An offer together with every device sold under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferCatalog {
    pub offer: Offer,
    pub devices: Vec<Device>,
}

/// Everything crawled for one segmentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationCatalog {
    pub segmentation: Segmentation,
    pub contract_conditions: Vec<ContractCondition>,
    pub offers: Vec<OfferCatalog>,
}

impl SegmentationCatalog {
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.offers.iter().map(|o| o.devices.len()).sum()
    }
}
