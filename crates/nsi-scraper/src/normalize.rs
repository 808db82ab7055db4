//! Conversion from portlet wire types to the canonical records in
//! [`nsi_core::catalog`].
//!
//! Device enrichment is a chain of value-returning steps: each takes a
//! [`Device`] and returns a new one with one more field resolved.

use nsi_core::{ContractCondition, Device, DevicePrices, Offer};
use serde_json::Value;

use crate::types::{DeviceListing, OfferPayload, RotatorOffer, SliderOffer};

/// Price code marking the pre-promotion price line.
pub const OLD_PRICE_CODE: &str = "OLD";

/// Converts a decoded offers payload into canonical offers, preserving order.
///
/// `requested` is the contract condition the payload was fetched for; slider
/// entries that omit their own condition inherit it.
#[must_use]
pub fn normalize_offers(payload: OfferPayload, requested: &ContractCondition) -> Vec<Offer> {
    match payload {
        OfferPayload::Rotator(entries) => entries.into_iter().map(offer_from_rotator).collect(),
        OfferPayload::Slider(entries) => entries
            .into_iter()
            .map(|entry| offer_from_slider(entry, requested))
            .collect(),
    }
}

/// Rotator entries already use canonical names; every field is kept as
/// sent. A missing fee is exposed as `null`.
#[must_use]
pub fn offer_from_rotator(entry: RotatorOffer) -> Offer {
    Offer {
        offer_nsi_code: entry.offer_nsi_code,
        tariff_plan_code: entry.tariff_plan_code,
        contract_condition_code: entry.contract_condition_code,
        monthly_fee_gross: entry.monthly_fee_gross.unwrap_or(Value::Null),
        extra: entry.extra,
    }
}

/// Remaps a slider entry: `offerCode` becomes `offerNSICode` and the monthly
/// fee is read off the tail of the tariff plan code. The source `offerCode`
/// key stays in `extra`.
#[must_use]
pub fn offer_from_slider(entry: SliderOffer, requested: &ContractCondition) -> Offer {
    let mut extra = entry.extra;
    extra.insert("offerCode".to_owned(), Value::from(entry.offer_code.clone()));

    Offer {
        monthly_fee_gross: Value::from(last_two_chars(&entry.tariff_plan_code)),
        offer_nsi_code: entry.offer_code,
        tariff_plan_code: entry.tariff_plan_code,
        contract_condition_code: entry
            .contract_condition_code
            .unwrap_or_else(|| requested.as_str().to_owned()),
        extra,
    }
}

/// Returns the last two characters of `s`, or all of `s` if it is shorter.
fn last_two_chars(s: &str) -> &str {
    let start = s.char_indices().rev().nth(1).map_or(0, |(idx, _)| idx);
    &s[start..]
}

/// Starts a canonical device from its listing. Until variants are discovered
/// the device is its own only variant.
#[must_use]
pub fn device_from_listing(listing: DeviceListing, product_page_url: String) -> Device {
    Device {
        skus: vec![listing.sku.clone()],
        sku: listing.sku,
        product_type: listing.product_type,
        product_page_url,
        old_price: None,
        extra: listing.extra,
    }
}

/// Replaces the variant list with the stock codes scraped from the product
/// page. An empty scrape keeps the device as its own only variant.
#[must_use]
pub fn with_variants(device: Device, found: Vec<String>) -> Device {
    if found.is_empty() {
        return Device {
            skus: vec![device.sku.clone()],
            ..device
        };
    }
    Device {
        skus: found,
        ..device
    }
}

#[must_use]
pub fn with_old_price(device: Device, old_price: Option<Value>) -> Device {
    Device { old_price, ..device }
}

/// Finds the old price in a price portlet answer and returns it as sent.
///
/// Only the first `devicesPrices` record is consulted; within it the first
/// `OLD` line wins. A missing, `null`, zero, `false` or empty-string gross
/// price counts as no old price. Other lines are never looked at.
#[must_use]
pub fn old_price(prices: &[DevicePrices]) -> Option<Value> {
    prices
        .first()?
        .lines()
        .iter()
        .find(|entry| entry.code() == Some(OLD_PRICE_CODE))?
        .gross_price()
        .filter(|price| !is_empty_price(price))
        .cloned()
}

fn is_empty_price(price: &Value) -> bool {
    match price {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64().is_some_and(|v| v.abs() < f64::EPSILON),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
