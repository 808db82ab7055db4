//! Retailer root validation for the catalogue client.

use crate::error::ScraperError;

/// Reduces a retailer root to its scheme+host origin.
///
/// Given `"http://plus.pl/"`, returns `"http://plus.pl"`; a path such as
/// `"http://plus.pl/sklep"` is dropped because product pages and photo paths
/// are always resolved against the storefront root.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if `raw` does not parse as an
/// absolute http(s) URL.
pub fn normalize_retailer_root(raw: &str) -> Result<String, ScraperError> {
    let url = reqwest::Url::parse(raw.trim()).map_err(|e| ScraperError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ScraperError::InvalidUrl {
            url: raw.to_owned(),
            reason: format!("unsupported scheme \"{}\"", url.scheme()),
        });
    }

    if url.path() != "/" {
        tracing::warn!(
            retailer_root = raw,
            "retailer root has a path component; only the origin is used"
        );
    }

    Ok(url.origin().ascii_serialization())
}
