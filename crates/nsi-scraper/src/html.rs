//! Product page scraping.
//!
//! Product pages render one `<input name="color" device-skus="...">` per
//! colour/variant and a `#phone-carousel` gallery whose first image is the
//! main product photo.

use std::sync::LazyLock;

use scraper::{Html, Selector};

/// Attribute carrying a variant's stock code on the colour picker inputs.
pub const DEVICE_SKUS_ATTR: &str = "device-skus";

pub const CAROUSEL_SELECTOR: &str = "div#phone-carousel";
pub const CAROUSEL_IMAGE_SELECTOR: &str = "div#phone-carousel img";

static VARIANT_INPUT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("input[device-skus]").expect("valid variant selector"));
static CAROUSEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(CAROUSEL_SELECTOR).expect("valid carousel selector"));
static IMAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("valid img selector"));

/// Collects the `device-skus` value of every variant input, in document order.
#[must_use]
pub fn extract_device_skus(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&VARIANT_INPUT)
        .filter_map(|input| input.value().attr(DEVICE_SKUS_ATTR))
        .map(str::to_owned)
        .collect()
}

/// Why the main photo could not be found on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoLookupError {
    NoCarousel,
    NoImage,
}

impl PhotoLookupError {
    /// Selector of the element that was missing, for error reporting.
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            PhotoLookupError::NoCarousel => CAROUSEL_SELECTOR,
            PhotoLookupError::NoImage => CAROUSEL_IMAGE_SELECTOR,
        }
    }
}

/// Returns the raw `src` of the first image inside the photo carousel.
///
/// # Errors
///
/// Returns [`PhotoLookupError`] if the carousel is missing, or it holds no
/// image with a `src`.
pub fn extract_main_photo_src(html: &str) -> Result<String, PhotoLookupError> {
    let document = Html::parse_document(html);
    let carousel = document
        .select(&CAROUSEL)
        .next()
        .ok_or(PhotoLookupError::NoCarousel)?;
    let image = carousel
        .select(&IMAGE)
        .next()
        .ok_or(PhotoLookupError::NoImage)?;
    image
        .value()
        .attr("src")
        .map(str::to_owned)
        .ok_or(PhotoLookupError::NoImage)
}

/// Makes a photo `src` absolute. Anything not already starting with
/// `http://` is treated as a path on the retailer root.
#[must_use]
pub fn absolutize_photo_url(retailer_root: &str, src: &str) -> String {
    if src.starts_with("http://") {
        return src.to_owned();
    }
    format!("{}{src}", retailer_root.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT_PAGE: &str = r#"
        <html><body>
          <form class="colors">
            <input type="radio" name="color" device-skus="SKU-BLACK" checked>
            <input type="radio" name="color" device-skus="SKU-WHITE">
            <input type="radio" name="color">
            <input type="hidden" name="csrf" value="x">
          </form>
          <div id="phone-carousel">
            <ul>
              <li><img src="/media/galaxy-front.png" alt="front"></li>
              <li><img src="/media/galaxy-back.png" alt="back"></li>
            </ul>
          </div>
        </body></html>
    "#;

    #[test]
    fn extracts_variant_skus_in_document_order() {
        assert_eq!(extract_device_skus(PRODUCT_PAGE), ["SKU-BLACK", "SKU-WHITE"]);
    }

    #[test]
    fn page_without_variant_inputs_yields_nothing() {
        let html = r#"<html><body><input name="color" value="black"></body></html>"#;
        assert!(extract_device_skus(html).is_empty());
    }

    #[test]
    fn main_photo_is_first_carousel_image() {
        assert_eq!(
            extract_main_photo_src(PRODUCT_PAGE).unwrap(),
            "/media/galaxy-front.png"
        );
    }

    #[test]
    fn images_outside_carousel_are_ignored() {
        let html = r#"
            <img src="/logo.png">
            <div id="phone-carousel"><img src="http://cdn.plus.pl/a.png"></div>
        "#;
        assert_eq!(
            extract_main_photo_src(html).unwrap(),
            "http://cdn.plus.pl/a.png"
        );
    }

    #[test]
    fn missing_carousel_is_reported() {
        let html = r#"<div id="gallery"><img src="/a.png"></div>"#;
        assert_eq!(
            extract_main_photo_src(html).unwrap_err(),
            PhotoLookupError::NoCarousel
        );
    }

    #[test]
    fn empty_carousel_is_reported() {
        let html = r#"<div id="phone-carousel"><p>no photo</p></div>"#;
        let err = extract_main_photo_src(html).unwrap_err();
        assert_eq!(err, PhotoLookupError::NoImage);
        assert_eq!(err.selector(), "div#phone-carousel img");
    }

    #[test]
    fn absolute_http_src_is_unchanged() {
        assert_eq!(
            absolutize_photo_url("http://plus.pl", "http://cdn.plus.pl/x.png"),
            "http://cdn.plus.pl/x.png"
        );
    }

    #[test]
    fn relative_src_gets_retailer_root() {
        assert_eq!(absolutize_photo_url("http://plus.pl", "/foo"), "http://plus.pl/foo");
        assert_eq!(absolutize_photo_url("http://plus.pl/", "/foo"), "http://plus.pl/foo");
    }
}
