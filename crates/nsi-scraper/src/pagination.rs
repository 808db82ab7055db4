//! Page numbering for the devices portlet.
//!
//! The pages portlet reports a page count per offer; listings are then fetched
//! with a 1-based `page` form field. The count is not validated upstream:
//! zero or negative counts mean there is nothing to fetch. Counts above
//! [`LARGE_PAGE_COUNT`] are still walked in full but logged, since each page
//! costs one listing request plus two per device.

use std::ops::RangeInclusive;

/// Page count above which a crawl is flagged as unusually large.
pub const LARGE_PAGE_COUNT: i64 = 200;

/// Returns the page numbers to request for an offer reporting `pages` pages.
#[must_use]
pub fn page_numbers(pages: i64, offer_code: &str) -> RangeInclusive<i64> {
    if pages > LARGE_PAGE_COUNT {
        tracing::warn!(
            offer = offer_code,
            pages,
            threshold = LARGE_PAGE_COUNT,
            "offer reports an unusually large page count; walking every page"
        );
    }
    1..=pages.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_count_yields_one_based_pages() {
        let pages: Vec<_> = page_numbers(3, "OFF1").collect();
        assert_eq!(pages, [1, 2, 3]);
    }

    #[test]
    fn zero_count_yields_no_pages() {
        assert_eq!(page_numbers(0, "OFF1").count(), 0);
    }

    #[test]
    fn negative_count_yields_no_pages() {
        assert_eq!(page_numbers(-4, "OFF1").count(), 0);
    }

    #[test]
    fn count_above_threshold_is_walked_in_full() {
        let over = LARGE_PAGE_COUNT + 1;
        let pages = page_numbers(over, "OFF1");
        assert_eq!(pages.clone().count(), 201);
        assert_eq!(pages.last(), Some(over));
    }
}
