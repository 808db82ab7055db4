//! HTTP client for the retailer's catalogue portlets and product pages.

mod catalog;
mod crawl;
mod devices;
mod lookups;
mod root;

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::error::ScraperError;

pub use root::normalize_retailer_root;

/// Client for the catalogue portlets.
///
/// Every portlet is a form-posting endpoint answering JSON; product pages are
/// plain HTML fetched with GET. Non-2xx answers surface as typed errors and
/// nothing is retried: every operation either completes or fails as a whole.
pub struct NsiClient {
    pub(super) client: Client,
    /// Storefront root without a trailing slash, e.g. `"http://plus.pl"`.
    pub(super) retailer_root: String,
}

impl NsiClient {
    /// Creates an `NsiClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] if `retailer_root` is not an
    /// absolute http(s) URL, or [`ScraperError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        retailer_root: &str,
    ) -> Result<Self, ScraperError> {
        let retailer_root = normalize_retailer_root(retailer_root)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            retailer_root,
        })
    }

    /// Creates a client from the process configuration.
    ///
    /// # Errors
    ///
    /// See [`NsiClient::new`].
    pub fn from_config(config: &nsi_core::AppConfig) -> Result<Self, ScraperError> {
        Self::new(
            config.request_timeout_secs,
            &config.user_agent,
            &config.retailer_root,
        )
    }

    #[must_use]
    pub fn retailer_root(&self) -> &str {
        &self.retailer_root
    }

    /// POSTs `form` as `application/x-www-form-urlencoded` and decodes the
    /// JSON answer into `T`.
    pub(super) async fn post_form<T: DeserializeOwned>(
        &self,
        url: &str,
        form: &[(&str, &str)],
        context: &str,
    ) -> Result<T, ScraperError> {
        tracing::debug!(url, context, "posting portlet form");
        let response = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(form)
            .send()
            .await?;
        let body = Self::check_status(response, url)?.text().await?;

        serde_json::from_str::<T>(&body).map_err(|e| ScraperError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    /// GETs a storefront page and returns its body.
    pub(super) async fn get_html(&self, url: &str) -> Result<String, ScraperError> {
        tracing::debug!(url, "fetching product page");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await?;
        Ok(Self::check_status(response, url)?.text().await?)
    }

    fn check_status(response: Response, url: &str) -> Result<Response, ScraperError> {
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: url.to_owned(),
            });
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
