use std::path::PathBuf;

/// Runtime settings for a crawl, read from `NSI_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    /// YAML file listing portlet endpoint URLs and segmentations to crawl.
    pub endpoints_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Storefront root used to build product page URLs and to absolutize
    /// relative photo paths, e.g. `"http://plus.pl"`.
    pub retailer_root: String,
}
