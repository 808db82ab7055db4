pub mod app_config;
pub mod catalog;
pub mod config;
pub mod endpoints;

pub use app_config::AppConfig;
pub use catalog::{
    ContractCondition, Device, DevicePrices, DeviceType, Offer, OfferCatalog, PriceEntry,
    Segmentation, SegmentationCatalog,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use endpoints::{load_endpoints, EndpointsFile, PortletEndpoints};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read endpoints file {path}: {source}")]
    EndpointsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse endpoints file: {0}")]
    EndpointsFileParse(#[from] serde_yaml::Error),

    #[error("endpoints validation failed: {0}")]
    Validation(String),
}
