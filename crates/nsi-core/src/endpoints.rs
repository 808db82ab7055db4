use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::Segmentation;
use crate::ConfigError;

/// Form-posting portlet URLs, one per catalogue query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortletEndpoints {
    pub contract_conditions_url: String,
    pub offers_url: String,
    pub pages_url: String,
    pub devices_url: String,
    pub prices_url: String,
    pub availability_url: String,
}

impl PortletEndpoints {
    fn named_urls(&self) -> [(&'static str, &str); 6] {
        [
            ("contract_conditions_url", &self.contract_conditions_url),
            ("offers_url", &self.offers_url),
            ("pages_url", &self.pages_url),
            ("devices_url", &self.devices_url),
            ("prices_url", &self.prices_url),
            ("availability_url", &self.availability_url),
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointsFile {
    pub endpoints: PortletEndpoints,
    /// Segmentation codes crawled when the caller does not name any.
    #[serde(default)]
    pub segmentations: Vec<Segmentation>,
}

/// Load and validate the endpoints configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_endpoints(path: &Path) -> Result<EndpointsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::EndpointsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let endpoints_file: EndpointsFile = serde_yaml::from_str(&content)?;

    validate_endpoints(&endpoints_file)?;

    Ok(endpoints_file)
}

fn validate_endpoints(endpoints_file: &EndpointsFile) -> Result<(), ConfigError> {
    for (name, url) in endpoints_file.endpoints.named_urls() {
        let url = url.trim();
        if url.is_empty() {
            return Err(ConfigError::Validation(format!("{name} must be non-empty")));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "{name} '{url}' is not an http(s) URL"
            )));
        }
    }

    let mut seen = HashSet::new();
    for segmentation in &endpoints_file.segmentations {
        if segmentation.as_str().trim().is_empty() {
            return Err(ConfigError::Validation(
                "segmentation code must be non-empty".to_string(),
            ));
        }
        if !seen.insert(segmentation.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate segmentation: '{segmentation}'"
            )));
        }
    }

    Ok(())
}
