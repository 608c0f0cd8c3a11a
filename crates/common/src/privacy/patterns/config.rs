use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::PiiResult;
use super::types::{OverlapPolicy, PiiCategory, RedactionMode};
use crate::error::CommonError;

pub const CONFIG_VERSION: &str = "1.0";

/// PII detection configuration
///
/// Every field has a default, so a partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PiiDetectionConfig {
    pub version: String,
    /// When false, detection reports nothing and redaction returns the text
    pub enabled: bool,
    /// Enabled categories; scans still run in registration order
    pub categories: Vec<PiiCategory>,
    pub default_mode: RedactionMode,
    pub overlap_policy: OverlapPolicy,
    /// Inputs larger than this many bytes are rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_input_bytes: Option<usize>,
}

impl Default for PiiDetectionConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            enabled: true,
            categories: PiiCategory::ALL.to_vec(),
            default_mode: RedactionMode::default(),
            overlap_policy: OverlapPolicy::default(),
            max_input_bytes: None,
        }
    }
}

impl PiiDetectionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> PiiResult<()> {
        if self.version.trim().is_empty() {
            return Err(CommonError::config_field("version", "Version cannot be empty").into());
        }

        if self.categories.is_empty() {
            return Err(CommonError::config_field(
                "categories",
                "At least one PII category must be enabled",
            )
            .into());
        }

        for (idx, category) in self.categories.iter().enumerate() {
            if self.categories[..idx].contains(category) {
                return Err(CommonError::config_field(
                    "categories",
                    format!("Category {} is listed more than once", category),
                )
                .into());
            }
        }

        if self.max_input_bytes == Some(0) {
            return Err(CommonError::config_field(
                "max_input_bytes",
                "Input size limit cannot be zero",
            )
            .into());
        }

        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> PiiResult<Self> {
        let config: Self = toml::from_str(contents)?; // Auto-converts via impl_error_conversion
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(contents: &str) -> PiiResult<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file
    ///
    /// Format is detected by file extension (`.toml` or `.json`).
    ///
    /// # Errors
    /// - `CommonError::Persistence` if the file cannot be read
    /// - `CommonError::Config` for an unsupported extension or invalid values
    /// - `CommonError::Serialization` if the contents do not parse
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PiiResult<Self> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        if !matches!(extension, "toml" | "json") {
            return Err(CommonError::config(format!(
                "Unsupported config format: '{}' ({})",
                extension,
                path.display()
            ))
            .into());
        }

        tracing::info!(path = %path.display(), "Loading PII detection configuration");

        let contents = std::fs::read_to_string(path)
            .map_err(|e| CommonError::persistence_op("read_config", e.to_string()))?;

        if extension == "toml" {
            Self::from_toml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        }
    }

    /// Save configuration to file, format chosen by extension
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> PiiResult<()> {
        self.validate()?;

        let path = path.as_ref();
        let content = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => self.to_toml_string()?,
            Some("json") => serde_json::to_string_pretty(self)?,
            other => {
                return Err(CommonError::config(format!(
                    "Unsupported config format: '{}'",
                    other.unwrap_or_default()
                ))
                .into())
            }
        };

        std::fs::write(path, content)
            .map_err(|e| CommonError::persistence_op("write_config", e.to_string()))?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> PiiResult<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn is_category_enabled(&self, category: PiiCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Enable or disable a category
    pub fn set_category_enabled(&mut self, category: PiiCategory, enabled: bool) {
        let present = self.is_category_enabled(category);
        if enabled && !present {
            self.categories.push(category);
        } else if !enabled && present {
            self.categories.retain(|c| *c != category);
        }
    }
}
