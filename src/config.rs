//! Header configuration
//!
//! Loaded from the JSON file embedded at build time (`assets/header.json`).
//! Every field is optional; missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::domain::models::{default_categories, CategoryLink, DEFAULT_HIDE_THRESHOLD_PX};
use crate::shared::errors::{AppError, Result};

const EMBEDDED_CONFIG: &str = include_str!("../assets/header.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Shown as the logo's alt text
    pub brand_name: String,
    pub hide_threshold_px: f64,
    pub categories: Vec<CategoryLink>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            brand_name: "BlackWilbur".to_string(),
            hide_threshold_px: DEFAULT_HIDE_THRESHOLD_PX,
            categories: default_categories(),
        }
    }
}

impl HeaderConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: HeaderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.hide_threshold_px.is_finite() || self.hide_threshold_px < 0.0 {
            return Err(AppError::Config(format!(
                "hide_threshold_px must be a non-negative number, got {}",
                self.hide_threshold_px
            )));
        }
        if self.brand_name.trim().is_empty() {
            return Err(AppError::Config("brand_name is empty".to_string()));
        }
        if let Some(index) = self.categories.iter().position(|c| c.label.trim().is_empty()) {
            return Err(AppError::Config(format!("category #{} has an empty label", index)));
        }
        Ok(())
    }

    /// Config shipped with the binary, or the defaults if it is rejected
    pub fn load_embedded() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Embedded header config rejected, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Destination;

    #[test]
    fn test_default_config() {
        let config = HeaderConfig::default();
        assert_eq!(config.brand_name, "BlackWilbur");
        assert_eq!(config.hide_threshold_px, 50.0);
        assert_eq!(config.categories.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = HeaderConfig::from_json("{}").unwrap();
        assert_eq!(config, HeaderConfig::default());
    }

    #[test]
    fn test_overrides() {
        let json = r#"{
            "hide_threshold_px": 80,
            "categories": [
                { "label": "Polo", "destination": "collection" },
                { "label": "Account", "destination": "login" }
            ]
        }"#;
        let config = HeaderConfig::from_json(json).unwrap();
        assert_eq!(config.hide_threshold_px, 80.0);
        assert_eq!(config.brand_name, "BlackWilbur");
        assert_eq!(config.categories[1], CategoryLink::new("Account", Destination::Login));
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let err = HeaderConfig::from_json(r#"{ "hide_threshold_px": -1 }"#).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_empty_category_label_rejected() {
        let json = r#"{ "categories": [{ "label": "  ", "destination": "home" }] }"#;
        let err = HeaderConfig::from_json(json).unwrap_err();
        assert!(err.to_string().contains("category #0"));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = HeaderConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[test]
    fn test_embedded_config_is_valid() {
        assert!(HeaderConfig::from_json(EMBEDDED_CONFIG).is_ok());
        assert_eq!(HeaderConfig::load_embedded(), HeaderConfig::default());
    }
}
