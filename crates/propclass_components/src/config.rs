//! Serializable component configuration

use propclass_core::{PropClassError, Result};
use serde::{Deserialize, Serialize};

fn default_target() -> String {
    "div".to_string()
}

/// Everything about a component except its class-name function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_target")]
    pub default_target: String,
    #[serde(default)]
    pub omit: Vec<String>,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            name: None,
            default_target: default_target(),
            omit: Vec::new(),
        }
    }
}

impl ComponentConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.default_target.trim().is_empty() {
            return Err(PropClassError::ConfigError(
                "defaultTarget must name an element".to_string(),
            ));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ComponentConfig::from_json("{}").unwrap();
        assert_eq!(config, ComponentConfig::default());
        assert_eq!(config.default_target, "div");
        assert!(config.omit.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config = ComponentConfig::from_json(
            r#"{"name": "TextColor", "defaultTarget": "span", "omit": ["variant"]}"#,
        )
        .unwrap();
        assert_eq!(config.name.as_deref(), Some("TextColor"));
        assert_eq!(config.default_target, "span");
        assert_eq!(config.omit, vec!["variant".to_string()]);
    }

    #[test]
    fn test_blank_target_rejected() {
        let err = ComponentConfig::from_json(r#"{"defaultTarget": "  "}"#).unwrap_err();
        assert!(matches!(err, PropClassError::ConfigError(_)));
    }

    #[test]
    fn test_invalid_json() {
        let err = ComponentConfig::from_json(r#"{"omit": "variant"}"#).unwrap_err();
        assert!(matches!(err, PropClassError::SerializationError(_)));
    }
}
