use std::{collections::BTreeMap, time::Duration};

use serde::{Deserialize, Serialize};

use gemform_domain::FieldId;

use crate::ConfigError;

/// Stores where and how submissions are delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_endpoint")]
    pub endpoint: String,
    #[serde(default = "Config::default_timeout_secs")]
    pub timeout_secs: u64,
    /// Extra request headers sent with every submission.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// Fields validation refuses to leave blank.
    #[serde(default = "Config::default_enforced_required")]
    pub enforced_required: Vec<FieldId>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            timeout_secs: Self::default_timeout_secs(),
            headers: BTreeMap::new(),
            enforced_required: Self::default_enforced_required(),
        }
    }
}

impl Config {
    pub fn default_endpoint() -> String {
        "http://localhost:3002/search-agent".into()
    }

    pub fn default_timeout_secs() -> u64 {
        10
    }

    pub fn default_enforced_required() -> Vec<FieldId> {
        FieldId::CONTACT.to_vec()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::Invalid("endpoint cannot be empty".into()));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "endpoint `{}` must start with http:// or https://",
                endpoint
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be at least 1".into(),
            ));
        }
        if let Some(field) = self.enforced_required.iter().find(|f| f.range().is_some()) {
            return Err(ConfigError::Invalid(format!(
                "`{}` is one side of a range and cannot be enforced",
                field
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"timeout_secs": 3}"#).unwrap();
        assert_eq!(config.endpoint, Config::default_endpoint());
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(
            config.enforced_required,
            vec![FieldId::Email, FieldId::Phone, FieldId::Name]
        );
    }

    #[test]
    fn enforced_fields_use_wire_ids() {
        let config: Config =
            serde_json::from_str(r#"{"enforced_required": ["email", "category"]}"#).unwrap();
        assert_eq!(
            config.enforced_required,
            vec![FieldId::Email, FieldId::Category]
        );
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.endpoint = "localhost:3002".into();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config = Config::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());

        config = Config::default();
        config.enforced_required.push(FieldId::PriceFrom);
        assert!(config.validate().is_err());
    }
}
