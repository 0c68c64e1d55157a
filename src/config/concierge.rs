//! Concierge presentation and session configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::conversation::{PromptBook, DEFAULT_BRAND};

/// Branding and browser-session lifetime
#[derive(Debug, Clone, Deserialize)]
pub struct ConciergeConfig {
    /// Brand shown in the greeting and closing messages and in the export file name
    #[serde(default = "default_brand_name")]
    pub brand_name: String,

    /// Seconds a browser session may stay untouched before it is dropped
    #[serde(default = "default_session_idle_timeout")]
    pub session_idle_timeout_secs: u64,

    /// Seconds between sweeps for idle sessions
    #[serde(default = "default_session_sweep_interval")]
    pub session_sweep_interval_secs: u64,
}

impl ConciergeConfig {
    /// Prompt book for the configured brand
    pub fn prompt_book(&self) -> PromptBook {
        PromptBook::new(self.brand_name.trim())
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_timeout_secs)
    }

    pub fn session_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.session_sweep_interval_secs)
    }

    /// Validate concierge configuration
    ///
    /// The brand ends up in a `Content-Disposition` header, so it is limited
    /// to characters that are safe inside a quoted file name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let brand = self.brand_name.trim();
        if brand.is_empty() {
            return Err(ValidationError::EmptyBrandName);
        }
        if !brand
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        {
            return Err(ValidationError::InvalidBrandName(brand.to_string()));
        }
        if self.session_idle_timeout_secs == 0 || self.session_sweep_interval_secs == 0 {
            return Err(ValidationError::InvalidSessionTimeout);
        }
        Ok(())
    }
}

impl Default for ConciergeConfig {
    fn default() -> Self {
        Self {
            brand_name: default_brand_name(),
            session_idle_timeout_secs: default_session_idle_timeout(),
            session_sweep_interval_secs: default_session_sweep_interval(),
        }
    }
}

fn default_brand_name() -> String {
    DEFAULT_BRAND.to_string()
}

fn default_session_idle_timeout() -> u64 {
    1800
}

fn default_session_sweep_interval() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConciergeConfig::default();
        assert_eq!(config.brand_name, "KAYA");
        assert_eq!(config.prompt_book().brand(), "KAYA");
        assert_eq!(config.session_idle_timeout(), Duration::from_secs(1800));
        assert_eq!(config.session_sweep_interval(), Duration::from_secs(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_brand_rejected() {
        let config = ConciergeConfig {
            brand_name: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyBrandName));
    }

    #[test]
    fn test_brand_with_header_unsafe_characters_rejected() {
        for brand in ["Acme\"Homes", "Acme/Homes", "Dubaï Homes", "Acme\nHomes"] {
            let config = ConciergeConfig {
                brand_name: brand.to_string(),
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ValidationError::InvalidBrandName(_))),
                "{brand:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_brand_with_spaces_and_dashes_accepted() {
        let config = ConciergeConfig {
            brand_name: "Acme Homes_2-0".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_session_timeout_rejected() {
        let config = ConciergeConfig {
            session_idle_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSessionTimeout));
    }
}
