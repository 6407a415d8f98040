//! Configuration management for MockStack services.
//!
//! All configuration is driven by environment variables so a test harness can
//! steer the emulation without code changes.

use crate::types::{AccountId, AwsRegion};

/// Global configuration for MockStack.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockStackConfig {
    /// Account used when a request carries no credential-derived account.
    pub default_account: AccountId,
    /// Default AWS region.
    pub default_region: AwsRegion,
    /// Log level.
    pub log_level: String,
}

impl Default for MockStackConfig {
    fn default() -> Self {
        Self {
            default_account: AccountId::default(),
            default_region: AwsRegion::default(),
            log_level: "info".to_owned(),
        }
    }
}

impl MockStackConfig {
    /// Load configuration from environment variables.
    ///
    /// A malformed `MOCKSTACK_ACCOUNT_ID` falls back to the default account.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("MOCKSTACK_ACCOUNT_ID") {
            if let Ok(account) = AccountId::new(v) {
                config.default_account = account;
            }
        }
        if let Ok(v) = std::env::var("MOCKSTACK_DEFAULT_REGION") {
            config.default_region = AwsRegion::new(v);
        }
        if let Ok(v) = std::env::var("MOCKSTACK_LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }
}
