//! Store configuration.
//!
//! Fixed per-deployment values: who the merchant is and how the outbound
//! order message is addressed. None of this is computed by the core.

use serde::{Deserialize, Serialize};

/// Storefront configuration value type.
///
/// Compared by value; defaults match the reference deployment. The merchant
/// identifier is a phone-number-like token consumed verbatim by the
/// messaging deep link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Display name of the shop.
    pub store_name: String,
    /// Merchant identifier for the messaging handoff (digits only).
    pub merchant_id: String,
    /// Currency prefix for human-readable amounts (minor-unit-free).
    pub currency_prefix: String,
    /// Base URL of the messaging deep-link service.
    pub messaging_base: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "Daisy Does It".to_string(),
            merchant_id: "254719790026".to_string(),
            currency_prefix: "KSh".to_string(),
            messaging_base: "https://wa.me".to_string(),
        }
    }
}

impl StoreConfig {
    /// Replace the merchant identifier, keeping everything else.
    pub fn with_merchant_id(mut self, merchant_id: impl Into<String>) -> Self {
        self.merchant_id = merchant_id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_reference_merchant() {
        let cfg = StoreConfig::default();
        assert_eq!(cfg.merchant_id, "254719790026");
        assert_eq!(cfg.currency_prefix, "KSh");
        assert_eq!(cfg.messaging_base, "https://wa.me");
    }

    #[test]
    fn with_merchant_id_overrides_only_merchant() {
        let cfg = StoreConfig::default().with_merchant_id("111222333");
        assert_eq!(cfg.merchant_id, "111222333");
        assert_eq!(cfg.store_name, StoreConfig::default().store_name);
    }
}
