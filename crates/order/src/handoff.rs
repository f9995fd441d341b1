//! Messaging handoff: deep-link construction.
//!
//! The core's responsibility ends at producing the link; opening it belongs
//! to the surrounding presentation layer.

use url::Url;

use petalcart_core::{DomainError, DomainResult, StoreConfig};

use crate::summary::OrderSummary;

/// Outcome of a successful checkout: the plain-text message and the
/// deep link that carries it, plus the order total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    pub message: String,
    pub url: Url,
    pub total: u64,
}

impl Handoff {
    pub fn new(message: String, url: Url, summary: &OrderSummary) -> Self {
        Self {
            message,
            url,
            total: summary.total,
        }
    }
}

/// Build `<messaging-base>/<merchant>?text=<message>`, percent-encoding the
/// message via query-pair serialization.
pub fn handoff_url(config: &StoreConfig, message: &str) -> DomainResult<Url> {
    let base = format!(
        "{}/{}",
        config.messaging_base.trim_end_matches('/'),
        config.merchant_id
    );
    let mut url = Url::parse(&base)
        .map_err(|e| DomainError::validation(format!("messaging base url: {e}")))?;
    url.query_pairs_mut().append_pair("text", message);
    Ok(url)
}
