//! Order summary formatting.

use serde::{Deserialize, Serialize};

use petalcart_cart::CartLine;
use petalcart_core::{DomainError, DomainResult};

/// Human-readable order summary with its total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// One `"<name> (<currency> <price>) x <quantity>"` line per cart line,
    /// in cart order, joined by newlines.
    pub summary_text: String,
    pub total: u64,
}

impl OrderSummary {
    /// Format the cart lines. An empty cart is rejected so checkout can
    /// never hand off an empty order.
    pub fn from_lines(lines: &[CartLine], currency: &str) -> DomainResult<Self> {
        if lines.is_empty() {
            return Err(DomainError::validation(
                "cart is empty; add items before proceeding to order",
            ));
        }

        let summary_text = lines
            .iter()
            .map(|line| {
                format!(
                    "{} ({} {}) x {}",
                    line.product.name, currency, line.product.price, line.quantity
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        let total = lines.iter().map(CartLine::line_total).sum();

        Ok(Self {
            summary_text,
            total,
        })
    }
}

/// Full outbound message: greeting, summary, total, availability boilerplate.
pub fn order_message(summary: &OrderSummary, currency: &str) -> String {
    format!(
        "Hi! I'd like to order the following flowers:\n\n{}\n\nTotal: {} {}\n\nPlease let me know about availability and delivery options.",
        summary.summary_text, currency, summary.total
    )
}
