use core::str::FromStr;

use serde::{Deserialize, Serialize};

use petalcart_core::{DomainError, DomainResult};

/// Upper bound (inclusive) of the display rating scale.
pub const MAX_RATING: u8 = 5;

/// Product identifier, stable for the process lifetime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .parse::<u32>()
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Ok(Self(raw))
    }
}

/// A sellable product. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in the smallest advertised unit (minor-unit-free amount).
    pub price: u64,
    pub category: String,
    pub description: String,
    /// Opaque image reference; not validated by the core.
    pub image: String,
    /// Display rating in `[0, MAX_RATING]`.
    pub rating: u8,
}

impl Product {
    /// Validate the per-record invariants (positive price, rating bound).
    pub fn validate(&self) -> DomainResult<()> {
        if self.price == 0 {
            return Err(DomainError::validation(format!(
                "product {}: price must be positive",
                self.id
            )));
        }
        if self.rating > MAX_RATING {
            return Err(DomainError::validation(format!(
                "product {}: rating {} exceeds {}",
                self.id, self.rating, MAX_RATING
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Red Roses".to_string(),
            price: 900,
            category: "Roses".to_string(),
            description: "Classic red roses.".to_string(),
            image: "RedRoses.jpeg".to_string(),
            rating: 5,
        }
    }

    #[test]
    fn valid_product_passes_validation() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn zero_price_is_rejected() {
        let mut p = sample();
        p.price = 0;
        assert!(matches!(p.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn rating_above_scale_is_rejected() {
        let mut p = sample();
        p.rating = 6;
        assert!(matches!(p.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn product_id_parses_from_str() {
        let id: ProductId = "17".parse().unwrap();
        assert_eq!(id, ProductId::new(17));
        assert!("not-a-number".parse::<ProductId>().is_err());
    }
}
