//! Filter engine: derive a filtered view of the catalog.
//!
//! Pure and order-preserving; a product either matches the criteria or it
//! does not (no ranking, no fuzzy matching).

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Category restriction. `All` matches every product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySelector {
    #[default]
    All,
    Only(String),
}

impl CategorySelector {
    pub fn only(category: impl Into<String>) -> Self {
        Self::Only(category.into())
    }

    fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }
}

/// Transient filter criteria: category selector + free-text search term.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category: CategorySelector,
    pub search_term: String,
}

impl FilterCriteria {
    /// Combined predicate: category match AND search match.
    ///
    /// The search term is a case-insensitive substring test against name
    /// OR description; an empty term matches everything.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(product) {
            return false;
        }
        let term = self.search_term.to_lowercase();
        product.name.to_lowercase().contains(&term)
            || product.description.to_lowercase().contains(&term)
    }
}

/// Stable filter over the catalog: keeps catalog order, clones matches.
pub fn filter(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}
