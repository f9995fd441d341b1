//! The catalog store: a validated, immutable sequence of products.

use std::collections::HashSet;

use petalcart_core::{DomainError, DomainResult};

use crate::product::{Product, ProductId};

/// Builtin dataset shipped with the storefront.
const BUILTIN: &str = include_str!("../data/catalog.json");

/// Read-only product catalog, fixed for the process lifetime.
///
/// Construction is the only place invariants are checked; after that the
/// catalog hands out shared references only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, enforcing id uniqueness and per-record bounds.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(DomainError::invariant(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// Parse and validate the embedded builtin dataset.
    pub fn builtin() -> DomainResult<Self> {
        let products: Vec<Product> = serde_json::from_str(BUILTIN)
            .map_err(|e| DomainError::validation(format!("builtin catalog data: {e}")))?;
        Self::new(products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct category names in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: 100,
            category: category.to_string(),
            description: String::new(),
            image: String::new(),
            rating: 4,
        }
    }

    #[test]
    fn builtin_catalog_parses_and_validates() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 40);
        assert_eq!(catalog.products()[0].name, "Red Roses");
        assert_eq!(catalog.products()[39].name, "Anthurium");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![product(1, "Roses"), product(1, "Lilies")]).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.get(ProductId::new(11)).unwrap().name, "Pink Roses");
        assert!(catalog.get(ProductId::new(999)).is_none());
    }

    #[test]
    fn categories_are_distinct_in_first_appearance_order() {
        let catalog = Catalog::new(vec![
            product(1, "Roses"),
            product(2, "Lilies"),
            product(3, "Roses"),
            product(4, "Tulips"),
        ])
        .unwrap();
        assert_eq!(catalog.categories(), vec!["Roses", "Lilies", "Tulips"]);
    }

    #[test]
    fn builtin_categories_cover_the_dataset() {
        let catalog = Catalog::builtin().unwrap();
        let categories = catalog.categories();
        assert!(categories.contains(&"Roses"));
        assert!(categories.contains(&"Exotic"));
        // Sentinel "All" is a selector, never a category.
        assert!(!categories.contains(&"All"));
    }
}
