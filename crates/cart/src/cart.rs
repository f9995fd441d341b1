//! Cart aggregator: product identity -> accumulated quantity.

use serde::{Deserialize, Serialize};

use petalcart_catalog::{Product, ProductId};

/// One distinct product's accumulated quantity within the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    /// Always >= 1; a line that would reach 0 is removed instead.
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> u64 {
        self.product.price * u64::from(self.quantity)
    }
}

/// Single-session cart. Lines keep append order: the first add of a
/// product determines its position, repeat adds update it in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-or-increment: a new line starts at quantity 1, an existing
    /// line gains 1.
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
    }

    /// Delete the whole line for `id`, regardless of quantity.
    /// Silently does nothing when no such line exists.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|l| l.product.id != id);
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines (badge count).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price,
            category: "Roses".to_string(),
            description: String::new(),
            image: String::new(),
            rating: 5,
        }
    }

    #[test]
    fn first_add_creates_a_line_with_quantity_one() {
        let mut cart = Cart::new();
        cart.add(product(1, 900));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn repeat_add_increments_in_place() {
        let mut cart = Cart::new();
        cart.add(product(1, 900));
        cart.add(product(2, 800));
        cart.add(product(1, 900));
        assert_eq!(cart.line_count(), 2);
        // Position of product 1 is unchanged by the repeat add.
        assert_eq!(cart.lines()[0].product.id, ProductId::new(1));
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn remove_deletes_the_whole_line() {
        let mut cart = Cart::new();
        for _ in 0..3 {
            cart.add(product(1, 900));
        }
        cart.remove(ProductId::new(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_of_unknown_id_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add(product(1, 900));
        cart.remove(ProductId::new(99));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let mut cart = Cart::new();
        cart.add(product(1, 900));
        cart.add(product(1, 900));
        cart.add(product(2, 800));
        assert_eq!(cart.total(), 2600);
    }

    #[test]
    fn item_count_is_quantity_sum_not_line_count() {
        let mut cart = Cart::new();
        cart.add(product(1, 900));
        cart.add(product(1, 900));
        cart.add(product(2, 800));
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(product(1, 900));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
        assert_eq!(cart.item_count(), 0);
    }
}
