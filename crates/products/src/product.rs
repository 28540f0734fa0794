use core::fmt;

use stockroom_core::{DomainError, DomainResult, Money};

/// A stocked product: label, unit price, and units on hand.
///
/// `quantity` only moves through [`Product::sell`]/[`Product::try_sell`]
/// (validated decrease) and [`Product::restock`] (increase).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    name: String,
    price: Money,
    quantity: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Money, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Value of the stock on hand (`price * quantity`). Never cached.
    pub fn inventory_value(&self) -> Money {
        self.price * self.quantity
    }

    /// Sell `amount` units, all or nothing.
    ///
    /// Returns `false` and leaves the stock untouched when fewer than `amount`
    /// units are on hand.
    pub fn sell(&mut self, amount: u32) -> bool {
        self.try_sell(amount).is_ok()
    }

    /// Like [`Product::sell`], but reports why a sale was rejected.
    pub fn try_sell(&mut self, amount: u32) -> DomainResult<()> {
        if amount > self.quantity {
            tracing::debug!(
                product = %self.name,
                requested = amount,
                available = self.quantity,
                "sale rejected"
            );
            return Err(DomainError::insufficient_stock(amount, self.quantity));
        }

        self.quantity -= amount;
        tracing::debug!(product = %self.name, sold = amount, remaining = self.quantity, "sale applied");
        Ok(())
    }

    /// Add `amount` units to the stock on hand.
    ///
    /// Fails only if the count would overflow; the stock is unchanged then.
    pub fn restock(&mut self, amount: u32) -> DomainResult<()> {
        let new_quantity = self
            .quantity
            .checked_add(amount)
            .ok_or_else(|| DomainError::invariant("stock count overflow"))?;

        self.quantity = new_quantity;
        tracing::debug!(product = %self.name, added = amount, on_hand = self.quantity, "restocked");
        Ok(())
    }

    /// Overwrite the unit price. Any value is accepted.
    pub fn reprice_to(&mut self, price: Money) {
        tracing::debug!(product = %self.name, old = %self.price, new = %price, "repriced");
        self.price = price;
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// One-line, human-readable summary of the product.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Producto: {} | Precio: ${} | Cantidad: {} | Valor Inventario: ${}",
            self.name,
            self.price,
            self.quantity,
            self.inventory_value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product::new("Laptop Gamer", Money::from_cents(120_000), 10)
    }

    #[test]
    fn laptop_scenario_sells_restocks_and_reprices() {
        let mut product = laptop();

        assert!(product.sell(3));
        assert_eq!(product.quantity(), 7);

        assert!(!product.sell(20));
        assert_eq!(product.quantity(), 7);

        product.restock(5).unwrap();
        assert_eq!(product.quantity(), 12);

        product.reprice_to(Money::from_cents(115_000));
        assert_eq!(product.price(), Money::from_cents(115_000));
        assert_eq!(product.inventory_value(), Money::from_cents(1_380_000));
        assert_eq!(product.inventory_value().to_string(), "13800.00");
    }

    #[test]
    fn default_product_is_empty_and_worthless() {
        let product = Product::default();
        assert_eq!(product.name(), "");
        assert!(product.price().is_zero());
        assert_eq!(product.quantity(), 0);
        assert!(product.inventory_value().is_zero());
    }

    #[test]
    fn try_sell_reports_requested_and_available() {
        let mut product = laptop();
        let err = product.try_sell(11).unwrap_err();
        assert_eq!(err, DomainError::insufficient_stock(11, 10));
        assert_eq!(product.quantity(), 10);
    }

    #[test]
    fn selling_entire_stock_is_allowed() {
        let mut product = laptop();
        assert!(product.sell(10));
        assert_eq!(product.quantity(), 0);
        assert!(product.inventory_value().is_zero());
    }

    #[test]
    fn restock_overflow_is_rejected_without_change() {
        let mut product = Product::new("Tornillo", Money::from_cents(5), u32::MAX - 1);
        let err = product.restock(2).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("overflow") => {}
            other => panic!("Expected overflow invariant violation, got {other:?}"),
        }
        assert_eq!(product.quantity(), u32::MAX - 1);
    }

    #[test]
    fn reprice_accepts_zero() {
        let mut product = laptop();
        product.reprice_to(Money::ZERO);
        assert!(product.inventory_value().is_zero());
    }

    #[test]
    fn rename_keeps_stock() {
        let mut product = laptop();
        product.rename("Laptop Pro");
        assert_eq!(product.name(), "Laptop Pro");
        assert_eq!(product.quantity(), 10);
    }

    #[test]
    fn describe_renders_two_decimal_amounts() {
        let product = Product::new("Tablet", Money::from_cents(30_000), 15);
        assert_eq!(
            product.describe(),
            "Producto: Tablet | Precio: $300.00 | Cantidad: 15 | Valor Inventario: $4500.00"
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: restock adds exactly `n` units.
            #[test]
            fn restock_adds_exactly(
                start in 0u32..1_000_000,
                n in 0u32..1_000_000
            ) {
                let mut product = Product::new("Item", Money::from_cents(100), start);
                product.restock(n).unwrap();
                prop_assert_eq!(product.quantity(), start + n);
            }

            /// Property: a sale succeeds iff it fits, and never partially applies.
            #[test]
            fn sell_is_all_or_nothing(
                start in 0u32..10_000,
                n in 0u32..20_000
            ) {
                let mut product = Product::new("Item", Money::from_cents(100), start);
                let sold = product.sell(n);
                if n <= start {
                    prop_assert!(sold);
                    prop_assert_eq!(product.quantity(), start - n);
                } else {
                    prop_assert!(!sold);
                    prop_assert_eq!(product.quantity(), start);
                }
            }

            /// Property: inventory value is exactly price times quantity.
            #[test]
            fn inventory_value_is_price_times_quantity(
                cents in 0i64..100_000_000,
                qty in 0u32..100_000
            ) {
                let product = Product::new("Item", Money::from_cents(cents), qty);
                prop_assert_eq!(
                    product.inventory_value(),
                    Money::from_cents(cents * i64::from(qty))
                );
            }
        }
    }
}
