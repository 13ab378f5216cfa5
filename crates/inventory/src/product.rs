use serde::{Deserialize, Serialize};

use stockkeep_core::{DomainError, DomainResult, Entity, EntityId, ValueObject};

/// Product identifier, issued by the owning [`InventoryManager`](crate::InventoryManager).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Units on hand. Never negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    /// Validates a raw, possibly negative, count.
    pub fn new(raw: i64) -> DomainResult<Self> {
        if raw < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        u32::try_from(raw)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("quantity {raw} is too large")))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Per-unit price. Finite and never negative.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct UnitPrice(f64);

impl UnitPrice {
    pub fn new(raw: f64) -> DomainResult<Self> {
        if !raw.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if raw < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        // `-0.0 < 0.0` is false, so fold the negative zero here.
        Ok(Self(if raw == 0.0 { 0.0 } else { raw }))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl ValueObject for UnitPrice {}

/// A single catalog entry: identity, name, quantity on hand, and unit price.
///
/// Only the quantity can change after construction, and only through
/// [`Product::update_stock`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    quantity: Quantity,
    price: UnitPrice,
}

impl Product {
    /// Builds a product, rejecting a blank name, a negative quantity, or a
    /// negative/non-finite price.
    pub fn new(id: ProductId, name: impl Into<String>, quantity: i64, price: f64) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let quantity = Quantity::new(quantity)?;
        let price = UnitPrice::new(price)?;

        Ok(Self {
            id,
            name,
            quantity,
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn price(&self) -> UnitPrice {
        self.price
    }

    /// Stock value of this entry: quantity × unit price.
    pub fn value(&self) -> f64 {
        f64::from(self.quantity.get()) * self.price.get()
    }

    /// Replaces the quantity on hand. On error the current quantity is kept.
    pub fn update_stock(&mut self, new_quantity: i64) -> DomainResult<()> {
        self.quantity = Quantity::new(new_quantity)?;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product_id() -> ProductId {
        ProductId::new(EntityId::FIRST)
    }

    #[test]
    fn new_product_keeps_inputs() {
        let product = Product::new(test_product_id(), "Widget", 10, 2.5).unwrap();
        assert_eq!(product.id(), test_product_id());
        assert_eq!(product.name(), "Widget");
        assert_eq!(product.quantity().get(), 10);
        assert_eq!(product.price().get(), 2.5);
        assert_eq!(product.value(), 25.0);
    }

    #[test]
    fn new_product_rejects_blank_name() {
        for name in ["", "   ", "\t\n"] {
            let err = Product::new(test_product_id(), name, 1, 1.0).unwrap_err();
            assert_eq!(err, DomainError::validation("name cannot be empty"));
        }
    }

    #[test]
    fn new_product_rejects_negative_quantity() {
        let err = Product::new(test_product_id(), "Widget", -1, 1.0).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("quantity") => {}
            other => panic!("Expected quantity validation error, got {other:?}"),
        }
    }

    #[test]
    fn new_product_rejects_bad_price() {
        for price in [-0.01, f64::NAN, f64::INFINITY] {
            let err = Product::new(test_product_id(), "Widget", 1, price).unwrap_err();
            match err {
                DomainError::Validation(msg) if msg.contains("price") => {}
                other => panic!("Expected price validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn zero_values_are_allowed() {
        let product = Product::new(test_product_id(), "Freebie", 0, -0.0).unwrap();
        assert_eq!(product.quantity(), Quantity::ZERO);
        assert!(product.price().get().is_sign_positive());
        assert_eq!(product.value(), 0.0);
    }

    #[test]
    fn update_stock_replaces_quantity() {
        let mut product = Product::new(test_product_id(), "Widget", 10, 2.5).unwrap();
        product.update_stock(3).unwrap();
        assert_eq!(product.quantity().get(), 3);
    }

    #[test]
    fn update_stock_rejects_negative_and_keeps_quantity() {
        let mut product = Product::new(test_product_id(), "Widget", 10, 2.5).unwrap();
        let err = product.update_stock(-5).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(product.quantity().get(), 10);
    }

    #[test]
    fn quantity_rejects_overflow() {
        assert!(Quantity::new(i64::from(u32::MAX)).is_ok());
        assert!(Quantity::new(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn product_id_parses_from_text() {
        let id: ProductId = "12".parse().unwrap();
        assert_eq!(id.to_string(), "12");
        assert!("twelve".parse::<ProductId>().is_err());
    }

    #[test]
    fn serializes_to_flat_json() {
        let product = Product::new(test_product_id(), "Widget", 10, 2.5).unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "name": "Widget", "quantity": 10, "price": 2.5 })
        );
    }
}
