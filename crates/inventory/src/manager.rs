//! The in-memory product store.

use tracing::{debug, info, warn};

use stockkeep_core::{DomainError, DomainResult, Entity, IdSequence};

use crate::product::{Product, ProductId};

/// Result of [`InventoryManager::list`].
///
/// `Empty` is a distinct outcome so callers can show a message instead of an
/// empty table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Listing<'a> {
    Empty,
    Products(&'a [Product]),
}

impl<'a> Listing<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    /// The listed products; an empty slice for [`Listing::Empty`].
    pub fn products(&self) -> &'a [Product] {
        match self {
            Listing::Empty => &[],
            Listing::Products(products) => products,
        }
    }
}

/// Result of [`InventoryManager::total_value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TotalValue {
    Empty,
    Amount(f64),
}

impl TotalValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, TotalValue::Empty)
    }

    /// Sum of quantity × price; `0.0` for an empty inventory.
    pub fn amount(&self) -> f64 {
        match self {
            TotalValue::Empty => 0.0,
            TotalValue::Amount(amount) => *amount,
        }
    }
}

/// Owns the ordered product collection and the id sequence.
///
/// Products are kept in insertion order and looked up by linear scan.
#[derive(Debug, Default)]
pub struct InventoryManager {
    products: Vec<Product>,
    ids: IdSequence,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First product carrying `id`, if any.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.has_id(id))
    }

    fn position(&self, id: ProductId) -> DomainResult<usize> {
        self.products
            .iter()
            .position(|p| p.has_id(id))
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }

    /// Issues a fresh id. Ids are never reused, even after removal.
    pub fn next_product_id(&mut self) -> DomainResult<ProductId> {
        self.ids.issue().map(ProductId::new)
    }

    /// Appends an already validated product.
    ///
    /// The product's id is expected to come from [`next_product_id`](Self::next_product_id).
    /// An id that is already stored, or one the sequence cannot move past, is
    /// rejected; any other id is accepted and the sequence is moved past it.
    pub fn add_product(&mut self, product: Product) -> DomainResult<&Product> {
        let id = product.id();
        if self.find(id).is_some() {
            warn!(product_id = %id, "rejected duplicate product id");
            return Err(DomainError::conflict(format!("product {id} already exists")));
        }

        self.ids.observe(id.0).inspect_err(|e| {
            warn!(product_id = %id, error = %e, "rejected product id");
        })?;
        info!(product_id = %id, name = %product.name(), "product added");
        self.products.push(product);

        let last = self.products.len() - 1;
        Ok(&self.products[last])
    }

    /// Validates the fields, issues an id, and appends the new product.
    ///
    /// No id is consumed when validation fails.
    pub fn add(&mut self, name: impl Into<String>, quantity: i64, price: f64) -> DomainResult<&Product> {
        let id = ProductId::new(self.ids.peek());
        let product = Product::new(id, name, quantity, price).inspect_err(|e| {
            warn!(error = %e, "product rejected");
        })?;
        self.ids.issue()?;
        self.add_product(product)
    }

    /// Removes and returns the product with `id`.
    pub fn remove(&mut self, id: ProductId) -> DomainResult<Product> {
        let index = self.position(id).inspect_err(|_| {
            warn!(product_id = %id, "remove: product not found");
        })?;
        let product = self.products.remove(index);
        info!(product_id = %id, name = %product.name(), "product removed");
        Ok(product)
    }

    /// Sets the quantity on hand of the product with `id`.
    pub fn update(&mut self, id: ProductId, new_quantity: i64) -> DomainResult<&Product> {
        let index = self.position(id).inspect_err(|_| {
            warn!(product_id = %id, "update: product not found");
        })?;

        let product = &mut self.products[index];
        product.update_stock(new_quantity).inspect_err(|e| {
            warn!(product_id = %id, error = %e, "update: stock rejected");
        })?;
        info!(product_id = %id, quantity = %product.quantity(), "stock updated");
        Ok(&*product)
    }

    /// Current products in insertion order.
    pub fn list(&self) -> Listing<'_> {
        if self.products.is_empty() {
            debug!("list: inventory is empty");
            return Listing::Empty;
        }
        Listing::Products(&self.products)
    }

    /// Sum over all products of quantity × unit price.
    pub fn total_value(&self) -> TotalValue {
        if self.products.is_empty() {
            debug!("total_value: inventory is empty");
            return TotalValue::Empty;
        }
        TotalValue::Amount(self.products.iter().map(Product::value).sum())
    }
}
