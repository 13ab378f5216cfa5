//! Inventory domain module.
//!
//! This crate contains the product catalog rules, implemented purely as
//! deterministic in-memory logic (no IO, no console, no storage).

pub mod manager;
pub mod product;

pub use manager::{InventoryManager, Listing, TotalValue};
pub use product::{Product, ProductId, Quantity, UnitPrice};
