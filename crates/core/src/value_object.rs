//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own: two values holding the same
/// attributes are interchangeable. They are immutable once built, so any
/// validation happens in their constructor and a held value is always valid.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Percentage(u8);
///
/// impl ValueObject for Percentage {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
