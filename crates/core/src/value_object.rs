//! Value object marker: equality by value, not identity.

/// Marker trait for catalog value objects.
///
/// A value object is immutable and compared by its attribute values. Prices,
/// slugs and recency windows are value objects; a catalog item is not (it is
/// identified by its slug).
///
/// ```ignore
/// let a = MinorUnits::new(16500);
/// let b = MinorUnits::new(16500);
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
