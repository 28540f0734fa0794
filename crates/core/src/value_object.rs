//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: compared by attribute values
/// - **Debug**: shows up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Money(Decimal);
///
/// impl ValueObject for Money {}
///
/// assert_eq!(Money(Decimal::new(100, 2)), Money(Decimal::ONE));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
