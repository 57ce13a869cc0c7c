//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. In the catalog,
/// filter requests and price bounds are value objects: a request is rebuilt on
/// every evaluation and two requests with the same fields select the same
/// products.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct PriceBound(Option<f64>);
///
/// impl ValueObject for PriceBound {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
