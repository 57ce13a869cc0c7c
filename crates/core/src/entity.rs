//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Catalog merging keys on this identity, so two records with the same id are
/// the same entity regardless of their other attributes.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
