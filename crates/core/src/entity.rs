//! Entity trait: identity + continuity across state changes.

/// Minimal interface for registry entities.
///
/// Registry entities are keyed by their identifier, and the registry keeps its
/// mappings ordered, so identifiers must be totally ordered as well.
pub trait Entity {
    /// Strongly-typed entity identifier, usable as an ordered map key.
    type Id: Clone + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the identifier this entity is registered under.
    fn id(&self) -> &Self::Id;
}
