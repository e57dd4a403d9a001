//! Generic, UI-agnostic identifier for DOM nodes.
//!
//! This type intentionally uses a plain `u64` to avoid coupling to any DOM
//! or framework-specific identifier type. Integration layers can provide
//! `From` implementations to convert from their native ID types.

/// Opaque identifier for a node seen through a [`DomPort`](crate::DomPort).
///
/// This is a lightweight, copyable handle. The actual value has no semantic
/// meaning within this crate—it's just a key the port resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Create a `NodeId` from a raw u64 value.
    ///
    /// This is the primary way to construct a `NodeId` from an external ID
    /// system.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying raw value.
    ///
    /// Useful for converting back to an external ID system.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<u32> for NodeId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}

impl From<NodeId> for u64 {
    #[inline]
    fn from(id: NodeId) -> Self {
        id.as_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_round_trip() {
        let raw = 42u64;
        let id = NodeId::from_raw(raw);
        assert_eq!(id.as_raw(), raw);
    }

    #[test]
    fn node_id_from_u32() {
        let raw = 123u32;
        let id = NodeId::from(raw);
        assert_eq!(id.as_raw(), 123u64);
    }

    #[test]
    fn node_id_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(NodeId::from_raw(1));
        set.insert(NodeId::from_raw(2));
        set.insert(NodeId::from_raw(1)); // duplicate

        assert_eq!(set.len(), 2);
    }
}
