//! Strongly typed, zero-cost identifier wrapper.
//!
//! Venues and agents share one id space so that edges and rendered frames can
//! refer to either without a discriminant.  The inner integer is `pub`, but
//! nothing outside `epi-graph`'s builder should assume ids are dense or
//! ordered by kind.

use std::fmt;

/// Identifier of a graph node (venue or agent).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel meaning "no valid node": equivalent to `u32::MAX`.
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for NodeId {
    /// Returns the `INVALID` sentinel so uninitialized ids are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<NodeId> for usize {
    #[inline(always)]
    fn from(id: NodeId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for NodeId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<NodeId, Self::Error> {
        u32::try_from(n).map(NodeId)
    }
}
