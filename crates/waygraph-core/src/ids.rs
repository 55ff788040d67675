//! Node identifier type.
//!
//! Ids are assigned 1-based in input iteration order and are gapless within a
//! single run; they serialize as plain integers.  They are *not* guaranteed
//! stable across reruns if input order changes.

use std::fmt;

/// Identifier of a graph node (1-based, assigned by insertion order).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The id of the first node in a run.
    pub const FIRST: NodeId = NodeId(1);

    /// The id assigned to the node inserted after this one.
    #[inline]
    pub fn next(self) -> NodeId {
        NodeId(self.0 + 1)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
