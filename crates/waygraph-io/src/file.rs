//! Persisted file shapes and their structural validation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use waygraph_core::{Edge, Node};

use crate::error::{GraphIoError, GraphIoResult};

/// A full graph file: `{ "nodes": [...], "edges": [...] }`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// An edges-only file: `{ "edges": [...] }`, produced when re-deriving edges
/// from an already-materialized node set.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeList {
    pub edges: Vec<Edge>,
}

impl GraphFile {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Check the structural invariants of a graph file, rejecting
    /// non-positive or duplicate node ids, out-of-range coordinates, edges
    /// whose endpoints reference no node, and self-loops.
    ///
    /// Intended for graph files of foreign origin (e.g. as `relink` input);
    /// files produced by this pipeline satisfy these by construction.
    pub fn validate(&self) -> GraphIoResult<()> {
        let mut ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if node.id.0 == 0 {
                return Err(GraphIoError::Invalid(format!(
                    "node id must be positive (node \"{}\")",
                    node.name
                )));
            }
            if !node.point().in_bounds() {
                return Err(GraphIoError::Invalid(format!(
                    "node {} has out-of-range coordinates ({}, {})",
                    node.id, node.lat, node.lng
                )));
            }
            if !ids.insert(node.id) {
                return Err(GraphIoError::Invalid(format!("duplicate node id {}", node.id)));
            }
        }

        for edge in &self.edges {
            if edge.from == edge.to {
                return Err(GraphIoError::Invalid(format!("self-loop on node {}", edge.from)));
            }
            for endpoint in [edge.from, edge.to] {
                if !ids.contains(&endpoint) {
                    return Err(GraphIoError::Invalid(format!(
                        "edge {} → {} references missing node {endpoint}",
                        edge.from, edge.to
                    )));
                }
            }
        }

        Ok(())
    }
}
