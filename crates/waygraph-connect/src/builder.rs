//! Edge construction over a finalized node list.
//!
//! Both strategies evaluate haversine distances for all O(N²) pairs
//! *exactly* — no spatial index, no pruning.  At the intended scale
//! (hundreds of nodes) the full scan costs microseconds, and exact pairwise
//! evaluation is part of the interface contract: every candidate pair is
//! considered, so the output depends only on the node list and the strategy
//! parameters.
//!
//! Determinism: candidate sorting uses `f64::total_cmp` under a stable sort,
//! so equidistant neighbors keep their original node order and reruns on an
//! unchanged node list reproduce the edge list exactly.

use log::{debug, info};

use waygraph_core::{Edge, Node, round_cm};

use crate::error::ConnectResult;
use crate::strategy::EdgeStrategy;

/// Build the edge set for `nodes` under `strategy`.
///
/// The node list is taken as finalized: nodes are never added, removed, or
/// reordered here.  An empty or single-node list yields an empty edge list.
///
/// # Errors
///
/// Only [`ConnectError`](crate::ConnectError) for invalid strategy
/// parameters, raised before any distance is computed.
pub fn build_edges(nodes: &[Node], strategy: EdgeStrategy) -> ConnectResult<Vec<Edge>> {
    strategy.validate()?;

    let edges = match strategy {
        EdgeStrategy::KNearest { k } => k_nearest_edges(nodes, k),
        EdgeStrategy::Threshold { max_m } => threshold_edges(nodes, max_m),
    };

    info!("built {} edges from {} nodes ({strategy})", edges.len(), nodes.len());
    Ok(edges)
}

/// Strategy A: per node, sort all other nodes by distance and connect to the
/// nearest `k`.  Directed — B among A's nearest does not imply the reverse.
fn k_nearest_edges(nodes: &[Node], k: usize) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(nodes.len().saturating_mul(k));

    for (i, a) in nodes.iter().enumerate() {
        let mut candidates: Vec<(usize, f64)> = nodes
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(j, b)| (j, a.point().distance_m(b.point())))
            .collect();

        // Stable sort: ties in distance keep original node order.
        candidates.sort_by(|x, y| x.1.total_cmp(&y.1));

        for &(j, dist) in candidates.iter().take(k) {
            edges.push(Edge {
                from: a.id,
                to: nodes[j].id,
                distance_m: round_cm(dist),
            });
        }
    }

    debug!("k-nearest: {} nodes × up to {k} neighbors", nodes.len());
    edges
}

/// Strategy B: each unordered pair once (`i`, then `j > i`); connect when the
/// raw distance is within `max_m`.  The threshold compares the *unrounded*
/// distance; only the stored weight is rounded.
fn threshold_edges(nodes: &[Node], max_m: f64) -> Vec<Edge> {
    let mut edges = Vec::new();

    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            let dist = a.point().distance_m(b.point());
            if dist <= max_m {
                edges.push(Edge {
                    from: a.id,
                    to: b.id,
                    distance_m: round_cm(dist),
                });
            }
        }
    }

    edges
}
