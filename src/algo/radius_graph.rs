/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Radius graphs.
//!
//! The radius graph of a graph with radius *r* has the same vertices, and
//! an edge between every pair of distinct vertices at distance at most *r*.

use crate::algo::visits::{breadth_first, Sequential};
use crate::graphs::{GraphError, IncidenceStore, RandomAccessGraph};
use dsi_progress_logger::{no_logging, ProgressLog};
use std::convert::Infallible;
use unwrap_infallible::UnwrapInfallible;

/// Builds the radius graph of a graph.
///
/// Pairs are enumerated by source vertex and then by target vertex, both in
/// increasing order. By default every ordered pair `(u, v)` within distance
/// generates a row, so each unordered pair appears twice, once as `(u, v)`
/// and once as `(v, u)`. With [`dedup`](Self::dedup) only pairs with
/// `u < v` generate a row; the set of connected pairs is the same.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use radius_graph::algo::radius_graph::RadiusGraphBuilder;
/// use radius_graph::graphs::{Adjacency, Edge, IncidenceStore};
///
/// let graph = IncidenceStore::from_edges(3, [(0, 1), (1, 2)])?;
/// let adjacency = Adjacency::new(&graph);
///
/// let radius_graph = RadiusGraphBuilder::new(&adjacency).build(1, no_logging![])?;
/// assert_eq!(radius_graph.num_edges(), 4);
///
/// let radius_graph = RadiusGraphBuilder::new(&adjacency)
///     .dedup(true)
///     .build(1, no_logging![])?;
/// assert_eq!(radius_graph.edges(), &[Edge::new(0, 1), Edge::new(1, 2)]);
/// # Ok::<(), radius_graph::graphs::GraphError>(())
/// ```
pub struct RadiusGraphBuilder<G: RandomAccessGraph> {
    graph: G,
    dedup: bool,
}

impl<G: RandomAccessGraph> RadiusGraphBuilder<G> {
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            dedup: false,
        }
    }

    /// Sets whether symmetric pairs generate a single row.
    pub fn dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    /// Builds a new graph connecting every pair of distinct vertices whose
    /// distance is at most `radius`.
    ///
    /// Unreachable vertices are never connected, whatever the radius.
    pub fn build(
        self,
        radius: usize,
        pl: &mut impl ProgressLog,
    ) -> Result<IncidenceStore, GraphError> {
        let num_nodes = self.graph.num_nodes();
        let mut radius_graph = IncidenceStore::new(num_nodes);
        let mut visit = breadth_first::Seq::new(&self.graph);
        let mut within = Vec::new();

        pl.item_name("visit");
        pl.expected_updates(Some(num_nodes));
        pl.start(format!("Building radius graph with radius {}...", radius));

        for u in 0..num_nodes {
            within.clear();
            visit
                .visit_filtered(
                    u,
                    |event| {
                        if let breadth_first::Event::Unknown { node, .. } = *event {
                            if node != u {
                                within.push(node);
                            }
                        }
                        Ok::<(), Infallible>(())
                    },
                    |args| args.distance <= radius,
                    no_logging![],
                )
                .unwrap_infallible();
            visit.reset();

            within.sort_unstable();
            for &v in within.iter() {
                if !self.dedup || u < v {
                    radius_graph.push_edge((u, v))?;
                }
            }
            pl.update();
        }

        pl.done();
        pl.info(format_args!(
            "The radius graph has {} edges",
            radius_graph.num_edges()
        ));

        Ok(radius_graph)
    }
}
