/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Single-source shortest-path distances in unweighted graphs.

use crate::algo::visits::{breadth_first, Sequential};
use crate::graphs::{GraphError, RandomAccessGraph};
use dsi_progress_logger::no_logging;
use std::convert::Infallible;
use unwrap_infallible::UnwrapInfallible;

/// The distances, in number of edges, from a source vertex to every vertex
/// of a graph.
///
/// Unreachable vertices have no distance: the sentinel is [`None`], so it
/// can never be mistaken for a finite distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distances {
    source: usize,
    distances: Box<[Option<usize>]>,
}

impl Distances {
    /// The vertex the distances are measured from.
    #[inline(always)]
    pub fn source(&self) -> usize {
        self.source
    }

    /// The number of vertices of the graph.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Returns the distance of `vertex` from the source, or [`None`] if
    /// `vertex` is unreachable.
    #[inline(always)]
    pub fn get(&self, vertex: usize) -> Option<usize> {
        self.distances[vertex]
    }

    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.distances
    }

    /// Returns the vertices that cannot be reached from the source, in
    /// increasing order.
    pub fn unreachable(&self) -> impl Iterator<Item = usize> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(vertex, d)| d.is_none().then_some(vertex))
    }

    /// Returns the maximum distance from the source.
    ///
    /// If some vertex is unreachable the maximum is not defined, and the
    /// list of unreachable vertices is returned as error.
    pub fn max(&self) -> Result<usize, Vec<usize>> {
        let mut max = 0;
        for d in self.distances.iter() {
            match d {
                Some(d) => max = max.max(*d),
                None => return Err(self.unreachable().collect()),
            }
        }
        Ok(max)
    }

    /// Returns the vertices other than the source whose distance from the
    /// source is at most `radius`, in increasing order.
    pub fn reachable_within(&self, radius: usize) -> impl Iterator<Item = usize> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(move |(vertex, d)| match d {
                Some(d) if *d <= radius && vertex != self.source => Some(vertex),
                _ => None,
            })
    }
}

/// Computes the distances from `source` to every vertex of `graph` with a
/// breadth-first visit.
///
/// Each call allocates its own visit and its own distance vector, so
/// concurrent calls on the same graph share nothing but the graph.
///
/// # Examples
///
/// ```
/// use radius_graph::algo::distances::distances;
/// use radius_graph::graphs::{Adjacency, IncidenceStore};
///
/// let graph = IncidenceStore::from_edges(4, [(0, 1), (1, 2)])?;
/// let d = distances(&Adjacency::new(&graph), 0)?;
/// assert_eq!(d.as_slice(), &[Some(0), Some(1), Some(2), None]);
/// # Ok::<(), radius_graph::graphs::GraphError>(())
/// ```
pub fn distances(graph: impl RandomAccessGraph, source: usize) -> Result<Distances, GraphError> {
    let num_nodes = graph.num_nodes();
    if source >= num_nodes {
        return Err(GraphError::InvalidVertex {
            vertex: source,
            num_vertices: num_nodes,
        });
    }

    Ok(bfs_distances(graph, source))
}

/// Computes the distances from `source`, which must be a valid node.
pub(crate) fn bfs_distances(graph: impl RandomAccessGraph, source: usize) -> Distances {
    let mut distances = vec![None; graph.num_nodes()].into_boxed_slice();
    let mut visit = breadth_first::Seq::new(graph);
    visit
        .visit(
            source,
            |event| {
                if let breadth_first::Event::Unknown { node, distance, .. } = *event {
                    distances[node] = Some(distance);
                }
                Ok::<(), Infallible>(())
            },
            no_logging![],
        )
        .unwrap_infallible();

    Distances { source, distances }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{Adjacency, IncidenceStore};

    #[test]
    fn test_max_with_unreachable() {
        let graph = IncidenceStore::from_edges(5, [(0, 1), (3, 4)]).unwrap();
        let d = distances(&Adjacency::new(&graph), 0).unwrap();
        assert_eq!(d.max(), Err(vec![2, 3, 4]));
        assert_eq!(d.unreachable().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_reachable_within_skips_source() {
        let graph = IncidenceStore::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let d = distances(&Adjacency::new(&graph), 1).unwrap();
        assert_eq!(d.reachable_within(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(d.reachable_within(0).count(), 0);
    }

    #[test]
    fn test_invalid_source() {
        let graph = IncidenceStore::new(2);
        assert_eq!(
            distances(&Adjacency::new(&graph), 2),
            Err(GraphError::InvalidVertex {
                vertex: 2,
                num_vertices: 2
            })
        );
    }
}
