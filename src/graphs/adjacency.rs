/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{IncidenceStore, RandomAccessGraph};

/// Adjacency lists of an [`IncidenceStore`] in compressed sparse row form.
///
/// The lists are built once with a counting pass over the edges and can
/// then be shared read-only by any number of visits. The successors of
/// each vertex appear in edge order, so a visit over an [`Adjacency`]
/// discovers vertices in the same order as a visit over the corresponding
/// [`IncidenceScan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    /// `offsets[v]..offsets[v + 1]` is the range of the successors of `v`.
    offsets: Box<[usize]>,
    successors: Box<[usize]>,
}

impl Adjacency {
    pub fn new(graph: &IncidenceStore) -> Self {
        let num_vertices = graph.num_vertices();
        let mut offsets = vec![0_usize; num_vertices + 1];
        for edge in graph.edges() {
            offsets[edge.u + 1] += 1;
            offsets[edge.v + 1] += 1;
        }
        for v in 0..num_vertices {
            offsets[v + 1] += offsets[v];
        }

        let mut next = offsets[..num_vertices].to_vec();
        let mut successors = vec![0_usize; offsets[num_vertices]];
        for edge in graph.edges() {
            successors[next[edge.u]] = edge.v;
            next[edge.u] += 1;
            successors[next[edge.v]] = edge.u;
            next[edge.v] += 1;
        }

        Self {
            offsets: offsets.into_boxed_slice(),
            successors: successors.into_boxed_slice(),
        }
    }

    /// Returns the successors of `node` as a slice.
    #[inline(always)]
    pub fn successors_slice(&self, node: usize) -> &[usize] {
        &self.successors[self.offsets[node]..self.offsets[node + 1]]
    }
}

impl From<&IncidenceStore> for Adjacency {
    fn from(graph: &IncidenceStore) -> Self {
        Self::new(graph)
    }
}

impl RandomAccessGraph for Adjacency {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.successors_slice(node).iter().copied()
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }
}

/// Neighbor queries answered directly on the incidence rows.
///
/// Every call to [`successors`](RandomAccessGraph::successors) scans all
/// the edges of the graph, so a full visit costs O(EV). Use an
/// [`Adjacency`] unless the graph is tiny.
#[derive(Debug, Clone, Copy)]
pub struct IncidenceScan<'a>(pub &'a IncidenceStore);

impl RandomAccessGraph for IncidenceScan<'_> {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.0.num_vertices()
    }

    fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.0.edges().iter().filter_map(move |edge| edge.other(node))
    }
}
