/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// A graph providing random access to the neighbors of its vertices.
///
/// Undirected graphs list every edge `{u, v}` both among the successors of
/// `u` and among the successors of `v`. Parallel edges may make a successor
/// appear more than once.
pub trait RandomAccessGraph {
    /// Returns the number of nodes of the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the successors of `node`.
    fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_;

    /// Returns the number of successors of `node`, counting repetitions.
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).count()
    }
}

impl<G: RandomAccessGraph + ?Sized> RandomAccessGraph for &G {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        (**self).successors(node)
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        (**self).outdegree(node)
    }
}
