/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits.
//!
//! Implementations must accept a callback function with argument [`Event`]
//! and a filter with argument [`FilterArgs`].

mod seq;
pub use seq::*;

/// Types of callback events generated during a breadth-first visit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Event {
    /// The node has been encountered for the first time: we are traversing a
    /// new tree edge, unless `node`, `parent` and `root` are all equal, in
    /// which case this is the root of the visit.
    Unknown {
        /// The node.
        node: usize,
        /// The parent of `node` in the visit tree.
        parent: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The distance of `node` from `root`.
        distance: usize,
    },
    /// The node has been encountered before: we are traversing a non-tree
    /// edge (in an undirected graph, this includes the edge leading back to
    /// the parent and every parallel edge).
    Known {
        /// The node.
        node: usize,
        /// The node from which `node` was reached.
        parent: usize,
        /// The root of the current visit tree.
        root: usize,
    },
}

/// Arguments passed to the filter of a breadth-first visit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FilterArgs {
    /// The node about to be discovered.
    pub node: usize,
    /// The node from which `node` would be discovered.
    pub parent: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The distance `node` would have from `root`.
    pub distance: usize,
}
