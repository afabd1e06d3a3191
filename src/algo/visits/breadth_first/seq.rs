/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Event, FilterArgs};
use crate::algo::visits::Sequential;
use crate::graphs::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use nonmax::NonMaxUsize;
use std::collections::VecDeque;
use sux::bits::BitVec;

/// A sequential breadth-first visit.
///
/// Distances are not stored: they are computed on the fly and passed to the
/// callback when nodes are discovered, rather than when they are extracted
/// from the queue. To this purpose a level separator is inserted in the
/// queue between nodes at different distances; nodes are represented using
/// [`NonMaxUsize`], so the `None` variant of `Option<NonMaxUsize>` can be
/// used as a separator without storage for the option tag.
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
/// use dsi_progress_logger::no_logging;
/// use radius_graph::algo::visits::{breadth_first, Sequential};
/// use radius_graph::graphs::{Adjacency, IncidenceStore};
///
/// // Let's compute the distances from 0 on a path
///
/// let graph = IncidenceStore::from_edges(4, [(0, 1), (1, 2), (2, 3)])?;
/// let adjacency = Adjacency::new(&graph);
/// let mut visit = breadth_first::Seq::new(&adjacency);
/// let mut d = [0; 4];
/// visit.visit(
///     0,
///     |event| {
///         if let breadth_first::Event::Unknown { node, distance, .. } = *event {
///             d[node] = distance;
///         }
///         Ok::<(), Infallible>(())
///     },
///     no_logging![],
/// ).unwrap();
/// assert_eq!(d, [0, 1, 2, 3]);
/// # Ok::<(), radius_graph::graphs::GraphError>(())
/// ```
pub struct Seq<G: RandomAccessGraph> {
    graph: G,
    visited: BitVec,
    /// The visit queue; to avoid storing distances, we use `None` as a
    /// separator between levels.
    queue: VecDeque<Option<NonMaxUsize>>,
}

impl<G: RandomAccessGraph> Seq<G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit (usually a reference).
    pub fn new(graph: G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            visited: BitVec::new(num_nodes),
            queue: VecDeque::new(),
        }
    }

    /// Returns whether `node` has been met by a visit since the last reset.
    #[inline(always)]
    pub fn is_visited(&self, node: usize) -> bool {
        self.visited[node]
    }
}

impl<G: RandomAccessGraph> Sequential<Event, FilterArgs> for Seq<G> {
    fn visit_filtered<E, C: FnMut(&Event) -> Result<(), E>, P: FnMut(&FilterArgs) -> bool>(
        &mut self,
        root: usize,
        mut callback: C,
        mut filter: P,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        if self.visited[root]
            || !filter(&FilterArgs {
                node: root,
                parent: root,
                root,
                distance: 0,
            })
        {
            return Ok(());
        }

        callback(&Event::Unknown {
            node: root,
            parent: root,
            root,
            distance: 0,
        })?;

        self.visited.set(root, true);
        self.queue.push_back(Some(
            NonMaxUsize::new(root).expect("node index should never be usize::MAX"),
        ));
        self.queue.push_back(None);

        let mut distance = 1;

        while let Some(current_node) = self.queue.pop_front() {
            match current_node {
                Some(node) => {
                    let node = node.get();
                    for succ in self.graph.successors(node) {
                        if !self.visited[succ] {
                            if filter(&FilterArgs {
                                node: succ,
                                parent: node,
                                root,
                                distance,
                            }) {
                                callback(&Event::Unknown {
                                    node: succ,
                                    parent: node,
                                    root,
                                    distance,
                                })?;
                                self.visited.set(succ, true);
                                self.queue.push_back(Some(
                                    NonMaxUsize::new(succ)
                                        .expect("node index should never be usize::MAX"),
                                ));
                            }
                        } else {
                            callback(&Event::Known {
                                node: succ,
                                parent: node,
                                root,
                            })?;
                        }
                    }
                    pl.light_update();
                }
                None => {
                    // We are at the end of the current level, so
                    // we increment the distance and add a separator.
                    if !self.queue.is_empty() {
                        distance += 1;
                        self.queue.push_back(None);
                    }
                }
            }
        }

        Ok(())
    }

    fn visit_all<E, C: FnMut(&Event) -> Result<(), E>>(
        &mut self,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        for node in 0..self.graph.num_nodes() {
            self.visit(node, &mut callback, pl)?;
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.visited.fill(false);
    }
}
