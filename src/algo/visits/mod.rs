/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! A visit calls a callback every time it meets a node, passing an event
//! describing the encounter. The callback returns a [`Result`]: returning an
//! error interrupts the visit, and the error is returned to the caller. Use
//! [`Infallible`](std::convert::Infallible) as error type for visits that
//! always run to completion.
//!
//! A filter may be used to prune the visit: nodes for which the filter
//! returns false are neither reported as discovered nor expanded.

pub mod breadth_first;

use dsi_progress_logger::ProgressLog;

/// A sequential visit.
///
/// Implementations must provide [`visit_filtered`](Sequential::visit_filtered),
/// which visits the graph from a given root, and [`reset`](Sequential::reset).
/// Nodes met by previous visits are not visited again until the visit is
/// reset, so [`visit_all`](Sequential::visit_all) enumerates every node
/// exactly once.
pub trait Sequential<A, F> {
    /// Visits the graph from the specified node, pruning with a filter.
    ///
    /// # Arguments
    /// * `root`: The node to start the visit from.
    ///
    /// * `callback`: The callback function.
    ///
    /// * `filter`: The filter function.
    ///
    /// * `pl`: A progress logger.
    fn visit_filtered<E, C: FnMut(&A) -> Result<(), E>, P: FnMut(&F) -> bool>(
        &mut self,
        root: usize,
        callback: C,
        filter: P,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E>;

    /// Visits the graph from the specified node.
    ///
    /// See [`visit_filtered`](Sequential::visit_filtered) for more details.
    fn visit<E, C: FnMut(&A) -> Result<(), E>>(
        &mut self,
        root: usize,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        self.visit_filtered(root, callback, |_| true, pl)
    }

    /// Visits the whole graph, starting a new visit from every node that
    /// has not been met yet.
    fn visit_all<E, C: FnMut(&A) -> Result<(), E>>(
        &mut self,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E>;

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
