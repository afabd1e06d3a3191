/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Module containing all algorithms on incidence graphs.

pub mod visits;

pub mod distances;

pub mod eccentricities;

pub mod radius_graph;

/// Traits used to interact with the implemented algorithms.
pub mod traits {
    pub use super::visits::Sequential;
}
