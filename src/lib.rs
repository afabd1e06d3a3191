/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Eccentricities, radius, center and radius graphs of small undirected
//! graphs stored as incidence structures.
//!
//! Graphs are built as [`IncidenceStore`](graphs::IncidenceStore)s, turned
//! into [`Adjacency`](graphs::Adjacency) lists once, and then visited
//! breadth-first from every vertex.

pub mod algo;
pub mod graphs;
pub mod gwf;
pub mod run;
pub mod sink;
pub mod utils;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
    pub use graphs::traits::*;
    pub use gwf::GraphSource;
    pub use sink::ResultSink;
}

/// Use `use radius_graph::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use algo::distances::{distances, Distances};
    pub use algo::eccentricities::{self, Metrics, MetricsError};
    pub use algo::radius_graph::RadiusGraphBuilder;
    pub use algo::visits::breadth_first;
    pub use graphs::{Adjacency, Edge, GraphError, IncidenceMatrix, IncidenceScan, IncidenceStore};
    pub use gwf::{GraphDescription, GwfSource, SourceError};
    pub use run::{analyze, run, AnalysisError, Options, RunSummary};
    pub use sink::{Report, TableSink};
    pub use traits::*;
    pub use utils::Threads;
}
