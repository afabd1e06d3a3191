/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Analysis of single graphs and of sequences of examples.

use crate::algo::eccentricities::{Metrics, MetricsError};
use crate::algo::radius_graph::RadiusGraphBuilder;
use crate::graphs::{Adjacency, GraphError, IncidenceStore};
use crate::gwf::{GraphSource, SourceError, MAX_VERTICES};
use crate::sink::{Report, ResultSink};
use dsi_progress_logger::ProgressLog;
use rayon::ThreadPool;

/// Errors raised while analyzing an example.
#[derive(thiserror::Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    #[error("Could not write results")]
    Sink(#[source] std::io::Error),
}

impl AnalysisError {
    /// Returns true if the error only concerns the current example, so
    /// that the following examples can still be processed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Source(SourceError::Io { .. }) | Self::Sink(_) => false,
            Self::Source(_) | Self::Graph(_) | Self::Metrics(_) => true,
        }
    }
}

/// Options of an analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// The number of vertices of every graph. If [`None`], the number
    /// declared by the source is used, or else the smallest number
    /// containing all endpoints. Counts above
    /// [`MAX_VERTICES`](crate::gwf::MAX_VERTICES) are rejected with
    /// [`GraphError::TooManyVertices`].
    pub num_vertices: Option<usize>,
    /// Whether the radius graph has a single row per unordered pair.
    pub dedup: bool,
}

/// What happened during a [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// The number of examples analyzed and passed to the sink.
    pub analyzed: usize,
    /// The number of examples skipped because of a recoverable error.
    pub skipped: usize,
}

/// Computes the metrics and the radius graph of a graph.
///
/// The adjacency lists are built once and shared by all visits; the
/// eccentricities are computed in parallel on `thread_pool`.
pub fn analyze(
    example: usize,
    graph: IncidenceStore,
    options: &Options,
    thread_pool: &ThreadPool,
    pl: &mut impl ProgressLog,
) -> Result<Report, AnalysisError> {
    let adjacency = Adjacency::new(&graph);
    let metrics = Metrics::par_compute(&adjacency, thread_pool, pl)?;
    let radius_graph = RadiusGraphBuilder::new(&adjacency)
        .dedup(options.dedup)
        .build(metrics.radius, pl)?;

    Ok(Report {
        example,
        graph,
        metrics,
        radius_graph,
    })
}

fn load(
    source: &impl GraphSource,
    example: usize,
    options: &Options,
) -> Result<IncidenceStore, AnalysisError> {
    let description = source.graph(example)?;
    let num_vertices = match options.num_vertices.or(description.num_vertices) {
        Some(num_vertices) => num_vertices,
        None => description.inferred_num_vertices()?,
    };
    if num_vertices > MAX_VERTICES {
        return Err(GraphError::TooManyVertices {
            num_vertices,
            max: MAX_VERTICES,
        }
        .into());
    }
    Ok(description.to_incidence(num_vertices)?)
}

/// Analyzes the given examples in order, passing each report to `sink`.
///
/// Recoverable errors (see [`AnalysisError::is_recoverable`]) are logged
/// and the example is skipped; other errors stop the run.
pub fn run(
    source: &impl GraphSource,
    mut sink: impl ResultSink,
    examples: impl IntoIterator<Item = usize>,
    options: &Options,
    thread_pool: &ThreadPool,
    pl: &mut impl ProgressLog,
) -> Result<RunSummary, AnalysisError> {
    let mut summary = RunSummary::default();

    for example in examples {
        let result = match load(source, example, options) {
            Ok(graph) => analyze(example, graph, options, thread_pool, pl),
            Err(err) => Err(err),
        };
        match result {
            Ok(report) => {
                log::info!(
                    "Example {}: {} vertices, {} edges, radius {}, diameter {}",
                    example,
                    report.graph.num_vertices(),
                    report.graph.num_edges(),
                    report.metrics.radius,
                    report.metrics.diameter
                );
                sink.consume(&report).map_err(AnalysisError::Sink)?;
                summary.analyzed += 1;
            }
            Err(err) if err.is_recoverable() => {
                log::error!("Example {}: {}", example, err);
                summary.skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(summary)
}
