/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Eccentricities, radius, diameter and center of connected undirected
//! graphs.
//!
//! Eccentricities are computed exactly, with one breadth-first visit per
//! vertex. The eccentricity of a vertex in a disconnected graph is not
//! defined: all functions in this module return
//! [`MetricsError::Disconnected`] as soon as a visit leaves some vertex
//! unreached, rather than restricting the computation to connected
//! components.

mod outputs;
pub use outputs::*;

use crate::algo::distances::bfs_distances;
use crate::graphs::RandomAccessGraph;
use crate::utils::math::{argmax, argmin};
use dsi_progress_logger::ProgressLog;
use rayon::prelude::*;
use rayon::ThreadPool;

/// Errors raised while computing eccentricity-based metrics.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    #[error("The graph has no vertices")]
    NoVertices,
    #[error("The graph is disconnected: vertices {unreachable:?} cannot be reached from vertex {vertex}")]
    Disconnected {
        /// The vertex whose visit did not reach every vertex.
        vertex: usize,
        /// The vertices it did not reach, in increasing order.
        unreachable: Vec<usize>,
    },
}

fn eccentricity(graph: impl RandomAccessGraph, vertex: usize) -> Result<usize, MetricsError> {
    bfs_distances(graph, vertex)
        .max()
        .map_err(|unreachable| MetricsError::Disconnected {
            vertex,
            unreachable,
        })
}

/// Computes the eccentricity of every vertex, visiting from each vertex in
/// turn.
///
/// # Arguments
/// * `graph`: the graph.
/// * `pl`: a progress logger, updated once per visit.
pub fn eccentricities(
    graph: impl RandomAccessGraph,
    pl: &mut impl ProgressLog,
) -> Result<Box<[usize]>, MetricsError> {
    let num_nodes = graph.num_nodes();
    pl.item_name("visit");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing eccentricities...");

    let mut eccentricities = Vec::with_capacity(num_nodes);
    for vertex in 0..num_nodes {
        eccentricities.push(eccentricity(&graph, vertex)?);
        pl.update();
    }

    pl.done();
    Ok(eccentricities.into_boxed_slice())
}

/// Computes the eccentricity of every vertex, running the visits in
/// parallel on `thread_pool`.
///
/// The visits only share the graph, which is accessed read-only. The result
/// is identical to that of [`eccentricities`]; in particular, if the graph
/// is disconnected the error reports the smallest vertex whose visit failed.
///
/// # Arguments
/// * `graph`: the graph.
/// * `thread_pool`: the thread pool to use for the visits.
/// * `pl`: a progress logger, updated once all visits are done.
pub fn par_eccentricities(
    graph: impl RandomAccessGraph + Sync,
    thread_pool: &ThreadPool,
    pl: &mut impl ProgressLog,
) -> Result<Box<[usize]>, MetricsError> {
    let num_nodes = graph.num_nodes();
    pl.item_name("visit");
    pl.expected_updates(Some(num_nodes));
    pl.start(format!(
        "Computing eccentricities using {} threads...",
        thread_pool.current_num_threads()
    ));

    let results = thread_pool.install(|| {
        (0..num_nodes)
            .into_par_iter()
            .map(|vertex| eccentricity(&graph, vertex))
            .collect::<Vec<_>>()
    });
    pl.update_with_count(num_nodes);

    let eccentricities = results.into_iter().collect::<Result<Vec<_>, _>>()?;

    pl.done();
    Ok(eccentricities.into_boxed_slice())
}

/// Returns the radius, that is, the minimum eccentricity.
pub fn radius(eccentricities: &[usize]) -> Result<usize, MetricsError> {
    argmin(eccentricities)
        .map(|vertex| eccentricities[vertex])
        .ok_or(MetricsError::NoVertices)
}

/// Returns the diameter, that is, the maximum eccentricity.
pub fn diameter(eccentricities: &[usize]) -> Result<usize, MetricsError> {
    argmax(eccentricities)
        .map(|vertex| eccentricities[vertex])
        .ok_or(MetricsError::NoVertices)
}

/// Returns the vertices whose eccentricity is exactly `radius`, in
/// increasing order.
///
/// # Examples
///
/// ```
/// use radius_graph::algo::eccentricities::central_vertices;
///
/// assert_eq!(central_vertices(&[4, 3, 2, 3, 4], 2), vec![2]);
/// assert_eq!(central_vertices(&[1, 1], 1), vec![0, 1]);
/// ```
pub fn central_vertices(eccentricities: &[usize], radius: usize) -> Vec<usize> {
    eccentricities
        .iter()
        .enumerate()
        .filter_map(|(vertex, &e)| (e == radius).then_some(vertex))
        .collect()
}

impl Metrics {
    /// Computes all metrics with sequential visits.
    pub fn compute(
        graph: impl RandomAccessGraph,
        pl: &mut impl ProgressLog,
    ) -> Result<Self, MetricsError> {
        Self::from_eccentricities(eccentricities(graph, pl)?)
    }

    /// Computes all metrics with parallel visits.
    pub fn par_compute(
        graph: impl RandomAccessGraph + Sync,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> Result<Self, MetricsError> {
        Self::from_eccentricities(par_eccentricities(graph, thread_pool, pl)?)
    }

    /// Derives radius, diameter and center from the eccentricities.
    pub fn from_eccentricities(eccentricities: Box<[usize]>) -> Result<Self, MetricsError> {
        let radial_vertex = argmin(&eccentricities).ok_or(MetricsError::NoVertices)?;
        let diametral_vertex = argmax(&eccentricities).ok_or(MetricsError::NoVertices)?;
        let radius = eccentricities[radial_vertex];
        let diameter = eccentricities[diametral_vertex];
        let central_vertices = central_vertices(&eccentricities, radius);

        log::debug!(
            "radius {} (vertex {}), diameter {} (vertex {}), {} central vertices",
            radius,
            radial_vertex,
            diameter,
            diametral_vertex,
            central_vertices.len()
        );

        Ok(Self {
            eccentricities,
            radius,
            diameter,
            radial_vertex,
            diametral_vertex,
            central_vertices,
        })
    }
}
