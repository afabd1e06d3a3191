/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// The results of [`Metrics::compute`] and [`Metrics::par_compute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metrics {
    /// The eccentricities, indexed by vertex.
    pub eccentricities: Box<[usize]>,
    /// The radius.
    pub radius: usize,
    /// The diameter.
    pub diameter: usize,
    /// The smallest vertex whose eccentricity equals the radius.
    pub radial_vertex: usize,
    /// The smallest vertex whose eccentricity equals the diameter.
    pub diametral_vertex: usize,
    /// All vertices whose eccentricity equals the radius, in increasing
    /// order.
    pub central_vertices: Vec<usize>,
}
