/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Consumers of analysis results.

use crate::algo::eccentricities::Metrics;
use crate::graphs::IncidenceStore;
use std::io::Write;

/// Everything computed for one example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The number of the example.
    pub example: usize,
    /// The analyzed graph.
    pub graph: IncidenceStore,
    /// Its eccentricities, radius, diameter and center.
    pub metrics: Metrics,
    /// Its radius graph.
    pub radius_graph: IncidenceStore,
}

/// A consumer of [`Report`]s.
pub trait ResultSink {
    fn consume(&mut self, report: &Report) -> std::io::Result<()>;
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn consume(&mut self, report: &Report) -> std::io::Result<()> {
        (**self).consume(report)
    }
}

/// Collects reports in memory.
impl ResultSink for Vec<Report> {
    fn consume(&mut self, report: &Report) -> std::io::Result<()> {
        self.push(report.clone());
        Ok(())
    }
}

/// Writes reports as plain-text tables.
///
/// Each report prints the incidence matrix of the graph, the
/// eccentricities, the radius, the central vertices and the incidence
/// matrix of the radius graph, followed by a separator line.
pub struct TableSink<W: Write> {
    writer: W,
}

impl<W: Write> TableSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn write_list(writer: &mut impl Write, label: &str, values: &[usize]) -> std::io::Result<()> {
    write!(writer, "{}: ", label)?;
    for value in values {
        write!(writer, "{} ", value)?;
    }
    writeln!(writer)
}

impl<W: Write> ResultSink for TableSink<W> {
    fn consume(&mut self, report: &Report) -> std::io::Result<()> {
        let w = &mut self.writer;
        writeln!(w, "Example {}:", report.example)?;
        writeln!(w, "Original Incidence Matrix:")?;
        write!(w, "{}", report.graph.matrix())?;
        write_list(w, "Eccentricities", &report.metrics.eccentricities)?;
        writeln!(w, "Radius: {}", report.metrics.radius)?;
        write_list(w, "Central Vertices", &report.metrics.central_vertices)?;
        writeln!(w, "Radius Graph Incidence Matrix:")?;
        write!(w, "{}", report.radius_graph.matrix())?;
        writeln!(w, "--------------------------------")?;
        w.flush()
    }
}
