/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::fmt;

/// Errors raised while building an [`IncidenceStore`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {vertex} does not exist (the graph has {num_vertices} vertices)")]
    InvalidVertex { vertex: usize, num_vertices: usize },
    #[error("Edge {edge} is a self-loop on vertex {vertex}")]
    SelfLoop { edge: usize, vertex: usize },
    #[error("Edge index {index} cannot be written: the next free row is {expected}")]
    EdgeIndex { index: usize, expected: usize },
    #[error("Graphs cannot have {num_vertices} vertices (at most {max})")]
    TooManyVertices { num_vertices: usize, max: usize },
}

/// An undirected edge between two distinct vertices.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
}

impl Edge {
    pub fn new(u: usize, v: usize) -> Self {
        Self { u, v }
    }

    /// Returns the endpoint opposite to `vertex`, or [`None`] if the edge is
    /// not incident to `vertex`.
    #[inline(always)]
    pub fn other(&self, vertex: usize) -> Option<usize> {
        if self.u == vertex {
            Some(self.v)
        } else if self.v == vertex {
            Some(self.u)
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((u, v): (usize, usize)) -> Self {
        Self { u, v }
    }
}

/// An undirected graph stored as a vertex count and an ordered list of edges.
///
/// The store is the sparse form of an incidence matrix: row `i` of the
/// matrix has its two set entries at columns `edges[i].u` and `edges[i].v`.
/// Rows are written once, in order, and every row is checked at insertion
/// time, so the dense view returned by [`matrix`](Self::matrix) always has
/// exactly two set bits per row.
///
/// Multiple edges between the same pair of vertices are allowed and occupy
/// distinct rows.
///
/// # Examples
///
/// ```
/// use radius_graph::graphs::IncidenceStore;
///
/// let graph = IncidenceStore::from_edges(3, [(0, 1), (1, 2)])?;
/// assert_eq!(graph.num_edges(), 2);
/// assert_eq!(graph.matrix().row(1), &[0, 1, 1]);
/// # Ok::<(), radius_graph::graphs::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidenceStore {
    num_vertices: usize,
    edges: Vec<Edge>,
}

impl IncidenceStore {
    /// Creates a graph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            edges: Vec::new(),
        }
    }

    /// Creates a graph with `num_vertices` vertices and room for
    /// `num_edges` rows.
    pub fn with_capacity(num_vertices: usize, num_edges: usize) -> Self {
        Self {
            num_vertices,
            edges: Vec::with_capacity(num_edges),
        }
    }

    /// Creates a graph from a list of vertex pairs, checking every pair.
    pub fn from_edges<E: Into<Edge>>(
        num_vertices: usize,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<Self, GraphError> {
        let edges = edges.into_iter();
        let mut graph = Self::with_capacity(num_vertices, edges.size_hint().0);
        for edge in edges {
            graph.push_edge(edge)?;
        }
        Ok(graph)
    }

    /// Sets the incidence entries of row `edge_index` for the edge `{u, v}`.
    ///
    /// Rows are write-once and must be filled in order, so `edge_index` must
    /// be equal to the current number of edges.
    pub fn add_edge(&mut self, edge_index: usize, u: usize, v: usize) -> Result<(), GraphError> {
        if edge_index != self.edges.len() {
            return Err(GraphError::EdgeIndex {
                index: edge_index,
                expected: self.edges.len(),
            });
        }
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::SelfLoop {
                edge: edge_index,
                vertex: u,
            });
        }
        self.edges.push(Edge { u, v });
        Ok(())
    }

    /// Appends an edge, returning its row index.
    pub fn push_edge(&mut self, edge: impl Into<Edge>) -> Result<usize, GraphError> {
        let edge = edge.into();
        let index = self.edges.len();
        self.add_edge(index, edge.u, edge.v)?;
        Ok(index)
    }

    /// Returns an error if `vertex` is not in `[0, num_vertices)`.
    #[inline(always)]
    pub fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex >= self.num_vertices {
            Err(GraphError::InvalidVertex {
                vertex,
                num_vertices: self.num_vertices,
            })
        } else {
            Ok(())
        }
    }

    #[inline(always)]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    #[inline(always)]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline(always)]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Materializes the dense incidence matrix (rows are edges, columns are
    /// vertices).
    pub fn matrix(&self) -> IncidenceMatrix {
        let num_cols = self.num_vertices;
        let mut data = vec![0_u8; self.edges.len() * num_cols].into_boxed_slice();
        for (i, edge) in self.edges.iter().enumerate() {
            data[i * num_cols + edge.u] = 1;
            data[i * num_cols + edge.v] = 1;
        }
        IncidenceMatrix {
            num_rows: self.edges.len(),
            num_cols,
            data,
        }
    }
}

/// A dense E×V binary matrix in row-major order.
///
/// The [`Display`](fmt::Display) implementation prints one row per line,
/// every entry followed by a space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidenceMatrix {
    num_rows: usize,
    num_cols: usize,
    data: Box<[u8]>,
}

impl IncidenceMatrix {
    #[inline(always)]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline(always)]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns row `index`.
    ///
    /// # Panics
    ///
    /// If `index` is not smaller than the number of rows.
    pub fn row(&self, index: usize) -> &[u8] {
        assert!(
            index < self.num_rows,
            "Row {} does not exist (the matrix has {} rows)",
            index,
            self.num_rows
        );
        &self.data[index * self.num_cols..(index + 1) * self.num_cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.num_rows).map(move |i| self.row(i))
    }
}

impl fmt::Display for IncidenceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for value in row {
                write!(f, "{} ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
