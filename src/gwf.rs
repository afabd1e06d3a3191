/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph sources, and the GWF text format.
//!
//! A GWF file contains several numbered examples:
//!
//! ```text
//! # Example 1
//! vertices:
//! 0 1 2
//! edges:
//! 0 1
//! 1 2
//! end
//! ```
//!
//! A line containing `# Example N` starts example `N`; as with the
//! reference reader, only the leading digits after `# Example` count, so
//! `# Example 1: path graph` starts example 1. The optional `vertices:`
//! section lists vertex ids separated by whitespace or commas; the `edges:`
//! section contains one pair of vertex ids per line; `end` closes the
//! example. Blank lines and other lines starting with `#` are ignored, and
//! so is anything outside examples.
//!
//! A malformed line spoils only the example containing it: the error is
//! returned when that example is requested, and the other examples are
//! unaffected.

use crate::graphs::{GraphError, IncidenceStore};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The largest number of vertices accepted from a [`GraphSource`].
///
/// Graphs are analyzed through dense incidence matrices, so vertex ids read
/// from a source must be smaller than this bound.
pub const MAX_VERTICES: usize = 1 << 10;

/// Errors raised by a [`GraphSource`].
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("Could not read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Line {line}: {message}: {content:?}")]
    Malformed {
        line: usize,
        content: String,
        message: &'static str,
    },
    #[error("Example {example} not found")]
    MissingExample { example: usize },
    #[error("No edges found for example {example}")]
    EmptyGraph { example: usize },
}

/// An undirected graph as supplied by a [`GraphSource`], before any
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDescription {
    /// The number of the example.
    pub example: usize,
    /// The number of vertices declared by the source, if any.
    pub num_vertices: Option<usize>,
    /// The edges, in source order.
    pub edges: Vec<(usize, usize)>,
}

impl GraphDescription {
    /// Returns the smallest number of vertices containing all endpoints.
    ///
    /// Fails with [`GraphError::InvalidVertex`] if some endpoint is not
    /// smaller than [`MAX_VERTICES`].
    pub fn inferred_num_vertices(&self) -> Result<usize, GraphError> {
        let mut num_vertices = 0;
        for &(u, v) in &self.edges {
            let vertex = u.max(v);
            if vertex >= MAX_VERTICES {
                return Err(GraphError::InvalidVertex {
                    vertex,
                    num_vertices: MAX_VERTICES,
                });
            }
            num_vertices = num_vertices.max(vertex + 1);
        }
        Ok(num_vertices)
    }

    /// Builds an [`IncidenceStore`] with `num_vertices` vertices, checking
    /// that all endpoints are valid.
    pub fn to_incidence(&self, num_vertices: usize) -> Result<IncidenceStore, GraphError> {
        IncidenceStore::from_edges(num_vertices, self.edges.iter().copied())
    }
}

/// A supplier of numbered graphs.
///
/// Each call is independent: implementations must not keep scanning state
/// between calls, so examples can be requested in any order.
pub trait GraphSource {
    /// Returns the graph of the given example.
    ///
    /// Returns [`SourceError::EmptyGraph`] if the example has no edges.
    fn graph(&self, example: usize) -> Result<GraphDescription, SourceError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Vertices,
    Edges,
}

/// The first malformed line of an example.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MalformedLine {
    line: usize,
    content: String,
    message: &'static str,
}

impl From<&MalformedLine> for SourceError {
    fn from(malformed: &MalformedLine) -> Self {
        SourceError::Malformed {
            line: malformed.line,
            content: malformed.content.clone(),
            message: malformed.message,
        }
    }
}

/// An example being read.
struct Pending {
    description: GraphDescription,
    section: Section,
    max_vertex: Option<usize>,
    malformed: Option<MalformedLine>,
}

impl Pending {
    fn new(example: usize) -> Self {
        Self {
            description: GraphDescription {
                example,
                num_vertices: None,
                edges: Vec::new(),
            },
            section: Section::Header,
            max_vertex: None,
            malformed: None,
        }
    }

    fn parse_line(&mut self, line: usize, content: &str) -> Result<(), MalformedLine> {
        let trimmed = content.trim();
        let malformed = |message| MalformedLine {
            line,
            content: content.to_owned(),
            message,
        };
        let parse_vertex = |token: &str| -> Result<usize, MalformedLine> {
            match token.parse::<usize>() {
                Ok(vertex) if vertex < MAX_VERTICES => Ok(vertex),
                Ok(_) => Err(malformed("vertex id too large")),
                Err(_) => Err(malformed("invalid vertex id")),
            }
        };

        match self.section {
            Section::Header => {
                log::warn!("Line {}: ignoring {:?} outside any section", line, content)
            }
            Section::Vertices => {
                for token in trimmed
                    .split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|token| !token.is_empty())
                {
                    let vertex = parse_vertex(token)?;
                    self.max_vertex = Some(self.max_vertex.map_or(vertex, |m| m.max(vertex)));
                }
            }
            Section::Edges => {
                let mut tokens = trimmed.split_whitespace();
                let (Some(u), Some(v), None) = (tokens.next(), tokens.next(), tokens.next())
                else {
                    return Err(malformed("an edge must be a pair of vertex ids"));
                };
                let edge = (parse_vertex(u)?, parse_vertex(v)?);
                self.description.edges.push(edge);
            }
        }
        Ok(())
    }
}

/// A [`GraphSource`] reading the GWF text format.
///
/// The whole text is parsed once at construction.
#[derive(Debug, Clone, Default)]
pub struct GwfSource {
    examples: BTreeMap<usize, Result<GraphDescription, MalformedLine>>,
}

impl GwfSource {
    /// Reads and parses a GWF file.
    ///
    /// Only I/O errors are reported here; malformed examples are reported
    /// by [`graph`](GraphSource::graph).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_owned(),
            source,
        })?;
        text.parse()
    }

    /// Returns the example numbers, in increasing order, including those
    /// of malformed examples.
    pub fn examples(&self) -> impl Iterator<Item = usize> + '_ {
        self.examples.keys().copied()
    }

    fn finish(&mut self, pending: Pending) {
        let example = pending.description.example;
        if self.examples.contains_key(&example) {
            log::warn!("Example {} appears more than once: keeping the first", example);
            return;
        }
        let entry = match pending.malformed {
            Some(malformed) => Err(malformed),
            None => Ok(GraphDescription {
                num_vertices: pending.max_vertex.map(|v| v + 1),
                ..pending.description
            }),
        };
        self.examples.insert(example, entry);
    }
}

/// Returns `Some(Some(N))` if `line` contains `# Example` followed by the
/// number `N`, `Some(None)` if it contains `# Example` but no number, and
/// [`None`] otherwise.
///
/// Like `stoi`, only leading whitespace and the leading digits are
/// considered.
fn example_header(line: &str) -> Option<Option<usize>> {
    let position = line.find("# Example")?;
    let rest = line[position + "# Example".len()..].trim_start();
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    Some(digits.parse().ok())
}

impl FromStr for GwfSource {
    type Err = SourceError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut source = Self::default();
        let mut current: Option<Pending> = None;

        for (index, content) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = content.trim();

            match example_header(trimmed) {
                Some(Some(example)) => {
                    if let Some(pending) = current.take() {
                        log::warn!(
                            "Example {} is not closed by \"end\" before line {}",
                            pending.description.example,
                            line
                        );
                        source.finish(pending);
                    }
                    current = Some(Pending::new(example));
                    continue;
                }
                Some(None) => {
                    log::warn!(
                        "Line {}: ignoring example header without a number: {:?}",
                        line,
                        content
                    );
                    continue;
                }
                None => {}
            }

            let Some(pending) = current.as_mut() else {
                continue;
            };

            match trimmed {
                "" => {}
                "vertices:" => pending.section = Section::Vertices,
                "edges:" => pending.section = Section::Edges,
                "end" => {
                    if let Some(pending) = current.take() {
                        source.finish(pending);
                    }
                }
                _ if trimmed.starts_with('#') => {}
                // The rest of a malformed example is skipped.
                _ if pending.malformed.is_some() => {}
                _ => {
                    if let Err(malformed) = pending.parse_line(line, content) {
                        log::warn!(
                            "Example {}: line {}: {}: {:?}",
                            pending.description.example,
                            line,
                            malformed.message,
                            content
                        );
                        pending.malformed = Some(malformed);
                    }
                }
            }
        }

        if let Some(pending) = current.take() {
            log::warn!(
                "Example {} is not closed by \"end\" at end of input",
                pending.description.example
            );
            source.finish(pending);
        }

        Ok(source)
    }
}

impl GraphSource for GwfSource {
    fn graph(&self, example: usize) -> Result<GraphDescription, SourceError> {
        let description = self
            .examples
            .get(&example)
            .ok_or(SourceError::MissingExample { example })?
            .as_ref()
            .map_err(SourceError::from)?;
        if description.edges.is_empty() {
            return Err(SourceError::EmptyGraph { example });
        }
        Ok(description.clone())
    }
}
