/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use radius_graph::prelude::*;

#[test]
fn test_matrix_rows_have_two_bits() -> Result<()> {
    let graph = IncidenceStore::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)])?;
    let matrix = graph.matrix();

    assert_eq!(matrix.num_rows(), 5);
    assert_eq!(matrix.num_cols(), 5);
    for (row, edge) in matrix.rows().zip(graph.edges()) {
        assert_eq!(row.iter().filter(|&&bit| bit == 1).count(), 2);
        assert_eq!(row[edge.u], 1);
        assert_eq!(row[edge.v], 1);
    }

    Ok(())
}

#[test]
fn test_matrix_display() -> Result<()> {
    let graph = IncidenceStore::from_edges(3, [(0, 1), (2, 1)])?;
    assert_eq!(graph.matrix().to_string(), "1 1 0 \n0 1 1 \n");
    Ok(())
}

#[test]
fn test_multi_edges_keep_distinct_rows() -> Result<()> {
    let graph = IncidenceStore::from_edges(2, [(0, 1), (1, 0), (0, 1)])?;
    assert_eq!(graph.num_edges(), 3);
    for row in graph.matrix().rows() {
        assert_eq!(row, &[1, 1]);
    }
    Ok(())
}

#[test]
fn test_invalid_vertex() {
    assert_eq!(
        IncidenceStore::from_edges(5, [(0, 1), (3, 5)]),
        Err(GraphError::InvalidVertex {
            vertex: 5,
            num_vertices: 5
        })
    );

    let mut graph = IncidenceStore::new(2);
    assert_eq!(
        graph.add_edge(0, 7, 0),
        Err(GraphError::InvalidVertex {
            vertex: 7,
            num_vertices: 2
        })
    );
    assert_eq!(graph.num_edges(), 0);
}

#[test]
fn test_self_loop() {
    assert_eq!(
        IncidenceStore::from_edges(3, [(0, 1), (2, 2)]),
        Err(GraphError::SelfLoop { edge: 1, vertex: 2 })
    );
}

#[test]
fn test_add_edge_by_index() -> Result<()> {
    let mut graph = IncidenceStore::with_capacity(4, 3);
    graph.add_edge(0, 0, 1)?;
    graph.add_edge(1, 1, 2)?;
    assert_eq!(graph.push_edge((2, 3))?, 2);
    assert_eq!(
        graph.add_edge(1, 0, 3),
        Err(GraphError::EdgeIndex {
            index: 1,
            expected: 3
        })
    );
    assert_eq!(graph.edges()[2], Edge::new(2, 3));
    Ok(())
}

#[test]
fn test_no_edges() {
    let graph = IncidenceStore::new(3);
    let matrix = graph.matrix();
    assert_eq!(matrix.num_rows(), 0);
    assert_eq!(matrix.to_string(), "");
}
