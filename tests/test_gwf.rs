/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::no_logging;
use radius_graph::prelude::*;
use radius_graph::gwf::MAX_VERTICES;
use radius_graph::threads;
use std::io::Write;

const EXAMPLES: &str = "\
Graphs for the radius exercise

# Example 1
vertices:
0 1 2 3 4
edges:
0 1
1 2
2 3
3 4
end

# Example 2
vertices:
0, 1, 2, 3, 4
edges:
0 1
0 2
0 3
0 4
end

# Example 3
vertices:
0 1
edges:
end

# Example 4
edges:
0 1
2 3
end

# Example 5
vertices:
0 1 2 3 4
edges:
0 1
1 7
end
";

#[test]
fn test_parse() -> Result<()> {
    let source: GwfSource = EXAMPLES.parse()?;
    assert_eq!(source.examples().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

    let path = source.graph(1)?;
    assert_eq!(path.example, 1);
    assert_eq!(path.num_vertices, Some(5));
    assert_eq!(path.edges, vec![(0, 1), (1, 2), (2, 3), (3, 4)]);

    let star = source.graph(2)?;
    assert_eq!(star.num_vertices, Some(5));
    assert_eq!(star.edges.len(), 4);

    let disconnected = source.graph(4)?;
    assert_eq!(disconnected.num_vertices, None);
    assert_eq!(disconnected.inferred_num_vertices()?, 4);

    assert!(matches!(
        source.graph(3),
        Err(SourceError::EmptyGraph { example: 3 })
    ));
    assert!(matches!(
        source.graph(9),
        Err(SourceError::MissingExample { example: 9 })
    ));
    Ok(())
}

#[test]
fn test_requests_are_independent() -> Result<()> {
    let source: GwfSource = EXAMPLES.parse()?;
    let late = source.graph(5)?;
    let early = source.graph(1)?;
    assert_eq!(source.graph(5)?, late);
    assert_eq!(source.graph(1)?, early);
    Ok(())
}

#[test]
fn test_malformed_edge() -> Result<()> {
    let source: GwfSource = "# Example 1\nedges:\n0 1\n1 x\nend\n".parse()?;
    assert_eq!(source.examples().collect::<Vec<_>>(), vec![1]);
    match source.graph(1) {
        Err(SourceError::Malformed { line, content, .. }) => {
            assert_eq!(line, 4);
            assert_eq!(content, "1 x");
        }
        other => panic!("Unexpected result {:?}", other),
    }

    let source: GwfSource = "# Example 1\nedges:\n0 1 2\nend\n".parse()?;
    assert!(matches!(
        source.graph(1),
        Err(SourceError::Malformed { line: 3, .. })
    ));
    let source: GwfSource = "# Example 1\nvertices:\n0 -1\nend\n".parse()?;
    assert!(matches!(
        source.graph(1),
        Err(SourceError::Malformed { line: 3, .. })
    ));
    Ok(())
}

#[test]
fn test_malformed_example_spares_the_others() -> Result<()> {
    let source: GwfSource = "\
# Example 1
edges:
0 1
end
# Example 2
edges:
0 1
1 x
2 3
end
# Example 3
edges:
0 1
1 2
end
"
    .parse()?;
    assert_eq!(source.examples().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(source.graph(3)?.edges, vec![(0, 1), (1, 2)]);

    let mut reports = Vec::new();
    let summary = run(
        &source,
        &mut reports,
        1..=3,
        &Options::default(),
        &threads![1],
        no_logging![],
    )?;
    assert_eq!(
        summary,
        RunSummary {
            analyzed: 2,
            skipped: 1
        }
    );
    assert_eq!(
        reports.iter().map(|report| report.example).collect::<Vec<_>>(),
        vec![1, 3]
    );
    Ok(())
}

#[test]
fn test_example_headers() -> Result<()> {
    let source: GwfSource = "\
# Example 1: path
edges:
0 1
1 2
end
# Example
edges:
5 6
end
# Example 2 (a single edge)
edges:
0 1
end
"
    .parse()?;
    assert_eq!(source.examples().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(source.graph(1)?.edges, vec![(0, 1), (1, 2)]);
    assert_eq!(source.graph(2)?.edges, vec![(0, 1)]);
    Ok(())
}

#[test]
fn test_huge_vertex_ids() -> Result<()> {
    let source: GwfSource = "\
# Example 1
edges:
0 18446744073709551615
end
# Example 3
edges:
0 100000000000
end
# Example 2
edges:
0 1
1 2
end
"
    .parse()?;
    assert!(matches!(
        source.graph(1),
        Err(SourceError::Malformed { line: 3, .. })
    ));
    assert!(matches!(
        source.graph(3),
        Err(SourceError::Malformed { line: 7, .. })
    ));

    let mut reports = Vec::new();
    let summary = run(
        &source,
        &mut reports,
        1..=3,
        &Options::default(),
        &threads![1],
        no_logging![],
    )?;
    assert_eq!(
        summary,
        RunSummary {
            analyzed: 1,
            skipped: 2
        }
    );
    assert_eq!(reports[0].example, 2);
    assert_eq!(reports[0].metrics.central_vertices, vec![1]);
    Ok(())
}

#[test]
fn test_vertex_count_cap() -> Result<()> {
    let description = GraphDescription {
        example: 1,
        num_vertices: None,
        edges: vec![(0, usize::MAX)],
    };
    assert!(matches!(
        description.inferred_num_vertices(),
        Err(GraphError::InvalidVertex { vertex: usize::MAX, .. })
    ));

    let source: GwfSource = "# Example 1\nedges:\n0 1\nend\n".parse()?;
    let mut reports = Vec::new();
    let options = Options {
        num_vertices: Some(MAX_VERTICES + 1),
        dedup: false,
    };
    let summary = run(&source, &mut reports, [1], &options, &threads![1], no_logging![])?;
    assert_eq!(summary.skipped, 1);
    assert!(reports.is_empty());

    let options = Options {
        num_vertices: Some(usize::MAX),
        dedup: false,
    };
    let result = run(&source, Vec::<Report>::new(), [1], &options, &threads![1], no_logging![]);
    assert_eq!(result?.skipped, 1);
    Ok(())
}

#[test]
fn test_from_path() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(EXAMPLES.as_bytes())?;
    file.flush()?;

    let source = GwfSource::from_path(file.path())?;
    assert_eq!(source.graph(2)?.edges, vec![(0, 1), (0, 2), (0, 3), (0, 4)]);

    let dir = tempfile::tempdir()?;
    assert!(matches!(
        GwfSource::from_path(dir.path().join("missing.gwf")),
        Err(SourceError::Io { .. })
    ));
    Ok(())
}

#[test]
fn test_run_skips_bad_examples() -> Result<()> {
    let source: GwfSource = EXAMPLES.parse()?;
    let mut reports = Vec::new();

    let summary = run(
        &source,
        &mut reports,
        1..=6,
        &Options::default(),
        &threads![2],
        no_logging![],
    )?;

    assert_eq!(
        summary,
        RunSummary {
            analyzed: 2,
            skipped: 4
        }
    );
    assert_eq!(reports[0].example, 1);
    assert_eq!(&*reports[0].metrics.eccentricities, &[4, 3, 2, 3, 4]);
    assert_eq!(reports[0].metrics.central_vertices, vec![2]);
    assert_eq!(reports[0].radius_graph.num_edges(), 14);
    assert_eq!(reports[1].example, 2);
    assert_eq!(reports[1].metrics.radius, 1);
    assert_eq!(reports[1].metrics.central_vertices, vec![0]);
    // Radius 1 on a star: the radius graph is the star itself, twice
    assert_eq!(reports[1].radius_graph.num_edges(), 8);
    Ok(())
}

#[test]
fn test_num_vertices_override() -> Result<()> {
    let source: GwfSource = "# Example 1\nedges:\n0 1\nend\n".parse()?;
    let mut reports = Vec::new();

    let options = Options {
        num_vertices: Some(3),
        dedup: false,
    };
    let summary = run(&source, &mut reports, [1], &options, &threads![1], no_logging![])?;
    assert_eq!(summary.skipped, 1);
    assert!(reports.is_empty());
    Ok(())
}

#[test]
fn test_table_output() -> Result<()> {
    let source: GwfSource = "# Example 1\nedges:\n0 1\nend\n".parse()?;
    let mut sink = TableSink::new(Vec::new());

    run(
        &source,
        &mut sink,
        [1],
        &Options::default(),
        &threads![1],
        no_logging![],
    )?;

    assert_eq!(
        String::from_utf8(sink.into_inner())?,
        "Example 1:\n\
         Original Incidence Matrix:\n\
         1 1 \n\
         Eccentricities: 1 1 \n\
         Radius: 1\n\
         Central Vertices: 0 1 \n\
         Radius Graph Incidence Matrix:\n\
         1 1 \n\
         1 1 \n\
         --------------------------------\n"
    );
    Ok(())
}

#[test]
fn test_table_output_dedup() -> Result<()> {
    let source: GwfSource = "# Example 7\nedges:\n0 1\n1 2\nend\n".parse()?;
    let mut sink = TableSink::new(Vec::new());
    let options = Options {
        num_vertices: None,
        dedup: true,
    };

    run(&source, &mut sink, [7], &options, &threads![1], no_logging![])?;

    let output = String::from_utf8(sink.into_inner())?;
    assert!(output.starts_with("Example 7:\nOriginal Incidence Matrix:\n1 1 0 \n0 1 1 \n"));
    assert!(output.contains("Eccentricities: 2 1 2 \nRadius: 1\nCentral Vertices: 1 \n"));
    assert!(output.ends_with(
        "Radius Graph Incidence Matrix:\n1 1 0 \n0 1 1 \n--------------------------------\n"
    ));
    Ok(())
}

struct FailingSink;

impl ResultSink for FailingSink {
    fn consume(&mut self, _report: &Report) -> std::io::Result<()> {
        Err(std::io::Error::other("broken pipe"))
    }
}

#[test]
fn test_sink_errors_stop_the_run() -> Result<()> {
    let source: GwfSource = EXAMPLES.parse()?;
    let result = run(
        &source,
        FailingSink,
        1..=5,
        &Options::default(),
        &threads![1],
        no_logging![],
    );
    match result {
        Err(err @ AnalysisError::Sink(_)) => assert!(!err.is_recoverable()),
        other => panic!("Unexpected result {:?}", other.map(|_| ())),
    }
    Ok(())
}

#[test]
fn test_analyze() -> Result<()> {
    let graph = IncidenceStore::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)])?;
    let report = analyze(3, graph.clone(), &Options::default(), &threads![1], no_logging![])?;

    assert_eq!(report.example, 3);
    assert_eq!(report.graph, graph);
    assert_eq!(report.metrics.radius, 2);
    assert_eq!(report.metrics.central_vertices, vec![0, 1, 2, 3]);
    // Every pair is within distance 2
    assert_eq!(report.radius_graph.num_edges(), 12);
    Ok(())
}
