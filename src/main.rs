/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{Context, Result};
use clap::Parser;
use dsi_progress_logger::prelude::*;
use radius_graph::prelude::*;
use std::path::PathBuf;

/// Prints eccentricities, radius, central vertices and radius graph of the
/// examples of a GWF file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// The GWF file containing the examples.
    #[arg(default_value = "graph.gwf")]
    path: PathBuf,

    /// The first example to analyze.
    #[arg(long, default_value_t = 1)]
    first: usize,

    /// The last example to analyze.
    #[arg(long, default_value_t = 5)]
    last: usize,

    /// The number of vertices of every graph (by default, the one declared
    /// by the example, or the smallest containing all edges).
    #[arg(short, long)]
    num_vertices: Option<usize>,

    /// The number of threads used for the visits (0 for the default).
    #[arg(short = 'j', long, default_value_t = 0)]
    threads: usize,

    /// Emit a single radius-graph row per pair of vertices.
    #[arg(long)]
    dedup: bool,

    /// Increase logging verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all logging.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    stderrlog::new()
        .verbosity(2 + cli.verbose as usize)
        .quiet(cli.quiet)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let source = GwfSource::from_path(&cli.path)
        .with_context(|| format!("Cannot load examples from {}", cli.path.display()))?;
    let thread_pool = Threads::from(cli.threads)
        .build()
        .context("Cannot build thread pool")?;
    let options = Options {
        num_vertices: cli.num_vertices,
        dedup: cli.dedup,
    };

    let mut main_pl = progress_logger![display_memory = true];
    main_pl.info(format_args!(
        "Analyzing examples {} to {} of {}",
        cli.first,
        cli.last,
        cli.path.display()
    ));

    let summary = run(
        &source,
        TableSink::new(std::io::stdout().lock()),
        cli.first..=cli.last,
        &options,
        &thread_pool,
        &mut main_pl,
    )?;

    log::info!(
        "{} examples analyzed, {} skipped",
        summary.analyzed,
        summary.skipped
    );

    Ok(())
}
