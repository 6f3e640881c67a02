/*
 * SPDX-FileCopyrightText: 2025 The hopgraph authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use clap::Parser;
use hopgraph::prelude::*;
use hopgraph_cli::bench::bfs;
use hopgraph_cli::{Cli, GlobalArgs, SubCommands, bench, cli_main};
use std::io::Write;
use std::path::{Path, PathBuf};

const HOUSE: &str = "# The house graph\n1 2\n1 3\n2 4\n3 4\n3 5\n4 5\n";

fn write_edges(dir: &Path, name: &str, text: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::File::create(&path)?.write_all(text.as_bytes())?;
    Ok(path)
}

fn bfs_args(args: &[&str]) -> (GlobalArgs, bfs::CliArgs) {
    let cli = Cli::parse_from(["hopgraph", "bench", "bfs"].iter().chain(args));
    match cli.command {
        SubCommands::Bench(bench::SubCommands::Bfs(bfs_args)) => (cli.args, bfs_args),
        _ => panic!("Expected the bench bfs subcommand"),
    }
}

#[test]
fn test_info() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_edges(dir.path(), "house.txt", HOUSE)?;
    cli_main(["hopgraph", "info", path.to_str().unwrap()])?;
    Ok(())
}

#[test]
fn test_bench_bfs() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_edges(dir.path(), "house.txt", HOUSE)?;
    cli_main([
        "hopgraph",
        "bench",
        "bfs",
        "--trials",
        "3",
        "--seed",
        "0",
        "--sorted-frontiers",
        path.to_str().unwrap(),
    ])?;
    Ok(())
}

#[test]
fn test_trials() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_edges(dir.path(), "house.txt", HOUSE)?;
    let (global_args, args) = bfs_args(&["--seed", "1", path.to_str().unwrap()]);
    assert_eq!(args.trials, 10);

    let graph = args.edges.load_graph(&global_args)?;
    let trials = bfs::run_trials(&graph, &args, &global_args)?;
    assert_eq!(trials.len(), 10);
    for trial in &trials {
        assert_eq!(trial.hops.num_reached(), 5);
        assert_eq!(trial.hops.frontier_sizes().iter().sum::<usize>(), 4);
    }

    // The same seed draws the same sources
    let again = bfs::run_trials(&graph, &args, &global_args)?;
    let sources = |trials: &[bfs::Trial]| {
        trials
            .iter()
            .map(|trial| trial.hops.source())
            .collect::<Vec<_>>()
    };
    assert_eq!(sources(&trials), sources(&again));
    Ok(())
}

#[test]
fn test_fixed_source() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_edges(dir.path(), "path.txt", "1 2\n2 3\n")?;
    let (global_args, args) = bfs_args(&["-T", "2", "--source", "0", path.to_str().unwrap()]);

    let graph = args.edges.load_graph(&global_args)?;
    let trials = bfs::run_trials(&graph, &args, &global_args)?;
    assert_eq!(trials.len(), 2);
    for trial in trials {
        assert_eq!(trial.hops.source(), 0);
        assert_eq!(trial.hops.distances(), &[0, 1, 2]);
        assert_eq!(trial.hops.frontier_sizes(), &[1, 1]);
    }
    Ok(())
}

#[test]
fn test_bad_source() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_edges(dir.path(), "path.txt", "1 2\n2 3\n")?;

    // Out of range
    let (global_args, args) = bfs_args(&["--source", "3", path.to_str().unwrap()]);
    let graph = args.edges.load_graph(&global_args)?;
    assert!(bfs::run_trials(&graph, &args, &global_args).is_err());

    // Isolated
    let (global_args, args) = bfs_args(&[
        "--source",
        "3",
        "--num-nodes",
        "4",
        path.to_str().unwrap(),
    ]);
    let graph = args.edges.load_graph(&global_args)?;
    assert_eq!(graph.num_isolated_nodes(), 1);
    let err = bfs::run_trials(&graph, &args, &global_args).unwrap_err();
    assert!(format!("{:#}", err).contains("no neighbors"));
    Ok(())
}

#[test]
fn test_no_arcs() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_edges(dir.path(), "empty.txt", "# nothing\n")?;
    let (global_args, args) = bfs_args(&["--seed", "0", path.to_str().unwrap()]);
    let graph = args.edges.load_graph(&global_args)?;
    assert!(bfs::run_trials(&graph, &args, &global_args).is_err());
    Ok(())
}

#[test]
fn test_ingestion_options() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_edges(dir.path(), "zero.txt", "% zero-based\n0 1\n1 2\n2 3\n")?;
    let (global_args, args) = bfs_args(&[
        "--comment-symbol",
        "%",
        "--first-node-id",
        "0",
        "--max-edges",
        "2",
        "--source",
        "0",
        path.to_str().unwrap(),
    ]);
    let graph = args.edges.load_graph(&global_args)?;
    assert_eq!(graph.num_nodes(), 3);
    assert_eq!(graph.num_edges(), 2);
    Ok(())
}

#[test]
fn test_missing_file() {
    assert!(cli_main(["hopgraph", "info", "/nonexistent/edges.txt"]).is_err());
}
