/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{EdgeListArgs, GlobalArgs, pretty_print_elapsed};
use anyhow::{Context, Result, ensure};
use clap::Parser;
use dsi_progress_logger::prelude::*;
use hopgraph::prelude::*;
use hopgraph_algo::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "bfs", about = "Benchmarks breadth-first visits from random sources of an edge list.", long_about = None)]
pub struct CliArgs {
    #[clap(flatten)]
    pub edges: EdgeListArgs,

    /// The number of visits.
    #[arg(short = 'T', long, default_value_t = 10)]
    pub trials: usize,

    /// The seed of the pseudorandom generator drawing sources; if not
    /// specified, the generator is seeded from the operating system.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start every visit from this node rather than from random nodes.
    #[arg(short = 's', long, conflicts_with = "seed")]
    pub source: Option<usize>,

    /// Sort frontiers before scanning them.
    #[arg(long)]
    pub sorted_frontiers: bool,
}

/// The outcome of a timed visit.
#[derive(Debug, Clone)]
pub struct Trial {
    pub hops: HopDistances,
    pub elapsed: Duration,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let graph = args.edges.load_graph(&global_args)?;
    let trials = run_trials(&graph, &args, &global_args)?;

    let total: Duration = trials.iter().map(|trial| trial.elapsed).sum();
    let average = total.as_secs_f64() / trials.len() as f64;
    log::info!(
        "Average visit time over {} trials: {}",
        trials.len(),
        pretty_print_elapsed(average)
    );
    Ok(())
}

/// Runs the timed visits requested by `args` on `graph`, logging the
/// outcome of each one.
pub fn run_trials(
    graph: &CsrGraph,
    args: &CliArgs,
    global_args: &GlobalArgs,
) -> Result<Vec<Trial>> {
    ensure!(args.trials > 0, "The number of trials must be positive");

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut pl = ProgressLogger::default();
    pl.display_memory(true).local_speed(true);
    if let Some(duration) = global_args.log_interval {
        pl.log_interval(duration);
    }

    let mut engine = Bfs::new(graph).sorted_frontiers(args.sorted_frontiers);
    let mut trials = Vec::with_capacity(args.trials);

    for trial in 0..args.trials {
        let source = match args.source {
            Some(source) => source,
            None => sample_source(graph, &mut rng)
                .context("Cannot choose a source in a graph without arcs")?,
        };

        let start = Instant::now();
        let hops = engine
            .run(source, &mut pl)
            .with_context(|| format!("Cannot visit from node {}", source))?;
        let elapsed = start.elapsed();

        log::info!("Trial {}: source {}", trial, source);
        for (level, size) in hops.frontier_sizes().iter().enumerate() {
            log::info!("Frontier at distance {}: {} nodes", level + 1, size);
        }
        log::info!(
            "Trial {}: reached {} nodes in {}",
            trial,
            hops.num_reached(),
            pretty_print_elapsed(elapsed.as_secs_f64())
        );

        trials.push(Trial { hops, elapsed });
    }

    Ok(trials)
}
