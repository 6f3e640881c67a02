/*
 * SPDX-FileCopyrightText: 2025 The hopgraph authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{EdgeListArgs, GlobalArgs};
use anyhow::Result;
use clap::Parser;
use hopgraph::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "info", about = "Prints statistics about the graph described by an edge list.", long_about = None)]
pub struct CliArgs {
    #[clap(flatten)]
    pub edges: EdgeListArgs,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let graph = args.edges.load_graph(&global_args)?;

    log::info!("Nodes: {}", graph.num_nodes());
    log::info!("Arcs: {}", graph.num_arcs());
    log::info!("Edges: {}", graph.num_edges());
    log::info!("Isolated nodes: {}", graph.num_isolated_nodes());
    log::info!("Maximum degree: {}", graph.max_outdegree());
    Ok(())
}
