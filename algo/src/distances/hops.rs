/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Single-source hop distances.
//!
//! A [`Bfs`] engine owns the scratch state of a [breadth-first
//! visit](crate::visits::breadth_first::Seq) and can be run repeatedly from
//! different sources; every run returns freshly allocated [`HopDistances`].
//! For a one-shot computation, use [`bfs`].
//!
//! ```
//! use hopgraph::prelude::*;
//! use hopgraph_algo::distances::*;
//!
//! let graph = ArcList::from_edges([(0, 1), (1, 2)], None).build_csr()?;
//! let hops = bfs(&graph, 0)?;
//! assert_eq!(hops.distances(), &[0, 1, 2]);
//! assert_eq!(hops.frontier_sizes(), &[1, 1]);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::visits::{Sequential, breadth_first};
use dsi_progress_logger::prelude::*;
use hopgraph::traits::RandomAccessGraph;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// The distance of nodes that cannot be reached from the source.
///
/// Graphs have fewer than [`MAX_NODES`](hopgraph::graphs::csr_graph::MAX_NODES)
/// nodes, so every actual distance is smaller than this value.
pub const UNREACHED: u32 = u32::MAX;

/// Errors returned when a visit cannot start from a source.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BfsError {
    /// The source is not a node of the graph.
    #[error("Node {node} does not exist in a graph with {num_nodes} nodes")]
    InvalidVertex { node: usize, num_nodes: usize },
    /// The source has no neighbors, so its first frontier would be empty.
    #[error("Node {node} has no neighbors")]
    EmptyFrontierSource { node: usize },
}

/// The result of a breadth-first visit from a single source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopDistances {
    source: usize,
    distances: Box<[u32]>,
    frontier_sizes: Vec<usize>,
}

impl HopDistances {
    /// Returns the source of the visit.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the distance of every node from the source, with
    /// [`UNREACHED`] for nodes that cannot be reached.
    pub fn distances(&self) -> &[u32] {
        &self.distances
    }

    /// Returns the distance of a node from the source, or `None` if the node
    /// cannot be reached or does not exist.
    pub fn distance(&self, node: usize) -> Option<u32> {
        self.distances
            .get(node)
            .copied()
            .filter(|&distance| distance != UNREACHED)
    }

    /// Returns the number of nodes discovered at distance 1, 2, … from the
    /// source, stopping at the last nonempty level.
    pub fn frontier_sizes(&self) -> &[usize] {
        &self.frontier_sizes
    }

    /// Returns the number of nodes reachable from the source, including the
    /// source itself.
    pub fn num_reached(&self) -> usize {
        1 + self.frontier_sizes.iter().sum::<usize>()
    }

    /// Returns the largest distance from the source of a reachable node.
    pub fn eccentricity(&self) -> usize {
        self.frontier_sizes.len()
    }

    /// Returns the distances and the frontier sizes.
    pub fn into_parts(self) -> (Box<[u32]>, Vec<usize>) {
        (self.distances, self.frontier_sizes)
    }
}

/// A reusable engine computing hop distances.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use hopgraph::prelude::*;
/// use hopgraph_algo::distances::*;
///
/// let graph = ArcList::from_edges([(0, 1), (1, 2), (3, 4)], None).build_csr()?;
/// let mut engine = Bfs::new(&graph);
///
/// let hops = engine.run(1, no_logging![])?;
/// assert_eq!(hops.distances(), &[1, 0, 1, UNREACHED, UNREACHED]);
/// assert_eq!(hops.num_reached(), 3);
///
/// let hops = engine.run(4, no_logging![])?;
/// assert_eq!(hops.distance(3), Some(1));
/// assert_eq!(hops.distance(0), None);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct Bfs<G: RandomAccessGraph> {
    visit: breadth_first::Seq<G>,
}

impl<G: RandomAccessGraph> Bfs<G> {
    /// Creates a new engine for the given graph.
    pub fn new(graph: G) -> Self {
        Self {
            visit: breadth_first::Seq::new(graph),
        }
    }

    /// Sets whether frontiers are sorted before being scanned.
    ///
    /// Distances and frontier sizes do not depend on this setting.
    pub fn sorted_frontiers(self, sort_frontiers: bool) -> Self {
        Self {
            visit: self.visit.sorted_frontiers(sort_frontiers),
        }
    }

    /// Returns the graph.
    pub fn graph(&self) -> &G {
        self.visit.graph()
    }

    /// Computes the distances of all nodes from `source`.
    pub fn run(
        &mut self,
        source: usize,
        pl: &mut impl ProgressLog,
    ) -> Result<HopDistances, BfsError> {
        let num_nodes = self.graph().num_nodes();
        if source >= num_nodes {
            return Err(BfsError::InvalidVertex {
                node: source,
                num_nodes,
            });
        }
        if self.graph().outdegree(source) == 0 {
            return Err(BfsError::EmptyFrontierSource { node: source });
        }

        let mut distances = vec![UNREACHED; num_nodes].into_boxed_slice();
        let mut frontier_sizes = Vec::new();

        pl.item_name("node");
        pl.expected_updates(Some(num_nodes));
        pl.start(format!("Visiting from node {}...", source));

        self.visit.reset();
        self.visit
            .visit([source], |event| {
                match event {
                    breadth_first::EventNoPred::Visit { node, distance } => {
                        distances[node] = distance as u32;
                        pl.light_update();
                    }
                    breadth_first::EventNoPred::FrontierSize { distance, size } if distance > 0 => {
                        frontier_sizes.push(size);
                    }
                    _ => {}
                }
                Continue(())
            })
            .continue_value_no_break();

        pl.done();

        let hops = HopDistances {
            source,
            distances,
            frontier_sizes,
        };
        log::debug!(
            "Node {} reaches {} nodes, eccentricity {}",
            source,
            hops.num_reached(),
            hops.eccentricity()
        );
        Ok(hops)
    }
}

/// Computes the distances of all nodes of `graph` from `source`.
///
/// This is a shorthand for a single [run](Bfs::run) of a new [`Bfs`] engine
/// without logging.
pub fn bfs<G: RandomAccessGraph>(graph: G, source: usize) -> Result<HopDistances, BfsError> {
    Bfs::new(graph).run(source, dsi_progress_logger::no_logging![])
}
