/*
 * SPDX-FileCopyrightText: 2025 The hopgraph authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use hopgraph::traits::RandomAccessGraph;
use rand::Rng;

/// Draws a node with at least one successor uniformly at random.
///
/// Nodes are drawn uniformly until one with nonzero outdegree comes up.
/// Returns `None` if the graph has no arcs.
///
/// ```
/// use hopgraph::prelude::*;
/// use hopgraph_algo::distances::sample_source;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let graph = ArcList::from_edges([(1, 2)], Some(4)).build_csr()?;
/// let mut rng = SmallRng::seed_from_u64(0);
/// let source = sample_source(&graph, &mut rng);
/// assert!(matches!(source, Some(1) | Some(2)));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn sample_source(graph: impl RandomAccessGraph, rng: &mut impl Rng) -> Option<usize> {
    if graph.num_arcs() == 0 {
        return None;
    }
    let num_nodes = graph.num_nodes();
    loop {
        let node = rng.random_range(0..num_nodes);
        if graph.outdegree(node) > 0 {
            return Some(node);
        }
    }
}
