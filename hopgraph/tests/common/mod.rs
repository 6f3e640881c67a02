/*
 * SPDX-FileCopyrightText: 2025 The hopgraph authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![allow(dead_code)]

use hopgraph::prelude::*;

/// The edges of the house graph: a square 0-1-3-2 with a roof 2-4-3.
pub const HOUSE_EDGES: [(u32, u32); 6] = [(0, 1), (0, 2), (1, 3), (2, 3), (2, 4), (3, 4)];

/// Returns the house graph, assembled directly from its CSR representation.
pub fn house_graph() -> CsrGraph {
    CsrGraph::try_from_parts(
        vec![0_usize, 2, 4, 7, 10, 12],
        vec![1_u32, 2, 0, 3, 0, 3, 4, 1, 2, 4, 2, 3],
    )
    .unwrap()
}

/// Returns the house graph as a 1-based edge list with comments.
pub fn house_edge_list() -> String {
    let mut text = String::from("# The house graph\n# 5 nodes, 6 edges\n");
    for (src, dst) in HOUSE_EDGES {
        text.push_str(&format!("{}\t{}\n", src + 1, dst + 1));
    }
    text
}
