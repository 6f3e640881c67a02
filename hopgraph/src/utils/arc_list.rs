/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Ingestion of undirected edge lists.
//!
//! An edge list is a text in which every line that is neither blank nor a
//! comment contains two whitespace-separated node identifiers. Identifiers
//! are shifted so that the first one becomes zero (by default, identifiers
//! start from one), and every edge is turned into a pair of symmetric arcs.
//!
//! ```
//! use dsi_progress_logger::no_logging;
//! use hopgraph::prelude::*;
//!
//! let text = "# a path\n1 2\n2 3\n";
//! let arcs = EdgeListReader::new().read(text.as_bytes(), no_logging![])?;
//! assert_eq!(arcs.num_nodes(), 3);
//! assert_eq!(arcs.arcs(), &[(0, 1), (1, 0), (1, 2), (2, 1)]);
//!
//! let graph = arcs.build_csr()?;
//! assert_eq!(graph.neighbors(1), &[0, 2]);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::graphs::csr_graph::{CsrGraph, InvalidGraphInput, MAX_NODES};
use anyhow::{Context, Result, bail};
use dsi_progress_logger::prelude::*;
use rayon::prelude::ParallelSliceMut;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A list of arcs containing both directions of every edge, sorted
/// lexicographically, together with the number of nodes.
///
/// Endpoints are stored as `u32`, as in the successors of a [`CsrGraph`],
/// so every arc takes eight bytes.
///
/// This is the input of [`CsrGraph::from_sorted_arcs`]; use
/// [`build_csr`](ArcList::build_csr) to compact it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcList {
    arcs: Vec<(u32, u32)>,
    num_nodes: usize,
}

impl ArcList {
    /// Creates a new arc list from a sequence of undirected edges between
    /// zero-based nodes.
    ///
    /// Both `(x, y)` and `(y, x)` are added for every edge `(x, y)`, even if
    /// the edge is a self-loop or the sequence already contains `(y, x)`.
    ///
    /// The number of nodes is one plus the largest endpoint, unless
    /// `num_nodes` is specified; a specified number of nodes smaller than the
    /// one found is kept, but [`build_csr`](ArcList::build_csr) will then
    /// fail.
    pub fn from_edges(
        edges: impl IntoIterator<Item = (u32, u32)>,
        num_nodes: Option<usize>,
    ) -> Self {
        let edges = edges.into_iter();
        let mut arcs = Vec::with_capacity(2 * edges.size_hint().0);
        let mut max_node = None;
        for (src, dst) in edges {
            max_node = max_node.max(Some(src.max(dst)));
            arcs.push((src, dst));
            arcs.push((dst, src));
        }
        Self::sorted(arcs, max_node, num_nodes)
    }

    fn sorted(
        mut arcs: Vec<(u32, u32)>,
        max_node: Option<u32>,
        num_nodes: Option<usize>,
    ) -> Self {
        let found = max_node.map_or(0, |max_node| (max_node as usize).saturating_add(1));
        let num_nodes = match num_nodes {
            Some(num_nodes) => {
                if num_nodes < found {
                    log::warn!(
                        "The specified number of nodes ({}) is smaller than the number of nodes found in the edges ({})",
                        num_nodes,
                        found
                    );
                }
                num_nodes
            }
            None => found,
        };

        arcs.par_sort_unstable();
        Self { arcs, num_nodes }
    }

    /// Returns the arcs, sorted lexicographically.
    pub fn arcs(&self) -> &[(u32, u32)] {
        &self.arcs
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Returns the number of arcs, which is twice the number of edges.
    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    /// Returns the number of edges from which the arcs were generated.
    pub fn num_edges(&self) -> usize {
        self.arcs.len() / 2
    }

    /// Returns the arcs and the number of nodes.
    pub fn into_inner(self) -> (Vec<(u32, u32)>, usize) {
        (self.arcs, self.num_nodes)
    }

    /// Compacts the arcs into a [`CsrGraph`].
    pub fn build_csr(&self) -> Result<CsrGraph, InvalidGraphInput> {
        CsrGraph::from_sorted_arcs(&self.arcs, self.num_nodes)
    }
}

/// A configurable reader of edge lists.
///
/// By default, lines starting with `#` are comments and node identifiers
/// start from one.
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    comment_symbol: char,
    first_node_id: usize,
    num_nodes: Option<usize>,
    max_edges: Option<usize>,
}

impl core::default::Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_symbol: '#',
            first_node_id: 1,
            num_nodes: None,
            max_edges: None,
        }
    }
}

impl EdgeListReader {
    /// Creates a reader with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the symbol starting comment lines.
    pub fn comment_symbol(mut self, comment_symbol: char) -> Self {
        self.comment_symbol = comment_symbol;
        self
    }

    /// Sets the identifier of the first node, which will become node zero.
    pub fn first_node_id(mut self, first_node_id: usize) -> Self {
        self.first_node_id = first_node_id;
        self
    }

    /// Sets the number of nodes, rather than inferring it from the edges.
    ///
    /// This is useful to add isolated nodes at the end of the graph.
    pub fn num_nodes(mut self, num_nodes: Option<usize>) -> Self {
        self.num_nodes = num_nodes;
        self
    }

    /// Sets the maximum number of edges to read.
    pub fn max_edges(mut self, max_edges: Option<usize>) -> Self {
        self.max_edges = max_edges;
        self
    }

    /// Reads an edge list and returns the corresponding sorted symmetric arcs.
    pub fn read(&self, reader: impl BufRead, pl: &mut impl ProgressLog) -> Result<ArcList> {
        pl.item_name("edge");
        pl.expected_updates(self.max_edges);
        pl.start("Reading edges...");

        let mut arcs = Vec::new();
        let mut max_node = None;
        let mut num_edges = 0;
        for (line_num, line) in reader.lines().enumerate() {
            if self.max_edges.is_some_and(|max_edges| num_edges >= max_edges) {
                break;
            }
            let line = line.with_context(|| format!("Could not read line {}", line_num + 1))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with(self.comment_symbol) {
                continue;
            }

            let (src, dst) = self
                .parse_edge(line)
                .with_context(|| format!("Error parsing line {}: {:?}", line_num + 1, line))?;
            max_node = max_node.max(Some(src.max(dst)));
            arcs.push((src, dst));
            arcs.push((dst, src));
            num_edges += 1;
            pl.light_update();
        }
        pl.done();

        let arc_list = ArcList::sorted(arcs, max_node, self.num_nodes);
        log::info!(
            "Read {} edges ({} arcs), # nodes = {}",
            arc_list.num_edges(),
            arc_list.num_arcs(),
            arc_list.num_nodes()
        );
        Ok(arc_list)
    }

    /// Reads an edge list from a file.
    pub fn load(&self, path: impl AsRef<Path>, pl: &mut impl ProgressLog) -> Result<ArcList> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("Could not open {}", path.display()))?;
        self.read(BufReader::new(file), pl)
            .with_context(|| format!("Could not read edges from {}", path.display()))
    }

    fn parse_edge(&self, line: &str) -> Result<(u32, u32)> {
        let mut tokens = line.split_whitespace();
        let (Some(src), Some(dst), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            bail!("Expected two whitespace-separated node identifiers");
        };
        Ok((self.parse_node(src)?, self.parse_node(dst)?))
    }

    fn parse_node(&self, token: &str) -> Result<u32> {
        let id = token
            .parse::<u64>()
            .with_context(|| format!("Could not parse {:?} as a node identifier", token))?;
        let node = id.checked_sub(self.first_node_id as u64).with_context(|| {
            format!(
                "Node identifier {} is smaller than the first node identifier {}",
                id, self.first_node_id
            )
        })?;
        if node >= MAX_NODES {
            bail!(
                "Node identifier {} maps to node {}, but nodes must be smaller than {}",
                id,
                node,
                MAX_NODES
            );
        }
        Ok(node as u32)
    }
}
