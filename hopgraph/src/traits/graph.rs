/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Basic traits to access graphs in random-access fashion.

A [random-access graph](RandomAccessGraph) exposes its number of nodes and
arcs and, for each node, its outdegree and an iterator on its successors.
Visits and distance computations in `hopgraph-algo` are written against this
trait, so they work both on owned graphs and on references to graphs.

The function [`eq`] can be used to check whether two graphs are equal, and
[`is_symmetric`] whether a graph represents an undirected graph.

*/

use thiserror::Error;

/// A graph providing random access to successor lists.
///
/// Nodes are identified by the integers in `[0..num_nodes())`; a graph
/// is directed, and undirected graphs are represented by symmetric graphs,
/// in which every arc `(x, y)` is matched by an arc `(y, x)`.
pub trait RandomAccessGraph {
    /// The type of the iterator over the successors of a node.
    type Successors<'a>: IntoIterator<Item = usize>
    where
        Self: 'a;

    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs in the graph.
    fn num_arcs(&self) -> u64;

    /// Returns the successors of a node.
    fn successors(&self, node_id: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of a node.
    fn outdegree(&self, node_id: usize) -> usize;

    /// Returns whether there is an arc from `src` to `dst`.
    ///
    /// The default implementation scans the successors of `src`.
    fn has_arc(&self, src: usize, dst: usize) -> bool {
        self.successors(src).into_iter().any(|succ| succ == dst)
    }
}

impl<G: RandomAccessGraph + ?Sized> RandomAccessGraph for &G {
    type Successors<'a>
        = G::Successors<'a>
    where
        Self: 'a;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        (**self).num_arcs()
    }

    #[inline(always)]
    fn successors(&self, node_id: usize) -> Self::Successors<'_> {
        (**self).successors(node_id)
    }

    #[inline(always)]
    fn outdegree(&self, node_id: usize) -> usize {
        (**self).outdegree(node_id)
    }

    #[inline(always)]
    fn has_arc(&self, src: usize, dst: usize) -> bool {
        (**self).has_arc(src, dst)
    }
}

/// Error types that can occur during graph equality checking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EqError {
    /// The graphs have different numbers of nodes.
    #[error("Different number of nodes: {first} != {second}")]
    NumNodes { first: usize, second: usize },

    /// The graphs have different numbers of arcs.
    #[error("Different number of arcs: {first} != {second}")]
    NumArcs { first: u64, second: u64 },

    /// The graphs have different outdegrees for a specific node.
    #[error("Different outdegree for node {node}: {first} != {second}")]
    Outdegree {
        node: usize,
        first: usize,
        second: usize,
    },

    /// The graphs have different successors for a specific node.
    #[error("Different successors for node {node}: at index {index} {first} != {second}")]
    Successors {
        node: usize,
        index: usize,
        first: usize,
        second: usize,
    },
}

/// Checks whether two graphs have the same successor lists, in the same
/// order, returning the first difference found.
pub fn eq<G0: RandomAccessGraph, G1: RandomAccessGraph>(g0: &G0, g1: &G1) -> Result<(), EqError> {
    if g0.num_nodes() != g1.num_nodes() {
        return Err(EqError::NumNodes {
            first: g0.num_nodes(),
            second: g1.num_nodes(),
        });
    }
    if g0.num_arcs() != g1.num_arcs() {
        return Err(EqError::NumArcs {
            first: g0.num_arcs(),
            second: g1.num_arcs(),
        });
    }
    for node in 0..g0.num_nodes() {
        if g0.outdegree(node) != g1.outdegree(node) {
            return Err(EqError::Outdegree {
                node,
                first: g0.outdegree(node),
                second: g1.outdegree(node),
            });
        }
        let succ0 = g0.successors(node).into_iter();
        let succ1 = g1.successors(node).into_iter();
        for (index, (first, second)) in succ0.zip(succ1).enumerate() {
            if first != second {
                return Err(EqError::Successors {
                    node,
                    index,
                    first,
                    second,
                });
            }
        }
    }
    Ok(())
}

/// Returns whether every arc `(x, y)` of the graph is matched by an arc `(y, x)`.
pub fn is_symmetric<G: RandomAccessGraph>(graph: &G) -> bool {
    (0..graph.num_nodes()).all(|node| {
        graph
            .successors(node)
            .into_iter()
            .all(|succ| graph.has_arc(succ, node))
    })
}
