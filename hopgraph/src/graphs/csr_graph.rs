/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;
use thiserror::Error;

/// The maximum number of nodes of a [`CsrGraph`].
///
/// Successors are stored as `u32`, and `u32::MAX` itself is never a node,
/// so it remains available as a sentinel for per-node `u32` values such as
/// distances.
pub const MAX_NODES: u64 = u32::MAX as u64;

/// Reasons for rejecting the input of a [`CsrGraph`] constructor.
///
/// All constructors except [`from_parts`](CsrGraph::from_parts) check their
/// input in full before building anything.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidGraphInput {
    /// The graph would have more nodes than successors can represent.
    #[error("The graph has {num_nodes} nodes, but at most {MAX_NODES} are supported")]
    TooManyNodes { num_nodes: usize },

    /// An arc has an endpoint outside of the node range.
    #[error("Arc ({src}, {dst}) at index {index} has an endpoint outside [0..{num_nodes})")]
    EndpointOutOfRange {
        index: usize,
        src: usize,
        dst: usize,
        num_nodes: usize,
    },

    /// The arcs are not sorted lexicographically.
    #[error("Arc {next:?} at index {index} follows arc {prev:?}: arcs must be sorted")]
    Unsorted {
        index: usize,
        prev: (usize, usize),
        next: (usize, usize),
    },

    /// The degree-cumulative function is empty.
    #[error("The degree-cumulative function must contain at least one offset")]
    MissingOffsets,

    /// The degree-cumulative function does not start from zero.
    #[error("The first offset is {offset} instead of 0")]
    FirstOffset { offset: usize },

    /// The degree-cumulative function decreases.
    #[error("Offsets of node {node} are decreasing: {start} > {end}")]
    DecreasingOffsets {
        node: usize,
        start: usize,
        end: usize,
    },

    /// The last offset does not match the number of successors.
    #[error("The last offset is {last}, but there are {num_successors} successors")]
    SuccessorCount { last: usize, num_successors: usize },

    /// A successor is not a node of the graph.
    #[error("Node {node} has successor {succ} outside [0..{num_nodes})")]
    SuccessorOutOfRange {
        node: usize,
        succ: usize,
        num_nodes: usize,
    },

    /// The successors of a node are not sorted.
    #[error("The successors of node {node} are not sorted")]
    UnsortedSuccessors { node: usize },
}

/// An immutable compressed sparse-row graph.
///
/// The graph is represented by the degree-cumulative function (DCF), that is,
/// the sequence of offsets at which the successors of each node start, and by
/// the concatenation of all successor lists. The successors of node `x` are
/// thus `successors[dcf[x]..dcf[x + 1]]`, and the outdegree of `x` is
/// `dcf[x + 1] - dcf[x]`.
///
/// Offsets are `usize`, so the number of arcs is limited only by memory;
/// successors are `u32`, which halves the space of the largest array but
/// limits the number of nodes to [`MAX_NODES`].
///
/// Successor lists are always sorted: [`from_sorted_arcs`](Self::from_sorted_arcs)
/// inherits the order from the arcs, and [`try_from_parts`](Self::try_from_parts)
/// checks it. This makes [`has_arc`](RandomAccessGraph::has_arc) logarithmic.
///
/// # Examples
///
/// ```
/// use hopgraph::prelude::*;
///
/// // The path 0 - 1 - 2, with both directions of each edge
/// let arcs = [(0, 1), (1, 0), (1, 2), (2, 1)];
/// let mut sorted = arcs.to_vec();
/// sorted.sort();
/// let graph = CsrGraph::from_sorted_arcs(&sorted, 3)?;
///
/// assert_eq!(graph.dcf(), &[0, 1, 3, 4]);
/// assert_eq!(graph.neighbors(1), &[0, 2]);
/// assert!(graph.has_arc(2, 1));
/// # Ok::<(), InvalidGraphInput>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    dcf: Box<[usize]>,
    successors: Box<[u32]>,
}

impl core::default::Default for CsrGraph {
    fn default() -> Self {
        Self {
            dcf: vec![0].into(),
            successors: vec![].into(),
        }
    }
}

impl CsrGraph {
    /// Creates an empty CSR graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new CSR graph with `num_nodes` nodes from a list of arcs
    /// sorted lexicographically.
    ///
    /// Duplicate arcs are allowed and kept. The arcs are checked in full
    /// before any offset is computed: an endpoint outside `[0..num_nodes)`
    /// or an arc smaller than its predecessor makes this method fail.
    pub fn from_sorted_arcs(
        arcs: &[(u32, u32)],
        num_nodes: usize,
    ) -> Result<Self, InvalidGraphInput> {
        if num_nodes as u64 > MAX_NODES {
            return Err(InvalidGraphInput::TooManyNodes { num_nodes });
        }

        // Outdegrees are accumulated shifted by one, so that the prefix sum
        // below turns them into the DCF in place.
        let mut dcf = vec![0_usize; num_nodes + 1];
        let mut prev = None;
        for (index, &(src, dst)) in arcs.iter().enumerate() {
            let (src, dst) = (src as usize, dst as usize);
            if src >= num_nodes || dst >= num_nodes {
                return Err(InvalidGraphInput::EndpointOutOfRange {
                    index,
                    src,
                    dst,
                    num_nodes,
                });
            }
            if let Some(prev) = prev {
                if prev > (src, dst) {
                    return Err(InvalidGraphInput::Unsorted {
                        index,
                        prev,
                        next: (src, dst),
                    });
                }
            }
            prev = Some((src, dst));
            dcf[src + 1] += 1;
        }

        for node in 0..num_nodes {
            dcf[node + 1] += dcf[node];
        }

        // Arcs are sorted by source, so appending the targets in input order
        // fills each successor list in its own range.
        let successors = arcs
            .iter()
            .map(|&(_, dst)| dst)
            .collect::<Box<[u32]>>();

        log::debug!(
            "Built CSR graph with {} nodes and {} arcs",
            num_nodes,
            successors.len()
        );

        Ok(Self {
            dcf: dcf.into_boxed_slice(),
            successors,
        })
    }

    /// Creates a new CSR graph from the given degree-cumulative function and
    /// successors, checking that they are coherent.
    ///
    /// The DCF must be nonempty, start from zero, be monotone and end with
    /// the number of successors; successors must be nodes of the graph and
    /// each successor list must be sorted.
    pub fn try_from_parts(
        dcf: impl Into<Box<[usize]>>,
        successors: impl Into<Box<[u32]>>,
    ) -> Result<Self, InvalidGraphInput> {
        let dcf = dcf.into();
        let successors = successors.into();

        let Some(&first) = dcf.first() else {
            return Err(InvalidGraphInput::MissingOffsets);
        };
        if first != 0 {
            return Err(InvalidGraphInput::FirstOffset { offset: first });
        }
        let num_nodes = dcf.len() - 1;
        if num_nodes as u64 > MAX_NODES {
            return Err(InvalidGraphInput::TooManyNodes { num_nodes });
        }
        for (node, window) in dcf.windows(2).enumerate() {
            if window[0] > window[1] {
                return Err(InvalidGraphInput::DecreasingOffsets {
                    node,
                    start: window[0],
                    end: window[1],
                });
            }
        }
        let last = dcf[num_nodes];
        if last != successors.len() {
            return Err(InvalidGraphInput::SuccessorCount {
                last,
                num_successors: successors.len(),
            });
        }

        for (node, window) in dcf.windows(2).enumerate() {
            let succs = &successors[window[0]..window[1]];
            if let Some(&succ) = succs.iter().find(|&&succ| succ as usize >= num_nodes) {
                return Err(InvalidGraphInput::SuccessorOutOfRange {
                    node,
                    succ: succ as usize,
                    num_nodes,
                });
            }
            if !succs.is_sorted() {
                return Err(InvalidGraphInput::UnsortedSuccessors { node });
            }
        }

        Ok(Self { dcf, successors })
    }

    /// Creates a new CSR graph from the given degree-cumulative function and
    /// successors without checking them.
    ///
    /// # Safety
    ///
    /// The degree-cumulative function must satisfy the conditions checked by
    /// [`try_from_parts`](Self::try_from_parts): otherwise, accessing
    /// successors might panic, and visits might return wrong results.
    pub unsafe fn from_parts(dcf: impl Into<Box<[usize]>>, successors: impl Into<Box<[u32]>>) -> Self {
        Self {
            dcf: dcf.into(),
            successors: successors.into(),
        }
    }

    /// Returns the degree-cumulative function, that is, the offsets of the
    /// successor lists.
    pub fn dcf(&self) -> &[usize] {
        &self.dcf
    }

    /// Returns the concatenation of all successor lists.
    pub fn targets(&self) -> &[u32] {
        &self.successors
    }

    /// Returns the degree-cumulative function and the successors.
    pub fn into_inner(self) -> (Box<[usize]>, Box<[u32]>) {
        (self.dcf, self.successors)
    }

    /// Returns the successors of a node as a slice.
    ///
    /// # Panics
    ///
    /// If `node` is not a node of the graph.
    #[inline(always)]
    pub fn neighbors(&self, node: usize) -> &[u32] {
        &self.successors[self.dcf[node]..self.dcf[node + 1]]
    }

    /// Returns the number of undirected edges.
    ///
    /// This is half the number of arcs, and it is meaningful only for
    /// symmetric graphs, such as those built from an
    /// [`ArcList`](crate::utils::ArcList); it is then the number of edges
    /// of the original list, self-loops and duplicates included.
    pub fn num_edges(&self) -> u64 {
        self.num_arcs() / 2
    }

    /// Returns an iterator over all arcs, in lexicographical order.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.num_nodes()).flat_map(move |node| {
            self.neighbors(node)
                .iter()
                .map(move |&succ| (node, succ as usize))
        })
    }

    /// Returns an iterator over the arcs `(x, y)` with `x ≤ y`, in
    /// lexicographical order.
    ///
    /// On a symmetric graph without self-loops and duplicate arcs, these are
    /// exactly the undirected edges.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.arcs().filter(|&(src, dst)| src <= dst)
    }

    /// Returns whether every arc `(x, y)` is matched by an arc `(y, x)`.
    pub fn is_symmetric(&self) -> bool {
        crate::traits::graph::is_symmetric(self)
    }

    /// Returns the number of nodes without successors.
    pub fn num_isolated_nodes(&self) -> usize {
        self.dcf.windows(2).filter(|w| w[0] == w[1]).count()
    }

    /// Returns the maximum outdegree, or zero if the graph has no nodes.
    pub fn max_outdegree(&self) -> usize {
        self.dcf.windows(2).map(|w| w[1] - w[0]).max().unwrap_or(0)
    }
}

/// Iterator over the successors of a node of a [`CsrGraph`].
#[derive(Debug, Clone)]
pub struct Succ<'a>(std::slice::Iter<'a, u32>);

impl Iterator for Succ<'_> {
    type Item = usize;

    #[inline(always)]
    fn next(&mut self) -> Option<usize> {
        self.0.next().map(|&succ| succ as usize)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Succ<'_> {}

impl RandomAccessGraph for CsrGraph {
    type Successors<'a>
        = Succ<'a>
    where
        Self: 'a;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.dcf.len() - 1
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.successors.len() as u64
    }

    #[inline(always)]
    fn successors(&self, node_id: usize) -> Succ<'_> {
        Succ(self.neighbors(node_id).iter())
    }

    #[inline(always)]
    fn outdegree(&self, node_id: usize) -> usize {
        self.dcf[node_id + 1] - self.dcf[node_id]
    }

    fn has_arc(&self, src: usize, dst: usize) -> bool {
        u32::try_from(dst).is_ok_and(|dst| self.neighbors(src).binary_search(&dst).is_ok())
    }
}
