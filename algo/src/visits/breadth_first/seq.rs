/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::visits::{
    Sequential,
    breadth_first::{EventNoPred, FilterArgsNoPred},
};
use hopgraph::traits::RandomAccessGraph;
use std::{ops::ControlFlow, ops::ControlFlow::Continue};
use sux::bits::BitVec;
use sux::traits::BitVecOpsMut;

/// A sequential level-synchronous breadth-first visit.
///
/// The visit keeps two frontiers: the nodes at the current distance, which
/// are being scanned, and the nodes at the next distance, which are being
/// discovered. When the current frontier has been scanned, the two frontiers
/// are swapped. Nodes are passed to the callback when they are discovered,
/// so distances need not be stored.
///
/// Within a level, nodes are discovered in the order in which their
/// predecessors appear in the frontier. If [sorted
/// frontiers](Seq::sorted_frontiers) are requested, every frontier is sorted
/// before being scanned, so that, except for the roots themselves, the order
/// of events depends only on the graph and on the set of roots.
///
/// # Examples
///
/// Let's compute the distances from 0:
///
/// ```
/// use hopgraph::prelude::*;
/// use hopgraph_algo::visits::*;
/// use std::ops::ControlFlow::Continue;
/// use no_break::NoBreak;
///
/// let graph = ArcList::from_edges([(0, 1), (1, 2), (2, 0), (1, 3)], None).build_csr()?;
/// let mut visit = breadth_first::Seq::new(&graph);
/// let mut d = [0; 4];
/// visit.visit(
///     [0],
///     |event| {
///          if let breadth_first::EventNoPred::Visit { node, distance } = event {
///              d[node] = distance;
///          }
///          Continue(())
///     },
/// ).continue_value_no_break();
///
/// assert_eq!(d, [0, 1, 1, 2]);
/// # Ok::<(), InvalidGraphInput>(())
/// ```
///
/// The size of the ball of radius one around node 0 can be computed in the
/// filter, so that nodes beyond the radius never enter a frontier:
///
/// ```
/// use hopgraph::prelude::*;
/// use hopgraph_algo::visits::*;
/// use std::ops::ControlFlow::Continue;
/// use no_break::NoBreak;
///
/// let graph = ArcList::from_edges([(0, 1), (1, 2), (2, 3), (3, 4)], None).build_csr()?;
/// let mut visit = breadth_first::Seq::new(&graph);
/// let mut count = 0;
/// visit.visit_filtered(
///     [0],
///     |_| Continue(()),
///     |breadth_first::FilterArgsNoPred { distance, .. }| {
///         if distance > 1 {
///             false
///         } else {
///             count += 1;
///             true
///         }
///     },
/// ).continue_value_no_break();
/// assert_eq!(count, 2);
/// # Ok::<(), InvalidGraphInput>(())
/// ```
pub struct Seq<G: RandomAccessGraph> {
    graph: G,
    visited: BitVec,
    /// The nodes at the current distance.
    frontier: Vec<usize>,
    /// The nodes at the next distance.
    next_frontier: Vec<usize>,
    sort_frontiers: bool,
}

impl<G: RandomAccessGraph> Seq<G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            visited: BitVec::new(num_nodes),
            frontier: Vec::new(),
            next_frontier: Vec::new(),
            sort_frontiers: false,
        }
    }

    /// Sets whether frontiers are sorted by node before being scanned.
    pub fn sorted_frontiers(mut self, sort_frontiers: bool) -> Self {
        self.sort_frontiers = sort_frontiers;
        self
    }

    /// Returns the visited graph.
    pub fn graph(&self) -> &G {
        &self.graph
    }
}

impl<G: RandomAccessGraph> Sequential<EventNoPred> for Seq<G> {
    fn visit_filtered_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, EventNoPred) -> ControlFlow<E, ()>,
        F: FnMut(&mut T, FilterArgsNoPred) -> bool,
    >(
        &mut self,
        roots: R,
        mut init: T,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        self.frontier.clear();
        self.next_frontier.clear();

        for root in roots {
            if self.visited[root]
                || !filter(
                    &mut init,
                    FilterArgsNoPred {
                        node: root,
                        distance: 0,
                    },
                )
            {
                continue;
            }

            // Init happens only if some root survives
            if self.frontier.is_empty() {
                callback(&mut init, EventNoPred::Init {})?;
            }

            self.visited.set(root, true);
            self.frontier.push(root);

            callback(
                &mut init,
                EventNoPred::Visit {
                    node: root,
                    distance: 0,
                },
            )?;
        }

        if self.frontier.is_empty() {
            return Continue(());
        }

        if self.sort_frontiers {
            self.frontier.sort_unstable();
        }

        callback(
            &mut init,
            EventNoPred::FrontierSize {
                distance: 0,
                size: self.frontier.len(),
            },
        )?;

        let mut distance = 1;

        while !self.frontier.is_empty() {
            for &node in &self.frontier {
                for succ in self.graph.successors(node) {
                    if !self.visited[succ] {
                        if filter(
                            &mut init,
                            FilterArgsNoPred {
                                node: succ,
                                distance,
                            },
                        ) {
                            self.visited.set(succ, true);
                            callback(
                                &mut init,
                                EventNoPred::Visit {
                                    node: succ,
                                    distance,
                                },
                            )?;
                            self.next_frontier.push(succ);
                        }
                    } else {
                        callback(&mut init, EventNoPred::Revisit { node: succ })?;
                    }
                }
            }

            if !self.next_frontier.is_empty() {
                if self.sort_frontiers {
                    self.next_frontier.sort_unstable();
                }
                callback(
                    &mut init,
                    EventNoPred::FrontierSize {
                        distance,
                        size: self.next_frontier.len(),
                    },
                )?;
            }

            std::mem::swap(&mut self.frontier, &mut self.next_frontier);
            self.next_frontier.clear();
            distance += 1;
        }

        callback(&mut init, EventNoPred::Done {})
    }

    fn reset(&mut self) {
        self.frontier.clear();
        self.next_frontier.clear();
        self.visited.fill(false);
    }
}
