/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits.
//!
//! Visits call back with [`EventNoPred`] and filter with
//! [`FilterArgsNoPred`]; parents are not tracked.

mod seq;
pub use seq::*;

/// Events of a breadth-first visit.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum EventNoPred {
    /// The visit starts; emitted before the first root, and only if some
    /// root is neither visited nor filtered out.
    Init {},
    /// A node is discovered.
    Visit {
        /// The discovered node.
        node: usize,
        /// Its distance from the roots, 0 for the roots themselves.
        distance: usize,
    },
    /// An arc leads to a node that has already been discovered.
    Revisit {
        /// The target of the arc.
        node: usize,
    },
    /// All nodes at a given distance have been discovered, and are about to
    /// be scanned.
    ///
    /// Emitted for distance 0, with the number of roots, and then for every
    /// nonempty level in increasing order of distance.
    FrontierSize {
        /// The distance of the nodes in the frontier.
        distance: usize,
        /// The number of nodes in the frontier.
        size: usize,
    },
    /// The last frontier has been scanned.
    ///
    /// Not emitted if the visit is empty or is interrupted.
    Done {},
}

/// Arguments of the filter of a breadth-first visit.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FilterArgsNoPred {
    /// The node being discovered.
    pub node: usize,
    /// Its distance from the roots.
    pub distance: usize,
}

impl super::Event for EventNoPred {
    type FilterArgs = FilterArgsNoPred;
}
