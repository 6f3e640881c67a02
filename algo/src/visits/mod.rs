/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Callback-driven visits on graphs.
//!
//! A [sequential visit](Sequential) reports what happens during the visit
//! by calling a callback with an [`Event`]. The callback returns a
//! `ControlFlow<E, ()>`: returning [`Break`](ControlFlow::Break) stops the
//! visit immediately, and the break value becomes the result of the visit
//! method. Callbacks that never break can use
//! [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break)
//! from the [`no-break`](https://crates.io/crates/no-break) crate to unwrap
//! the result.
//!
//! Newly discovered nodes are first passed to a filter, which receives an
//! [`Event::FilterArgs`]: a node rejected by the filter is not marked as
//! visited, and it will be proposed again if it is discovered through
//! another arc.
//!
//! The `_with` variants pass a mutable state to both the callback and the
//! filter. After a visit, [`reset`](Sequential::reset) clears the visited
//! nodes so that the visit can be reused on the same graph.

pub mod breadth_first;

use std::ops::ControlFlow;

/// The argument of visit callbacks.
///
/// Usually an enum with one variant per kind of event, such as the discovery
/// of a node or the end of a level.
pub trait Event {
    /// The type passed as input to the filter.
    type FilterArgs;
}

/// The filter arguments of an event, handy in destructuring patterns.
pub type FilterArgs<A> = <A as Event>::FilterArgs;

/// A sequential visit.
///
/// Implementations provide
/// [`visit_filtered_with`](Sequential::visit_filtered_with); the other visit
/// methods are shorthands for it. A [breadth-first visit](breadth_first)
/// uses the roots as its first frontier.
pub trait Sequential<A: Event> {
    /// Visits the graph from `roots`, passing `init` to `callback` and
    /// `filter`.
    ///
    /// Roots that are already visited, or that are rejected by the filter,
    /// are skipped.
    fn visit_filtered_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, A) -> ControlFlow<E, ()>,
        F: FnMut(&mut T, A::FilterArgs) -> bool,
    >(
        &mut self,
        roots: R,
        init: T,
        callback: C,
        filter: F,
    ) -> ControlFlow<E, ()>;

    /// Visits the graph from `roots` with a filter.
    fn visit_filtered<
        R: IntoIterator<Item = usize>,
        E,
        C: FnMut(A) -> ControlFlow<E, ()>,
        F: FnMut(A::FilterArgs) -> bool,
    >(
        &mut self,
        roots: R,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered_with(roots, (), |(), a| callback(a), |(), a| filter(a))
    }

    /// Visits the graph from `roots`, passing `init` to `callback`.
    fn visit_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, A) -> ControlFlow<E, ()>,
    >(
        &mut self,
        roots: R,
        init: T,
        callback: C,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered_with(roots, init, callback, |_, _| true)
    }

    /// Visits the graph from `roots`.
    fn visit<R: IntoIterator<Item = usize>, E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        roots: R,
        callback: C,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered(roots, callback, |_| true)
    }

    /// Forgets the visited nodes.
    fn reset(&mut self);
}
