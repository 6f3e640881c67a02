/*
 * SPDX-FileCopyrightText: 2025 The hopgraph authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod common;

use anyhow::Result;
use common::*;
use hopgraph::graphs::csr_graph::MAX_NODES;
use hopgraph::prelude::*;
use hopgraph::traits::graph;
use rand::{Rng, SeedableRng, rngs::SmallRng};

#[test]
fn test_path() -> Result<()> {
    let graph = CsrGraph::from_sorted_arcs(&[(0, 1), (1, 0), (1, 2), (2, 1)], 3)?;
    assert_eq!(graph.num_nodes(), 3);
    assert_eq!(graph.num_arcs(), 4);
    assert_eq!(graph.num_edges(), 2);
    assert_eq!(graph.dcf(), &[0, 1, 3, 4]);
    assert_eq!(graph.targets(), &[1, 0, 2, 1]);
    assert_eq!(graph.neighbors(0), &[1]);
    assert_eq!(graph.neighbors(1), &[0, 2]);
    assert_eq!(graph.neighbors(2), &[1]);
    assert_eq!(graph.successors(1).collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(graph.successors(1).len(), 2);
    assert_eq!(graph.outdegree(1), 2);
    assert!(graph.is_symmetric());
    Ok(())
}

#[test]
fn test_house() -> Result<()> {
    let graph = house_graph();
    let from_arcs = ArcList::from_edges(HOUSE_EDGES, None).build_csr()?;
    assert_eq!(graph, from_arcs);
    graph::eq(&graph, &from_arcs)?;

    assert_eq!(graph.num_nodes(), 5);
    assert_eq!(graph.num_edges(), 6);
    assert_eq!(graph.max_outdegree(), 3);
    assert_eq!(graph.num_isolated_nodes(), 0);
    assert_eq!(
        graph.edges().collect::<Vec<_>>(),
        HOUSE_EDGES
            .iter()
            .map(|&(src, dst)| (src as usize, dst as usize))
            .collect::<Vec<_>>()
    );

    let arcs = graph.arcs().collect::<Vec<_>>();
    assert_eq!(arcs.len(), 12);
    assert!(arcs.is_sorted());
    for (src, dst) in arcs {
        assert!(graph.has_arc(src, dst));
        assert!(graph.has_arc(dst, src));
    }
    assert!(!graph.has_arc(0, 3));
    assert!(!graph.has_arc(1, 4));
    assert!(!graph.has_arc(0, usize::MAX));
    Ok(())
}

#[test]
fn test_empty() -> Result<()> {
    let graph = CsrGraph::new();
    assert_eq!(graph.num_nodes(), 0);
    assert_eq!(graph.num_arcs(), 0);
    assert_eq!(graph.max_outdegree(), 0);
    assert_eq!(graph.arcs().count(), 0);
    assert_eq!(graph, CsrGraph::from_sorted_arcs(&[], 0)?);
    Ok(())
}

#[test]
fn test_isolated_nodes() -> Result<()> {
    let graph = CsrGraph::from_sorted_arcs(&[(1, 3), (3, 1)], 5)?;
    assert_eq!(graph.dcf(), &[0, 0, 1, 1, 2, 2]);
    assert_eq!(graph.num_isolated_nodes(), 3);
    assert!(graph.neighbors(0).is_empty());
    assert!(graph.neighbors(4).is_empty());
    Ok(())
}

#[test]
fn test_self_loops_and_duplicates() -> Result<()> {
    let graph = ArcList::from_edges([(0, 0), (0, 1), (1, 0)], None).build_csr()?;
    // A self-loop is stored twice, and each copy of an edge twice
    assert_eq!(graph.neighbors(0), &[0, 0, 1, 1]);
    assert_eq!(graph.neighbors(1), &[0, 0]);
    assert_eq!(graph.num_edges(), 3);
    assert!(graph.is_symmetric());
    Ok(())
}

#[test]
fn test_invalid_arcs() {
    assert_eq!(
        CsrGraph::from_sorted_arcs(&[(0, 1), (1, 3)], 3),
        Err(InvalidGraphInput::EndpointOutOfRange {
            index: 1,
            src: 1,
            dst: 3,
            num_nodes: 3
        })
    );
    assert_eq!(
        CsrGraph::from_sorted_arcs(&[(1, 0), (0, 1)], 2),
        Err(InvalidGraphInput::Unsorted {
            index: 1,
            prev: (1, 0),
            next: (0, 1)
        })
    );
    assert_eq!(
        CsrGraph::from_sorted_arcs(&[(0, 2), (0, 1)], 3),
        Err(InvalidGraphInput::Unsorted {
            index: 1,
            prev: (0, 2),
            next: (0, 1)
        })
    );
    assert_eq!(
        CsrGraph::from_sorted_arcs(&[(0, u32::MAX)], 2),
        Err(InvalidGraphInput::EndpointOutOfRange {
            index: 0,
            src: 0,
            dst: u32::MAX as usize,
            num_nodes: 2
        })
    );
    let num_nodes = MAX_NODES as usize + 1;
    assert_eq!(
        CsrGraph::from_sorted_arcs(&[], num_nodes),
        Err(InvalidGraphInput::TooManyNodes { num_nodes })
    );
}

#[test]
fn test_invalid_parts() {
    assert_eq!(
        CsrGraph::try_from_parts(Vec::<usize>::new(), Vec::<u32>::new()),
        Err(InvalidGraphInput::MissingOffsets)
    );
    assert_eq!(
        CsrGraph::try_from_parts(vec![1_usize, 1], vec![0_u32]),
        Err(InvalidGraphInput::FirstOffset { offset: 1 })
    );
    assert_eq!(
        CsrGraph::try_from_parts(vec![0_usize, 2, 1], vec![1_u32]),
        Err(InvalidGraphInput::DecreasingOffsets {
            node: 1,
            start: 2,
            end: 1
        })
    );
    assert_eq!(
        CsrGraph::try_from_parts(vec![0_usize, 1, 2], vec![1_u32]),
        Err(InvalidGraphInput::SuccessorCount {
            last: 2,
            num_successors: 1
        })
    );
    assert_eq!(
        CsrGraph::try_from_parts(vec![0_usize, 1, 2], vec![1_u32, 2]),
        Err(InvalidGraphInput::SuccessorOutOfRange {
            node: 1,
            succ: 2,
            num_nodes: 2
        })
    );
    assert_eq!(
        CsrGraph::try_from_parts(vec![0_usize, 2, 2, 2], vec![2_u32, 1]),
        Err(InvalidGraphInput::UnsortedSuccessors { node: 0 })
    );
}

#[test]
fn test_from_parts() {
    let (dcf, successors) = house_graph().into_inner();
    let graph = unsafe { CsrGraph::from_parts(dcf.clone(), successors.clone()) };
    assert_eq!(graph, house_graph());
    assert_eq!(graph.into_inner(), (dcf, successors));
}

#[test]
fn test_not_symmetric() -> Result<()> {
    let graph = CsrGraph::from_sorted_arcs(&[(0, 1), (1, 2), (2, 1)], 3)?;
    assert!(!graph.is_symmetric());
    assert!(graph::eq(&graph, &house_graph()).is_err());
    Ok(())
}

#[test]
fn test_random() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(0);
    for num_nodes in [1, 10, 100, 1000] {
        let edges = (0..3 * num_nodes)
            .map(|_| {
                (
                    rng.random_range(0..num_nodes as u32),
                    rng.random_range(0..num_nodes as u32),
                )
            })
            .collect::<Vec<_>>();
        let arc_list = ArcList::from_edges(edges.iter().copied(), Some(num_nodes));
        let graph = arc_list.build_csr()?;

        assert_eq!(graph.num_nodes(), num_nodes);
        assert_eq!(graph.num_arcs(), 2 * edges.len() as u64);
        assert_eq!(graph.dcf()[0], 0);
        assert!(graph.dcf().is_sorted());
        assert_eq!(graph.dcf()[num_nodes], graph.targets().len());
        assert!(graph.is_symmetric());
        assert!(
            graph
                .arcs()
                .eq(arc_list.arcs().iter().map(|&(src, dst)| (src as usize, dst as usize)))
        );
        for &(src, dst) in &edges {
            assert!(graph.has_arc(src as usize, dst as usize));
            assert!(graph.has_arc(dst as usize, src as usize));
        }

        let (dcf, successors) = graph.clone().into_inner();
        assert_eq!(CsrGraph::try_from_parts(dcf, successors)?, graph);
    }
    Ok(())
}
