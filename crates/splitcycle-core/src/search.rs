//! Strong path reachability over the margin graph.
//!
//! A *strong path* at threshold `k` is a directed path in which every
//! edge `u -> v` satisfies `margins[u][v] >= k`. Two interchangeable
//! traversals answer the same reachability question:
//!
//! - **Bidirectional breadth-first**: a forward frontier from the
//!   source over matrix rows and a backward frontier from the target
//!   over matrix columns, expanded alternately until they meet.
//! - **Depth-first**: a single-frontier traversal with an explicit
//!   stack, so candidate counts can exceed safe recursion depth.
//!
//! Both variants return the identical boolean for any input; they
//! differ only in traversal order and performance profile.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::margins::MarginMatrix;

/// Which traversal the strong path oracle uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStrategy {
    /// Bidirectional breadth-first search.
    BreadthFirst,
    /// Depth-first search with an explicit stack.
    #[default]
    DepthFirst,
}

/// Returns true if a strong path at threshold `k` exists from `source`
/// to `target` in the margin graph.
///
/// A candidate always reaches itself: `source == target` is trivially
/// true for every threshold.
pub fn exists_strong_path(
    margins: &MarginMatrix,
    source: usize,
    target: usize,
    k: f64,
    strategy: SearchStrategy,
) -> bool {
    if source == target {
        return true;
    }
    match strategy {
        SearchStrategy::BreadthFirst => bidirectional(margins, source, target, k),
        SearchStrategy::DepthFirst => depth_first(margins, source, target, k),
    }
}

/// Bidirectional breadth-first search.
///
/// One node is expanded from each frontier per round. Forward
/// expansion follows matrix rows (outgoing edges meeting the
/// threshold); backward expansion follows matrix columns (incoming
/// edges). The search succeeds the moment a frontier touches a node
/// already visited by the other side, and fails when either queue
/// drains without a meeting.
fn bidirectional(margins: &MarginMatrix, source: usize, target: usize, k: f64) -> bool {
    let n = margins.candidate_count();

    let mut forward_seen = vec![false; n];
    let mut backward_seen = vec![false; n];
    forward_seen[source] = true;
    backward_seen[target] = true;

    let mut forward = VecDeque::from([source]);
    let mut backward = VecDeque::from([target]);

    while !forward.is_empty() && !backward.is_empty() {
        if let Some(u) = forward.pop_front() {
            for (v, &weight) in margins.row(u).iter().enumerate() {
                if weight >= k {
                    if backward_seen[v] {
                        return true;
                    }
                    if !forward_seen[v] {
                        forward_seen[v] = true;
                        forward.push_back(v);
                    }
                }
            }
        }

        if let Some(u) = backward.pop_front() {
            for v in 0..n {
                if margins.margin(v, u) >= k {
                    if forward_seen[v] {
                        return true;
                    }
                    if !backward_seen[v] {
                        backward_seen[v] = true;
                        backward.push_back(v);
                    }
                }
            }
        }
    }

    false
}

/// Depth-first search with an explicit stack.
fn depth_first(margins: &MarginMatrix, source: usize, target: usize, k: f64) -> bool {
    let n = margins.candidate_count();

    let mut visited = vec![false; n];
    visited[source] = true;
    let mut stack = vec![source];

    while let Some(u) = stack.pop() {
        for (v, &weight) in margins.row(u).iter().enumerate() {
            if weight >= k && !visited[v] {
                if v == target {
                    return true;
                }
                visited[v] = true;
                stack.push(v);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRATEGIES: [SearchStrategy; 2] =
        [SearchStrategy::BreadthFirst, SearchStrategy::DepthFirst];

    fn margins(rows: Vec<Vec<f64>>) -> MarginMatrix {
        MarginMatrix::from_rows(rows).unwrap()
    }

    /// 0 -> 1 -> 2 chain with weights 3 and 2.
    fn chain() -> MarginMatrix {
        margins(vec![
            vec![0.0, 3.0, 0.0],
            vec![-3.0, 0.0, 2.0],
            vec![0.0, -2.0, 0.0],
        ])
    }

    #[test]
    fn test_self_path_always_exists() {
        let m = chain();
        for strategy in STRATEGIES {
            for x in 0..3 {
                for k in [-10.0, 0.0, 1.0, 1000.0] {
                    assert!(
                        exists_strong_path(&m, x, x, k, strategy),
                        "self path must hold for x={} k={}",
                        x,
                        k
                    );
                }
            }
        }
    }

    #[test]
    fn test_direct_edge_meets_threshold() {
        let m = chain();
        for strategy in STRATEGIES {
            assert!(exists_strong_path(&m, 0, 1, 3.0, strategy));
            assert!(!exists_strong_path(&m, 0, 1, 4.0, strategy));
        }
    }

    #[test]
    fn test_multi_hop_limited_by_weakest_edge() {
        let m = chain();
        for strategy in STRATEGIES {
            // 0 -> 1 -> 2 works up to the weaker edge weight.
            assert!(exists_strong_path(&m, 0, 2, 2.0, strategy));
            assert!(!exists_strong_path(&m, 0, 2, 3.0, strategy));
        }
    }

    #[test]
    fn test_no_backward_traversal() {
        let m = chain();
        for strategy in STRATEGIES {
            // Edges only run 0 -> 1 -> 2 at positive thresholds.
            assert!(!exists_strong_path(&m, 2, 0, 1.0, strategy));
        }
    }

    #[test]
    fn test_cycle_reachability() {
        // 0 -> 1 -> 2 -> 0, all weight 5.
        let m = margins(vec![
            vec![0.0, 5.0, -5.0],
            vec![-5.0, 0.0, 5.0],
            vec![5.0, -5.0, 0.0],
        ]);
        for strategy in STRATEGIES {
            for a in 0..3 {
                for b in 0..3 {
                    assert!(
                        exists_strong_path(&m, a, b, 5.0, strategy),
                        "everything reaches everything around the cycle"
                    );
                }
            }
            assert!(!exists_strong_path(&m, 0, 2, 6.0, strategy));
        }
    }

    #[test]
    fn test_variants_agree_on_disconnected_graph() {
        let m = margins(vec![
            vec![0.0, 1.0, 0.0, 0.0],
            vec![-1.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 1.0],
            vec![0.0, 0.0, -1.0, 0.0],
        ]);
        for a in 0..4 {
            for b in 0..4 {
                let bfs = exists_strong_path(&m, a, b, 1.0, SearchStrategy::BreadthFirst);
                let dfs = exists_strong_path(&m, a, b, 1.0, SearchStrategy::DepthFirst);
                assert_eq!(bfs, dfs, "variants disagree on ({}, {})", a, b);
            }
        }
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        // A 2000-node path exercises the explicit stack; recursive DFS
        // would risk exhausting the call stack here.
        let n = 2000;
        let mut rows = vec![vec![0.0; n]; n];
        for i in 0..n - 1 {
            rows[i][i + 1] = 1.0;
            rows[i + 1][i] = -1.0;
        }
        let m = MarginMatrix::from_rows(rows).unwrap();
        for strategy in STRATEGIES {
            assert!(exists_strong_path(&m, 0, n - 1, 1.0, strategy));
        }
    }
}
