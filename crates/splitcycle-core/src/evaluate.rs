//! SplitCycle defeat pruning.
//!
//! A candidate `a` is conclusively defeated if some opponent `b` beats
//! it head-to-head (`margins[a][b] < 0`) and no strong path runs from
//! `a` back to `b` at threshold `-margins[a][b]`. Such a loss is not
//! cancelled by a majority cycle in which it is one of the weakest
//! links, so `a` cannot be a SplitCycle winner.

use std::ops::Range;

use crate::error::ElectionError;
use crate::margins::MarginMatrix;
use crate::search::{exists_strong_path, SearchStrategy};
use crate::Result;

/// Prunes defeated candidates from `considered`, returning the indices
/// that survive as SplitCycle winners, in ascending order.
///
/// Opponents `b` always range over the *entire* candidate set, not
/// just the considered subset: a candidate's defeats depend on all
/// opponents, so a partition-local scan would be incorrect. The scan
/// for each `a` short-circuits on the first conclusive defeat.
///
/// # Errors
///
/// Returns [`ElectionError::WorkerFailure`] if `considered` extends
/// past the matrix dimension.
pub fn surviving_candidates(
    margins: &MarginMatrix,
    considered: Range<usize>,
    strategy: SearchStrategy,
) -> Result<Vec<usize>> {
    let n = margins.candidate_count();
    if considered.end > n {
        return Err(ElectionError::WorkerFailure {
            start: considered.start,
            end: considered.end,
            reason: format!("considered range exceeds the {} candidate(s) in the matrix", n),
        });
    }

    // Boolean membership array instead of a hash set: iteration order
    // stays deterministic and removal is O(1).
    let mut is_winner = vec![false; n];
    for a in considered.clone() {
        is_winner[a] = true;
    }

    for a in considered.clone() {
        for b in 0..n {
            let margin = margins.margin(a, b);
            if margin < 0.0 && !exists_strong_path(margins, a, b, -margin, strategy) {
                is_winner[a] = false;
                break;
            }
        }
    }

    Ok(considered.filter(|&a| is_winner[a]).collect())
}
