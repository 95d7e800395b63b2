//! Parallel fan-out/fan-in over candidate partitions.
//!
//! The considered candidate range is split into contiguous,
//! load-balanced partitions, one defeat-evaluator task per partition
//! runs on a fixed-size thread pool, and the disjoint partial winner
//! sets are unioned at the join point. The margin matrix is shared
//! read-only across all workers; no locks are needed and the final
//! result is independent of task completion order and worker count.

use std::ops::Range;

use rayon::prelude::*;
use tracing::debug;

use crate::config::ElectionConfig;
use crate::error::ElectionError;
use crate::evaluate::surviving_candidates;
use crate::margins::MarginMatrix;
use crate::Result;

/// Splits `considered` into at most `pieces` contiguous ranges.
///
/// The first `len % pieces` ranges hold `len / pieces + 1` candidates
/// and the rest hold `len / pieces`; empty ranges are dropped, so a
/// short range simply yields fewer partitions than workers.
fn partition_ranges(considered: Range<usize>, pieces: usize) -> Vec<Range<usize>> {
    let len = considered.len();
    let mut ranges = Vec::new();
    let mut start = considered.start;
    for i in 0..pieces {
        let size = len / pieces + usize::from(i < len % pieces);
        if size == 0 {
            break;
        }
        ranges.push(start..start + size);
        start += size;
    }
    ranges
}

/// Determines the SplitCycle winners among `considered`, fanning the
/// work out across `config.workers` concurrent evaluator tasks.
///
/// Returns the sorted union of the per-partition winner sets. Any
/// task failure aborts the whole call with
/// [`ElectionError::WorkerFailure`]; no partial results are surfaced.
pub fn elect_indices(
    margins: &MarginMatrix,
    considered: Range<usize>,
    config: &ElectionConfig,
) -> Result<Vec<usize>> {
    let workers = config.workers.max(1);
    let partitions = partition_ranges(considered.clone(), workers);
    if partitions.is_empty() {
        return Ok(Vec::new());
    }

    debug!(
        "fanning {} candidate(s) out across {} partition(s) on {} worker(s)",
        considered.len(),
        partitions.len(),
        workers
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| ElectionError::WorkerFailure {
            start: considered.start,
            end: considered.end,
            reason: format!("thread pool construction failed: {}", e),
        })?;

    let partials: Result<Vec<Vec<usize>>> = pool.install(|| {
        partitions
            .into_par_iter()
            .map(|partition| surviving_candidates(margins, partition, config.strategy))
            .collect()
    });

    // Partitions are disjoint, so the union is a flatten; sorting
    // restores ascending candidate order across partition boundaries.
    let mut winners: Vec<usize> = partials?.into_iter().flatten().collect();
    winners.sort_unstable();

    debug!("{} winner(s) after fan-in", winners.len());
    Ok(winners)
}
