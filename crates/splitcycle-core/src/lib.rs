//! # SplitCycle Core
//!
//! Winner determination for the SplitCycle voting rule: given voters'
//! ranked preferences, compute the pairwise margin matrix and identify
//! the candidates that are not conclusively defeated once majority
//! cycles are accounted for.
//!
//! ## Rule
//!
//! Candidate `b` *defeats* candidate `a` when `b` beats `a`
//! head-to-head and there is no path from `a` back to `b` in the
//! margin graph whose every edge is at least as strong as that loss.
//! A defeat inside such a cycle is "cancelled" — it is one of the
//! weakest links of a majority cycle. The undefeated candidates are
//! the SplitCycle winners. The engine only partitions candidates into
//! winners and non-winners; it never ranks the non-winners.
//!
//! ## Components
//!
//! | Component | Purpose |
//! |-----------|---------|
//! | [`BallotSet`] | Ranked ballots, one rank row per voter |
//! | [`MarginMatrix`] | Antisymmetric pairwise margins, valid by construction |
//! | [`exists_strong_path`] | Reachability oracle (breadth-first / depth-first) |
//! | [`surviving_candidates`] | Per-partition defeat pruning |
//! | [`Election`] | Facade: validate, build margins, schedule, map names |
//!
//! ## Data Flow
//!
//! ```text
//! ballots ──► MarginMatrix ──► Scheduler (fan-out)
//!                                   │
//!                     DefeatEvaluator × P partitions
//!                     (strong path oracle inside)
//!                                   │
//!                          sorted winner union ──► names
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use splitcycle_core::{elect, BallotSet, SearchStrategy};
//!
//! let ballots = BallotSet::new(vec![
//!     vec![1, 2, 3],
//!     vec![2, 1, 3],
//!     vec![1, 3, 2],
//! ])?;
//! let winners = elect(&ballots, &["A", "B", "C"], SearchStrategy::DepthFirst)?;
//! assert_eq!(winners, vec!["A"]);
//! # Ok::<(), splitcycle_core::ElectionError>(())
//! ```
//!
//! ## Concurrency
//!
//! The evaluation fans out across a fixed-size rayon pool, one task
//! per contiguous candidate partition, all sharing the margin matrix
//! read-only. The fan-in is a pure union over disjoint index ranges,
//! so the result is independent of worker count and completion order.
//! Any task failure aborts the whole call; partial winner sets are
//! never surfaced.
//!
//! ## References
//!
//! - Holliday, W. H. & Pacuit, E. (2023). "Split Cycle: a new
//!   Condorcet-consistent voting method independent of clones and
//!   immune to spoilers." *Public Choice*, 197, 1-62.

mod ballots;
mod config;
mod election;
mod error;
mod evaluate;
mod margins;
mod schedule;
mod search;

pub use ballots::BallotSet;
pub use config::ElectionConfig;
pub use election::{elect, split_cycle_winners, Election};
pub use error::ElectionError;
pub use evaluate::surviving_candidates;
pub use margins::{margins_from_ballots, MarginMatrix};
pub use search::{exists_strong_path, SearchStrategy};

/// Result type for election operations.
pub type Result<T> = std::result::Result<T, ElectionError>;
