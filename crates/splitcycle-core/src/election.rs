//! Election facade.
//!
//! Wires the components together: validate the ballot/name contract,
//! build the margin matrix, schedule the parallel defeat evaluation,
//! and map winner indices back to candidate identities.

use std::ops::Range;

use tracing::{debug, info};

use crate::ballots::BallotSet;
use crate::config::ElectionConfig;
use crate::error::ElectionError;
use crate::margins::MarginMatrix;
use crate::schedule::elect_indices;
use crate::search::SearchStrategy;
use crate::Result;

/// SplitCycle election runner.
///
/// # Example
///
/// ```rust
/// use splitcycle_core::{BallotSet, Election, ElectionConfig};
///
/// let ballots = BallotSet::new(vec![
///     vec![1, 2, 3],
///     vec![1, 3, 2],
///     vec![2, 1, 3],
/// ])?;
/// let election = Election::new(ElectionConfig::new());
/// let winners = election.elect(&ballots, &["Ada", "Grace", "Edsger"])?;
/// assert_eq!(winners, vec!["Ada"]);
/// # Ok::<(), splitcycle_core::ElectionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Election {
    /// Worker count and search strategy.
    config: ElectionConfig,
}

impl Election {
    /// Creates an election runner with the given configuration.
    pub fn new(config: ElectionConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ElectionConfig {
        &self.config
    }

    /// Determines the SplitCycle winners for a ballot set, returning
    /// winning candidates' names sorted by candidate index.
    ///
    /// # Errors
    ///
    /// Returns [`ElectionError::CandidateCountMismatch`] before any
    /// margin construction if `candidates` does not match the ballot
    /// set's candidate axis, and propagates any worker failure.
    pub fn elect<T: Clone>(&self, ballots: &BallotSet, candidates: &[T]) -> Result<Vec<T>> {
        if ballots.candidate_count() != candidates.len() {
            return Err(ElectionError::CandidateCountMismatch {
                ballots: ballots.candidate_count(),
                names: candidates.len(),
            });
        }

        debug!(
            "electing among {} candidate(s) from {} ballot(s)",
            candidates.len(),
            ballots.ballot_count()
        );

        let margins = MarginMatrix::from_ballots(ballots);
        let winners = self.winners(&margins)?;

        info!("{} of {} candidate(s) won", winners.len(), candidates.len());
        Ok(winners.into_iter().map(|i| candidates[i].clone()).collect())
    }

    /// Determines the SplitCycle winners over the full candidate range
    /// of a margin matrix, as sorted indices.
    pub fn winners(&self, margins: &MarginMatrix) -> Result<Vec<usize>> {
        self.winners_among(margins, 0..margins.candidate_count())
    }

    /// Determines the SplitCycle winners among a contiguous subset of
    /// candidates. Defeats are still judged against the entire
    /// candidate set.
    pub fn winners_among(
        &self,
        margins: &MarginMatrix,
        considered: Range<usize>,
    ) -> Result<Vec<usize>> {
        elect_indices(margins, considered, &self.config)
    }
}

/// Determines SplitCycle winners for a ballot set with the default
/// worker count, returning winning candidates' names.
///
/// Convenience wrapper over [`Election`] mirroring the one-shot call
/// shape; `strategy` selects the strong path traversal.
pub fn elect<T: Clone>(
    ballots: &BallotSet,
    candidates: &[T],
    strategy: SearchStrategy,
) -> Result<Vec<T>> {
    Election::new(ElectionConfig::new().with_strategy(strategy)).elect(ballots, candidates)
}

/// Determines SplitCycle winners over the full candidate range of a
/// margin matrix with the default worker count, as sorted indices.
///
/// To evaluate only a subset of candidates (still judged against all
/// opponents), use [`Election::winners_among`].
pub fn split_cycle_winners(margins: &MarginMatrix, strategy: SearchStrategy) -> Result<Vec<usize>> {
    Election::new(ElectionConfig::new().with_strategy(strategy)).winners(margins)
}
