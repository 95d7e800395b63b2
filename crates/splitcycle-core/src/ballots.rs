//! Ranked ballot sets.
//!
//! A ballot assigns a rank to every candidate: lower rank = more
//! preferred, equal ranks denote a tie. Unranked candidates must all
//! carry an equal rank strictly greater than the rank of the least
//! preferred ranked candidate, so every row always covers the full
//! candidate set.

use serde::Serialize;

use crate::error::ElectionError;
use crate::Result;

/// An immutable set of ranked ballots, one row per voter.
///
/// Every row ranks the same number of candidates; the constructor
/// rejects ragged input before any computation happens.
///
/// # Example
///
/// ```rust
/// use splitcycle_core::BallotSet;
///
/// let ballots = BallotSet::new(vec![
///     // candidates are A, B, C, D
///     vec![1, 2, 3, 4], // ranked in sequential order
///     vec![3, 1, 1, 2], // B and C tied for first place
///     vec![1, 1, 1, 2], // A, B, C tied, D unranked
/// ])?;
/// assert_eq!(ballots.ballot_count(), 3);
/// assert_eq!(ballots.candidate_count(), 4);
/// # Ok::<(), splitcycle_core::ElectionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BallotSet {
    /// Number of candidates ranked by every row.
    candidates: usize,
    /// Rank rows, one per voter.
    rows: Vec<Vec<i32>>,
}

impl BallotSet {
    /// Creates a ballot set from rank rows.
    ///
    /// # Errors
    ///
    /// Returns [`ElectionError::MalformedBallots`] if any row ranks a
    /// different number of candidates than the first row.
    pub fn new(rows: Vec<Vec<i32>>) -> Result<Self> {
        let candidates = rows.first().map_or(0, Vec::len);
        for (row, ballot) in rows.iter().enumerate() {
            if ballot.len() != candidates {
                return Err(ElectionError::MalformedBallots {
                    row,
                    expected: candidates,
                    found: ballot.len(),
                });
            }
        }
        Ok(Self { candidates, rows })
    }

    /// Returns the number of ballots (voters).
    pub fn ballot_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of candidates ranked by each ballot.
    pub fn candidate_count(&self) -> usize {
        self.candidates
    }

    /// Returns the rank rows.
    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_rows_accepted() {
        let ballots = BallotSet::new(vec![vec![1, 2, 3], vec![3, 2, 1]]).unwrap();
        assert_eq!(ballots.ballot_count(), 2);
        assert_eq!(ballots.candidate_count(), 3);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = BallotSet::new(vec![vec![1, 2, 3], vec![1, 2]]).unwrap_err();
        match err {
            ElectionError::MalformedBallots {
                row,
                expected,
                found,
            } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected MalformedBallots, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_set() {
        let ballots = BallotSet::new(Vec::new()).unwrap();
        assert_eq!(ballots.ballot_count(), 0);
        assert_eq!(ballots.candidate_count(), 0);
    }

    #[test]
    fn test_ties_and_unranked_are_just_ranks() {
        // Ties and unranked candidates are expressed purely through
        // rank values; the set itself places no further constraint.
        let ballots = BallotSet::new(vec![vec![1, 1, 1, 2]]).unwrap();
        assert_eq!(ballots.rows()[0], vec![1, 1, 1, 2]);
    }
}
