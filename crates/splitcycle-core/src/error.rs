//! Error types for the SplitCycle engine.
//!
//! All validation is synchronous and fail-fast: malformed input is
//! rejected before any search or parallel dispatch begins.

use thiserror::Error;

/// Errors that can occur while determining SplitCycle winners.
#[derive(Debug, Error)]
pub enum ElectionError {
    /// The supplied margin matrix violates a structural invariant.
    ///
    /// The message names the property that failed: not square,
    /// antisymmetry violated, or nonzero diagonal.
    #[error("malformed margins: {0}")]
    MalformedMargins(String),

    /// Ballot rows disagree on the number of candidates.
    #[error("malformed ballots: row {row} ranks {found} candidates, expected {expected}")]
    MalformedBallots {
        /// Index of the offending ballot row.
        row: usize,
        /// Candidate count established by the first row.
        expected: usize,
        /// Candidate count found on the offending row.
        found: usize,
    },

    /// The ballot set and the candidate name list disagree on the
    /// number of candidates.
    #[error("candidate count mismatch: ballots rank {ballots} candidates but {names} names were supplied")]
    CandidateCountMismatch {
        /// Candidate count according to the ballots.
        ballots: usize,
        /// Number of candidate names supplied.
        names: usize,
    },

    /// A partition task failed. The whole election is aborted; no
    /// partial winner set is ever surfaced.
    #[error("worker failed while evaluating candidates {start}..{end}: {reason}")]
    WorkerFailure {
        /// Start of the partition the worker was assigned.
        start: usize,
        /// End (exclusive) of the partition.
        end: usize,
        /// What went wrong.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_margins_display() {
        let err = ElectionError::MalformedMargins("nonzero diagonal at candidate 2".to_string());
        assert!(err.to_string().contains("nonzero diagonal"));
        assert!(err.to_string().contains("malformed margins"));
    }

    #[test]
    fn test_malformed_ballots_display() {
        let err = ElectionError::MalformedBallots {
            row: 3,
            expected: 5,
            found: 4,
        };
        assert!(err.to_string().contains("row 3"));
        assert!(err.to_string().contains("expected 5"));
    }

    #[test]
    fn test_candidate_count_mismatch_display() {
        let err = ElectionError::CandidateCountMismatch {
            ballots: 5,
            names: 4,
        };
        assert!(err.to_string().contains("5 candidates"));
        assert!(err.to_string().contains("4 names"));
    }

    #[test]
    fn test_worker_failure_display() {
        let err = ElectionError::WorkerFailure {
            start: 0,
            end: 3,
            reason: "considered range out of bounds".to_string(),
        };
        assert!(err.to_string().contains("0..3"));
        assert!(err.to_string().contains("out of bounds"));
    }
}
