//! Error types for ballot generation.

use thiserror::Error;

/// Errors that can occur while generating synthetic ballots.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// An election needs at least one candidate.
    #[error("at least one candidate is required")]
    NoCandidates,

    /// The spatial model needs at least one dimension.
    #[error("the spatial model requires at least one dimension")]
    NoDimensions,

    /// More candidates than a ballot rank can address.
    #[error("candidate count {0} exceeds the supported maximum of {max}", max = i32::MAX)]
    TooManyCandidates(usize),

    /// The generated rows were rejected by the ballot constructor.
    #[error(transparent)]
    Ballots(#[from] splitcycle_core::ElectionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_candidates_display() {
        let err = GeneratorError::NoCandidates;
        assert!(err.to_string().contains("at least one candidate"));
    }

    #[test]
    fn test_no_dimensions_display() {
        let err = GeneratorError::NoDimensions;
        assert!(err.to_string().contains("at least one dimension"));
    }

    #[test]
    fn test_too_many_candidates_display() {
        let err = GeneratorError::TooManyCandidates(usize::MAX);
        assert!(err.to_string().contains("exceeds the supported maximum"));
    }
}
