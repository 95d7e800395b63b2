//! Impartial culture ballot model.
//!
//! Every voter's ranking is drawn uniformly and independently. With
//! ties enabled each candidate gets an independent uniform rank in
//! `1..=candidates`; without ties each ballot is a uniform random
//! permutation of `1..=candidates`.

use rand::seq::SliceRandom;
use rand::Rng;
use splitcycle_core::BallotSet;

use crate::error::GeneratorError;
use crate::Result;

/// Generates `voters` random ballots over `candidates` candidates
/// according to the impartial culture model.
///
/// Ranks always lie in `1..=candidates`, so the output feeds straight
/// into `splitcycle_core::elect`.
///
/// # Errors
///
/// Returns [`GeneratorError::NoCandidates`] when `candidates == 0`,
/// and [`GeneratorError::TooManyCandidates`] when the count does not
/// fit a ballot rank.
pub fn impartial_culture<R: Rng + ?Sized>(
    rng: &mut R,
    voters: usize,
    candidates: usize,
    ties: bool,
) -> Result<BallotSet> {
    if candidates == 0 {
        return Err(GeneratorError::NoCandidates);
    }
    let max_rank =
        i32::try_from(candidates).map_err(|_| GeneratorError::TooManyCandidates(candidates))?;

    let mut rows = Vec::with_capacity(voters);
    for _ in 0..voters {
        let row = if ties {
            (0..candidates).map(|_| rng.gen_range(1..=max_rank)).collect()
        } else {
            let mut ranks: Vec<i32> = (1..=max_rank).collect();
            ranks.shuffle(rng);
            ranks
        };
        rows.push(row);
    }

    Ok(BallotSet::new(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let ballots = impartial_culture(&mut rng, 20, 6, true).unwrap();
        assert_eq!(ballots.ballot_count(), 20);
        assert_eq!(ballots.candidate_count(), 6);
    }

    #[test]
    fn test_without_ties_every_row_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let ballots = impartial_culture(&mut rng, 50, 5, false).unwrap();
        for row in ballots.rows() {
            let mut sorted = row.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_with_ties_ranks_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let ballots = impartial_culture(&mut rng, 50, 4, true).unwrap();
        for row in ballots.rows() {
            assert!(row.iter().all(|&r| (1..=4).contains(&r)));
        }
    }

    #[test]
    fn test_seed_reproducibility() {
        let a = impartial_culture(&mut StdRng::seed_from_u64(42), 30, 5, true).unwrap();
        let b = impartial_culture(&mut StdRng::seed_from_u64(42), 30, 5, true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_candidates_rejected() {
        let err = impartial_culture(&mut StdRng::seed_from_u64(0), 5, 0, true).unwrap_err();
        assert!(matches!(err, GeneratorError::NoCandidates));
    }

    #[test]
    fn test_candidate_count_beyond_rank_range_rejected() {
        let too_many = i32::MAX as usize + 1;
        let err =
            impartial_culture(&mut StdRng::seed_from_u64(0), 1, too_many, true).unwrap_err();
        assert!(matches!(err, GeneratorError::TooManyCandidates(_)));
    }
}
