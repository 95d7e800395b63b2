//! Euclidean spatial ballot model.
//!
//! Candidates and voters are points drawn uniformly from the
//! `[-1, 1]` hypercube; each voter ranks candidates by ascending
//! Euclidean distance from their own position.

use rand::Rng;
use splitcycle_core::BallotSet;

use crate::error::GeneratorError;
use crate::Result;

/// Generates `voters` ballots over `candidates` candidates from a
/// spatial (Euclidean) preference model in `dimensions` dimensions.
///
/// Rank 1 goes to the nearest candidate; ranks are a permutation of
/// `1..=candidates` per ballot (distance ties are broken by candidate
/// index).
///
/// # Errors
///
/// Returns [`GeneratorError::NoCandidates`] when `candidates == 0`,
/// [`GeneratorError::NoDimensions`] when `dimensions == 0`, and
/// [`GeneratorError::TooManyCandidates`] when the count does not fit
/// a ballot rank.
pub fn spatial<R: Rng + ?Sized>(
    rng: &mut R,
    voters: usize,
    candidates: usize,
    dimensions: usize,
) -> Result<BallotSet> {
    if candidates == 0 {
        return Err(GeneratorError::NoCandidates);
    }
    if dimensions == 0 {
        return Err(GeneratorError::NoDimensions);
    }
    if i32::try_from(candidates).is_err() {
        return Err(GeneratorError::TooManyCandidates(candidates));
    }

    let positions: Vec<Vec<f64>> = (0..candidates)
        .map(|_| sample_point(rng, dimensions))
        .collect();

    let mut rows = Vec::with_capacity(voters);
    for _ in 0..voters {
        let voter = sample_point(rng, dimensions);
        let mut by_distance: Vec<usize> = (0..candidates).collect();
        by_distance.sort_by(|&a, &b| {
            distance_squared(&voter, &positions[a])
                .total_cmp(&distance_squared(&voter, &positions[b]))
        });

        let mut ranks = vec![0; candidates];
        for (position, &candidate) in by_distance.iter().enumerate() {
            ranks[candidate] = position as i32 + 1;
        }
        rows.push(ranks);
    }

    Ok(BallotSet::new(rows)?)
}

/// Draws one point uniformly from the `[-1, 1]` hypercube.
fn sample_point<R: Rng + ?Sized>(rng: &mut R, dimensions: usize) -> Vec<f64> {
    (0..dimensions).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// Squared Euclidean distance; the square root is monotone, so
/// ranking by the square ranks by distance.
fn distance_squared(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}
