//! Pairwise margin matrices.
//!
//! `margins[i][j]` is the net number of ballots preferring candidate
//! `i` over candidate `j`, minus the reverse. A valid margin matrix is
//! square, antisymmetric (`margins[i][j] == -margins[j][i]`) and has a
//! zero diagonal. The matrix doubles as a directed graph: the edge
//! `i -> j` carries weight `margins[i][j]`.

use serde::Serialize;

use crate::ballots::BallotSet;
use crate::error::ElectionError;
use crate::Result;

/// Absolute tolerance used when checking the margin invariants on
/// caller-supplied matrices.
const INVARIANT_TOLERANCE: f64 = 1e-9;

/// An immutable n x n pairwise margin matrix.
///
/// Valid by construction: [`MarginMatrix::from_rows`] validates the
/// margin invariants up front, and [`MarginMatrix::from_ballots`]
/// guarantees them structurally. Every search therefore runs on an
/// already-validated matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarginMatrix {
    /// Number of candidates (matrix dimension).
    n: usize,
    /// Row-major entries, `values[i * n + j] == margins[i][j]`.
    values: Vec<f64>,
}

impl MarginMatrix {
    /// Creates a margin matrix from raw rows, validating the margin
    /// invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ElectionError::MalformedMargins`] naming the failed
    /// property if the input is not square, not antisymmetric, or has
    /// a nonzero diagonal.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(ElectionError::MalformedMargins(format!(
                    "not square: {} rows but row {} has {} entries",
                    n,
                    i,
                    row.len()
                )));
            }
        }
        // Comparisons are negated so NaN entries fail validation.
        for (i, row) in rows.iter().enumerate() {
            if !(row[i].abs() <= INVARIANT_TOLERANCE) {
                return Err(ElectionError::MalformedMargins(format!(
                    "nonzero diagonal at candidate {}",
                    i
                )));
            }
            for j in (i + 1)..n {
                if !((row[j] + rows[j][i]).abs() <= INVARIANT_TOLERANCE) {
                    return Err(ElectionError::MalformedMargins(format!(
                        "antisymmetry violated between candidates {} and {}",
                        i, j
                    )));
                }
            }
        }
        let values = rows.into_iter().flatten().collect();
        Ok(Self { n, values })
    }

    /// Builds the margin matrix for a ballot set.
    ///
    /// Each ballot contributes, for every ordered pair `(i, j)`, +1 to
    /// `margins[i][j]` when it ranks `i` strictly better than `j`, -1
    /// when strictly worse, and 0 on a tie. The construction is
    /// antisymmetric with a zero diagonal by definition. O(m * n^2).
    pub fn from_ballots(ballots: &BallotSet) -> Self {
        let n = ballots.candidate_count();
        let mut values = vec![0.0; n * n];
        for ballot in ballots.rows() {
            for i in 0..n {
                for j in (i + 1)..n {
                    match ballot[i].cmp(&ballot[j]) {
                        std::cmp::Ordering::Less => {
                            values[i * n + j] += 1.0;
                            values[j * n + i] -= 1.0;
                        }
                        std::cmp::Ordering::Greater => {
                            values[i * n + j] -= 1.0;
                            values[j * n + i] += 1.0;
                        }
                        std::cmp::Ordering::Equal => {}
                    }
                }
            }
        }
        Self { n, values }
    }

    /// Returns the number of candidates.
    pub fn candidate_count(&self) -> usize {
        self.n
    }

    /// Returns the margin of candidate `i` over candidate `j`.
    pub fn margin(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Returns row `i`: the outgoing edge weights of candidate `i`.
    pub(crate) fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }
}

/// Builds the margin matrix for a ballot set.
///
/// Free-function spelling of [`MarginMatrix::from_ballots`].
pub fn margins_from_ballots(ballots: &BallotSet) -> MarginMatrix {
    MarginMatrix::from_ballots(ballots)
}
