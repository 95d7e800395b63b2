//! # SplitCycle Ballots
//!
//! Synthetic ballot generators for exercising the SplitCycle engine.
//! The engine only consumes the ballot shape; these models are one way
//! of producing it.
//!
//! ## Models
//!
//! | Model | Behavior |
//! |-------|----------|
//! | [`impartial_culture`] | Uniform independent rankings, with or without ties |
//! | [`spatial`] | Voters rank candidates by Euclidean distance in n dimensions |
//!
//! ## Usage
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use splitcycle_ballots::impartial_culture;
//! use splitcycle_core::{elect, SearchStrategy};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let ballots = impartial_culture(&mut rng, 100, 5, false)?;
//! let names = ["A", "B", "C", "D", "E"];
//! let winners = elect(&ballots, &names, SearchStrategy::DepthFirst)?;
//! assert!(!winners.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The caller supplies the `Rng`, so seeded `StdRng` instances make
//! every generated election reproducible.

mod error;
mod impartial;
mod spatial;

pub use error::GeneratorError;
pub use impartial::impartial_culture;
pub use spatial::spatial;

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;
