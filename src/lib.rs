//! Weighted dice-game simulation with descriptive statistics.
//!
//! A [`Die`] holds distinct face labels with mutable weights, a [`Game`]
//! rolls a collection of dice together into a result table, and an
//! [`Analyzer`] tabulates the outcomes (jackpots, face frequencies,
//! combination and permutation counts).

mod analyzer;
pub mod defs;
mod die;
mod error;
mod face;
mod game;
mod table;

pub use analyzer::Analyzer;
pub use die::Die;
pub use error::{Error, Result};
pub use face::Face;
pub use game::Game;
pub use table::{CountTable, FaceCounts, NarrowRecord, RollTable};
