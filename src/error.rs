use thiserror::Error;

/// Everything that can go wrong while building dice, playing games or
/// analyzing results. Face payloads are captured as their `Debug`
/// rendering so the enum stays non-generic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("die must have at least one face")]
    EmptyFaces,
    #[error("die faces must be distinct, found {0} twice")]
    DuplicateFace(String),
    #[error("weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),
    #[error("no face {0} on this die")]
    UnknownFace(String),
    #[error("all face weights are zero")]
    ZeroWeightSum,
    #[error("game must have at least one die")]
    NoDice,
    #[error("no results yet, play the game first")]
    NoResults,
}

pub type Result<T> = core::result::Result<T, Error>;
