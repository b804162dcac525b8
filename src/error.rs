use std::num::ParseIntError;

/// Errors raised while configuring the transform.  Enciphering a block
/// never fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("round count must be at least 1, got {rounds}")]
    InvalidRoundCount { rounds: i64 },
    #[error("round count {rounds} does not fit in 32 bits")]
    RoundCountOutOfRange { rounds: i64 },
    #[error("round count is not an integer: {0}")]
    ParseRounds(#[from] ParseIntError),
}
