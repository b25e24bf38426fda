use thiserror::Error;

/// Rejections of a single guess. None of these consume an attempt; the
/// player is simply re-prompted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter a whole number!")]
    InvalidFormat,
    #[error("The number must be between {lower} and {upper}!")]
    OutOfRange { lower: i64, upper: i64 },
    #[error("You already tried {0}! Pick a different number.")]
    Duplicate(i64),
}

/// Difficulty configuration rejected before a session starts.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("The lower bound {lower} must be below the upper bound {upper}!")]
    InvalidBounds { lower: i64, upper: i64 },
    #[error("The attempt limit must be at least 1!")]
    InvalidCeiling,
}

/// Statistics file trouble. Always non-fatal: load degrades to defaults,
/// save degrades to a warning.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("could not access statistics file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed statistics file: {0}")]
    Malformed(#[from] serde_json::Error),
}
