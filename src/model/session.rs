use crate::error::{GameError, GuessError};
use crate::model::input::{classify, Command, RawInput};
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Proximity hints only unlock after this many accepted guesses.
pub const HINT_UNLOCK_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Won,
    Lost,
    Abandoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Win,
    TooLow,
    TooHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    VeryClose,
    FairlyClose,
    Parity { even: bool },
}

/// What a line of prompt input turned into once accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Command(Command),
    Accepted(i64),
}

/// One round of the guessing game. Created fresh per round and discarded
/// once the phase leaves `InProgress`.
#[derive(Debug, Clone)]
pub struct Session {
    lower: i64,
    upper: i64,
    ceiling: u32,
    target: i64,
    attempts: u32,
    used_guesses: Vec<i64>,
    phase: Phase,
}

impl Session {
    /// Starts a round with a uniformly random target in `[lower, upper]`.
    /// A seed makes the target reproducible; the round loop passes one
    /// through when the `SEED` environment variable is set.
    pub fn start(
        lower: i64,
        upper: i64,
        ceiling: u32,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        if lower >= upper {
            return Err(GameError::InvalidBounds { lower, upper });
        }
        if ceiling == 0 {
            return Err(GameError::InvalidCeiling);
        }

        let target = match seed {
            Some(seed) => StdRng::seed_from_u64(seed).random_range(lower..=upper),
            None => rand::rng().random_range(lower..=upper),
        };
        trace!(target: "session", "New round: target {} in {}..={}, ceiling {}", target, lower, upper, ceiling);

        Ok(Self {
            lower,
            upper,
            ceiling,
            target,
            attempts: 0,
            used_guesses: Vec::new(),
            phase: Phase::InProgress,
        })
    }

    #[cfg(test)]
    pub fn with_target(lower: i64, upper: i64, ceiling: u32, target: i64) -> Self {
        Self {
            lower,
            upper,
            ceiling,
            target,
            attempts: 0,
            used_guesses: Vec::new(),
            phase: Phase::InProgress,
        }
    }

    pub fn lower(&self) -> i64 {
        self.lower
    }

    pub fn upper(&self) -> i64 {
        self.upper
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn used_guesses(&self) -> &[i64] {
        &self.used_guesses
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase != Phase::InProgress
    }

    /// Classifies one line of prompt input. Control commands pass through
    /// untouched; candidate guesses are validated in order (format, range,
    /// repeat) and only an accepted guess consumes an attempt.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Submission, GuessError> {
        let candidate = match classify(raw) {
            RawInput::Command(command) => return Ok(Submission::Command(command)),
            RawInput::Candidate(text) => text,
        };

        let guess: i64 = candidate.parse().map_err(|_| GuessError::InvalidFormat)?;

        if guess < self.lower || guess > self.upper {
            return Err(GuessError::OutOfRange {
                lower: self.lower,
                upper: self.upper,
            });
        }
        if self.used_guesses.contains(&guess) {
            return Err(GuessError::Duplicate(guess));
        }

        self.attempts += 1;
        self.used_guesses.push(guess);
        Ok(Submission::Accepted(guess))
    }

    /// Compares an accepted guess against the target. A hit ends the round
    /// as `Won`; a miss that exhausts the ceiling ends it as `Lost`.
    pub fn evaluate(&mut self, guess: i64) -> Feedback {
        if guess == self.target {
            self.phase = Phase::Won;
            return Feedback::Win;
        }

        let feedback = if guess < self.target {
            Feedback::TooLow
        } else {
            Feedback::TooHigh
        };

        if self.attempts >= self.ceiling {
            trace!(target: "session", "Ceiling of {} reached, round lost", self.ceiling);
            self.phase = Phase::Lost;
        }
        feedback
    }

    /// Post-miss hint policy. At most one tier fires, checked in order:
    /// within 10% of the range, within 25%, or target parity when exactly
    /// one attempt remains.
    pub fn hint(&self, guess: i64) -> Option<Hint> {
        if self.attempts < HINT_UNLOCK_ATTEMPTS {
            return None;
        }

        // abs_diff keeps the math in u64; plain subtraction overflows on
        // custom bounds spanning more than half the i64 range
        let difference = guess.abs_diff(self.target) as f64;
        let range_size = self.upper.abs_diff(self.lower) as f64;

        if difference <= range_size * 0.10 {
            Some(Hint::VeryClose)
        } else if difference <= range_size * 0.25 {
            Some(Hint::FairlyClose)
        } else if self.attempts + 1 == self.ceiling {
            Some(Hint::Parity {
                even: self.target % 2 == 0,
            })
        } else {
            None
        }
    }

    /// Explicit quit mid-round. No statistics are written for an
    /// abandoned session.
    pub fn abandon(&mut self) {
        self.phase = Phase::Abandoned;
    }
}
