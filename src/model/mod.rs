mod difficulty;
mod input;
mod session;
mod statistics;

pub use difficulty::Difficulty;
pub use input::{classify, Command, Confirm, RawInput};
pub use session::{Feedback, Hint, Phase, Session, Submission, HINT_UNLOCK_ATTEMPTS};
pub use statistics::{HistoryEntry, RoundOutcome, StatisticsRecord, StatsSummary, HISTORY_LIMIT};
