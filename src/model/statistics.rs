use chrono::Local;
use serde::{Deserialize, Serialize};

/// Oldest history entries are evicted once the log grows past this.
pub const HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    Win,
    #[serde(rename = "lose")]
    Loss,
}

/// One completed round, as persisted in the statistics file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String,
    pub target: i64,
    pub attempts: u32,
    pub result: RoundOutcome,
    pub used_numbers: Vec<i64>,
}

/// Aggregate play statistics. Every field carries a serde default so a file
/// written by an older version still loads; unknown best scores are an
/// absent key, not a sentinel value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsRecord {
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub games_won: u32,
    #[serde(default)]
    pub total_attempts: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_score: Option<u32>,
    #[serde(default)]
    pub win_streak: u32,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// Renderable digest of a non-empty record.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub games_played: u32,
    pub games_won: u32,
    pub win_rate: f64,
    pub best_score: Option<u32>,
    pub mean_attempts: Option<f64>,
    pub current_streak: u32,
    pub win_streak: u32,
}

impl StatisticsRecord {
    /// Folds one finished round into the counters and the history log.
    pub fn record(
        &mut self,
        outcome: RoundOutcome,
        attempts: u32,
        target: i64,
        used_numbers: Vec<i64>,
    ) {
        self.games_played += 1;

        match outcome {
            RoundOutcome::Win => {
                self.games_won += 1;
                self.total_attempts += u64::from(attempts);
                self.current_streak += 1;
                self.win_streak = self.win_streak.max(self.current_streak);
                self.best_score = Some(match self.best_score {
                    Some(best) => best.min(attempts),
                    None => attempts,
                });
            }
            RoundOutcome::Loss => {
                self.current_streak = 0;
            }
        }

        self.history.push(HistoryEntry {
            date: Local::now().to_rfc3339(),
            target,
            attempts,
            result: outcome,
            used_numbers,
        });
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
    }

    /// `None` when nothing has been played yet; the caller renders that as
    /// a "no data" message rather than dividing by zero here.
    pub fn summarize(&self) -> Option<StatsSummary> {
        if self.games_played == 0 {
            return None;
        }

        let win_rate = f64::from(self.games_won) / f64::from(self.games_played) * 100.0;
        let mean_attempts = if self.games_won > 0 {
            Some(self.total_attempts as f64 / f64::from(self.games_won))
        } else {
            None
        };

        Some(StatsSummary {
            games_played: self.games_played,
            games_won: self.games_won,
            win_rate,
            best_score: self.best_score,
            mean_attempts,
            current_streak: self.current_streak,
            win_streak: self.win_streak,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_updates_all_counters() {
        let mut record = StatisticsRecord::default();
        record.record(RoundOutcome::Win, 5, 42, vec![10, 80, 42]);

        assert_eq!(record.games_played, 1);
        assert_eq!(record.games_won, 1);
        assert_eq!(record.total_attempts, 5);
        assert_eq!(record.best_score, Some(5));
        assert_eq!(record.current_streak, 1);
        assert_eq!(record.win_streak, 1);
        assert_eq!(record.history.len(), 1);
        assert_eq!(record.history[0].result, RoundOutcome::Win);
        assert_eq!(record.history[0].used_numbers, vec![10, 80, 42]);
    }

    #[test]
    fn test_best_score_only_improves() {
        let mut record = StatisticsRecord::default();
        record.record(RoundOutcome::Win, 5, 42, vec![]);
        record.record(RoundOutcome::Win, 3, 17, vec![]);
        assert_eq!(record.best_score, Some(3));
        record.record(RoundOutcome::Win, 6, 90, vec![]);
        assert_eq!(record.best_score, Some(3));
    }

    #[test]
    fn test_loss_resets_current_streak_but_not_best() {
        let mut record = StatisticsRecord::default();
        record.record(RoundOutcome::Win, 4, 10, vec![]);
        record.record(RoundOutcome::Win, 4, 11, vec![]);
        assert_eq!(record.current_streak, 2);

        record.record(RoundOutcome::Loss, 7, 12, vec![]);
        assert_eq!(record.current_streak, 0);
        assert_eq!(record.win_streak, 2);
        assert_eq!(record.games_played, 3);
        assert_eq!(record.games_won, 2);
    }

    #[test]
    fn test_record_is_monotonic() {
        let mut record = StatisticsRecord::default();
        for i in 0..20 {
            let before = record.games_played;
            let outcome = if i % 3 == 0 {
                RoundOutcome::Loss
            } else {
                RoundOutcome::Win
            };
            record.record(outcome, 3, i, vec![]);
            assert_eq!(record.games_played, before + 1);
            assert!(record.games_won <= record.games_played);
        }
    }

    #[test]
    fn test_history_evicts_oldest_first() {
        let mut record = StatisticsRecord::default();
        for target in 0..(HISTORY_LIMIT as i64 + 5) {
            record.record(RoundOutcome::Loss, 1, target, vec![]);
        }

        assert_eq!(record.history.len(), HISTORY_LIMIT);
        assert_eq!(record.history[0].target, 5);
        assert_eq!(
            record.history[HISTORY_LIMIT - 1].target,
            HISTORY_LIMIT as i64 + 4
        );
    }

    #[test]
    fn test_summarize_fresh_record_has_no_data() {
        assert_eq!(StatisticsRecord::default().summarize(), None);
    }

    #[test]
    fn test_summarize_without_wins_skips_mean() {
        let mut record = StatisticsRecord::default();
        record.record(RoundOutcome::Loss, 7, 3, vec![]);

        let summary = record.summarize().expect("played at least one game");
        assert_eq!(summary.games_played, 1);
        assert_eq!(summary.win_rate, 0.0);
        assert_eq!(summary.best_score, None);
        assert_eq!(summary.mean_attempts, None);
    }

    #[test]
    fn test_summarize_values() {
        let mut record = StatisticsRecord::default();
        record.record(RoundOutcome::Win, 4, 10, vec![]);
        record.record(RoundOutcome::Win, 6, 11, vec![]);
        record.record(RoundOutcome::Loss, 7, 12, vec![]);
        record.record(RoundOutcome::Win, 2, 13, vec![]);

        let summary = record.summarize().expect("non-empty record");
        assert_eq!(summary.games_played, 4);
        assert_eq!(summary.games_won, 3);
        assert_eq!(summary.win_rate, 75.0);
        assert_eq!(summary.best_score, Some(2));
        assert_eq!(summary.mean_attempts, Some(4.0));
        assert_eq!(summary.current_streak, 1);
        assert_eq!(summary.win_streak, 2);
    }

    #[test]
    fn test_serialized_field_names_match_schema() {
        let mut record = StatisticsRecord::default();
        record.record(RoundOutcome::Loss, 2, 9, vec![4, 6]);

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&record).expect("serializes"))
                .expect("valid json");
        assert_eq!(json["games_played"], 1);
        assert_eq!(json["history"][0]["result"], "lose");
        assert_eq!(json["history"][0]["used_numbers"][1], 6);
        // unset best score stays an absent key, never a sentinel
        assert!(json.get("best_score").is_none());
    }

    #[test]
    fn test_missing_keys_fill_from_defaults() {
        let record: StatisticsRecord =
            serde_json::from_str(r#"{"games_played": 3, "games_won": 1}"#).expect("partial file");
        assert_eq!(record.games_played, 3);
        assert_eq!(record.games_won, 1);
        assert_eq!(record.best_score, None);
        assert_eq!(record.history.len(), 0);
        assert_eq!(record.win_streak, 0);
    }
}
