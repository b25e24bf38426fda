use crate::error::PersistenceError;
use crate::model::{RoundOutcome, StatisticsRecord};
use log::{trace, warn};
use std::fs;
use std::path::{Path, PathBuf};

const STATS_FILE: &str = "statistics.json";

/// Durable home of the [`StatisticsRecord`]. Loaded once at startup and
/// rewritten whole after every completed round, so the file on disk is
/// never ahead of or behind the process by more than one round.
#[derive(Debug)]
pub struct StatsStore {
    path: PathBuf,
    record: StatisticsRecord,
}

impl StatsStore {
    pub fn open_default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hilo");
        Self::open(data_dir.join(STATS_FILE))
    }

    pub fn open(path: PathBuf) -> Self {
        let record = Self::load(&path);
        Self { path, record }
    }

    /// Reading trouble is never fatal: a missing file is a fresh start and
    /// anything unreadable degrades to defaults with a warning.
    fn load(path: &Path) -> StatisticsRecord {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(record) => {
                    trace!(target: "stats_store", "Loaded statistics from {}", path.display());
                    record
                }
                Err(e) => {
                    warn!(
                        target: "stats_store",
                        "Could not parse statistics file {}: {}; starting from defaults",
                        path.display(),
                        e
                    );
                    StatisticsRecord::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StatisticsRecord::default(),
            Err(e) => {
                warn!(
                    target: "stats_store",
                    "Could not read statistics file {}: {}; starting from defaults",
                    path.display(),
                    e
                );
                StatisticsRecord::default()
            }
        }
    }

    pub fn record(&self) -> &StatisticsRecord {
        &self.record
    }

    /// Folds one finished round into the record and persists it before
    /// returning, so a crash right after the round cannot lose it.
    pub fn record_round(
        &mut self,
        outcome: RoundOutcome,
        attempts: u32,
        target: i64,
        used_numbers: Vec<i64>,
    ) -> Result<(), PersistenceError> {
        self.record.record(outcome, attempts, target, used_numbers);
        self.save()
    }

    pub fn save(&self) -> Result<(), PersistenceError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(&self.record)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
