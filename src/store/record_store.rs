//! JSON-backed workout log. Sole reader and writer of the data file.
//!
//! Reads are fail-open: anything unreadable is an empty history. Writes
//! are whole-file rewrites and their failures are always surfaced.
//!
//! There is no file locking. Two processes writing the same file are
//! last-writer-wins.

use super::fs_utils::write_replace;
use crate::errors::{AppError, AppResult};
use crate::models::workout::{WorkoutLog, WorkoutRecord};
use crate::utils::date;
use chrono::NaiveDate;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole log. Never fails.
    pub fn load(&self) -> WorkoutLog {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), error = %e, "cannot read workout file, starting empty");
                }
                return WorkoutLog::default();
            }
        };

        if content.trim().is_empty() {
            return WorkoutLog::default();
        }

        let doc: Value = match serde_json::from_str(&content) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "workout file is not valid JSON, starting empty");
                return WorkoutLog::default();
            }
        };

        let Value::Object(mut extra) = doc else {
            tracing::warn!(path = %self.path.display(), "workout file is not a JSON object, starting empty");
            return WorkoutLog::default();
        };

        let entries = match extra.remove("workouts") {
            Some(Value::Array(entries)) => entries,
            _ => {
                tracing::warn!(path = %self.path.display(), "workout file has no `workouts` list, starting empty");
                return WorkoutLog::default();
            }
        };

        let log = WorkoutLog::from_raw(entries, extra);
        tracing::debug!(count = log.len(), "workouts loaded");

        log
    }

    /// Rewrite the whole file with `log`.
    pub fn save(&self, log: &WorkoutLog) -> AppResult<()> {
        let json = serde_json::to_string_pretty(&log.to_document())
            .map_err(|e| self.write_error(e.into()))?;

        write_replace(&self.path, json.as_bytes()).map_err(|e| self.write_error(e))?;

        tracing::debug!(path = %self.path.display(), count = log.len(), "workouts saved");
        Ok(())
    }

    /// Append a session dated today.
    pub fn append(&self, completed: bool, kind: &str, comment: &str) -> AppResult<WorkoutRecord> {
        self.append_on(date::today(), completed, kind, comment)
    }

    /// Append a session with an explicit date.
    pub fn append_on(
        &self,
        date: NaiveDate,
        completed: bool,
        kind: &str,
        comment: &str,
    ) -> AppResult<WorkoutRecord> {
        let mut log = self.load();
        let record = WorkoutRecord::new(log.next_id(), date, completed, kind, comment);

        log.push(record.clone());
        self.save(&log)?;

        tracing::info!(id = record.id, kind = %record.kind, completed, "workout recorded");
        Ok(record)
    }

    /// Wipe the history. Unconditional; confirmation belongs to the caller.
    pub fn reset(&self) -> AppResult<()> {
        self.save(&WorkoutLog::default())?;
        tracing::info!(path = %self.path.display(), "workouts reset");
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> AppError {
        AppError::StorageWrite {
            path: self.path.display().to_string(),
            source,
        }
    }
}
