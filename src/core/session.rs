//! One interactive run: the store handle, the change broadcast and the
//! reset confirmation gate.

use crate::core::notify::{Notifier, StoreChange};
use crate::core::stats::compute_stats;
use crate::errors::{AppError, AppResult};
use crate::models::kind::WorkoutKind;
use crate::models::stats::Stats;
use crate::models::workout::{WorkoutLog, WorkoutRecord};
use crate::store::RecordStore;
use crate::ui::selection::Selection;

/// Two-step confirmation for destructive actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingConfirmation {
    #[default]
    Idle,
    Armed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// First request: nothing was deleted, ask again to confirm.
    NeedsConfirmation,
    /// Second request: the history is gone.
    Done,
}

pub struct Session {
    store: RecordStore,
    kinds: Vec<WorkoutKind>,
    notifier: Notifier,
    reset_gate: PendingConfirmation,
}

impl Session {
    pub fn new(store: RecordStore, kinds: Vec<WorkoutKind>) -> Self {
        Self {
            store,
            kinds,
            notifier: Notifier::new(),
            reset_gate: PendingConfirmation::Idle,
        }
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    pub fn reset_gate(&self) -> PendingConfirmation {
        self.reset_gate
    }

    /// Validate the entry form and record the session.
    pub fn add(
        &mut self,
        kind: Selection<String>,
        done: Selection<bool>,
        comment: &str,
    ) -> AppResult<WorkoutRecord> {
        let kind = kind.resolve(AppError::MissingKind)?;
        let done = done.resolve(AppError::MissingStatus)?;

        let tag = WorkoutKind::find(&self.kinds, &kind)
            .map(|k| k.tag.clone())
            .ok_or_else(|| AppError::InvalidKind(kind.clone()))?;

        let record = self.store.append(done, &tag, comment.trim())?;
        self.notifier.notify(&StoreChange::Appended(record.clone()));

        Ok(record)
    }

    /// First call arms the gate, second call wipes the history.
    pub fn request_reset(&mut self) -> AppResult<ResetOutcome> {
        match self.reset_gate {
            PendingConfirmation::Idle => {
                self.reset_gate = PendingConfirmation::Armed;
                Ok(ResetOutcome::NeedsConfirmation)
            }
            PendingConfirmation::Armed => {
                // A failed write leaves the gate armed so the user can retry.
                self.store.reset()?;
                self.reset_gate = PendingConfirmation::Idle;
                self.notifier.notify(&StoreChange::Reset);
                Ok(ResetOutcome::Done)
            }
        }
    }

    pub fn cancel_reset(&mut self) {
        self.reset_gate = PendingConfirmation::Idle;
    }

    pub fn records(&self) -> WorkoutLog {
        self.store.load()
    }

    pub fn stats(&self) -> Stats {
        let tags: Vec<&str> = self.kinds.iter().map(|k| k.tag.as_str()).collect();
        compute_stats(self.store.load().records(), &tags)
    }
}
