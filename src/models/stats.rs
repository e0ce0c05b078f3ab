use serde::Serialize;

/// Counts derived from a workout log snapshot. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Completed records, whatever their type.
    pub total: usize,
    /// Completed records per tracked tag, in tracking order.
    pub per_kind: Vec<(String, usize)>,
}

impl Stats {
    /// Count for a tracked tag; 0 for tags that are not tracked.
    pub fn count(&self, tag: &str) -> usize {
        self.per_kind
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Completed records whose type is not tracked.
    pub fn untracked(&self) -> usize {
        let tracked: usize = self.per_kind.iter().map(|(_, n)| n).sum();
        self.total.saturating_sub(tracked)
    }
}
