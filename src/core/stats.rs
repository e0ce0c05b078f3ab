use crate::models::stats::Stats;
use crate::models::workout::WorkoutRecord;

/// Reduce a log snapshot into completed-session counts.
///
/// `total` counts every completed record. Per-kind buckets exist only for
/// `tracked` tags, so completed records of other types show up in `total`
/// and nowhere else.
pub fn compute_stats<S: AsRef<str>>(records: &[WorkoutRecord], tracked: &[S]) -> Stats {
    let completed: Vec<&WorkoutRecord> = records.iter().filter(|w| w.completed).collect();

    let per_kind = tracked
        .iter()
        .map(|tag| {
            let tag = tag.as_ref();
            let n = completed.iter().filter(|w| w.kind == tag).count();
            (tag.to_string(), n)
        })
        .collect();

    Stats {
        total: completed.len(),
        per_kind,
    }
}
