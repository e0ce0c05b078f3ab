use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::notify::StoreChange;
use crate::core::stats::compute_stats;
use crate::errors::AppResult;
use crate::models::kind::{WorkoutKind, status_label};
use crate::store::RecordStore;
use crate::ui::messages::{info, success};
use crate::ui::selection::{Selection, status_from_flags};

/// Record a workout session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        kind,
        done,
        skipped,
        comment,
    } = cmd
    {
        let mut session = super::open_session(cfg);

        //
        // Refresh the totals once the record is on disk
        //
        let reader = RecordStore::new(cfg.data_path());
        let tags: Vec<String> = cfg.kinds.iter().map(|k| k.tag.clone()).collect();
        session.notifier_mut().subscribe(move |change| {
            if let StoreChange::Appended(_) = change {
                let stats = compute_stats(reader.load().records(), &tags);
                info(format!("Completed workouts so far: {}", stats.total));
            }
        });

        let kind_sel: Selection<String> = kind.clone().into();
        let record = session.add(kind_sel, status_from_flags(*done, *skipped), comment)?;

        success(format!(
            "Workout #{} saved: {} ({}) on {}",
            record.id,
            WorkoutKind::label_for(&cfg.kinds, &record.kind),
            status_label(record.completed),
            record.date
        ));
    }

    Ok(())
}
