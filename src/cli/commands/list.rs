use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::kind::{WorkoutKind, status_label};
use crate::models::workout::WorkoutRecord;
use crate::ui::messages::{header, info};
use crate::ui::table::{Cell, Column, Table};
use ansi_term::Colour;

const COMMENT_WIDTH: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let session = super::open_session(cfg);
        let log = session.records();

        if log.is_empty() {
            info("No workouts recorded yet.");
            return Ok(());
        }

        header(format!("Workout history ({} records)", log.len()));
        print!("{}", build_table(&log.sorted_by_date(), &cfg.kinds).render());
    }

    Ok(())
}

fn build_table(records: &[&WorkoutRecord], kinds: &[WorkoutKind]) -> Table {
    let mut table = Table::new(vec![
        Column::new("Date"),
        Column::new("Status"),
        Column::new("Type"),
        Column::wrapped("Comment", COMMENT_WIDTH),
    ]);

    for w in records {
        let date = match w.parsed_date() {
            Some(_) => Cell::plain(w.date.clone()),
            None if w.date.is_empty() => Cell::coloured("--", Colour::Fixed(244)),
            None => Cell::coloured(w.date.clone(), Colour::Yellow),
        };

        let status = if w.completed {
            Cell::coloured(status_label(true), Colour::Green)
        } else {
            Cell::coloured(status_label(false), Colour::Red)
        };

        table.add_row(vec![
            date,
            status,
            Cell::plain(WorkoutKind::label_for(kinds, &w.kind)),
            Cell::plain(w.comment.clone()),
        ]);
    }

    table
}
