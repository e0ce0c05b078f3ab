use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::table::{Cell, Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Kinds) {
        let mut table = Table::new(vec![Column::new("Tag"), Column::new("Label")]);
        for k in &cfg.kinds {
            table.add_row(vec![Cell::plain(k.tag.clone()), Cell::plain(k.label.clone())]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
