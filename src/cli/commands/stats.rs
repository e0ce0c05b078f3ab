use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use ansi_term::Colour;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Stats) {
        let session = super::open_session(cfg);
        let stats = session.stats();

        header("Workout stats");
        println!(
            "Total completed workouts: {}",
            Colour::Green.bold().paint(stats.total.to_string())
        );

        for kind in &cfg.kinds {
            println!("{}: {}", kind.label, stats.count(&kind.tag));
        }

        let other = stats.untracked();
        if other > 0 {
            println!("{}", Colour::Fixed(244).paint(format!("Other types: {other}")));
        }
    }

    Ok(())
}
