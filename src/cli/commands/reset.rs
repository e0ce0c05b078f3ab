use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::ResetOutcome;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        let mut session = super::open_session(cfg);

        // first request only arms the gate
        if session.request_reset()? == ResetOutcome::NeedsConfirmation
            && !*yes
            && !ask_confirmation("Delete the whole workout history? This action is irreversible.")
        {
            session.cancel_reset();
            info("Operation cancelled.");
            return Ok(());
        }

        if session.request_reset()? == ResetOutcome::Done {
            success("Progress has been reset.");
        }
    }

    Ok(())
}
