use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::workout::WorkoutLog;
use crate::store::RecordStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (unless in test mode or already present)
///  - an empty workout file (only if missing, existing history is kept)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.file.clone(), cli.test)?;

    println!("⚙️  Initializing rWorkout…");
    println!("📄 Config file  : {}", Config::config_file().display());
    println!("🏋️  Workout file : {}", cfg.data_path().display());

    let store = RecordStore::new(cfg.data_path());
    if store.path().exists() {
        info(format!(
            "Workout file already present, {} record(s) kept",
            store.load().len()
        ));
    } else {
        store.save(&WorkoutLog::default())?;
        success(format!("Workout file created at {}", store.path().display()));
    }

    println!("🎉 rWorkout initialization completed!");
    Ok(())
}
