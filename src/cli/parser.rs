use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkout
/// CLI application to log workouts in a JSON file
#[derive(Parser)]
#[command(
    name = "rworkout",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple workout logging CLI: record sessions and see how many you actually did",
    long_about = None
)]
pub struct Cli {
    /// Override workout file path; a relative path is taken from the
    /// current directory (useful for tests or a custom file)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the workout file
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Record a workout session dated today
    Add {
        /// Workout type tag (see `rworkout kinds`)
        kind: Option<String>,

        #[arg(
            long = "done",
            short = 'd',
            conflicts_with = "skipped",
            help = "The workout happened"
        )]
        done: bool,

        #[arg(long = "skipped", short = 's', help = "The workout did not happen")]
        skipped: bool,

        #[arg(
            long = "comment",
            short = 'c',
            default_value = "",
            help = "Free-text comment (optional)"
        )]
        comment: String,
    },

    /// Show the workout history, sorted by date
    List,

    /// Show completed workout totals
    Stats,

    /// List the tracked workout types
    Kinds,

    /// Delete the whole workout history
    Reset {
        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
