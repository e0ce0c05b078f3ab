//! rWorkout main entrypoint.

use rworkout::run;
use rworkout::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
