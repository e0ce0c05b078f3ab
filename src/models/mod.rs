pub mod kind;
pub mod stats;
pub mod workout;

pub use kind::WorkoutKind;
pub use stats::Stats;
pub use workout::{WorkoutLog, WorkoutRecord};
