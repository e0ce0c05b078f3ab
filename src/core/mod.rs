pub mod notify;
pub mod session;
pub mod stats;

pub use notify::{Notifier, StoreChange};
pub use session::{PendingConfirmation, ResetOutcome, Session};
pub use stats::compute_stats;
