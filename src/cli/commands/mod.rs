pub mod add;
pub mod config;
pub mod init;
pub mod kinds;
pub mod list;
pub mod reset;
pub mod stats;

use crate::config::Config;
use crate::core::session::Session;
use crate::store::RecordStore;

/// Session over the configured workout file and tracked types.
pub(crate) fn open_session(cfg: &Config) -> Session {
    Session::new(RecordStore::new(cfg.data_path()), cfg.kinds.clone())
}
