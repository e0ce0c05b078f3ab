mod fs_utils;
pub mod record_store;

pub use record_store::RecordStore;
