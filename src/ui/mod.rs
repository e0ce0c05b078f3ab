pub mod messages;
pub mod selection;
pub mod table;
