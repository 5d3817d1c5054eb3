pub mod hour_entry;
pub mod notification;
pub mod recognition;
