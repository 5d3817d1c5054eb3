pub mod entries;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod notifications;
pub mod pool;
pub mod users;
