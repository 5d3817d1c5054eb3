pub mod code;
pub mod feed;
pub mod log;
pub mod notify;
pub mod profile;
pub mod recognition;
pub mod verification;
