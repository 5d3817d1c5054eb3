//! ANSI colour helpers for terminal output.

use crate::models::recognition::Tier;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BRONZE: &str = "\x1b[38;5;130m";
pub const SILVER: &str = "\x1b[38;5;250m";
pub const GOLD: &str = "\x1b[38;5;220m";

/// verified → green, pending → yellow
pub fn color_for_status(verified: bool) -> &'static str {
    if verified { GREEN } else { YELLOW }
}

pub fn color_for_tier(tier: Tier) -> &'static str {
    match tier {
        Tier::None => GREY,
        Tier::Bronze => BRONZE,
        Tier::Silver => SILVER,
        Tier::Gold => GOLD,
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
