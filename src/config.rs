//! Build-time Configuration
//!
//! Fixed constants for the timer and checklist. Nothing here is read at runtime.

use log::LevelFilter;

/// Countdown length: 20 minutes
pub const COUNTDOWN_SECONDS: u32 = 20 * 60;

/// Period of the repeating tick interval
pub const TICK_INTERVAL_MS: u32 = 1000;

/// At or below this many seconds the display turns urgent
pub const URGENT_THRESHOLD_SECONDS: u32 = 60;

/// Log level for the console logger
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

/// The fixed checklist, in display order. Labels double as completion keys.
pub const TASKS: &[&str] = &[
    "ENTER PRICING ID",
    "ENTER WEIGHT",
    "SHUTTLE NEEDED",
    "ENTER REQUIRED PACKING",
    "GET 3RD PARTY COSTS",
    "MINI STORAGE?",
    "add terms",
    "GET COST FOR FULL PACK IF APPLICABLE",
    "TV DISMOUNT CAN BE ADDED FOR",
    "STORAGE CAN BE ADDED FOR",
    "FP COULD BE ADDED FOR",
];
