//! Console Logger
//!
//! A `log` backend for WASM frontends. Records go to the browser console
//! on `wasm32` and to stderr everywhere else.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fmt;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Logger that forwards `log` records to the console
pub struct ConsoleLogger;

/// Install the console logger as the global `log` backend.
///
/// Can only succeed once per process; later calls return the `log` error.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Format one console line: padded level followed by the message
pub fn format_line(level: Level, args: &fmt::Arguments) -> String {
    format!("{:<5} {}", level, args)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        write_line(record.level(), &format_line(record.level(), record.args()));
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_pads_level() {
        let line = format_line(Level::Info, &format_args!("[TIMER] started at {}", "20:00"));
        assert_eq!(line, "INFO  [TIMER] started at 20:00");
    }

    #[test]
    fn test_format_line_error_level() {
        let line = format_line(Level::Error, &format_args!("boom"));
        assert_eq!(line, "ERROR boom");
    }

    #[test]
    fn test_init_twice_fails() {
        assert!(init(LevelFilter::Debug).is_ok());
        assert!(init(LevelFilter::Info).is_err());
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
