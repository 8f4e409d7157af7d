//! # Console Logger
//!
//! Routes `log` records from the editor crates to the browser console,
//! picking the console method that matches the record level so devtools
//! filtering works. Native builds (tests, tools) fall back to stderr.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        emit(record.level(), &format_record(record));
    }

    fn flush(&self) {}
}

/// Installs the console logger. Only the first call wins; later calls just
/// adjust the level.
pub fn install(level: LevelFilter) -> Result<(), SetLoggerError> {
    let installed = log::set_logger(&LOGGER);
    log::set_max_level(level);
    installed
}

/// Parses the level names accepted from JavaScript, case-insensitive.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

pub(crate) fn format_record(record: &Record<'_>) -> String {
    format!(
        "[{}] {}: {}",
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let line = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&line),
        Level::Warn => console::warn_1(&line),
        Level::Info => console::info_1(&line),
        Level::Debug | Level::Trace => console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn formats_level_and_target() {
        let line = format_record(
            &Record::builder()
                .level(Level::Warn)
                .target("shape_editor::recorder")
                .args(format_args!("{} was released", "mesh#3"))
                .build(),
        );
        assert_eq!(line, "[WARN] shape_editor::recorder: mesh#3 was released");
    }
}
