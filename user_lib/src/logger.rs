//! `log` backend writing to stdout through `sys_write`.

use common::logging::parse_level;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let color = match record.level() {
            Level::Error => 31,
            Level::Warn => 93,
            Level::Info => 34,
            Level::Debug => 32,
            Level::Trace => 90,
        };
        println!(
            "\u{1B}[{}m[{:>5}] {}\u{1B}[0m",
            color,
            record.level(),
            record.args(),
        );
    }

    fn flush(&self) {}
}

/// Level comes from `LOG` at build time and defaults to off, so an
/// unconfigured program issues no console writes of its own.
pub fn init() {
    let level = parse_level(option_env!("LOG"));
    if level == LevelFilter::Off {
        return;
    }
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::LOGGER;
    use log::{Level, Log, Metadata};

    #[test_case]
    fn test_enabled_follows_max_level() {
        let previous = log::max_level();
        log::set_max_level(log::LevelFilter::Warn);
        let warn = Metadata::builder().level(Level::Warn).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(LOGGER.enabled(&warn));
        assert!(!LOGGER.enabled(&debug));
        log::set_max_level(previous);
    }
}
