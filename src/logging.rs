//! Console logging for pimorse.
//!
//! Backend for the `log` facade. Every record goes to stderr as one line:
//!
//! ```text
//! [     0.001234] INFO  pimorse::sequencer: Emitting word: SOS
//! ```
//!
//! The timestamp counts microseconds since [`init`]. The maximum level is
//! read from `PIMORSE_LOG` (`off`, `error`, `warn`, `info`, `debug`,
//! `trace`), default `info`.

use std::io::Write;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "PIMORSE_LOG";

/// Level used when `PIMORSE_LOG` is unset or unreadable.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

struct ConsoleLogger {
    start: OnceLock<Instant>,
}

static LOGGER: ConsoleLogger = ConsoleLogger {
    start: OnceLock::new(),
};

impl ConsoleLogger {
    fn timestamp_us(&self) -> u128 {
        self.start.get_or_init(Instant::now).elapsed().as_micros()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(self.timestamp_us(), record);
        // Nowhere to report a broken stderr
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn format_line(timestamp_us: u128, record: &Record<'_>) -> String {
    format!(
        "[{:>6}.{:06}] {:<5} {}: {}",
        timestamp_us / 1_000_000,
        timestamp_us % 1_000_000,
        record.level(),
        record.target(),
        record.args()
    )
}

/// Parse a level name; unknown names give `None`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(value.trim()).ok()
}

/// Install the console logger. Call once, first thing in `main`.
pub fn init() -> Result<(), SetLoggerError> {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(DEFAULT_LEVEL);

    LOGGER.start.get_or_init(Instant::now);
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
