//! FILENAME: app/src/logging.rs
// PURPOSE: Logger setup for the CLI.
// FORMAT: seq|level|target|message, written to stderr.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence counter shared by every log line of the process.
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Maps the number of -v flags to a level filter.
/// Zero means "defer to RUST_LOG".
pub fn level_for(verbosity: u8) -> Option<log::LevelFilter> {
    match verbosity {
        0 => None,
        1 => Some(log::LevelFilter::Info),
        2 => Some(log::LevelFilter::Debug),
        _ => Some(log::LevelFilter::Trace),
    }
}

fn level_letter(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "E",
        log::Level::Warn => "W",
        log::Level::Info => "I",
        log::Level::Debug => "D",
        log::Level::Trace => "T",
    }
}

/// Installs the global logger. RUST_LOG applies unless -v was given;
/// without either, only warnings and errors are shown.
pub fn init(verbosity: u8) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);

    if let Some(level) = level_for(verbosity) {
        builder.filter_level(level);
    }

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{}|{}|{}|{}",
            next_seq(),
            level_letter(record.level()),
            record.target(),
            record.args()
        )
    });

    if let Err(e) = builder.try_init() {
        eprintln!("[LOG_INIT] Logger already initialized: {}", e);
    }
}
