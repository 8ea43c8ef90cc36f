//! Tracing/logging setup shared by the console binary and tests.

pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize process-wide logging with JSON output.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::Json);
}

/// Initialize process-wide logging with an explicit output format.
pub fn init_with(format: LogFormat) {
    tracing::init(format);
}
