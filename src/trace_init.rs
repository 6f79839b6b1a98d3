//! Opt-in tracing output, compiled in with the `trace` feature.
//!
//! Without the feature every initializer is a no-op and `tracing` is capped
//! at `max_level_off`, so the formatters carry no logging cost.

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

#[cfg(feature = "trace")]
const TRACE_FILE: &str = "fmt-engine-trace.jsonl";

#[cfg(feature = "trace")]
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fmt_engine=debug"))
}

/// JSON lines into `<log_dir>/fmt-engine-trace.jsonl`. Used by host apps
/// through the bindings. Only the first initializer called takes effect.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // Host apps keep the library loaded for the life of the process.
        std::mem::forget(guard);

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(env_filter())
            .init();
    });
}

/// Human-readable events on stderr, for `fmtool --verbose`.
#[cfg(feature = "trace")]
pub fn init_stderr_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(env_filter())
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}

#[cfg(not(feature = "trace"))]
pub fn init_stderr_tracing() {}
