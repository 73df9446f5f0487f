#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "elb_core=debug,elbonian=debug";

#[cfg(feature = "trace")]
const TRACE_FILE: &str = "elbonian-trace.jsonl";

/// Install a JSON subscriber writing to `<log_dir>/elbonian-trace.jsonl`.
/// Without a directory nothing is installed. Only the first install has
/// any effect.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) {
    let Some(dir) = log_dir else {
        return;
    };

    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        // Synchronous writes: the process exits right after one command.
        let file_appender = tracing_appender::rolling::never(dir, TRACE_FILE);

        tracing_subscriber::fmt()
            .json()
            .with_writer(file_appender)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter)
            .init();
        tracing::debug!(dir = %dir.display(), "tracing initialised");
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&std::path::Path>) {}
