//! Optional JSON trace of keyboard resolutions, written to a directory the
//! host picks (usually the app group container).

#[cfg(feature = "trace")]
mod file_sink {
    use std::path::Path;
    use std::sync::OnceLock;

    use tracing_appender::non_blocking::WorkerGuard;
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    const DEFAULT_FILTER: &str = "kb_engine=debug,kb_core=debug,kb_session=debug";

    // Lives until the extension process exits; dropping it stops the writer.
    static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

    pub fn install(log_dir: &Path) {
        GUARD.get_or_init(|| {
            let appender = tracing_appender::rolling::daily(log_dir, "kb-engine-trace.jsonl");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

            // A subscriber installed by the host wins.
            let _ = tracing_subscriber::fmt()
                .json()
                .with_writer(writer)
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_env_filter(filter)
                .try_init();
            guard
        });
    }
}

#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &std::path::Path) {
    file_sink::install(log_dir);
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
