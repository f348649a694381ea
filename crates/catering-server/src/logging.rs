use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes tracing with stdout output plus a daily-rolling file under
/// `logs/`. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing_to_file() {
    let file_appender = tracing_appender::rolling::daily("logs", "catering-server.log");

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_appender))
        .init();
}
