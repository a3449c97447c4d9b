/// One-way channel for user-facing diagnostics.
///
/// The validator sends non-fatal warnings through it, the config file loader
/// sends error reports. Injected so both stay testable without an editor
/// host behind them.
pub trait NotificationSink {
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Sink that routes notifications to the tracing log, for hosts that have no
/// user-facing channel of their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
