//! Logging integration for the formkit engine.
//!
//! Provides a helper for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings).

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter directive is read from `settings.log_level` (e.g. "debug",
/// "info", "formkit=trace"). In debug mode a pretty, human-readable format
/// is used; in production a structured JSON format is used.
///
/// Calling this more than once is harmless; subsequent calls leave the
/// existing subscriber in place.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for work against one schema.
///
/// Attach this span around authoring or session processing so that all log
/// entries emitted during the work include the schema id.
///
/// # Examples
///
/// ```
/// use formkit_core::logging::schema_span;
///
/// let span = schema_span("abc-123");
/// let _guard = span.enter();
/// tracing::info!("recomputing derived fields");
/// ```
pub fn schema_span(schema_id: &str) -> tracing::Span {
    tracing::info_span!("schema", id = schema_id)
}
