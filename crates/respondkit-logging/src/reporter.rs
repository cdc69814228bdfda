//! Logging of response annotations

use respondkit_core::{Annotations, ERROR_KEY, LogLevel, RESPONSE_BODY_KEY, WARN_KEY};

/// Target used for every event the reporter emits
pub const REPORT_TARGET: &str = "respondkit::response";

/// Turns the annotations of a finished request into log events
///
/// - `"warn"` → `WARN` event with the client-fault error
/// - `"error"` → `ERROR` event with the server-fault error
/// - `"ResponseBody"` → `DEBUG` event with the body length
///
/// Events below `min_level` are skipped.
#[derive(Debug, Clone, Copy)]
pub struct AnnotationReporter {
    min_level: LogLevel,
}

impl AnnotationReporter {
    /// Reporter that emits every event
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Trace,
        }
    }

    /// Reporter that skips events below `level`
    pub fn with_min_level(level: LogLevel) -> Self {
        Self { min_level: level }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Emit events for `annotations`; returns how many were emitted
    pub fn report(&self, annotations: &Annotations) -> usize {
        let mut emitted = 0;

        if let Some(err) = annotations.fault(WARN_KEY)
            && self.enabled(LogLevel::Warn)
        {
            tracing::warn!(target: REPORT_TARGET, error = %err, "client fault");
            emitted += 1;
        }

        if let Some(err) = annotations.fault(ERROR_KEY)
            && self.enabled(LogLevel::Error)
        {
            tracing::error!(target: REPORT_TARGET, error = %err, "server fault");
            emitted += 1;
        }

        if let Some(body) = annotations.body(RESPONSE_BODY_KEY)
            && self.enabled(LogLevel::Debug)
        {
            tracing::debug!(target: REPORT_TARGET, body_len = body.len(), "response body");
            emitted += 1;
        }

        emitted
    }
}

impl Default for AnnotationReporter {
    fn default() -> Self {
        Self::new()
    }
}
