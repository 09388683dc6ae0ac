//! Diagnostic sinks for non-fatal URL errors.
//!
//! The infallible entry points never return an error; they hand it to a sink
//! and fall back to an empty result. Sinks must not block.

use crate::error::UrlError;

/// Receives diagnostics for inputs that degraded to an empty result.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, error: &UrlError);
}

/// Default sink: one `warn` event per diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, error: &UrlError) {
        tracing::warn!(url = %error.url(), "{}", error);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _error: &UrlError) {}
}

impl<F> DiagnosticSink for F
where
    F: Fn(&UrlError) + Send + Sync,
{
    fn emit(&self, error: &UrlError) {
        self(error)
    }
}
