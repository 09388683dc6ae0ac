//! Error taxonomy for URL canonicalization and name extraction.

use thiserror::Error;

/// Why a URL yielded no usable content.
///
/// Neither variant is fatal: the infallible entry points report it through a
/// [`DiagnosticSink`](crate::diagnostics::DiagnosticSink) and degrade to an
/// empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// Input is nothing but a scheme token such as `https://`.
    #[error("URL is only a protocol: {url:?}")]
    ProtocolOnly { url: String },

    /// The decomposer rejected the input (e.g. an invalid bracketed host literal).
    #[error("malformed URL {url:?}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl UrlError {
    /// The original input that triggered the error.
    pub fn url(&self) -> &str {
        match self {
            UrlError::ProtocolOnly { url } | UrlError::Malformed { url, .. } => url,
        }
    }

    pub fn is_protocol_only(&self) -> bool {
        matches!(self, UrlError::ProtocolOnly { .. })
    }
}
