//! Canonical form of package source URLs.
//!
//! The canonical form has no scheme, query, fragment or trailing slash, a
//! lower-cased host without `www.`, and for GitHub only `owner/repo`. It is
//! meant as a deduplication key: every spelling of the same repository link
//! maps to one string.

mod guess;

pub use guess::{guess_url, guess_url_with};

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::UrlError;
use crate::url_model::{decompose, fold_authority, preprocess, strip_vcs_suffix};

pub const CANONICAL_GITHUB_HOST: &str = "github.com";

/// Canonicalize `url`, reporting why it had no usable content.
///
/// A single pass can leave something that re-parses differently
/// (`a:b:c` -> `b:c`), so passes repeat until the output is stable. Every
/// pass that changes the text consumes part of it, so the input length
/// bounds the number of passes.
pub fn try_normalize_url(url: &str) -> Result<String, UrlError> {
    let mut current = normalize_once(url)?;
    for _ in 0..url.len() {
        let next = normalize_once(&current).map_err(|e| with_input(e, url))?;
        if next == current {
            break;
        }
        current = next;
    }
    Ok(current)
}

/// Canonicalize `url`; errors go to a [`TracingSink`] and yield `""`.
///
/// ```
/// use permalint_core::normalize_url;
///
/// assert_eq!(
///     normalize_url("https://github.com/user/repo/issues/123"),
///     "github.com/user/repo"
/// );
/// assert_eq!(normalize_url("http://"), "");
/// ```
pub fn normalize_url(url: &str) -> String {
    normalize_url_with(url, &TracingSink)
}

pub fn normalize_url_with(url: &str, sink: &dyn DiagnosticSink) -> String {
    try_normalize_url(url).unwrap_or_else(|e| {
        sink.emit(&e);
        String::new()
    })
}

/// Whether `url` is already in canonical form. `""` never is.
pub fn is_canonical_url(url: &str) -> bool {
    is_canonical_url_with(url, &TracingSink)
}

pub fn is_canonical_url_with(url: &str, sink: &dyn DiagnosticSink) -> bool {
    !url.is_empty() && normalize_url_with(url, sink) == url
}

fn normalize_once(url: &str) -> Result<String, UrlError> {
    let prepared = preprocess(url)?;
    let parts = decompose(&prepared).map_err(|source| UrlError::Malformed {
        url: url.to_string(),
        source,
    })?;

    let authority = fold_authority(&parts.authority);
    let path = parts.path.trim_end_matches('/');

    if authority == CANONICAL_GITHUB_HOST {
        let mut out = String::from(CANONICAL_GITHUB_HOST);
        for segment in path.split('/').filter(|s| !s.is_empty()).take(2) {
            out.push('/');
            out.push_str(segment);
        }
        return Ok(strip_vcs_suffix(&out).to_string());
    }

    let joined = if authority.is_empty() {
        path.to_string()
    } else {
        format!("{authority}{path}")
    };
    Ok(strip_vcs_suffix(&joined).to_string())
}

fn with_input(err: UrlError, url: &str) -> UrlError {
    let url = url.to_string();
    match err {
        UrlError::ProtocolOnly { .. } => UrlError::ProtocolOnly { url },
        UrlError::Malformed { source, .. } => UrlError::Malformed { url, source },
    }
}
