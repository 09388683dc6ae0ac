//! Pick one canonical URL out of several spellings.

use std::collections::BTreeSet;

use super::normalize_url_with;
use crate::diagnostics::{DiagnosticSink, TracingSink};

/// The single canonical URL the inputs agree on, if any.
///
/// A canonical form only counts when it also appears verbatim among the
/// inputs. Exactly one such form yields `Some`; zero or several yield `None`.
pub fn guess_url<S: AsRef<str>>(urls: &[S]) -> Option<String> {
    guess_url_with(urls, &TracingSink)
}

pub fn guess_url_with<S: AsRef<str>>(urls: &[S], sink: &dyn DiagnosticSink) -> Option<String> {
    let mut found = BTreeSet::new();
    for url in urls {
        let normalized = normalize_url_with(url.as_ref(), sink);
        if urls.iter().any(|u| u.as_ref() == normalized) {
            found.insert(normalized);
        }
    }

    if found.len() == 1 {
        found.into_iter().next()
    } else {
        None
    }
}
