//! Canonical forms and candidate names for package source URLs.
//!
//! Package metadata refers to the same repository in many spellings
//! (`git+ssh://git@github.com/o/r.git`, `https://www.github.com/o/r/`, ...).
//! [`normalize_url`] collapses them to one deduplication key,
//! [`guess_url`] picks the key a list of spellings agrees on, and
//! [`possible_names`] suggests short names for search.

pub mod canonical;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod names;
pub mod url_model;

pub use canonical::{
    guess_url, guess_url_with, is_canonical_url, is_canonical_url_with, normalize_url,
    normalize_url_with, try_normalize_url,
};
pub use diagnostics::{DiagnosticSink, NullSink, TracingSink};
pub use error::UrlError;
pub use names::{possible_names, possible_names_with, try_possible_names, Platform};
pub use url_model::DecomposedUrl;
