//! URL decomposition and VCS-idiom preprocessing.
//!
//! Splits raw package-source URLs into components and rewrites the
//! git-specific shorthands (`git@github.com:`, `git+ssh://`, `.git`) that
//! show up in package metadata before any structural parsing happens.

mod decompose;
mod preprocess;

pub use decompose::{decompose, decompose_lenient, DecomposedUrl};
pub use preprocess::{is_protocol_only, preprocess, strip_vcs_suffix, BARE_SCHEMES};

/// Lower-case `authority` and drop one leading `www.`.
pub fn fold_authority(authority: &str) -> String {
    let lowered = authority.to_lowercase();
    match lowered.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => lowered,
    }
}
