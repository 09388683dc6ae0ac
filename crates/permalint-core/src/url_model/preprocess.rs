//! Rewrites of VCS idioms ahead of structural parsing.

use crate::error::UrlError;

/// Inputs that are nothing but a scheme.
pub const BARE_SCHEMES: [&str; 6] = [
    "http://",
    "https://",
    "git://",
    "ssh://",
    "git+ssh://",
    "git+https://",
];

/// Prefix rewrites, applied in order, each at most once.
const GITHUB_PREFIXES: [&str; 3] = [
    "git@github.com:",
    "git+ssh://git@github.com/",
    "git+https://github.com/",
];

const GITHUB_REWRITE: &str = "github.com/";

pub fn is_protocol_only(url: &str) -> bool {
    BARE_SCHEMES.contains(&url.trim())
}

/// Prepare `url` for decomposition.
///
/// Fails with [`UrlError::ProtocolOnly`] for a bare scheme. Otherwise trims
/// the input, drops one trailing `.git` and turns the GitHub SSH and
/// `git+` forms into `github.com/owner/repo`.
pub fn preprocess(url: &str) -> Result<String, UrlError> {
    if is_protocol_only(url) {
        return Err(UrlError::ProtocolOnly {
            url: url.to_string(),
        });
    }

    let trimmed = url.trim();
    let mut out = trimmed.strip_suffix(".git").unwrap_or(trimmed).to_string();
    for prefix in GITHUB_PREFIXES {
        if let Some(rest) = out.strip_prefix(prefix) {
            out = format!("{GITHUB_REWRITE}{rest}");
        }
    }
    Ok(out)
}

/// Strip trailing `/` and `.git` until neither remains.
pub fn strip_vcs_suffix(mut s: &str) -> &str {
    loop {
        let trimmed = s.trim_end_matches('/');
        let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);
        if trimmed.len() == s.len() {
            return trimmed;
        }
        s = trimmed;
    }
}
