//! Candidate package names derived from a URL.

mod platform;

pub use platform::Platform;

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::UrlError;
use url::ParseError;

use crate::url_model::{decompose, decompose_lenient, fold_authority, is_protocol_only};

/// Name candidates for `url`, most specific first.
///
/// The first entry is always `authority/path` (or the bare authority); the
/// rest depend on the host, see [`Platform`]. Duplicates only appear as the
/// lower-cased variant of a mixed-case segment.
pub fn try_possible_names(url: &str) -> Result<Vec<String>, UrlError> {
    if is_protocol_only(url) {
        return Err(UrlError::ProtocolOnly {
            url: url.to_string(),
        });
    }

    let schemed = if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };
    // `git@host:owner/repo` reads as a non-numeric port; split it by delimiters instead.
    let parts = match decompose(&schemed) {
        Ok(parts) => parts,
        Err(ParseError::InvalidPort) => decompose_lenient(&schemed),
        Err(source) => {
            return Err(UrlError::Malformed {
                url: url.to_string(),
                source,
            })
        }
    };

    let authority = fold_authority(&parts.authority);
    let path = parts.path.trim_matches('/');

    let mut names = Vec::new();
    if path.is_empty() {
        names.push(authority.clone());
    } else {
        names.push(format!("{authority}/{path}"));
    }

    let platform = Platform::detect(&authority, path);
    tracing::debug!(%url, ?platform, "naming rule");
    platform.extract(&authority, path, &mut names);
    Ok(names)
}

/// Name candidates for `url`; errors go to a [`TracingSink`] and yield an empty list.
///
/// ```
/// use permalint_core::possible_names;
///
/// assert_eq!(
///     possible_names("hdfgroup.org/HDF5"),
///     ["hdfgroup.org/HDF5", "HDF5", "hdf5"]
/// );
/// ```
pub fn possible_names(url: &str) -> Vec<String> {
    possible_names_with(url, &TracingSink)
}

pub fn possible_names_with(url: &str, sink: &dyn DiagnosticSink) -> Vec<String> {
    try_possible_names(url).unwrap_or_else(|e| {
        sink.emit(&e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_paths() {
        assert_eq!(
            possible_names("hdfgroup.org/HDF5"),
            ["hdfgroup.org/HDF5", "HDF5", "hdf5"]
        );
        assert_eq!(
            possible_names("mozilla.org/cbindgen"),
            ["mozilla.org/cbindgen", "cbindgen"]
        );
        assert_eq!(
            possible_names("https://taku910.github.io/mecab/"),
            ["taku910.github.io/mecab", "mecab"]
        );
        assert_eq!(
            possible_names("poppler.freedesktop.org/poppler-data"),
            ["poppler.freedesktop.org/poppler-data", "poppler-data"]
        );
    }

    #[test]
    fn domain_only() {
        assert_eq!(
            possible_names("poppler.freedesktop.org"),
            ["poppler.freedesktop.org", "poppler"]
        );
        assert_eq!(possible_names("https://elfutils.org/"), ["elfutils.org", "elfutils"]);
        assert_eq!(possible_names("http://www.libpng.org"), ["libpng.org", "libpng"]);
    }

    #[test]
    fn forges() {
        assert_eq!(
            possible_names("https://github.com/PyCQA/Flake8"),
            ["github.com/PyCQA/Flake8", "Flake8", "flake8"]
        );
        assert_eq!(
            possible_names("gitlab.com/gnutls/gnutls"),
            ["gitlab.com/gnutls/gnutls", "gnutls"]
        );
        assert_eq!(
            possible_names("https://bitbucket.org/eigen/eigen/"),
            ["bitbucket.org/eigen/eigen", "eigen"]
        );
        assert_eq!(possible_names("https://github.com"), ["github.com", "github"]);
    }

    #[test]
    fn special_hosts() {
        assert_eq!(
            possible_names("gist.github.com/stning/89b6ce57e45a68e2da77a960770e5773"),
            ["gist.github.com/stning/89b6ce57e45a68e2da77a960770e5773"]
        );
        assert_eq!(
            possible_names("http://molefrog.github.com/Rye"),
            ["molefrog.github.com/Rye", "Rye"]
        );
        assert_eq!(
            possible_names("https://cloud.google.com/sdk/docs/install"),
            ["cloud.google.com/sdk/docs/install", "sdk"]
        );
        assert_eq!(
            possible_names("giflib.sourceforge.net"),
            ["giflib.sourceforge.net", "giflib"]
        );
        assert_eq!(
            possible_names("https://giflib.sourceforge.net/intro.html"),
            ["giflib.sourceforge.net/intro.html", "giflib"]
        );
    }

    #[test]
    fn query_and_fragment_ignored() {
        assert_eq!(
            possible_names("https://example.com/Tool?x=1#readme"),
            ["example.com/Tool", "Tool", "tool"]
        );
    }

    #[test]
    fn readable_path_text() {
        assert_eq!(
            possible_names("example.com/My Tool"),
            ["example.com/My Tool", "My Tool", "my tool"]
        );
        assert_eq!(
            possible_names("https://example.com/Café"),
            ["example.com/Café", "Café", "café"]
        );
        assert_eq!(
            possible_names("https://example.com/docs/../Pkg/"),
            ["example.com/docs/../Pkg", "Pkg", "pkg"]
        );
    }

    #[test]
    fn ssh_shorthand_is_not_malformed() {
        assert_eq!(
            possible_names("git@github.com:owner/Repo.git"),
            ["github.com:owner/Repo.git", "Repo.git", "repo.git"]
        );
        assert_eq!(
            possible_names("git@gitlab.com:group/project"),
            ["gitlab.com:group/project", "project"]
        );
    }

    #[test]
    fn errors_yield_empty_list() {
        let seen = std::sync::Mutex::new(Vec::new());
        let sink = |e: &UrlError| seen.lock().unwrap().push(e.clone());

        assert!(possible_names_with("https://", &sink).is_empty());
        assert!(possible_names_with("git+ssh://", &sink).is_empty());
        assert!(possible_names_with("https://[laoyang666].github.io/x", &sink).is_empty());

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen[0].is_protocol_only());
        assert!(seen[1].is_protocol_only());
        assert!(matches!(seen[2], UrlError::Malformed { .. }));
    }
}
