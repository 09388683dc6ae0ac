//! Integration tests: canonicalization, consensus and naming through the crate root.

use std::sync::Mutex;

use permalint_core::{
    guess_url, is_canonical_url, normalize_url, normalize_url_with, possible_names,
    possible_names_with, try_normalize_url, NullSink, UrlError,
};

/// URLs as they show up in package metadata.
const CORPUS: &[&str] = &[
    "https://github.com/user/repo?utm_source=foo#readme",
    "http://github.com/user/repo/",
    "https://www.github.com/user/repo",
    "https://github.com/user/repo/issues/123",
    "git@github.com:chf007/egg-qywx-login.git",
    "git+ssh://git@github.com/bartdominiak/vue-snap.git",
    "git://github.com/biggora/express-useragent.git",
    "git+https://github.com/owner/repo.git",
    "github.com/MatteoBax/ascii-progressbar.git",
    "https://www.example.com/foo/bar?baz=1#frag",
    "http://molefrog.github.com/rye",
    "https://rye.astral.sh/",
    "ssh://git@gitlab.com/group/project.git",
    "https://example.com:8080/x/",
    "https://[laoyang666].github.io/vue-cli3-project",
    "http://",
    "git+https://",
    "",
    "   ",
    "a:b:c",
    "a:b:c:d:e:f:g:h",
    "mailto:dev@example.com",
    "https://example.com/a/../b",
    "https://example.com/My Tool/",
    "https://example.com/Café",
];

#[test]
fn normalize_is_idempotent() {
    for input in CORPUS {
        let once = normalize_url_with(input, &NullSink);
        let twice = normalize_url_with(&once, &NullSink);
        assert_eq!(once, twice, "input: {input:?}");
    }
}

#[test]
fn canonical_output_shape() {
    for input in CORPUS {
        let out = normalize_url_with(input, &NullSink);
        assert!(!out.ends_with('/'), "{input:?} -> {out:?}");
        assert!(!out.contains("://"), "{input:?} -> {out:?}");
        assert!(!out.contains('?') && !out.contains('#'), "{input:?} -> {out:?}");
        if let Some(rest) = out.strip_prefix("github.com/") {
            assert!(rest.split('/').count() <= 2, "{input:?} -> {out:?}");
        }
    }
}

#[test]
fn predicate_agrees_with_normalize() {
    for input in CORPUS {
        if is_canonical_url(input) {
            assert!(!input.is_empty());
            assert_eq!(normalize_url(input), *input);
        }
        let out = normalize_url_with(input, &NullSink);
        if !out.is_empty() {
            assert!(is_canonical_url(&out), "{input:?} -> {out:?}");
        }
    }
}

#[test]
fn scheme_case_and_slash_insensitive() {
    for input in [
        "http://github.com/user/repo/",
        "https://www.github.com/user/repo",
        "HTTPS://GitHub.com/user/repo",
        "github.com/user/repo",
    ] {
        assert_eq!(normalize_url(input), "github.com/user/repo", "{input}");
    }
}

#[test]
fn path_text_survives_canonicalization() {
    assert_eq!(normalize_url("https://example.com/a/../b"), "example.com/a/../b");
    assert_eq!(normalize_url("https://example.com/My Tool/"), "example.com/My Tool");
    assert_eq!(normalize_url("a:b:c:d:e:f:g:h"), "h");
}

#[test]
fn try_normalize_reports_kind() {
    assert!(matches!(
        try_normalize_url("ssh://"),
        Err(UrlError::ProtocolOnly { .. })
    ));
    assert!(matches!(
        try_normalize_url("https://[laoyang666].github.io/x"),
        Err(UrlError::Malformed { .. })
    ));
    assert_eq!(try_normalize_url("").unwrap(), "");
}

#[test]
fn diagnostics_reach_injected_sink() {
    let seen = Mutex::new(Vec::new());
    let sink = |e: &UrlError| seen.lock().unwrap().push(e.url().to_string());

    for input in CORPUS {
        normalize_url_with(input, &sink);
        possible_names_with(input, &sink);
    }

    let seen = seen.into_inner().unwrap();
    for bad in ["http://", "git+https://", "https://[laoyang666].github.io/vue-cli3-project"] {
        assert_eq!(seen.iter().filter(|u| *u == bad).count(), 2, "{bad}");
    }
}

#[test]
fn guess_over_metadata_urls() {
    assert_eq!(
        guess_url(&["github.com/a/b", "https://github.com/a/b/"]).as_deref(),
        Some("github.com/a/b")
    );
    assert_eq!(guess_url(&["github.com/a/b", "github.com/c/d"]), None);
    assert_eq!(
        guess_url(&[
            "git+ssh://git@github.com/bartdominiak/vue-snap.git",
            "https://github.com/bartdominiak/vue-snap#readme",
        ]),
        None
    );
}

#[test]
fn first_name_is_authority_and_path() {
    for (input, first) in [
        ("https://www.example.com/a/b/", "example.com/a/b"),
        ("example.com", "example.com"),
        ("http://WWW.Example.COM/X", "example.com/X"),
        ("example.com/My Tool", "example.com/My Tool"),
        ("https://example.com/Café", "example.com/Café"),
        ("git@github.com:owner/Repo.git", "github.com:owner/Repo.git"),
    ] {
        assert_eq!(possible_names(input)[0], first, "{input}");
    }
}

#[test]
fn names_for_known_hosts() {
    assert_eq!(
        possible_names("hdfgroup.org/HDF5"),
        ["hdfgroup.org/HDF5", "HDF5", "hdf5"]
    );
    assert_eq!(
        possible_names("poppler.freedesktop.org"),
        ["poppler.freedesktop.org", "poppler"]
    );
    assert_eq!(
        possible_names("giflib.sourceforge.net"),
        ["giflib.sourceforge.net", "giflib"]
    );
    assert_eq!(
        possible_names("gist.github.com/stning/89b6ce57e45a68e2da77a960770e5773").len(),
        1
    );
}
