//! Structural split of a URL into scheme, authority, path, query and fragment.

use url::{ParseError, Url};

/// A URL split into its components.
///
/// `authority` is `host[:port]` as the parser produced it; userinfo is never
/// part of it. `path` is the input text verbatim: no percent-encoding and no
/// dot-segment resolution. Inputs without a scheme have an empty `scheme` and
/// `authority` and carry everything up to `?`/`#` in `path`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecomposedUrl {
    pub scheme: String,
    pub authority: String,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl DecomposedUrl {
    /// Non-empty `/`-delimited path segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }

    pub fn has_scheme(&self) -> bool {
        !self.scheme.is_empty()
    }
}

/// Decompose `input`.
///
/// Scheme-less inputs (`example.com/foo`, `host:8080/x`) are not an error:
/// they come back with an empty authority and the text as the path. Anything
/// else the parser rejects is returned as its [`ParseError`].
pub fn decompose(input: &str) -> Result<DecomposedUrl, ParseError> {
    let input = input.trim_matches(|c: char| c <= ' ');
    if looks_like_host_port(input) {
        return Ok(schemeless(input));
    }
    match Url::parse(input) {
        Ok(parsed) => Ok(from_parsed(input, &parsed)),
        Err(ParseError::RelativeUrlWithoutBase) => Ok(schemeless(input)),
        Err(e) => Err(e),
    }
}

/// Split `scheme://userinfo@authority/path` by delimiters alone, without
/// validating the host or port.
pub fn decompose_lenient(input: &str) -> DecomposedUrl {
    let input = input.trim_matches(|c: char| c <= ' ');
    let Some((scheme, rest)) = input.split_once("://") else {
        return schemeless(input);
    };
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let (netloc, tail) = rest.split_at(end);
    let authority = netloc.rsplit_once('@').map_or(netloc, |(_, host)| host);
    DecomposedUrl {
        scheme: scheme.to_ascii_lowercase(),
        authority: authority.to_string(),
        ..schemeless(tail)
    }
}

fn from_parsed(input: &str, parsed: &Url) -> DecomposedUrl {
    let mut authority = parsed.host_str().unwrap_or_default().to_string();
    if let Some(port) = parsed.port() {
        authority.push(':');
        authority.push_str(&port.to_string());
    }
    let has_host = parsed.host_str().is_some_and(|h| !h.is_empty());
    DecomposedUrl {
        scheme: parsed.scheme().to_string(),
        authority,
        path: raw_path(input, has_host).to_string(),
        query: parsed.query().map(str::to_string),
        fragment: parsed.fragment().map(str::to_string),
    }
}

/// The path as written in `input`, which `parsed` accepted.
fn raw_path(input: &str, has_host: bool) -> &str {
    let rest = input.split_once(':').map_or(input, |(_, rest)| rest);
    let rest = if has_host {
        let after = rest.trim_start_matches(['/', '\\']);
        after
            .find(['/', '\\', '?', '#'])
            .map_or("", |i| &after[i..])
    } else if let Some(after) = rest.strip_prefix("//") {
        after.find(['/', '?', '#']).map_or("", |i| &after[i..])
    } else {
        rest
    };
    rest.split(['?', '#']).next().unwrap_or_default()
}

fn schemeless(input: &str) -> DecomposedUrl {
    let (rest, fragment) = match input.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment.to_string())),
        None => (input, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query.to_string())),
        None => (rest, None),
    };
    DecomposedUrl {
        path: path.to_string(),
        query,
        fragment,
        ..DecomposedUrl::default()
    }
}

/// `example.com:8080/x` would otherwise parse as scheme `example.com`.
fn looks_like_host_port(input: &str) -> bool {
    let Some((host, rest)) = input.split_once(':') else {
        return false;
    };
    if host.is_empty() || host.contains('/') {
        return false;
    }
    let port = rest
        .split(|c: char| c == '/' || c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
}
