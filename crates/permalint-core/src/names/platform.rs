//! Host-specific rules for picking a package name out of a URL.

/// Source forges whose last path segment is the repository name.
const GITHUB_LIKE_HOSTS: [&str; 3] = ["github.com", "gitlab.com", "bitbucket.org"];

/// Which naming rule applies to a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// github.com, gitlab.com, bitbucket.org with a path.
    GitHubLike,
    /// gist.github.com: gist ids are not names.
    Gist,
    /// `<user>.github.com/<project>` pages.
    GitHubPages,
    /// cloud.google.com: the product is the first segment.
    GoogleCloud,
    /// `<project>.sourceforge.net`.
    SourceForge,
    /// Any other URL with a path.
    Generic,
    /// Bare domain.
    DomainOnly,
}

struct Rule {
    platform: Platform,
    applies: fn(&str, &str) -> bool,
}

/// First match wins; `DomainOnly` always matches.
static RULES: [Rule; 7] = [
    Rule {
        platform: Platform::GitHubLike,
        applies: is_github_like,
    },
    Rule {
        platform: Platform::Gist,
        applies: is_gist,
    },
    Rule {
        platform: Platform::GitHubPages,
        applies: is_github_pages,
    },
    Rule {
        platform: Platform::GoogleCloud,
        applies: is_google_cloud,
    },
    Rule {
        platform: Platform::SourceForge,
        applies: is_sourceforge,
    },
    Rule {
        platform: Platform::Generic,
        applies: has_path,
    },
    Rule {
        platform: Platform::DomainOnly,
        applies: always,
    },
];

fn is_github_like(authority: &str, path: &str) -> bool {
    has_path(authority, path) && GITHUB_LIKE_HOSTS.contains(&authority)
}

fn is_gist(authority: &str, path: &str) -> bool {
    has_path(authority, path) && authority == "gist.github.com"
}

fn is_github_pages(authority: &str, path: &str) -> bool {
    has_path(authority, path) && authority.ends_with(".github.com")
}

fn is_google_cloud(authority: &str, path: &str) -> bool {
    has_path(authority, path) && authority == "cloud.google.com"
}

fn is_sourceforge(authority: &str, _path: &str) -> bool {
    authority.ends_with(".sourceforge.net")
}

fn has_path(_authority: &str, path: &str) -> bool {
    !path.is_empty()
}

fn always(_authority: &str, _path: &str) -> bool {
    true
}

impl Platform {
    /// Rule for a folded authority and a `/`-trimmed path.
    pub fn detect(authority: &str, path: &str) -> Platform {
        RULES
            .iter()
            .find(|rule| (rule.applies)(authority, path))
            .map(|rule| rule.platform)
            .unwrap_or(Platform::DomainOnly)
    }

    /// Append this platform's name candidates to `names`.
    pub fn extract(self, authority: &str, path: &str, names: &mut Vec<String>) {
        match self {
            Platform::GitHubLike | Platform::Generic => {
                if let Some(last) = path.rsplit('/').next() {
                    push_with_lowercase(last, names);
                }
            }
            Platform::Gist => {}
            Platform::GitHubPages => {
                if let Some(last) = path.rsplit('/').next() {
                    names.push(last.to_string());
                }
            }
            Platform::GoogleCloud => {
                if let Some(first) = path.split('/').next() {
                    names.push(first.to_string());
                }
            }
            Platform::SourceForge => {
                if let Some(project) = authority.split('.').next() {
                    names.push(project.to_string());
                }
            }
            Platform::DomainOnly => {
                let mut labels = authority.split('.');
                if let (Some(first), Some(_)) = (labels.next(), labels.next()) {
                    names.push(first.to_string());
                }
            }
        }
    }
}

fn push_with_lowercase(segment: &str, names: &mut Vec<String>) {
    names.push(segment.to_string());
    if segment.chars().any(char::is_uppercase) {
        names.push(segment.to_lowercase());
    }
}
