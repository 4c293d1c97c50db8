//! Route matching logic.
//!
//! # Responsibilities
//! - Match a location pathname exactly (`exact` routes)
//! - Match a pathname by segment-bounded prefix (`/animals` → `/animals/123`)
//! - Match unconditionally (the not-found fallback)
//!
//! # Design Decisions
//! - One trailing slash is ignored on both sides of the comparison
//! - ASCII case-insensitive unless the route is marked sensitive
//! - Prefixes end on a segment boundary: `/animals` never matches `/animalsx`
//! - No regex, plain byte comparisons only

/// Trait for matching a pathname against a route condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns the matched portion of `path`, or `None` if it does not match.
    fn match_path<'a>(&self, path: &'a str) -> Option<&'a str>;

    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool {
        self.match_path(path).is_some()
    }

    /// Whether a match must cover the whole path.
    fn is_exact(&self) -> bool {
        false
    }

    /// The configured pattern, if any. `None` for the fallback.
    fn pattern(&self) -> Option<&str>;
}

/// Strip a single trailing slash, keeping the root as `/`.
pub(crate) fn trim_trailing_slash(path: &str) -> &str {
    if path.is_empty() {
        return "/";
    }
    match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    }
}

fn eq_path(a: &str, b: &str, sensitive: bool) -> bool {
    if sensitive {
        a == b
    } else {
        a.eq_ignore_ascii_case(b)
    }
}

/// Matches only when the whole path equals the pattern.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    path: String,
    sensitive: bool,
}

impl ExactPathMatcher {
    /// Create a case-insensitive exact matcher.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            path: trim_trailing_slash(&path).to_string(),
            sensitive: false,
        }
    }

    /// Make the comparison case-sensitive.
    pub fn case_sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }
}

impl Matcher for ExactPathMatcher {
    fn match_path<'a>(&self, path: &'a str) -> Option<&'a str> {
        let candidate = trim_trailing_slash(path);
        eq_path(candidate, &self.path, self.sensitive).then_some(candidate)
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn pattern(&self) -> Option<&str> {
        Some(&self.path)
    }
}

/// Matches the path prefix on a segment boundary.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
    sensitive: bool,
}

impl PathPrefixMatcher {
    /// Create a case-insensitive prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            prefix: trim_trailing_slash(&prefix).to_string(),
            sensitive: false,
        }
    }

    /// Make the comparison case-sensitive.
    pub fn case_sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }
}

impl Matcher for PathPrefixMatcher {
    fn match_path<'a>(&self, path: &'a str) -> Option<&'a str> {
        // `/` as a prefix covers every path.
        if self.prefix == "/" {
            return Some("/");
        }

        let len = self.prefix.len();
        let head = path.as_bytes().get(..len)?;
        let head_matches = if self.sensitive {
            head == self.prefix.as_bytes()
        } else {
            head.eq_ignore_ascii_case(self.prefix.as_bytes())
        };
        if !head_matches {
            return None;
        }

        match path.as_bytes().get(len) {
            None | Some(b'/') => Some(&path[..len]),
            Some(_) => None,
        }
    }

    fn pattern(&self) -> Option<&str> {
        Some(&self.prefix)
    }
}

/// Matches every path.
#[derive(Debug, Clone, Default)]
pub struct CatchAllMatcher;

impl Matcher for CatchAllMatcher {
    fn match_path<'a>(&self, path: &'a str) -> Option<&'a str> {
        Some(path)
    }

    fn pattern(&self) -> Option<&str> {
        None
    }
}
