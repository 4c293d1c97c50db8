//! Browser-style session history.
//!
//! # Responsibilities
//! - Parse navigation targets into a `Location` (pathname, search, hash)
//! - Keep the entry stack and current index (push, replace, back, forward)
//! - Publish the current location to listeners on every change
//!
//! # Design Decisions
//! - Push after going back discards the forward entries
//! - Out-of-range moves are ignored, not errors
//! - Listeners use a `watch` channel: they only ever see the latest location

use serde::Serialize;
use tokio::sync::watch;
use url::Url;

/// Origin that relative navigation targets are resolved against.
const BASE_URL: &str = "http://localhost/";

/// A parsed URL as the router sees it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    /// Always starts with `/`, percent-encoded, dot segments resolved.
    pub pathname: String,
    /// Query string including the leading `?`, or empty.
    pub search: String,
    /// Fragment including the leading `#`, or empty.
    pub hash: String,
}

impl Location {
    /// Parse a path or absolute URL.
    ///
    /// Relative targets resolve against the site root the way a browser
    /// resolves them against `location.href`. Scheme and authority are
    /// discarded. Unparseable input lands on `/`.
    pub fn parse(input: &str) -> Self {
        match to_url(input) {
            Some(url) => Self::from_url(&url),
            None => {
                tracing::debug!(input = %input, "Unparseable navigation target");
                Self::root()
            }
        }
    }

    /// Build from an already parsed URL.
    pub fn from_url(url: &Url) -> Self {
        let path = url.path();
        let pathname = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Self {
            pathname,
            search: url
                .query()
                .filter(|q| !q.is_empty())
                .map(|q| format!("?{q}"))
                .unwrap_or_default(),
            hash: url
                .fragment()
                .filter(|f| !f.is_empty())
                .map(|f| format!("#{f}"))
                .unwrap_or_default(),
        }
    }

    fn root() -> Self {
        Self {
            pathname: "/".to_string(),
            search: String::new(),
            hash: String::new(),
        }
    }

    /// The full relative URL.
    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

fn to_url(input: &str) -> Option<Url> {
    match Url::parse(input) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(BASE_URL).ok()?.join(input).ok()
        }
        Err(_) => None,
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.pathname, self.search, self.hash)
    }
}

/// How the current entry was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationType {
    Push,
    Replace,
    Pop,
}

/// Session history stack.
#[derive(Debug)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
    last_action: NavigationType,
    notify: watch::Sender<Location>,
}

impl History {
    /// Create a history with a single entry.
    pub fn new(initial: &str) -> Self {
        let location = Location::parse(initial);
        let (notify, _) = watch::channel(location.clone());
        Self {
            entries: vec![location],
            index: 0,
            last_action: NavigationType::Pop,
            notify,
        }
    }

    /// The current location.
    pub fn location(&self) -> &Location {
        &self.entries[self.index]
    }

    /// Subscribe to location changes.
    pub fn listen(&self) -> watch::Receiver<Location> {
        self.notify.subscribe()
    }

    /// Append a new entry, dropping any forward entries.
    pub fn push(&mut self, url: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(Location::parse(url));
        self.index = self.entries.len() - 1;
        self.last_action = NavigationType::Push;
        self.publish();
    }

    /// Overwrite the current entry.
    pub fn replace(&mut self, url: &str) {
        self.entries[self.index] = Location::parse(url);
        self.last_action = NavigationType::Replace;
        self.publish();
    }

    /// Move by `delta` entries. Returns false if the target is out of range.
    pub fn go(&mut self, delta: isize) -> bool {
        let Some(target) = self.index.checked_add_signed(delta) else {
            return false;
        };
        if delta == 0 || target >= self.entries.len() {
            return false;
        }
        self.index = target;
        self.last_action = NavigationType::Pop;
        self.publish();
        true
    }

    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn last_action(&self) -> NavigationType {
        self.last_action
    }

    fn publish(&self) {
        self.notify.send_replace(self.location().clone());
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new("/")
    }
}
